// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operation reports.
//!
//! Every device operation returns a report value instead of an error: the
//! simulation's advisory conditions (using a powered-off device, using an
//! empty battery) are ordinary outcomes, not failures. Each report's
//! [`Display`](std::fmt::Display) rendering is the console output for that
//! operation.

mod charge;
mod power;
mod status;
mod usage;

pub use charge::ChargeReport;
pub use power::PowerReport;
pub use status::StatusReport;
pub use usage::UsageReport;
