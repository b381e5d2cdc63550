// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the device simulation.
//!
//! This module provides type-safe representations of the values the
//! simulation manipulates. Each type ensures values are within their valid
//! ranges at construction time, preventing runtime errors.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off state of a device
//! - [`BatteryLevel`] - Remaining charge (0-100%)
//! - [`Minutes`] - Duration of a usage or charging session

mod battery;
mod minutes;
mod power;

pub use battery::BatteryLevel;
pub use minutes::Minutes;
pub use power::PowerState;
