// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscription support for observing device state changes.
//!
//! Devices dispatch synchronous callbacks when their state actually moves:
//! a redundant power-on or a zero-effect charge does not notify anyone.
//!
//! # Examples
//!
//! ```
//! use phonesim::{BatteryLevel, Device, Minutes};
//!
//! let mut phone = Device::builder("Apple", "iPhone X")
//!     .with_battery(BatteryLevel::clamped(50))
//!     .build();
//!
//! let sub = phone.on_battery_changed(|level| {
//!     println!("battery now at {level}");
//! });
//!
//! phone.power_on();
//! phone.use_for(Minutes::new(10));
//!
//! phone.unsubscribe(sub);
//! ```

mod callback;

pub use callback::{CallbackRegistry, SubscriptionId};
