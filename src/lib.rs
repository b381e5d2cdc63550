// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `PhoneSim` - A Rust library simulating a mobile phone's power and
//! battery state.
//!
//! The simulation models one device with a tiny state machine: turning it
//! on or off, draining battery while in use, and recharging. Operations
//! never fail; advisory conditions (using a powered-off device, using an
//! empty battery) come back as report variants whose `Display` rendering
//! is the console output.
//!
//! # Supported Features
//!
//! - **Power control**: Turn the device on/off, automatic power-off on
//!   battery depletion
//! - **Battery model**: Validated 0-100% level with saturating drain and
//!   charge arithmetic (one percent per minute)
//! - **Observers**: Synchronous callbacks for power, battery, and
//!   depletion changes
//! - **Scenarios**: Scripted operation sequences, including the built-in
//!   reference scenario
//!
//! # Quick Start
//!
//! ```
//! use phonesim::{BatteryLevel, Device, Minutes};
//!
//! let mut phone = Device::builder("Apple", "iPhone X")
//!     .with_battery(BatteryLevel::clamped(50))
//!     .build();
//!
//! let report = phone.power_on();
//! println!("{report}");
//!
//! phone.use_for(Minutes::new(20));
//! assert_eq!(phone.state().battery().value(), 30);
//! ```
//!
//! # Running the Reference Scenario
//!
//! ```
//! use phonesim::scenario::Scenario;
//!
//! let mut phone = Scenario::reference_device();
//! for report in Scenario::reference().run(&mut phone) {
//!     println!("{report}");
//! }
//!
//! assert!(!phone.state().is_on());
//! assert_eq!(phone.state().battery().value(), 30);
//! ```
//!
//! # Observing State Changes
//!
//! ```
//! use phonesim::{BatteryLevel, Device, Minutes};
//!
//! let mut phone = Device::builder("Apple", "iPhone X")
//!     .with_battery(BatteryLevel::clamped(50))
//!     .build();
//!
//! phone.on_battery_changed(|level| {
//!     if level.is_low() {
//!         eprintln!("battery is getting low: {level}");
//!     }
//! });
//!
//! phone.power_on();
//! phone.use_for(Minutes::new(35));
//! ```

pub mod device;
pub mod error;
pub mod report;
pub mod scenario;
pub mod state;
pub mod subscription;
pub mod types;

pub use device::{Device, DeviceBuilder, DeviceId};
pub use error::{Error, Result, ValueError};
pub use report::{ChargeReport, PowerReport, StatusReport, UsageReport};
pub use scenario::{Report, Scenario, Step};
pub use state::{DeviceState, StateChange};
pub use subscription::{CallbackRegistry, SubscriptionId};
pub use types::{BatteryLevel, Minutes, PowerState};
