// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Report for power on/off operations.

use std::fmt;

use crate::types::PowerState;

/// Outcome of a [`power_on`](crate::Device::power_on) or
/// [`power_off`](crate::Device::power_off) operation.
///
/// # Examples
///
/// ```
/// use phonesim::{BatteryLevel, Device};
///
/// let mut phone = Device::builder("Apple", "iPhone X")
///     .with_battery(BatteryLevel::clamped(50))
///     .build();
///
/// let report = phone.power_on();
/// assert_eq!(report.to_string(), "Apple iPhone X is now turned on.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerReport {
    label: String,
    state: PowerState,
}

impl PowerReport {
    /// Creates a new power report.
    #[must_use]
    pub fn new(label: impl Into<String>, state: PowerState) -> Self {
        Self {
            label: label.into(),
            state,
        }
    }

    /// Returns the device label (brand and model).
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the power state the device ended up in.
    #[must_use]
    pub const fn state(&self) -> PowerState {
        self.state
    }
}

impl fmt::Display for PowerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is now turned {}.", self.label, self.state)
    }
}
