// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Builder for constructing simulated devices.

use crate::types::{BatteryLevel, PowerState};

use super::Device;

/// Builder for a [`Device`].
///
/// Defaults to a full battery and a powered-off device; the reference
/// scenario constructs its phone powered off at 50%.
///
/// # Examples
///
/// ```
/// use phonesim::{BatteryLevel, Device};
///
/// let phone = Device::builder("Apple", "iPhone X")
///     .with_battery(BatteryLevel::clamped(50))
///     .build();
///
/// assert_eq!(phone.brand(), "Apple");
/// assert!(!phone.state().is_on());
/// ```
#[derive(Debug, Clone)]
pub struct DeviceBuilder {
    brand: String,
    model: String,
    battery: BatteryLevel,
    power: PowerState,
}

impl DeviceBuilder {
    /// Creates a new builder for the given brand and model.
    pub(crate) fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            battery: BatteryLevel::FULL,
            power: PowerState::Off,
        }
    }

    /// Sets the initial battery level.
    #[must_use]
    pub fn with_battery(mut self, level: BatteryLevel) -> Self {
        self.battery = level;
        self
    }

    /// Constructs the device already powered on.
    #[must_use]
    pub fn powered_on(mut self) -> Self {
        self.power = PowerState::On;
        self
    }

    /// Builds the device.
    #[must_use]
    pub fn build(self) -> Device {
        Device::from_parts(self.brand, self.model, self.battery, self.power)
    }
}
