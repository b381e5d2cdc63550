// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state tracking.

use chrono::{DateTime, Utc};

use crate::types::{BatteryLevel, PowerState};

use super::StateChange;

/// Tracked state of a simulated device.
///
/// This struct maintains the current power state, battery level, and the
/// timestamp of the most recent activity. Unlike a real device observed over
/// a network, the simulation always knows its state, so no field is optional
/// except the activity timestamp (which is unset until the first power-on,
/// usage, or charge event).
///
/// # Examples
///
/// ```
/// use phonesim::state::DeviceState;
/// use phonesim::types::{BatteryLevel, PowerState};
///
/// let mut state = DeviceState::new(BatteryLevel::clamped(50));
/// assert_eq!(state.power(), PowerState::Off);
///
/// state.set_power(PowerState::On);
/// assert_eq!(state.power(), PowerState::On);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeviceState {
    /// Current power state.
    power: PowerState,
    /// Current battery level (0-100).
    battery: BatteryLevel,
    /// Timestamp of the most recent power-on, usage, or charge event.
    last_activity: Option<DateTime<Utc>>,
}

impl DeviceState {
    /// Creates a new state with the given battery level, powered off.
    #[must_use]
    pub const fn new(battery: BatteryLevel) -> Self {
        Self {
            power: PowerState::Off,
            battery,
            last_activity: None,
        }
    }

    /// Creates a new state with an explicit power state.
    #[must_use]
    pub const fn with_power(battery: BatteryLevel, power: PowerState) -> Self {
        Self {
            power,
            battery,
            last_activity: None,
        }
    }

    /// Gets the current power state.
    #[must_use]
    pub const fn power(&self) -> PowerState {
        self.power
    }

    /// Sets the power state.
    pub fn set_power(&mut self, power: PowerState) {
        self.power = power;
    }

    /// Returns `true` if the device is powered on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.power.is_on()
    }

    /// Gets the current battery level.
    #[must_use]
    pub const fn battery(&self) -> BatteryLevel {
        self.battery
    }

    /// Sets the battery level.
    pub fn set_battery(&mut self, level: BatteryLevel) {
        self.battery = level;
    }

    /// Gets the timestamp of the most recent activity, if any.
    #[must_use]
    pub const fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.last_activity
    }

    /// Records an activity timestamp.
    pub fn set_last_activity(&mut self, at: DateTime<Utc>) {
        self.last_activity = Some(at);
    }

    /// Applies a state change and returns whether the state actually changed.
    ///
    /// # Returns
    ///
    /// Returns `true` if the state was modified, `false` if it was already
    /// at the target value.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        match change {
            StateChange::Power(state) => {
                if self.power == *state {
                    false
                } else {
                    self.power = *state;
                    true
                }
            }
            StateChange::Battery(level) => {
                if self.battery == *level {
                    false
                } else {
                    self.battery = *level;
                    true
                }
            }
            StateChange::Activity(at) => {
                if self.last_activity == Some(*at) {
                    false
                } else {
                    self.last_activity = Some(*at);
                    true
                }
            }
            StateChange::Batch(changes) => {
                let mut any_changed = false;
                for c in changes {
                    if self.apply(c) {
                        any_changed = true;
                    }
                }
                any_changed
            }
        }
    }
}
