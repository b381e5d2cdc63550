// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status report snapshot.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::types::{BatteryLevel, PowerState};

/// Read-only snapshot of a device for display or machine consumption.
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
/// let status = phone.status();
/// assert_eq!(status.battery().value(), 50);
///
/// let json = status.to_json().unwrap();
/// assert!(json.contains("\"iPhone X\""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusReport {
    brand: String,
    model: String,
    power: PowerState,
    battery: BatteryLevel,
    last_activity: Option<DateTime<Utc>>,
}

impl StatusReport {
    /// Creates a new status report.
    #[must_use]
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        power: PowerState,
        battery: BatteryLevel,
        last_activity: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            power,
            battery,
            last_activity,
        }
    }

    /// Returns the device brand.
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Returns the device model.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the power state at snapshot time.
    #[must_use]
    pub const fn power(&self) -> PowerState {
        self.power
    }

    /// Returns the battery level at snapshot time.
    #[must_use]
    pub const fn battery(&self) -> BatteryLevel {
        self.battery
    }

    /// Returns the most recent activity timestamp, if any.
    #[must_use]
    pub const fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.last_activity
    }

    /// Serializes the snapshot to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::error::Error::Json) if serialization
    /// fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: power {}, battery {}",
            self.brand, self.model, self.power, self.battery
        )?;
        match &self.last_activity {
            Some(at) => write!(f, ", last active {}", at.to_rfc3339()),
            None => write!(f, ", never active"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_activity() {
        let status = StatusReport::new(
            "Apple",
            "iPhone X",
            PowerState::Off,
            BatteryLevel::clamped(30),
            None,
        );
        assert_eq!(
            status.to_string(),
            "Apple iPhone X: power off, battery 30%, never active"
        );
    }

    #[test]
    fn display_with_activity() {
        let at = "2024-01-15T10:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let status = StatusReport::new(
            "Apple",
            "iPhone X",
            PowerState::On,
            BatteryLevel::clamped(80),
            Some(at),
        );
        let rendered = status.to_string();
        assert!(rendered.starts_with("Apple iPhone X: power on, battery 80%, last active "));
        assert!(rendered.contains("2024-01-15T10:30:00"));
    }

    #[test]
    fn json_round_trip() {
        let status = StatusReport::new(
            "Apple",
            "iPhone X",
            PowerState::Off,
            BatteryLevel::clamped(30),
            Some(Utc::now()),
        );
        let json = status.to_json().unwrap();
        let back: StatusReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
    }
}
