// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Battery level type for simulated devices.
//!
//! This module provides a type-safe representation of battery charge,
//! ensuring values are always within the valid range of 0-100%.

use std::fmt;

use crate::error::ValueError;

use super::Minutes;

/// Threshold below which a battery is considered low.
const LOW_BATTERY_THRESHOLD: u8 = 20;

/// Remaining battery charge as a percentage (0-100).
///
/// One minute of simulated use drains one percent; one minute of charging
/// restores one percent. Drain and charge arithmetic saturates at the range
/// bounds, so a level can never leave `[0, 100]`.
///
/// # Examples
///
/// ```
/// use phonesim::types::{BatteryLevel, Minutes};
///
/// // Create a level at 50%
/// let level = BatteryLevel::new(50).unwrap();
/// assert_eq!(level.value(), 50);
///
/// // Use predefined values
/// assert_eq!(BatteryLevel::EMPTY.value(), 0);
/// assert_eq!(BatteryLevel::FULL.value(), 100);
///
/// // Arithmetic saturates at the bounds
/// assert_eq!(level.drained_by(Minutes::new(60)), BatteryLevel::EMPTY);
/// assert_eq!(level.charged_by(Minutes::new(60)), BatteryLevel::FULL);
///
/// // Invalid values return error
/// assert!(BatteryLevel::new(101).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct BatteryLevel(u8);

impl BatteryLevel {
    /// Empty battery (0%).
    pub const EMPTY: Self = Self(0);

    /// Full battery (100%).
    pub const FULL: Self = Self(100);

    /// Creates a new battery level.
    ///
    /// # Arguments
    ///
    /// * `value` - The charge percentage (0-100)
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use phonesim::types::BatteryLevel;
    ///
    /// let level = BatteryLevel::new(50).unwrap();
    /// assert_eq!(level.value(), 50);
    /// ```
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a battery level, clamping to the valid range.
    ///
    /// Values above 100 are clamped to 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use phonesim::types::BatteryLevel;
    ///
    /// let level = BatteryLevel::clamped(150);
    /// assert_eq!(level.value(), 100);
    /// ```
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Returns the charge percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the charge as a float between 0.0 and 1.0.
    #[must_use]
    pub fn as_fraction(&self) -> f32 {
        f32::from(self.0) / 100.0
    }

    /// Returns `true` if the battery is fully drained.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the battery is fully charged.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.0 == 100
    }

    /// Returns `true` if the charge is below the low-battery threshold (20%).
    #[must_use]
    pub const fn is_low(&self) -> bool {
        self.0 < LOW_BATTERY_THRESHOLD
    }

    /// Returns the level after draining for the given number of minutes.
    ///
    /// Drains one percent per minute, saturating at 0. Arbitrarily large
    /// durations are allowed and simply clamp the result to empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use phonesim::types::{BatteryLevel, Minutes};
    ///
    /// let level = BatteryLevel::new(50).unwrap();
    /// assert_eq!(level.drained_by(Minutes::new(20)).value(), 30);
    /// assert_eq!(level.drained_by(Minutes::new(120)).value(), 0);
    /// ```
    #[must_use]
    pub fn drained_by(self, minutes: Minutes) -> Self {
        let remaining = u32::from(self.0).saturating_sub(minutes.value());
        // Safe: remaining never exceeds the current level, which is <= 100
        #[allow(clippy::cast_possible_truncation)]
        let remaining = remaining as u8;
        Self(remaining)
    }

    /// Returns the level after charging for the given number of minutes.
    ///
    /// Restores one percent per minute, saturating at 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use phonesim::types::{BatteryLevel, Minutes};
    ///
    /// let level = BatteryLevel::new(50).unwrap();
    /// assert_eq!(level.charged_by(Minutes::new(30)).value(), 80);
    /// assert_eq!(level.charged_by(Minutes::new(300)).value(), 100);
    /// ```
    #[must_use]
    pub fn charged_by(self, minutes: Minutes) -> Self {
        let level = u32::from(self.0).saturating_add(minutes.value()).min(100);
        // Safe: level was just clamped to 100
        #[allow(clippy::cast_possible_truncation)]
        let level = level as u8;
        Self(level)
    }
}

impl fmt::Display for BatteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for BatteryLevel {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
