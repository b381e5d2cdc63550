// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Report for usage operations.

use std::fmt;

use crate::types::{BatteryLevel, Minutes};

/// Outcome of a [`use_for`](crate::Device::use_for) operation.
///
/// A use attempt never fails with an error; advisory conditions (device off,
/// battery empty) are reported as variants. The [`Display`](fmt::Display)
/// rendering of a depleting use spans multiple lines: the usage line, the
/// automatic power-off confirmation, and the depletion advisory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageReport {
    /// The device was used and battery remains.
    Used {
        /// Device label (brand and model).
        label: String,
        /// Length of the usage session.
        minutes: Minutes,
        /// Battery level after the session.
        remaining: BatteryLevel,
    },

    /// The device was used and the battery drained to exactly 0,
    /// powering the device off.
    Depleted {
        /// Device label (brand and model).
        label: String,
        /// Length of the usage session.
        minutes: Minutes,
    },

    /// The device is powered off; nothing happened.
    DeviceOff {
        /// Device label (brand and model).
        label: String,
    },

    /// The battery is empty; nothing happened.
    BatteryEmpty {
        /// Device label (brand and model).
        label: String,
    },
}

impl UsageReport {
    /// Returns the device label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Used { label, .. }
            | Self::Depleted { label, .. }
            | Self::DeviceOff { label }
            | Self::BatteryEmpty { label } => label,
        }
    }

    /// Returns `true` if the use attempt was rejected without mutating state.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::DeviceOff { .. } | Self::BatteryEmpty { .. })
    }

    /// Returns `true` if this session drained the battery to 0.
    #[must_use]
    pub const fn is_depleted(&self) -> bool {
        matches!(self, Self::Depleted { .. })
    }
}

impl fmt::Display for UsageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Used {
                label,
                minutes,
                remaining,
            } => {
                write!(f, "Using {label} for {minutes}; battery at {remaining}.")
            }
            Self::Depleted { label, minutes } => {
                writeln!(f, "Using {label} for {minutes}.")?;
                writeln!(f, "{label} is now turned off.")?;
                write!(f, "{label} is out of battery; charge it before further use.")
            }
            Self::DeviceOff { label } => {
                write!(f, "{label} is turned off; power it on first.")
            }
            Self::BatteryEmpty { label } => {
                write!(f, "{label} is out of battery; charge it before further use.")
            }
        }
    }
}
