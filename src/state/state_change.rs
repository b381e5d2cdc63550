// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! State changes are the fundamental building blocks for updating device
//! state. They represent discrete changes that the device operations apply
//! to a [`DeviceState`](super::DeviceState).
//!
//! # Change Types
//!
//! - [`StateChange::Power`] - Power state changes (on/off)
//! - [`StateChange::Battery`] - Battery level changes
//! - [`StateChange::Activity`] - Activity timestamp updates
//! - [`StateChange::Batch`] - Multiple changes grouped together
//!
//! # Examples
//!
//! ```
//! use phonesim::state::{DeviceState, StateChange};
//! use phonesim::types::BatteryLevel;
//!
//! let mut state = DeviceState::new(BatteryLevel::clamped(50));
//!
//! // Apply returns true if state actually changed
//! let changed = state.apply(&StateChange::power_on());
//! assert!(changed);
//!
//! // Applying same change again returns false
//! let changed = state.apply(&StateChange::power_on());
//! assert!(!changed);
//! ```

use chrono::{DateTime, Utc};

use crate::types::{BatteryLevel, PowerState};

/// Represents a change in device state.
///
/// Each variant covers one dimension of the state; a [`StateChange::Batch`]
/// groups several changes produced by a single operation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StateChange {
    /// Power state changed.
    Power(PowerState),

    /// Battery level changed.
    Battery(BatteryLevel),

    /// Activity timestamp was refreshed.
    Activity(DateTime<Utc>),

    /// Multiple changes at once.
    Batch(Vec<StateChange>),
}

impl StateChange {
    /// Creates a power state change.
    #[must_use]
    pub const fn power(state: PowerState) -> Self {
        Self::Power(state)
    }

    /// Creates a power-on change.
    #[must_use]
    pub const fn power_on() -> Self {
        Self::Power(PowerState::On)
    }

    /// Creates a power-off change.
    #[must_use]
    pub const fn power_off() -> Self {
        Self::Power(PowerState::Off)
    }

    /// Creates a battery level change.
    #[must_use]
    pub const fn battery(level: BatteryLevel) -> Self {
        Self::Battery(level)
    }

    /// Creates an activity timestamp change.
    #[must_use]
    pub const fn activity(at: DateTime<Utc>) -> Self {
        Self::Activity(at)
    }

    /// Creates a batch of changes.
    #[must_use]
    pub fn batch(changes: Vec<StateChange>) -> Self {
        Self::Batch(changes)
    }

    /// Returns `true` if this is a power state change.
    #[must_use]
    pub const fn is_power(&self) -> bool {
        matches!(self, Self::Power(_))
    }

    /// Returns `true` if this is a battery level change.
    #[must_use]
    pub const fn is_battery(&self) -> bool {
        matches!(self, Self::Battery(_))
    }

    /// Returns `true` if this is an activity timestamp change.
    #[must_use]
    pub const fn is_activity(&self) -> bool {
        matches!(self, Self::Activity(_))
    }

    /// Returns `true` if this is a batch of changes.
    #[must_use]
    pub const fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(_))
    }

    /// Returns the number of individual changes.
    ///
    /// For batch changes, returns the total count of nested changes.
    #[must_use]
    pub fn change_count(&self) -> usize {
        match self {
            Self::Batch(changes) => changes.iter().map(Self::change_count).sum(),
            _ => 1,
        }
    }
}
