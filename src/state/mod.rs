// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state management types.
//!
//! This module provides types for tracking and updating the simulated device
//! state. The [`DeviceState`] struct maintains the current state, while
//! [`StateChange`] represents individual state changes that can be applied.
//!
//! # Examples
//!
//! ```
//! use phonesim::state::{DeviceState, StateChange};
//! use phonesim::types::{BatteryLevel, PowerState};
//!
//! let mut state = DeviceState::new(BatteryLevel::clamped(50));
//!
//! // Apply a power state change
//! state.apply(&StateChange::Power(PowerState::On));
//!
//! assert_eq!(state.power(), PowerState::On);
//! ```

mod device_state;
mod state_change;

pub use device_state::DeviceState;
pub use state_change::StateChange;
