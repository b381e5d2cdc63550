// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for device state subscriptions.
//!
//! This module provides the core types for managing subscription callbacks:
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Internal registry for storing and dispatching callbacks

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::state::StateChange;
use crate::types::{BatteryLevel, PowerState};

/// Unique identifier for a subscription.
///
/// This ID is returned when creating a subscription and can be used to
/// unsubscribe later. IDs are unique within a device's lifetime.
///
/// # Examples
///
/// ```ignore
/// let sub_id = device.on_power_changed(|state| { /* ... */ });
///
/// // Later, unsubscribe
/// device.unsubscribe(sub_id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a new subscription ID with the given value.
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Type alias for power state callbacks.
type PowerCallback = Arc<dyn Fn(PowerState) + Send + Sync>;

/// Type alias for battery level callbacks.
type BatteryCallback = Arc<dyn Fn(BatteryLevel) + Send + Sync>;

/// Type alias for battery depletion callbacks.
type DepletedCallback = Arc<dyn Fn() + Send + Sync>;

/// Type alias for generic state change callbacks.
type StateChangedCallback = Arc<dyn Fn(&StateChange) + Send + Sync>;

/// Registry for managing device subscription callbacks.
///
/// This is an internal type used by devices to store and dispatch callbacks.
/// It uses thread-safe interior mutability via `parking_lot::RwLock`, so a
/// device can be observed while being mutated through `&mut` methods.
///
/// Callbacks are wrapped in `Arc` so they can be cloned cheaply and invoked
/// outside the lock.
pub struct CallbackRegistry {
    /// Counter for generating unique subscription IDs.
    next_id: AtomicU64,
    /// Power state change callbacks.
    power_callbacks: RwLock<HashMap<SubscriptionId, PowerCallback>>,
    /// Battery level change callbacks.
    battery_callbacks: RwLock<HashMap<SubscriptionId, BatteryCallback>>,
    /// Battery depletion callbacks.
    depleted_callbacks: RwLock<HashMap<SubscriptionId, DepletedCallback>>,
    /// Generic state change callbacks (receives all changes).
    state_changed_callbacks: RwLock<HashMap<SubscriptionId, StateChangedCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            power_callbacks: RwLock::new(HashMap::new()),
            battery_callbacks: RwLock::new(HashMap::new()),
            depleted_callbacks: RwLock::new(HashMap::new()),
            state_changed_callbacks: RwLock::new(HashMap::new()),
        }
    }

    /// Generates a new unique subscription ID.
    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    // =========================================================================
    // Registration methods
    // =========================================================================

    /// Registers a callback for power state changes.
    ///
    /// The callback receives the new power state.
    pub fn on_power_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(PowerState) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.power_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for battery level changes.
    pub fn on_battery_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(BatteryLevel) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.battery_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for battery depletion.
    ///
    /// Called once each time a usage session drains the battery to exactly 0.
    pub fn on_battery_depleted<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.depleted_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for all state changes.
    ///
    /// This is useful for logging or debugging, as it receives every change.
    pub fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.state_changed_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Removes a subscription by ID.
    ///
    /// Returns `true` if the subscription existed and was removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.power_callbacks.write().remove(&id).is_some()
            || self.battery_callbacks.write().remove(&id).is_some()
            || self.depleted_callbacks.write().remove(&id).is_some()
            || self.state_changed_callbacks.write().remove(&id).is_some()
    }

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.power_callbacks.read().len()
            + self.battery_callbacks.read().len()
            + self.depleted_callbacks.read().len()
            + self.state_changed_callbacks.read().len()
    }

    // =========================================================================
    // Notification methods
    // =========================================================================

    /// Notifies all power callbacks of a state change.
    pub(crate) fn notify_power_changed(&self, state: PowerState) {
        let callbacks: Vec<PowerCallback> = self.power_callbacks.read().values().cloned().collect();
        for callback in callbacks {
            callback(state);
        }
    }

    /// Notifies all battery callbacks of a level change.
    pub(crate) fn notify_battery_changed(&self, level: BatteryLevel) {
        let callbacks: Vec<BatteryCallback> =
            self.battery_callbacks.read().values().cloned().collect();
        for callback in callbacks {
            callback(level);
        }
    }

    /// Notifies all depletion callbacks.
    pub(crate) fn notify_battery_depleted(&self) {
        let callbacks: Vec<DepletedCallback> =
            self.depleted_callbacks.read().values().cloned().collect();
        for callback in callbacks {
            callback();
        }
    }

    /// Notifies all generic state change callbacks.
    pub(crate) fn notify_state_changed(&self, change: &StateChange) {
        let callbacks: Vec<StateChangedCallback> = self
            .state_changed_callbacks
            .read()
            .values()
            .cloned()
            .collect();
        for callback in callbacks {
            callback(change);
        }
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;

    #[test]
    fn new_registry_is_empty() {
        let registry = CallbackRegistry::new();
        assert_eq!(registry.callback_count(), 0);
    }

    #[test]
    fn subscription_ids_are_unique() {
        let registry = CallbackRegistry::new();
        let id1 = registry.on_power_changed(|_| {});
        let id2 = registry.on_power_changed(|_| {});
        assert_ne!(id1, id2);
    }

    #[test]
    fn power_callback_receives_state() {
        let registry = CallbackRegistry::new();
        let received = Arc::new(RwLock::new(None));

        let received_clone = Arc::clone(&received);
        registry.on_power_changed(move |state| {
            *received_clone.write() = Some(state);
        });

        registry.notify_power_changed(PowerState::On);
        assert_eq!(*received.read(), Some(PowerState::On));
    }

    #[test]
    fn battery_callback_receives_level() {
        let registry = CallbackRegistry::new();
        let received = Arc::new(RwLock::new(None));

        let received_clone = Arc::clone(&received);
        registry.on_battery_changed(move |level| {
            *received_clone.write() = Some(level);
        });

        registry.notify_battery_changed(BatteryLevel::clamped(42));
        assert_eq!(*received.read(), Some(BatteryLevel::clamped(42)));
    }

    #[test]
    fn depleted_callback_fires() {
        let registry = CallbackRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = Arc::clone(&count);
        registry.on_battery_depleted(move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        registry.notify_battery_depleted();
        registry.notify_battery_depleted();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn state_changed_callback_receives_change() {
        let registry = CallbackRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = Arc::clone(&count);
        registry.on_state_changed(move |change| {
            assert!(change.is_power());
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        registry.notify_state_changed(&StateChange::power_on());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribe_removes_callback() {
        let registry = CallbackRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = Arc::clone(&count);
        let id = registry.on_battery_changed(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(registry.unsubscribe(id));
        registry.notify_battery_changed(BatteryLevel::FULL);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        // Second unsubscribe is a no-op
        assert!(!registry.unsubscribe(id));
    }

    #[test]
    fn multiple_subscribers_all_notified() {
        let registry = CallbackRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let count_clone = Arc::clone(&count);
            registry.on_power_changed(move |_| {
                count_clone.fetch_add(1, Ordering::SeqCst);
            });
        }

        registry.notify_power_changed(PowerState::Off);
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn callback_count_spans_all_kinds() {
        let registry = CallbackRegistry::new();
        registry.on_power_changed(|_| {});
        registry.on_battery_changed(|_| {});
        registry.on_battery_depleted(|| {});
        registry.on_state_changed(|_| {});
        assert_eq!(registry.callback_count(), 4);
    }

    #[test]
    fn subscription_id_display() {
        let registry = CallbackRegistry::new();
        let id = registry.on_power_changed(|_| {});
        assert_eq!(id.to_string(), format!("Sub({})", id.value()));
    }
}
