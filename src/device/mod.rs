// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The simulated device and its operations.
//!
//! A [`Device`] owns its [`DeviceState`] and mutates it in place through
//! four operations: [`power_on`](Device::power_on),
//! [`power_off`](Device::power_off), [`use_for`](Device::use_for), and
//! [`charge_for`](Device::charge_for). Operations never fail; each returns
//! a report describing the outcome, including the advisory cases (using a
//! powered-off device, using an empty battery).
//!
//! # Examples
//!
//! ```
//! use phonesim::{BatteryLevel, Device, Minutes};
//!
//! let mut phone = Device::builder("Apple", "iPhone X")
//!     .with_battery(BatteryLevel::clamped(50))
//!     .build();
//!
//! phone.power_on();
//! let report = phone.use_for(Minutes::new(20));
//! println!("{report}");
//!
//! assert_eq!(phone.state().battery().value(), 30);
//! ```

use chrono::Utc;

use crate::report::{ChargeReport, PowerReport, StatusReport, UsageReport};
use crate::state::{DeviceState, StateChange};
use crate::subscription::{CallbackRegistry, SubscriptionId};
use crate::types::{BatteryLevel, Minutes, PowerState};

mod builder;
mod device_id;

pub use builder::DeviceBuilder;
pub use device_id::DeviceId;

/// A simulated mobile device.
///
/// Holds immutable identity (brand and model), the mutable
/// [`DeviceState`], and the observer callbacks registered against it.
/// The state machine is small: `Off --power_on--> On`,
/// `On --power_off--> Off`, and a usage session that drains the battery
/// to exactly 0 powers the device off automatically. Charging never
/// changes the power state.
pub struct Device {
    /// Unique device identifier, used in diagnostics.
    id: DeviceId,
    /// Manufacturer name.
    brand: String,
    /// Model name.
    model: String,
    /// Current device state.
    state: DeviceState,
    /// Observer callbacks.
    callbacks: CallbackRegistry,
}

impl Device {
    /// Starts building a device with the given brand and model.
    #[must_use]
    pub fn builder(brand: impl Into<String>, model: impl Into<String>) -> DeviceBuilder {
        DeviceBuilder::new(brand, model)
    }

    /// Assembles a device from its parts. Used by [`DeviceBuilder`].
    pub(crate) fn from_parts(
        brand: String,
        model: String,
        battery: BatteryLevel,
        power: PowerState,
    ) -> Self {
        let id = DeviceId::new();
        tracing::debug!(device_id = %id, brand = %brand, model = %model, battery = %battery, "created device");
        Self {
            id,
            brand,
            model,
            state: DeviceState::with_power(battery, power),
            callbacks: CallbackRegistry::new(),
        }
    }

    /// Returns the device identifier.
    #[must_use]
    pub const fn id(&self) -> DeviceId {
        self.id
    }

    /// Returns the manufacturer name.
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Returns the model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the display label, `"<brand> <model>"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Returns the current device state.
    #[must_use]
    pub const fn state(&self) -> &DeviceState {
        &self.state
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Turns the device on.
    ///
    /// Refreshes the activity timestamp even when the device is already on;
    /// in that case the operation re-confirms without notifying power
    /// observers again.
    pub fn power_on(&mut self) -> PowerReport {
        self.apply_and_notify(&StateChange::activity(Utc::now()));
        self.apply_and_notify(&StateChange::power_on());
        tracing::debug!(device_id = %self.id, "powered on");
        PowerReport::new(self.label(), PowerState::On)
    }

    /// Turns the device off.
    ///
    /// Callable regardless of the current power state. Does not touch the
    /// activity timestamp.
    pub fn power_off(&mut self) -> PowerReport {
        self.apply_and_notify(&StateChange::power_off());
        tracing::debug!(device_id = %self.id, "powered off");
        PowerReport::new(self.label(), PowerState::Off)
    }

    /// Simulates using the device for the given number of minutes.
    ///
    /// Drains one percent of battery per minute, saturating at 0. If the
    /// session drains the battery to exactly 0, the device powers off
    /// automatically and the returned report carries the depletion advisory.
    ///
    /// Advisory cases leave the state untouched: a powered-off device or an
    /// empty battery rejects the session with the corresponding report
    /// variant.
    pub fn use_for(&mut self, minutes: Minutes) -> UsageReport {
        if self.state.power().is_off() {
            tracing::debug!(device_id = %self.id, "use rejected, device is off");
            return UsageReport::DeviceOff {
                label: self.label(),
            };
        }

        if self.state.battery().is_empty() {
            tracing::debug!(device_id = %self.id, "use rejected, battery is empty");
            return UsageReport::BatteryEmpty {
                label: self.label(),
            };
        }

        self.apply_and_notify(&StateChange::activity(Utc::now()));
        let remaining = self.state.battery().drained_by(minutes);
        self.apply_and_notify(&StateChange::battery(remaining));
        tracing::debug!(device_id = %self.id, %minutes, battery = %remaining, "used device");

        if remaining.is_empty() {
            self.power_off();
            self.callbacks.notify_battery_depleted();
            tracing::warn!(device_id = %self.id, "battery depleted, device powered off");
            return UsageReport::Depleted {
                label: self.label(),
                minutes,
            };
        }

        UsageReport::Used {
            label: self.label(),
            minutes,
            remaining,
        }
    }

    /// Charges the device for the given number of minutes.
    ///
    /// Restores one percent of battery per minute, saturating at 100.
    /// Callable regardless of power state; charging neither requires the
    /// device to be on nor turns it on.
    pub fn charge_for(&mut self, minutes: Minutes) -> ChargeReport {
        self.apply_and_notify(&StateChange::activity(Utc::now()));
        let level = self.state.battery().charged_by(minutes);
        self.apply_and_notify(&StateChange::battery(level));
        tracing::debug!(device_id = %self.id, %minutes, battery = %level, "charged device");
        ChargeReport::new(self.label(), minutes, level)
    }

    /// Takes a read-only snapshot of the device.
    #[must_use]
    pub fn status(&self) -> StatusReport {
        StatusReport::new(
            self.brand.clone(),
            self.model.clone(),
            self.state.power(),
            self.state.battery(),
            self.state.last_activity(),
        )
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Registers a callback for power state changes.
    pub fn on_power_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(PowerState) + Send + Sync + 'static,
    {
        self.callbacks.on_power_changed(callback)
    }

    /// Registers a callback for battery level changes.
    pub fn on_battery_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(BatteryLevel) + Send + Sync + 'static,
    {
        self.callbacks.on_battery_changed(callback)
    }

    /// Registers a callback fired each time a usage session drains the
    /// battery to exactly 0.
    pub fn on_battery_depleted<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.callbacks.on_battery_depleted(callback)
    }

    /// Registers a callback for every state change.
    pub fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        self.callbacks.on_state_changed(callback)
    }

    /// Removes a subscription by ID.
    ///
    /// Returns `true` if the subscription existed and was removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }

    /// Applies a state change and, if the state actually moved, notifies
    /// the matching observers. Batches are applied member by member so
    /// observers see each effective change.
    fn apply_and_notify(&mut self, change: &StateChange) -> bool {
        if let StateChange::Batch(changes) = change {
            let mut any_changed = false;
            for c in changes {
                if self.apply_and_notify(c) {
                    any_changed = true;
                }
            }
            return any_changed;
        }

        if !self.state.apply(change) {
            return false;
        }

        match change {
            StateChange::Power(state) => self.callbacks.notify_power_changed(*state),
            StateChange::Battery(level) => self.callbacks.notify_battery_changed(*level),
            StateChange::Activity(_) | StateChange::Batch(_) => {}
        }
        self.callbacks.notify_state_changed(change);
        true
    }
}

impl std::fmt::Debug for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Device")
            .field("id", &self.id)
            .field("brand", &self.brand)
            .field("model", &self.model)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn iphone_at(battery: u8) -> Device {
        Device::builder("Apple", "iPhone X")
            .with_battery(BatteryLevel::clamped(battery))
            .build()
    }

    #[test]
    fn power_on_sets_state_and_activity() {
        let mut phone = iphone_at(50);
        assert!(phone.state().last_activity().is_none());

        phone.power_on();
        assert!(phone.state().is_on());
        assert!(phone.state().last_activity().is_some());
    }

    #[test]
    fn power_on_twice_refreshes_activity() {
        let mut phone = iphone_at(50);
        phone.power_on();
        let first = phone.state().last_activity().unwrap();

        phone.power_on();
        assert!(phone.state().is_on());
        assert!(phone.state().last_activity().unwrap() >= first);
    }

    #[test]
    fn power_off_keeps_activity_untouched() {
        let mut phone = iphone_at(50);
        phone.power_on();
        let active_at = phone.state().last_activity();

        phone.power_off();
        assert!(!phone.state().is_on());
        assert_eq!(phone.state().last_activity(), active_at);
    }

    #[test]
    fn use_drains_battery() {
        let mut phone = iphone_at(50);
        phone.power_on();

        let report = phone.use_for(Minutes::new(20));
        assert!(matches!(report, UsageReport::Used { remaining, .. } if remaining.value() == 30));
        assert_eq!(phone.state().battery().value(), 30);
        assert!(phone.state().is_on());
    }

    #[test]
    fn use_while_off_is_rejected_without_mutation() {
        let mut phone = iphone_at(50);

        let report = phone.use_for(Minutes::new(20));
        assert!(matches!(report, UsageReport::DeviceOff { .. }));
        assert_eq!(phone.state().battery().value(), 50);
        assert!(phone.state().last_activity().is_none());
    }

    #[test]
    fn use_with_empty_battery_is_rejected() {
        // Power on is allowed with an empty battery; only usage is guarded.
        let mut phone = iphone_at(0);
        phone.power_on();
        let active_at = phone.state().last_activity();

        let report = phone.use_for(Minutes::new(5));
        assert!(matches!(report, UsageReport::BatteryEmpty { .. }));
        assert!(phone.state().is_on());
        assert_eq!(phone.state().battery().value(), 0);
        assert_eq!(phone.state().last_activity(), active_at);
    }

    #[test]
    fn exact_depletion_powers_off() {
        let mut phone = iphone_at(50);
        phone.power_on();

        let report = phone.use_for(Minutes::new(50));
        assert!(report.is_depleted());
        assert!(!phone.state().is_on());
        assert_eq!(phone.state().battery().value(), 0);
    }

    #[test]
    fn overshoot_depletion_clamps_to_zero() {
        let mut phone = iphone_at(50);
        phone.power_on();

        let report = phone.use_for(Minutes::new(60));
        assert!(report.is_depleted());
        assert_eq!(phone.state().battery().value(), 0);
        assert!(!phone.state().is_on());
    }

    #[test]
    fn charge_raises_battery_and_keeps_power_state() {
        let mut phone = iphone_at(10);

        let report = phone.charge_for(Minutes::new(30));
        assert_eq!(report.level().value(), 40);
        assert_eq!(phone.state().battery().value(), 40);
        assert!(!phone.state().is_on());
        assert!(phone.state().last_activity().is_some());
    }

    #[test]
    fn charge_clamps_at_full() {
        let mut phone = iphone_at(90);
        phone.charge_for(Minutes::new(300));
        assert_eq!(phone.state().battery(), BatteryLevel::FULL);
    }

    #[test]
    fn charge_while_on_does_not_power_off() {
        let mut phone = iphone_at(50);
        phone.power_on();
        phone.charge_for(Minutes::new(10));
        assert!(phone.state().is_on());
    }

    #[test]
    fn power_observers_fire_only_on_change() {
        let mut phone = iphone_at(50);
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = Arc::clone(&count);
        phone.on_power_changed(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        phone.power_on();
        phone.power_on(); // redundant, no notification
        phone.power_off();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn depletion_observer_fires_once() {
        let mut phone = iphone_at(10);
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = Arc::clone(&count);
        phone.on_battery_depleted(move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        phone.power_on();
        phone.use_for(Minutes::new(30));
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // Using the empty device again must not re-trigger depletion.
        phone.power_on();
        phone.use_for(Minutes::new(5));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn battery_observer_sees_new_level() {
        let mut phone = iphone_at(50);
        let seen = Arc::new(parking_lot::RwLock::new(Vec::new()));

        let seen_clone = Arc::clone(&seen);
        phone.on_battery_changed(move |level| {
            seen_clone.write().push(level.value());
        });

        phone.power_on();
        phone.use_for(Minutes::new(20));
        phone.charge_for(Minutes::new(10));
        assert_eq!(*seen.read(), vec![30, 40]);
    }

    #[test]
    fn unsubscribed_observer_is_silent() {
        let mut phone = iphone_at(50);
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = Arc::clone(&count);
        let sub = phone.on_power_changed(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(phone.unsubscribe(sub));
        phone.power_on();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn status_reflects_current_state() {
        let mut phone = iphone_at(50);
        phone.power_on();
        phone.use_for(Minutes::new(20));

        let status = phone.status();
        assert_eq!(status.brand(), "Apple");
        assert_eq!(status.model(), "iPhone X");
        assert_eq!(status.battery().value(), 30);
        assert!(status.power().is_on());
        assert!(status.last_activity().is_some());
    }

    #[test]
    fn label_joins_brand_and_model() {
        let phone = iphone_at(50);
        assert_eq!(phone.label(), "Apple iPhone X");
    }
}
