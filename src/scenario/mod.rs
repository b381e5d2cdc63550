// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scripted operation sequences.
//!
//! A [`Scenario`] is an ordered list of [`Step`]s applied to one device.
//! Running a scenario yields one [`Report`] per step, in order; printing
//! those reports is the simulation's console output.
//!
//! # Examples
//!
//! ```
//! use phonesim::scenario::Scenario;
//!
//! let mut phone = Scenario::reference_device();
//! let reports = Scenario::reference().run(&mut phone);
//!
//! for report in &reports {
//!     println!("{report}");
//! }
//!
//! // The reference sequence ends powered off at 30%.
//! assert!(!phone.state().is_on());
//! assert_eq!(phone.state().battery().value(), 30);
//! ```

use std::fmt;

use crate::device::Device;
use crate::report::{ChargeReport, PowerReport, UsageReport};
use crate::types::{BatteryLevel, Minutes};

/// A single scripted operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Step {
    /// Turn the device on.
    PowerOn,
    /// Turn the device off.
    PowerOff,
    /// Use the device for the given duration.
    Use(Minutes),
    /// Charge the device for the given duration.
    Charge(Minutes),
}

impl Step {
    /// Applies this step to a device and returns the resulting report.
    pub fn apply(&self, device: &mut Device) -> Report {
        match self {
            Self::PowerOn => Report::Power(device.power_on()),
            Self::PowerOff => Report::Power(device.power_off()),
            Self::Use(minutes) => Report::Usage(device.use_for(*minutes)),
            Self::Charge(minutes) => Report::Charge(device.charge_for(*minutes)),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PowerOn => write!(f, "power on"),
            Self::PowerOff => write!(f, "power off"),
            Self::Use(minutes) => write!(f, "use for {minutes}"),
            Self::Charge(minutes) => write!(f, "charge for {minutes}"),
        }
    }
}

/// Report produced by applying a [`Step`].
///
/// Wraps the per-operation report types so a scenario run yields a uniform
/// list. The [`Display`](fmt::Display) rendering forwards to the inner
/// report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Outcome of a power on/off step.
    Power(PowerReport),
    /// Outcome of a usage step.
    Usage(UsageReport),
    /// Outcome of a charging step.
    Charge(ChargeReport),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power(report) => write!(f, "{report}"),
            Self::Usage(report) => write!(f, "{report}"),
            Self::Charge(report) => write!(f, "{report}"),
        }
    }
}

impl From<PowerReport> for Report {
    fn from(report: PowerReport) -> Self {
        Self::Power(report)
    }
}

impl From<UsageReport> for Report {
    fn from(report: UsageReport) -> Self {
        Self::Usage(report)
    }
}

impl From<ChargeReport> for Report {
    fn from(report: ChargeReport) -> Self {
        Self::Charge(report)
    }
}

/// An ordered list of steps applied to one device.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Scenario {
    steps: Vec<Step>,
}

impl Scenario {
    /// Creates a scenario from a list of steps.
    #[must_use]
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// The reference scenario: power on, use for 60 minutes, charge for 30
    /// minutes, use for 120 minutes, power off.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(vec![
            Step::PowerOn,
            Step::Use(Minutes::new(60)),
            Step::Charge(Minutes::new(30)),
            Step::Use(Minutes::new(120)),
            Step::PowerOff,
        ])
    }

    /// The device the reference scenario runs against: an Apple iPhone X
    /// at 50% battery, powered off.
    #[must_use]
    pub fn reference_device() -> Device {
        Device::builder("Apple", "iPhone X")
            .with_battery(BatteryLevel::clamped(50))
            .build()
    }

    /// Returns the steps in order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the scenario has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Applies every step to the device in order and returns the reports.
    pub fn run(&self, device: &mut Device) -> Vec<Report> {
        tracing::info!(device_id = %device.id(), steps = self.steps.len(), "running scenario");
        self.steps.iter().map(|step| step.apply(device)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::UsageReport;

    #[test]
    fn reference_scenario_shape() {
        let scenario = Scenario::reference();
        assert_eq!(scenario.len(), 5);
        assert!(!scenario.is_empty());
        assert_eq!(scenario.steps()[0], Step::PowerOn);
        assert_eq!(scenario.steps()[4], Step::PowerOff);
    }

    #[test]
    fn reference_device_starts_off_at_half_charge() {
        let device = Scenario::reference_device();
        assert!(!device.state().is_on());
        assert_eq!(device.state().battery().value(), 50);
    }

    #[test]
    fn run_returns_one_report_per_step() {
        let mut device = Scenario::reference_device();
        let reports = Scenario::reference().run(&mut device);
        assert_eq!(reports.len(), 5);
    }

    #[test]
    fn reference_run_matches_expected_outcomes() {
        let mut device = Scenario::reference_device();
        let reports = Scenario::reference().run(&mut device);

        // Use(60) depletes a 50% battery exactly at minute 50.
        assert!(matches!(
            &reports[1],
            Report::Usage(report) if report.is_depleted()
        ));
        // Use(120) happens on a powered-off device and is advisory only.
        assert!(matches!(
            &reports[3],
            Report::Usage(UsageReport::DeviceOff { .. })
        ));

        assert!(!device.state().is_on());
        assert_eq!(device.state().battery().value(), 30);
    }

    #[test]
    fn step_display() {
        assert_eq!(Step::PowerOn.to_string(), "power on");
        assert_eq!(Step::PowerOff.to_string(), "power off");
        assert_eq!(Step::Use(Minutes::new(60)).to_string(), "use for 60 min");
        assert_eq!(
            Step::Charge(Minutes::new(30)).to_string(),
            "charge for 30 min"
        );
    }

    #[test]
    fn scenario_deserializes_from_json() {
        let json = r#"{"steps":["PowerOn",{"Use":60},{"Charge":30},"PowerOff"]}"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.len(), 4);
        assert_eq!(scenario.steps()[1], Step::Use(Minutes::new(60)));
        assert_eq!(scenario.steps()[2], Step::Charge(Minutes::new(30)));
    }

    #[test]
    fn report_from_impls() {
        let report: Report = UsageReport::DeviceOff {
            label: "Apple iPhone X".to_string(),
        }
        .into();
        assert!(matches!(report, Report::Usage(_)));
    }
}
