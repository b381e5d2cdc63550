// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reference simulation: an Apple iPhone X at 50% battery, powered off,
//! run through the scripted sequence power on, use for 60 minutes, charge
//! for 30 minutes, use for 120 minutes, power off.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! Diagnostic verbosity follows the `RUST_LOG` environment variable, e.g.
//! `RUST_LOG=debug cargo run`.

use phonesim::scenario::Scenario;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut phone = Scenario::reference_device();

    phone.on_battery_changed(|level| {
        if level.is_low() && !level.is_empty() {
            tracing::warn!(%level, "battery is getting low");
        }
    });

    for report in Scenario::reference().run(&mut phone) {
        println!("{report}");
    }

    let status = phone.status();
    println!("{status}");
    if let Ok(json) = status.to_json() {
        tracing::debug!(%json, "final status");
    }
}
