// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Duration type for usage and charging sessions.

use std::fmt;
use std::time::Duration;

/// A duration in whole minutes.
///
/// Usage and charging sessions are measured in minutes. Non-negativity is
/// enforced by the unsigned representation; there is no upper bound, because
/// battery arithmetic saturates at the range ends regardless of how long a
/// session runs.
///
/// # Examples
///
/// ```
/// use phonesim::types::Minutes;
///
/// let session = Minutes::new(60);
/// assert_eq!(session.value(), 60);
/// assert_eq!(session.to_string(), "60 min");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Minutes(u32);

impl Minutes {
    /// Zero minutes.
    pub const ZERO: Self = Self(0);

    /// Creates a new duration.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the number of minutes.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the duration is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Converts to a [`Duration`].
    #[must_use]
    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.0) * 60)
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}

impl From<u32> for Minutes {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Minutes> for u32 {
    fn from(minutes: Minutes) -> Self {
        minutes.0
    }
}
