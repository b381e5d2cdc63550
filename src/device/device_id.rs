// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device identifier type.

use std::fmt;

use uuid::Uuid;

/// Unique identifier for a simulated device.
///
/// Wraps a UUID v4 so device identity in diagnostics cannot be confused
/// with other identifiers. Every [`Device`](super::Device) gets a fresh
/// one at construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DeviceId(Uuid);

impl DeviceId {
    /// Creates a new unique device identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DeviceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Shortened for log readability
        write!(f, "DeviceId({})", &self.0.to_string()[..8])
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(DeviceId::new(), DeviceId::new());
    }

    #[test]
    fn debug_is_shortened() {
        let id = DeviceId::new();
        let debug = format!("{id:?}");
        assert!(debug.starts_with("DeviceId("));
        assert_eq!(debug.len(), "DeviceId(".len() + 8 + 1);
    }

    #[test]
    fn display_is_full_uuid() {
        let id = DeviceId::new();
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }
}
