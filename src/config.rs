// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device configuration and runtime options.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::ValueError;

/// Connection configuration for one vacuum, set at integration setup.
///
/// The local key is the shared secret for the encrypted session and is
/// held as a [`SecretString`]: it never appears in `Debug` output, logs
/// or diagnostics. The host is only the initial address — the device
/// client rebinds it when rediscovery finds the device elsewhere.
///
/// # Examples
///
/// ```
/// use provac_lib::VacuumConfig;
///
/// let config = VacuumConfig::new("bf9348ab2cd1", "0123456789abcdef", "192.168.1.42");
/// assert_eq!(config.device_id(), "bf9348ab2cd1");
/// ```
#[derive(Debug)]
pub struct VacuumConfig {
    device_id: String,
    local_key: SecretString,
    host: String,
}

impl VacuumConfig {
    /// Creates a new device configuration.
    #[must_use]
    pub fn new(
        device_id: impl Into<String>,
        local_key: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            local_key: SecretString::from(local_key.into()),
            host: host.into(),
        }
    }

    /// Returns the Tuya device id.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Returns the initial host address.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the local key.
    ///
    /// Kept crate-private: the key is handed to the connector when a
    /// transport is built and goes nowhere else.
    pub(crate) fn local_key(&self) -> &SecretString {
        &self.local_key
    }

    /// Decomposes the configuration for the device client to take over.
    pub(crate) fn into_parts(self) -> (String, SecretString, String) {
        (self.device_id, self.local_key, self.host)
    }
}

/// Poll interval in seconds, constrained to 5-60.
///
/// Shorter intervals flood the device (it answers one session at a time),
/// longer ones make the displayed state uselessly stale.
///
/// # Examples
///
/// ```
/// use provac_lib::PollInterval;
///
/// let interval = PollInterval::new(15).unwrap();
/// assert_eq!(interval.as_secs(), 15);
///
/// assert!(PollInterval::new(120).is_err());
/// assert_eq!(PollInterval::clamped(120).as_secs(), 60);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct PollInterval(u64);

impl PollInterval {
    /// Minimum interval in seconds.
    pub const MIN: u64 = 5;

    /// Maximum interval in seconds.
    pub const MAX: u64 = 60;

    /// Default interval in seconds.
    pub const DEFAULT: Self = Self(30);

    /// Creates a new poll interval.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `secs` is outside [5, 60].
    pub fn new(secs: u64) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&secs) {
            return Err(ValueError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: secs,
            });
        }
        Ok(Self(secs))
    }

    /// Creates a poll interval, clamping to the valid range.
    #[must_use]
    pub const fn clamped(secs: u64) -> Self {
        if secs < Self::MIN {
            Self(Self::MIN)
        } else if secs > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(secs)
        }
    }

    /// Returns the interval in seconds.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Returns the interval as a [`Duration`].
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl Default for PollInterval {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Runtime options, updatable without recreating the integration.
///
/// Option changes take effect on the next poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Options {
    /// How often the coordinator polls the device.
    pub poll_interval: PollInterval,
    /// Re-apply the last user-chosen fan speed after a mode change.
    pub remember_fan_speed: bool,
    /// Include the raw data-point map in diagnostics.
    pub show_raw_data_points: bool,
    /// Run a LAN rediscovery when a poll fails, in case the DHCP lease
    /// moved the device to a new address.
    pub auto_discover_ip: bool,
}

impl Options {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the poll interval.
    #[must_use]
    pub const fn with_poll_interval(mut self, interval: PollInterval) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Enables or disables fan-speed restore after mode changes.
    #[must_use]
    pub const fn with_remember_fan_speed(mut self, enabled: bool) -> Self {
        self.remember_fan_speed = enabled;
        self
    }

    /// Enables or disables the raw data-point diagnostics surface.
    #[must_use]
    pub const fn with_show_raw_data_points(mut self, enabled: bool) -> Self {
        self.show_raw_data_points = enabled;
        self
    }

    /// Enables or disables IP rediscovery on poll failure.
    #[must_use]
    pub const fn with_auto_discover_ip(mut self, enabled: bool) -> Self {
        self.auto_discover_ip = enabled;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            poll_interval: PollInterval::DEFAULT,
            remember_fan_speed: false,
            show_raw_data_points: false,
            auto_discover_ip: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_interval_valid_range() {
        for secs in PollInterval::MIN..=PollInterval::MAX {
            assert_eq!(PollInterval::new(secs).unwrap().as_secs(), secs);
        }
    }

    #[test]
    fn poll_interval_invalid() {
        assert!(PollInterval::new(4).is_err());
        assert!(PollInterval::new(61).is_err());
        assert!(PollInterval::new(0).is_err());
    }

    #[test]
    fn poll_interval_clamped() {
        assert_eq!(PollInterval::clamped(0).as_secs(), 5);
        assert_eq!(PollInterval::clamped(300).as_secs(), 60);
        assert_eq!(PollInterval::clamped(42).as_secs(), 42);
    }

    #[test]
    fn poll_interval_duration() {
        let interval = PollInterval::new(10).unwrap();
        assert_eq!(interval.duration(), Duration::from_secs(10));
    }

    #[test]
    fn options_defaults() {
        let options = Options::default();
        assert_eq!(options.poll_interval.as_secs(), 30);
        assert!(!options.remember_fan_speed);
        assert!(!options.show_raw_data_points);
        assert!(options.auto_discover_ip);
    }

    #[test]
    fn options_builders() {
        let options = Options::new()
            .with_poll_interval(PollInterval::clamped(12))
            .with_remember_fan_speed(true)
            .with_show_raw_data_points(true)
            .with_auto_discover_ip(false);

        assert_eq!(options.poll_interval.as_secs(), 12);
        assert!(options.remember_fan_speed);
        assert!(options.show_raw_data_points);
        assert!(!options.auto_discover_ip);
    }

    #[test]
    fn config_debug_redacts_local_key() {
        let config = VacuumConfig::new("device1", "super-secret-key", "192.168.1.42");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret-key"));
    }
}
