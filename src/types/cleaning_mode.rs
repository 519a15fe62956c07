// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cleaning mode and direction control types.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Cleaning mode written to the mode data point.
///
/// Setting a mode starts the corresponding program; re-sending the current
/// mode toggles pause on this device class (there is no dedicated pause
/// data point).
///
/// # Examples
///
/// ```
/// use provac_lib::types::CleaningMode;
///
/// assert_eq!(CleaningMode::Smart.as_str(), "smart");
/// assert_eq!(CleaningMode::Spiral.as_str(), "sprial");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CleaningMode {
    /// Whole-house automatic cleaning. The default for `start`.
    Smart,
    /// Clean along walls and edges.
    WallFollow,
    /// Mopping program.
    Mop,
    /// Navigate back to the charging dock.
    ChargeGo,
    /// Spot clean in an outward spiral.
    Spiral,
    /// Clean the current room only.
    Single,
}

impl CleaningMode {
    /// Returns the wire value expected by the device.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Smart => "smart",
            Self::WallFollow => "wallfollow",
            Self::Mop => "mop",
            Self::ChargeGo => "chargego",
            // The firmware really does expect the misspelled value.
            Self::Spiral => "sprial",
            Self::Single => "single",
        }
    }
}

impl fmt::Display for CleaningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CleaningMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smart" => Ok(Self::Smart),
            "wallfollow" => Ok(Self::WallFollow),
            "mop" => Ok(Self::Mop),
            "chargego" => Ok(Self::ChargeGo),
            "sprial" => Ok(Self::Spiral),
            "single" => Ok(Self::Single),
            _ => Err(ValueError::InvalidCleaningMode(s.to_string())),
        }
    }
}

/// Direction control values.
///
/// Only the stop value is used by this integration; manual steering values
/// exist in the firmware but are not exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DirectionControl {
    /// Halt the drive motors and end the current program.
    Stop,
}

impl DirectionControl {
    /// Returns the wire value expected by the device.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stop => "stop",
        }
    }
}

impl fmt::Display for DirectionControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
