// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Suction fan speed type.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Suction fan speed of the vacuum.
///
/// The firmware accepts exactly three values. Note the inconsistent casing
/// on the wire: `ECO` is upper-case while the other two are lower-case.
///
/// # Examples
///
/// ```
/// use provac_lib::types::FanSpeed;
///
/// let eco: FanSpeed = "ECO".parse().unwrap();
/// assert_eq!(eco.as_str(), "ECO");
///
/// assert!("turbo".parse::<FanSpeed>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FanSpeed {
    /// Quiet, battery-friendly suction.
    Eco,
    /// Default suction.
    Normal,
    /// Maximum suction.
    Strong,
}

impl FanSpeed {
    /// All supported speeds, in display order.
    pub const ALL: [Self; 3] = [Self::Eco, Self::Normal, Self::Strong];

    /// Returns the wire value expected by the device.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eco => "ECO",
            Self::Normal => "normal",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FanSpeed {
    type Err = ValueError;

    /// Parses a wire value. Matching is exact: the firmware is
    /// case-sensitive, so `"eco"` is rejected just like `"turbo"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ECO" => Ok(Self::Eco),
            "normal" => Ok(Self::Normal),
            "strong" => Ok(Self::Strong),
            _ => Err(ValueError::InvalidFanSpeed(s.to_string())),
        }
    }
}
