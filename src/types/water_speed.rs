// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mop water flow type.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Water flow rate for the mopping attachment.
///
/// The `Big` wire value is capitalized by the firmware while the other two
/// are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum WaterSpeed {
    /// Minimal water flow.
    Small,
    /// Medium water flow.
    Medium,
    /// Maximum water flow.
    Big,
}

impl WaterSpeed {
    /// All supported flow rates, in display order.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Big];

    /// Returns the wire value expected by the device.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Big => "Big",
        }
    }
}

impl fmt::Display for WaterSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WaterSpeed {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "Big" => Ok(Self::Big),
            _ => Err(ValueError::InvalidWaterSpeed(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_wire_values() {
        for speed in WaterSpeed::ALL {
            assert_eq!(speed.as_str().parse::<WaterSpeed>().unwrap(), speed);
        }
    }

    #[test]
    fn rejects_unknown_value() {
        assert!("huge".parse::<WaterSpeed>().is_err());
        // The firmware capitalizes Big; lower-case is not a valid wire value.
        assert!("big".parse::<WaterSpeed>().is_err());
    }
}
