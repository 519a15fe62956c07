// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vendor data-point id table.

use std::fmt;

/// Data points of the Proscenic vacuum firmware.
///
/// The ids are vendor-assigned and fixed; they must match the firmware
/// exactly for interoperability. Status payloads key values by the
/// stringified id (see [`DataPoint::key`]), while writes address the
/// numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DataPoint {
    /// Cleaning mode selector (write) / last selected mode (read).
    CleaningMode,
    /// Manual direction control; only `stop` is used here.
    DirectionControl,
    /// Numeric working-state code.
    CurrentState,
    /// Battery charge, percent.
    Battery,
    /// Fault bitmask; 0 means no fault.
    Fault,
    /// Suction fan speed.
    FanSpeed,
    /// Mop water flow rate.
    WaterSpeed,
    /// Attachment flag: `sweep` when no mop is installed.
    SweepOrMop,
    /// Cleaned area of the current run, square meters.
    CleanArea,
    /// Cleaning time of the current run, seconds.
    CleanTime,
    /// Device model string.
    DeviceModel,
    /// Remaining cliff/collision sensor life, percent.
    SensorHealth,
    /// Remaining filter life, percent.
    FilterHealth,
    /// Remaining side brush life, percent.
    SideBrushHealth,
    /// Remaining roller brush life, percent.
    BrushHealth,
    /// Filter maintenance reset flag; semantics are device-defined.
    ResetFilter,
}

impl DataPoint {
    /// Returns the numeric data-point id.
    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            Self::CleaningMode => 3,
            Self::DirectionControl => 4,
            Self::CurrentState => 5,
            Self::Battery => 6,
            Self::Fault => 11,
            Self::FanSpeed => 101,
            Self::WaterSpeed => 102,
            Self::SweepOrMop => 103,
            Self::CleanArea => 106,
            Self::CleanTime => 107,
            Self::DeviceModel => 109,
            Self::SensorHealth => 110,
            Self::FilterHealth => 111,
            Self::SideBrushHealth => 112,
            Self::BrushHealth => 113,
            Self::ResetFilter => 114,
        }
    }

    /// Returns the stringified id used as key in status payloads.
    #[must_use]
    pub fn key(self) -> String {
        self.id().to_string()
    }

    /// Maps a numeric id back to a known data point, if any.
    #[must_use]
    pub const fn from_id(id: u32) -> Option<Self> {
        match id {
            3 => Some(Self::CleaningMode),
            4 => Some(Self::DirectionControl),
            5 => Some(Self::CurrentState),
            6 => Some(Self::Battery),
            11 => Some(Self::Fault),
            101 => Some(Self::FanSpeed),
            102 => Some(Self::WaterSpeed),
            103 => Some(Self::SweepOrMop),
            106 => Some(Self::CleanArea),
            107 => Some(Self::CleanTime),
            109 => Some(Self::DeviceModel),
            110 => Some(Self::SensorHealth),
            111 => Some(Self::FilterHealth),
            112 => Some(Self::SideBrushHealth),
            113 => Some(Self::BrushHealth),
            114 => Some(Self::ResetFilter),
            _ => None,
        }
    }
}

impl fmt::Display for DataPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dp{}", self.id())
    }
}
