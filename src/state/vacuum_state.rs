// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Immutable state snapshot of a vacuum.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::types::{Activity, CurrentState, Fault};

/// Decoded state of a vacuum at one poll instant.
///
/// Produced by [`decode`](super::decode) and replaced wholesale on each
/// successful poll. Every typed field is either absent (the data point was
/// missing from the payload) or successfully parsed; a field that failed
/// to parse is absent, never garbage.
///
/// The untouched payload is retained in [`raw_data_points`](Self::raw_data_points)
/// for diagnostics.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct VacuumState {
    /// Unparsed data points, keyed by stringified data-point id.
    #[serde(skip)]
    pub(crate) raw_data_points: Map<String, Value>,
    /// When this snapshot was decoded.
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) battery: Option<u8>,
    pub(crate) fault: Option<Fault>,
    pub(crate) current_state: Option<i64>,
    pub(crate) fan_speed: Option<String>,
    pub(crate) water_speed: Option<String>,
    pub(crate) clean_area: Option<f64>,
    pub(crate) clean_time: Option<u32>,
    pub(crate) mop_equipped: Option<bool>,
    pub(crate) device_model: Option<String>,
    pub(crate) sensor_health: Option<u8>,
    pub(crate) filter_health: Option<u8>,
    pub(crate) side_brush_health: Option<u8>,
    pub(crate) brush_health: Option<u8>,
    pub(crate) reset_filter: Option<Value>,
}

impl VacuumState {
    /// Returns the unparsed data-point map.
    #[must_use]
    pub fn raw_data_points(&self) -> &Map<String, Value> {
        &self.raw_data_points
    }

    /// Returns when this snapshot was decoded.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the battery charge in percent.
    #[must_use]
    pub fn battery(&self) -> Option<u8> {
        self.battery
    }

    /// Returns the fault bitmask.
    #[must_use]
    pub fn fault(&self) -> Option<Fault> {
        self.fault
    }

    /// Returns the raw working-state code.
    ///
    /// Unrecognized codes are preserved here; [`Self::activity`] maps them
    /// to [`Activity::Unknown`].
    #[must_use]
    pub fn current_state(&self) -> Option<i64> {
        self.current_state
    }

    /// Returns the reported fan speed string.
    ///
    /// This is the live value from the device, distinct from the speed a
    /// user last requested through the command layer.
    #[must_use]
    pub fn fan_speed(&self) -> Option<&str> {
        self.fan_speed.as_deref()
    }

    /// Returns the reported mop water flow string.
    #[must_use]
    pub fn water_speed(&self) -> Option<&str> {
        self.water_speed.as_deref()
    }

    /// Returns the cleaned area of the current run in square meters.
    #[must_use]
    pub fn clean_area(&self) -> Option<f64> {
        self.clean_area
    }

    /// Returns the cleaning time of the current run in seconds.
    #[must_use]
    pub fn clean_time(&self) -> Option<u32> {
        self.clean_time
    }

    /// Returns whether a mop attachment is installed.
    #[must_use]
    pub fn mop_equipped(&self) -> Option<bool> {
        self.mop_equipped
    }

    /// Returns the device model string.
    #[must_use]
    pub fn device_model(&self) -> Option<&str> {
        self.device_model.as_deref()
    }

    /// Returns the remaining sensor life in percent.
    #[must_use]
    pub fn sensor_health(&self) -> Option<u8> {
        self.sensor_health
    }

    /// Returns the remaining filter life in percent.
    #[must_use]
    pub fn filter_health(&self) -> Option<u8> {
        self.filter_health
    }

    /// Returns the remaining side brush life in percent.
    #[must_use]
    pub fn side_brush_health(&self) -> Option<u8> {
        self.side_brush_health
    }

    /// Returns the remaining roller brush life in percent.
    #[must_use]
    pub fn brush_health(&self) -> Option<u8> {
        self.brush_health
    }

    /// Returns the filter reset flag, passed through untyped.
    #[must_use]
    pub fn reset_filter(&self) -> Option<&Value> {
        self.reset_filter.as_ref()
    }

    /// Returns the user-facing activity for this snapshot.
    #[must_use]
    pub fn activity(&self) -> Activity {
        Activity::derive(self.current_state, self.fault)
    }

    /// Returns whether the device is in the mopping state.
    #[must_use]
    pub fn is_mopping(&self) -> bool {
        CurrentState::is_mopping(self.current_state)
    }
}
