// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw payload to [`VacuumState`] decoding.

use chrono::Utc;
use serde_json::{Map, Value};

use crate::protocol::DataPoint;
use crate::types::Fault;

use super::VacuumState;

/// Decodes a raw status payload into a typed snapshot.
///
/// Total function: it never fails. The payload's `dps` object is taken as
/// the data-point map (missing or non-object means empty), and each typed
/// field is coerced independently. A field that is absent or fails to
/// coerce is `None` in the result; an all-absent snapshot is valid output,
/// not an error.
///
/// Numeric coercions accept JSON numbers and numeric strings — firmware
/// revisions disagree on which they send.
#[must_use]
pub fn decode(payload: &Value) -> VacuumState {
    let dps = payload
        .get("dps")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    let get = |dp: DataPoint| dps.get(&dp.key());

    VacuumState {
        battery: get(DataPoint::Battery).and_then(as_percent),
        fault: get(DataPoint::Fault)
            .and_then(as_int)
            .and_then(|bits| u32::try_from(bits).ok())
            .map(Fault::new),
        current_state: get(DataPoint::CurrentState).and_then(as_int),
        fan_speed: get(DataPoint::FanSpeed).and_then(as_string),
        water_speed: get(DataPoint::WaterSpeed).and_then(as_string),
        clean_area: get(DataPoint::CleanArea).and_then(as_float),
        clean_time: get(DataPoint::CleanTime)
            .and_then(as_int)
            .and_then(|secs| u32::try_from(secs).ok()),
        mop_equipped: get(DataPoint::SweepOrMop)
            .and_then(as_string)
            .map(|mode| mode != "sweep"),
        device_model: get(DataPoint::DeviceModel).and_then(as_string),
        sensor_health: get(DataPoint::SensorHealth).and_then(as_percent),
        filter_health: get(DataPoint::FilterHealth).and_then(as_percent),
        side_brush_health: get(DataPoint::SideBrushHealth).and_then(as_percent),
        brush_health: get(DataPoint::BrushHealth).and_then(as_percent),
        reset_filter: get(DataPoint::ResetFilter).cloned(),
        raw_data_points: dps,
        updated_at: Utc::now(),
    }
}

/// Coerces a value to an integer.
///
/// Accepts integers, floats (truncated) and numeric strings.
#[allow(clippy::cast_possible_truncation)]
fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Coerces a value to a float.
fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Coerces a value to a 0-100 percentage.
fn as_percent(value: &Value) -> Option<u8> {
    as_int(value)
        .and_then(|v| u8::try_from(v).ok())
        .filter(|&v| v <= 100)
}

/// Coerces a value to a string.
///
/// Scalars are stringified the way the device's own app displays them;
/// arrays and objects are not meaningful as display strings and coerce to
/// absent.
fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
