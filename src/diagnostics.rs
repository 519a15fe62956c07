// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Redacted diagnostics snapshot.
//!
//! The report is safe to export verbatim: the local key is not part of the
//! structure, so no serialization path can leak it. The raw data-point map
//! is included only when the corresponding option is enabled.

use serde_json::{Map, Value};

use crate::config::Options;
use crate::coordinator::Freshness;
use crate::state::VacuumState;

/// Exportable snapshot of one device's integration state.
///
/// Obtained from [`Vacuum::diagnostics`](crate::Vacuum::diagnostics).
#[derive(Debug, Clone, serde::Serialize)]
pub struct DiagnosticsReport {
    /// Current connection target.
    pub host: String,
    /// Tuya device id.
    pub device_id: String,
    /// Freshness of the parsed state below.
    pub freshness: Freshness,
    /// Active runtime options.
    pub options: Options,
    /// Last decoded snapshot, typed fields only.
    pub parsed_state: Option<VacuumState>,
    /// Raw data points of the last snapshot; present only when
    /// `show_raw_data_points` is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_data_points: Option<Map<String, Value>>,
}

impl DiagnosticsReport {
    pub(crate) fn new(
        host: String,
        device_id: String,
        freshness: Freshness,
        options: Options,
        state: Option<VacuumState>,
    ) -> Self {
        let raw_data_points = if options.show_raw_data_points {
            state.as_ref().map(|s| s.raw_data_points().clone())
        } else {
            None
        };
        Self {
            host,
            device_id,
            freshness,
            options,
            parsed_state: state,
            raw_data_points,
        }
    }
}
