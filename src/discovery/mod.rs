// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Best-effort LAN rediscovery.
//!
//! Tuya devices announce themselves with periodic UDP broadcasts; a
//! [`Scanner`] implementation (typically wrapping the protocol library's
//! scan routine) collects those announcements into a map keyed by IP.
//!
//! Discovery is strictly a recovery mechanism: it runs when a poll fails
//! and the DHCP lease may have moved the device. It is never required for
//! steady-state operation, so every failure mode here — timeout, socket
//! error, malformed announcement — degrades to "not found".

use std::future::Future;
use std::time::Duration;

use serde_json::{Map, Value};

use crate::error::TransportError;

/// LAN broadcast scan capability.
///
/// Implementations listen for device announcements for their own natural
/// duration; the caller bounds the overall wait separately.
pub trait Scanner: Send + Sync + 'static {
    /// Runs one scan and returns raw announcements keyed by source IP.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the scan cannot run at all (e.g. the
    /// broadcast socket cannot be bound). Callers treat any error as an
    /// empty result.
    fn scan(&self) -> impl Future<Output = Result<Map<String, Value>, TransportError>> + Send;
}

/// Looks up a device's current IP address by its device id.
///
/// Runs one bounded scan and matches each announcement's id field —
/// reported as either `gwId` or `id` depending on firmware generation —
/// against `device_id`. The announced `ip` field wins over the source IP
/// when both are present.
///
/// Returns `None` on timeout, scan failure or no match; this function
/// never fails.
pub async fn discover_ip_by_device_id<S: Scanner>(
    scanner: &S,
    device_id: &str,
    timeout: Duration,
) -> Option<String> {
    let announcements = match tokio::time::timeout(timeout, scanner.scan()).await {
        Ok(Ok(announcements)) => announcements,
        Ok(Err(err)) => {
            tracing::debug!(error = %err, "LAN scan failed");
            return None;
        }
        Err(_) => {
            tracing::debug!(timeout_secs = timeout.as_secs(), "LAN scan timed out");
            return None;
        }
    };

    for (source_ip, announcement) in &announcements {
        let Some(fields) = announcement.as_object() else {
            continue;
        };
        let announced_id = fields
            .get("gwId")
            .or_else(|| fields.get("id"))
            .and_then(Value::as_str);
        if announced_id == Some(device_id) {
            let ip = fields
                .get("ip")
                .and_then(Value::as_str)
                .unwrap_or(source_ip);
            tracing::debug!(device_id, ip, "device found by LAN scan");
            return Some(ip.to_string());
        }
    }

    tracing::debug!(device_id, "device not found by LAN scan");
    None
}
