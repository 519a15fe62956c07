// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Protocol seam towards the Tuya device-communication layer.
//!
//! This library does not implement the encrypted Tuya local protocol.
//! The [`Transport`] and [`Connector`] traits are the boundary: a concrete
//! implementation wraps whatever protocol library the host application
//! ships (tinytuya-style status/set-value semantics are assumed), while
//! everything above this module works purely in terms of data points and
//! raw JSON payloads.
//!
//! # Payload shape
//!
//! A status payload is a JSON object with a `dps` member mapping
//! stringified data-point ids to values:
//!
//! ```json
//! {"dps": {"6": 87, "5": 1, "101": "normal"}}
//! ```

mod data_point;

pub use data_point::DataPoint;

use std::future::Future;

use serde_json::Value;

use crate::error::TransportError;

/// I/O channel to one physical device.
///
/// Implementations are expected to block (asynchronously) until the device
/// acknowledges or the underlying protocol times out; this layer adds no
/// timeout of its own on top of the transport's.
pub trait Transport: Send + Sync + 'static {
    /// Fetches the current raw status payload from the device.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the device is unreachable or the
    /// session handshake fails.
    fn status(&self) -> impl Future<Output = Result<Value, TransportError>> + Send;

    /// Writes a single data-point value to the device.
    ///
    /// Success means the device acknowledged the write; it does not mean
    /// the device state has already changed — that is observed through the
    /// next status poll.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the write is not acknowledged.
    fn set_value(
        &self,
        dp: DataPoint,
        value: Value,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;
}

/// Factory for [`Transport`] instances.
///
/// Building a transport only prepares connection parameters; no network
/// I/O happens until the first call on the transport. The factory is kept
/// around by the device client so the transport can be rebuilt when the
/// device comes back under a different IP address.
pub trait Connector: Send + Sync + 'static {
    /// The transport type this connector produces.
    type Transport: Transport;

    /// Builds a transport for the device at `host`.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::InvalidAddress` if `host` cannot be used
    /// as a connection target.
    fn connect(
        &self,
        device_id: &str,
        local_key: &str,
        host: &str,
    ) -> Result<Self::Transport, TransportError>;
}
