// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client for one physical vacuum.
//!
//! [`DeviceClient`] pairs a [`Connector`] with the device credentials and
//! owns the currently active [`Transport`]. The transport is swapped out
//! wholesale when the device is rediscovered under a new IP address;
//! in-flight calls keep using the transport they started with.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::RwLock;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::config::VacuumConfig;
use crate::error::TransportError;
use crate::protocol::{Connector, DataPoint, Transport};

/// I/O facade for one device.
///
/// Holds no protocol state of its own beyond the connection target; all
/// session handling lives in the transport implementation behind the
/// [`Connector`] seam.
pub struct DeviceClient<C: Connector> {
    connector: C,
    device_id: String,
    local_key: SecretString,
    host: RwLock<String>,
    transport: ArcSwap<C::Transport>,
}

impl<C: Connector> DeviceClient<C> {
    /// Creates a client and builds the initial transport.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the connector rejects the configured
    /// host.
    pub fn new(config: VacuumConfig, connector: C) -> Result<Self, TransportError> {
        let transport = connector.connect(
            config.device_id(),
            config.local_key().expose_secret(),
            config.host(),
        )?;
        let (device_id, local_key, host) = config.into_parts();
        Ok(Self {
            device_id,
            local_key,
            host: RwLock::new(host),
            transport: ArcSwap::from_pointee(transport),
            connector,
        })
    }

    /// Returns the Tuya device id.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Returns the current host address.
    #[must_use]
    pub fn host(&self) -> String {
        self.host.read().clone()
    }

    /// Fetches the raw status payload.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the device is unreachable.
    pub async fn status(&self) -> Result<Value, TransportError> {
        let transport = self.transport.load_full();
        transport.status().await
    }

    /// Writes one data-point value and waits for the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the write is not acknowledged.
    pub async fn set_value(&self, dp: DataPoint, value: Value) -> Result<(), TransportError> {
        let transport = self.transport.load_full();
        transport.set_value(dp, value).await
    }

    /// Replaces the connection target with a new host.
    ///
    /// Called by the coordinator's recovery path between poll attempts.
    /// The swap is atomic; a concurrently running call finishes against
    /// the transport it already loaded.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the connector rejects the new host.
    /// The previous transport stays active in that case.
    pub fn rebuild(&self, host: &str) -> Result<(), TransportError> {
        let transport =
            self.connector
                .connect(&self.device_id, self.local_key.expose_secret(), host)?;
        self.transport.store(Arc::new(transport));
        *self.host.write() = host.to_string();
        Ok(())
    }
}

impl<C: Connector> fmt::Debug for DeviceClient<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceClient")
            .field("device_id", &self.device_id)
            .field("host", &*self.host.read())
            .finish_non_exhaustive()
    }
}
