// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polling coordinator.
//!
//! The coordinator owns the refresh cycle: it fetches the raw status
//! payload through the device client, decodes it, and publishes the
//! resulting snapshot over a watch channel. On a failed fetch it runs the
//! stale-IP recovery protocol — one bounded LAN rediscovery, and one retry
//! against the new address if rediscovery found a different one.
//!
//! A failed cycle never clears the last published snapshot: consumers keep
//! displaying stale-but-known state until a poll succeeds again, and the
//! [`Freshness`] marker tells them which situation they are in.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::{Notify, watch};

use crate::config::Options;
use crate::device::DeviceClient;
use crate::discovery::{Scanner, discover_ip_by_device_id};
use crate::error::{Error, TransportError};
use crate::protocol::Connector;
use crate::state::{VacuumState, decode};

/// How long the recovery path waits for the LAN rediscovery scan.
const RECOVERY_DISCOVERY_TIMEOUT: Duration = Duration::from_secs(6);

/// Freshness of the published snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Freshness {
    /// No poll has succeeded yet; nothing is published.
    NoData,
    /// The last poll succeeded.
    Fresh,
    /// The last poll failed; the published snapshot is from an earlier
    /// cycle.
    Stale,
}

/// Owns the refresh cycle for one device.
///
/// Cheap to share behind an [`Arc`]; polling and command-induced refreshes
/// all funnel through [`Coordinator::refresh`].
#[derive(Debug)]
pub struct Coordinator<C: Connector, S: Scanner> {
    client: Arc<DeviceClient<C>>,
    scanner: S,
    options: Arc<RwLock<Options>>,
    state_tx: watch::Sender<Option<VacuumState>>,
    refresh_requested: Notify,
    freshness: RwLock<Freshness>,
}

impl<C: Connector, S: Scanner> Coordinator<C, S> {
    /// Creates a coordinator over an existing client and scanner.
    #[must_use]
    pub fn new(client: Arc<DeviceClient<C>>, scanner: S, options: Arc<RwLock<Options>>) -> Self {
        let (state_tx, _) = watch::channel(None);
        Self {
            client,
            scanner,
            options,
            state_tx,
            refresh_requested: Notify::new(),
            freshness: RwLock::new(Freshness::NoData),
        }
    }

    /// Returns the last published snapshot, if any.
    #[must_use]
    pub fn state(&self) -> Option<VacuumState> {
        self.state_tx.borrow().clone()
    }

    /// Returns the freshness of the published snapshot.
    #[must_use]
    pub fn freshness(&self) -> Freshness {
        *self.freshness.read()
    }

    /// Subscribes to snapshot updates.
    ///
    /// The host adapter maps updates from this channel onto its own entity
    /// model. The current value is observable immediately.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<VacuumState>> {
        self.state_tx.subscribe()
    }

    /// Asks the poll loop to refresh as soon as possible.
    ///
    /// Fire-and-forget: issued by the command layer after each write. The
    /// request coalesces with an already pending one.
    pub fn request_refresh(&self) {
        self.refresh_requested.notify_one();
    }

    /// Runs one refresh cycle, with stale-IP recovery on failure.
    ///
    /// On a transport failure, and when `auto_discover_ip` is enabled, a
    /// bounded LAN rediscovery runs; if it reports an address different
    /// from the current one the client is rebuilt and the fetch retried
    /// exactly once. An empty payload is a success (it decodes to an
    /// all-absent snapshot), never a retry trigger.
    ///
    /// # Errors
    ///
    /// Returns the final transport error when the cycle could not be
    /// recovered. The previously published snapshot is left in place.
    pub async fn refresh(&self) -> Result<VacuumState, Error> {
        let first_failure = match self.fetch_once().await {
            Ok(state) => return Ok(self.publish(state)),
            Err(err) => err,
        };

        let auto_discover = self.options.read().auto_discover_ip;
        if !auto_discover {
            return Err(self.fail(first_failure.into()));
        }

        tracing::debug!(
            device_id = self.client.device_id(),
            error = %first_failure,
            "status fetch failed, trying LAN rediscovery"
        );

        let new_ip = discover_ip_by_device_id(
            &self.scanner,
            self.client.device_id(),
            RECOVERY_DISCOVERY_TIMEOUT,
        )
        .await;

        let Some(new_ip) = new_ip else {
            return Err(self.fail(first_failure.into()));
        };
        if new_ip == self.client.host() {
            // Same address: the device is simply unreachable, a retry
            // against the identical target cannot do better.
            return Err(self.fail(first_failure.into()));
        }

        tracing::warn!(
            device_id = self.client.device_id(),
            old_host = %self.client.host(),
            new_host = %new_ip,
            "device address changed, rebuilding client and retrying"
        );

        if let Err(err) = self.client.rebuild(&new_ip) {
            return Err(self.fail(err.into()));
        }

        match self.fetch_once().await {
            Ok(state) => Ok(self.publish(state)),
            Err(err) => Err(self.fail(err.into())),
        }
    }

    /// Runs the poll loop until the owning task is dropped.
    ///
    /// Each cycle waits for the configured interval or an explicit
    /// [`Coordinator::request_refresh`], whichever comes first. The
    /// interval is re-read from the options every cycle, so option updates
    /// take effect on the next cycle without recreating the coordinator.
    ///
    /// Refresh failures are logged and the loop keeps going; the previous
    /// snapshot stays published.
    pub async fn run(&self) {
        loop {
            let interval = self.options.read().poll_interval.duration();
            tokio::select! {
                () = tokio::time::sleep(interval) => {}
                () = self.refresh_requested.notified() => {}
            }

            if let Err(err) = self.refresh().await {
                tracing::warn!(
                    device_id = self.client.device_id(),
                    error = %err,
                    "poll cycle failed, keeping previous state"
                );
            }
        }
    }

    async fn fetch_once(&self) -> Result<VacuumState, TransportError> {
        let payload = self.client.status().await?;
        Ok(decode(&payload))
    }

    fn publish(&self, state: VacuumState) -> VacuumState {
        *self.freshness.write() = Freshness::Fresh;
        self.state_tx.send_replace(Some(state.clone()));
        state
    }

    fn fail(&self, err: Error) -> Error {
        let mut freshness = self.freshness.write();
        if *freshness == Freshness::Fresh {
            *freshness = Freshness::Stale;
        }
        err
    }
}
