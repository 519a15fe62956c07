// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scripted in-memory stand-ins for the Tuya transport and LAN scanner.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use serde_json::{Map, Value, json};

use provac_lib::{Connector, DataPoint, Scanner, Transport, TransportError};

/// Wraps a data-point object into the status payload envelope.
pub fn payload(dps: Value) -> Value {
    json!({ "dps": dps })
}

/// Transport whose status answer is scripted by the test.
///
/// Clones share state, so tests keep a handle for inspection after the
/// device client has taken its own copy.
#[derive(Clone, Default)]
pub struct FakeTransport {
    inner: Arc<TransportInner>,
}

#[derive(Default)]
struct TransportInner {
    /// `Some` answers every status call with this payload; `None` fails
    /// every status call with a connection error.
    status_payload: Mutex<Option<Value>>,
    status_calls: AtomicUsize,
    writes: Mutex<Vec<(DataPoint, Value)>>,
}

impl FakeTransport {
    /// A transport that answers every status call with `payload`.
    pub fn healthy(payload: Value) -> Self {
        let transport = Self::default();
        transport.set_status_payload(Some(payload));
        transport
    }

    /// A transport that fails every status call.
    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn set_status_payload(&self, payload: Option<Value>) {
        *self.inner.status_payload.lock() = payload;
    }

    pub fn status_calls(&self) -> usize {
        self.inner.status_calls.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> Vec<(DataPoint, Value)> {
        self.inner.writes.lock().clone()
    }

    pub fn last_write(&self) -> Option<(DataPoint, Value)> {
        self.inner.writes.lock().last().cloned()
    }
}

impl Transport for FakeTransport {
    async fn status(&self) -> Result<Value, TransportError> {
        self.inner.status_calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .status_payload
            .lock()
            .clone()
            .ok_or_else(|| TransportError::ConnectionFailed("device unreachable".to_string()))
    }

    async fn set_value(&self, dp: DataPoint, value: Value) -> Result<(), TransportError> {
        self.inner.writes.lock().push((dp, value));
        Ok(())
    }
}

/// Connector handing out pre-registered transports by host.
///
/// Unregistered hosts get an unreachable transport, mirroring a connector
/// that happily builds a session for an address nobody answers on.
#[derive(Clone, Default)]
pub struct FakeConnector {
    inner: Arc<ConnectorInner>,
}

#[derive(Default)]
struct ConnectorInner {
    transports: Mutex<HashMap<String, FakeTransport>>,
    connect_calls: AtomicUsize,
}

impl FakeConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the transport to hand out for `host`.
    pub fn register(&self, host: &str, transport: FakeTransport) {
        self.inner
            .transports
            .lock()
            .insert(host.to_string(), transport);
    }

    pub fn connect_calls(&self) -> usize {
        self.inner.connect_calls.load(Ordering::SeqCst)
    }
}

impl Connector for FakeConnector {
    type Transport = FakeTransport;

    fn connect(
        &self,
        _device_id: &str,
        _local_key: &str,
        host: &str,
    ) -> Result<Self::Transport, TransportError> {
        self.inner.connect_calls.fetch_add(1, Ordering::SeqCst);
        let transport = self
            .inner
            .transports
            .lock()
            .get(host)
            .cloned()
            .unwrap_or_default();
        Ok(transport)
    }
}

/// Scanner answering with a fixed set of announcements.
#[derive(Clone, Default)]
pub struct FakeScanner {
    inner: Arc<ScannerInner>,
}

#[derive(Default)]
struct ScannerInner {
    announcements: Mutex<Map<String, Value>>,
    scan_calls: AtomicUsize,
}

impl FakeScanner {
    /// A scanner that finds nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A scanner announcing one device at one address.
    pub fn announcing(device_id: &str, ip: &str) -> Self {
        let scanner = Self::default();
        scanner.inner.announcements.lock().insert(
            ip.to_string(),
            json!({ "gwId": device_id, "ip": ip }),
        );
        scanner
    }

    pub fn scan_calls(&self) -> usize {
        self.inner.scan_calls.load(Ordering::SeqCst)
    }
}

impl Scanner for FakeScanner {
    async fn scan(&self) -> Result<Map<String, Value>, TransportError> {
        self.inner.scan_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.inner.announcements.lock().clone())
    }
}

/// Lets spawned tasks and notified loops make progress on the current
/// worker without advancing time.
pub async fn settle() {
    for _ in 0..25 {
        tokio::task::yield_now().await;
    }
}
