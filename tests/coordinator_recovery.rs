// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the polling coordinator and the stale-IP
//! recovery protocol.

mod common;

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::time::advance;

use provac_lib::{Freshness, Options, PollInterval, Vacuum, VacuumConfig};

use common::{FakeConnector, FakeScanner, FakeTransport, payload, settle};

const DEVICE_ID: &str = "bf9348ab2cd1";
const LOCAL_KEY: &str = "0123456789abcdef";
const HOST_A: &str = "192.168.1.42";
const HOST_B: &str = "192.168.1.77";

fn vacuum_with(
    connector: &FakeConnector,
    scanner: &FakeScanner,
    options: Options,
) -> Vacuum<FakeConnector, FakeScanner> {
    Vacuum::new(
        VacuumConfig::new(DEVICE_ID, LOCAL_KEY, HOST_A),
        options,
        connector.clone(),
        scanner.clone(),
    )
    .unwrap()
}

#[tokio::test]
async fn successful_poll_publishes_state() {
    let connector = FakeConnector::new();
    let transport = FakeTransport::healthy(payload(json!({"6": 87, "5": 5, "11": 0})));
    connector.register(HOST_A, transport.clone());
    let vacuum = vacuum_with(&connector, &FakeScanner::empty(), Options::default());

    let state = vacuum.coordinator().refresh().await.unwrap();

    assert_eq!(state.battery(), Some(87));
    assert_eq!(vacuum.coordinator().freshness(), Freshness::Fresh);
    assert_eq!(vacuum.state().unwrap().battery(), Some(87));
}

#[tokio::test]
async fn empty_payload_is_success_not_a_retry_trigger() {
    let connector = FakeConnector::new();
    let transport = FakeTransport::healthy(json!({}));
    connector.register(HOST_A, transport.clone());
    let scanner = FakeScanner::announcing(DEVICE_ID, HOST_B);
    let vacuum = vacuum_with(&connector, &scanner, Options::default());

    let state = vacuum.coordinator().refresh().await.unwrap();

    assert_eq!(state.battery(), None);
    assert!(state.raw_data_points().is_empty());
    assert_eq!(transport.status_calls(), 1);
    assert_eq!(scanner.scan_calls(), 0);
    assert_eq!(vacuum.coordinator().freshness(), Freshness::Fresh);
}

#[tokio::test]
async fn rediscovered_same_ip_skips_the_retry() {
    let connector = FakeConnector::new();
    let transport = FakeTransport::unreachable();
    connector.register(HOST_A, transport.clone());
    // The scan still sees the device where we already are.
    let scanner = FakeScanner::announcing(DEVICE_ID, HOST_A);
    let vacuum = vacuum_with(&connector, &scanner, Options::default());

    assert!(vacuum.coordinator().refresh().await.is_err());
    assert!(vacuum.coordinator().refresh().await.is_err());

    // One status call per cycle: a retry against the same address is
    // pointless and must not happen.
    assert_eq!(transport.status_calls(), 2);
    assert_eq!(connector.connect_calls(), 1);
    assert_eq!(vacuum.diagnostics().host, HOST_A);
    assert!(vacuum.state().is_none());
    assert_eq!(vacuum.coordinator().freshness(), Freshness::NoData);
}

#[tokio::test]
async fn rediscovered_new_ip_rebuilds_once_and_recovers() {
    let connector = FakeConnector::new();
    let old_transport = FakeTransport::unreachable();
    let new_transport = FakeTransport::healthy(payload(json!({"6": 64})));
    connector.register(HOST_A, old_transport.clone());
    connector.register(HOST_B, new_transport.clone());
    let scanner = FakeScanner::announcing(DEVICE_ID, HOST_B);
    let vacuum = vacuum_with(&connector, &scanner, Options::default());

    let state = vacuum.coordinator().refresh().await.unwrap();

    assert_eq!(state.battery(), Some(64));
    assert_eq!(old_transport.status_calls(), 1);
    assert_eq!(new_transport.status_calls(), 1);
    // Initial connect plus exactly one rebuild.
    assert_eq!(connector.connect_calls(), 2);
    assert_eq!(vacuum.diagnostics().host, HOST_B);
    assert_eq!(vacuum.coordinator().freshness(), Freshness::Fresh);
}

#[tokio::test]
async fn failed_retry_keeps_previous_state_and_marks_stale() {
    let connector = FakeConnector::new();
    let transport = FakeTransport::healthy(payload(json!({"6": 87})));
    connector.register(HOST_A, transport.clone());
    // The rediscovered address is just as dead.
    connector.register(HOST_B, FakeTransport::unreachable());
    let scanner = FakeScanner::announcing(DEVICE_ID, HOST_B);
    let vacuum = vacuum_with(&connector, &scanner, Options::default());

    vacuum.coordinator().refresh().await.unwrap();
    transport.set_status_payload(None);

    assert!(vacuum.coordinator().refresh().await.is_err());

    assert_eq!(vacuum.coordinator().freshness(), Freshness::Stale);
    // The stale snapshot stays displayed.
    assert_eq!(vacuum.state().unwrap().battery(), Some(87));
}

#[tokio::test]
async fn disabled_rediscovery_fails_without_scanning() {
    let connector = FakeConnector::new();
    connector.register(HOST_A, FakeTransport::unreachable());
    let scanner = FakeScanner::announcing(DEVICE_ID, HOST_B);
    let options = Options::default().with_auto_discover_ip(false);
    let vacuum = vacuum_with(&connector, &scanner, options);

    assert!(vacuum.coordinator().refresh().await.is_err());

    assert_eq!(scanner.scan_calls(), 0);
    assert_eq!(connector.connect_calls(), 1);
}

#[tokio::test]
async fn no_announcement_fails_without_rebuild() {
    let connector = FakeConnector::new();
    connector.register(HOST_A, FakeTransport::unreachable());
    let vacuum = vacuum_with(&connector, &FakeScanner::empty(), Options::default());

    assert!(vacuum.coordinator().refresh().await.is_err());
    assert_eq!(connector.connect_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn poll_loop_honors_interval_and_manual_requests() {
    let connector = FakeConnector::new();
    let transport = FakeTransport::healthy(payload(json!({"6": 87})));
    connector.register(HOST_A, transport.clone());
    let vacuum = Arc::new(vacuum_with(
        &connector,
        &FakeScanner::empty(),
        Options::default(),
    ));

    let coordinator = Arc::clone(vacuum.coordinator());
    let poller = tokio::spawn(async move { coordinator.run().await });
    settle().await;
    assert_eq!(transport.status_calls(), 0);

    // One poll per configured interval.
    advance(Duration::from_secs(30)).await;
    settle().await;
    assert_eq!(transport.status_calls(), 1);

    // A manual request wakes the loop without waiting for the interval.
    // The shorter interval set here is picked up when the loop re-arms
    // for the cycle after that.
    vacuum.set_options(Options::default().with_poll_interval(PollInterval::new(5).unwrap()));
    vacuum.request_refresh();
    settle().await;
    assert_eq!(transport.status_calls(), 2);

    advance(Duration::from_secs(5)).await;
    settle().await;
    assert_eq!(transport.status_calls(), 3);

    poller.abort();
}
