// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ProVac` Lib - A Rust library to integrate Proscenic robot vacuums.
//!
//! Proscenic vacuums speak the Tuya local protocol: an encrypted TCP
//! session on the LAN through which the device reports an untyped map of
//! numbered "data points" and accepts single data-point writes. This
//! library turns that into a typed integration for a home-automation host:
//!
//! - **Polling coordinator**: periodic status fetch, decode, publish —
//!   with a stale-IP recovery protocol for devices that move to a new
//!   DHCP lease mid-operation
//! - **State decoder**: defensive mapping of the raw data-point map into
//!   an immutable [`VacuumState`] snapshot; one malformed field never
//!   spoils a poll
//! - **Activity state machine**: working-state code plus fault bitmask in,
//!   one of seven [`Activity`] values out, faults always winning
//! - **Command layer**: start/pause/stop/return-to-base/spot-clean/fan
//!   speed, serialized per device, with an optional remember-and-restore
//!   policy for the fan speed that mode changes would otherwise reset
//!
//! The encrypted wire protocol itself is *not* implemented here. The host
//! application wraps its Tuya protocol library (tinytuya-compatible
//! semantics) behind the [`Transport`]/[`Connector`]/[`Scanner`] traits
//! and hands those to [`Vacuum::new`].
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use provac_lib::{Options, PollInterval, Vacuum, VacuumConfig};
//!
//! #[tokio::main]
//! async fn main() -> provac_lib::Result<()> {
//!     let vacuum = Arc::new(Vacuum::new(
//!         VacuumConfig::new("bf9348ab2cd1", "16-byte-localkey", "192.168.1.42"),
//!         Options::default()
//!             .with_poll_interval(PollInterval::new(15)?)
//!             .with_remember_fan_speed(true),
//!         TuyaConnector::v3_3(),   // your Transport factory
//!         TuyaScanner::default(),  // your LAN scan wrapper
//!     )?);
//!
//!     // First refresh, then the poll loop in the background.
//!     vacuum.coordinator().refresh().await?;
//!     tokio::spawn({
//!         let vacuum = Arc::clone(&vacuum);
//!         async move { vacuum.coordinator().run().await }
//!     });
//!
//!     vacuum.start().await?;
//!     if let Some(state) = vacuum.state() {
//!         println!("battery: {:?}, activity: {}", state.battery(), state.activity());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Host adapter surface
//!
//! The host's entity layer consumes plain projections instead of
//! subclassing anything here: subscribe to snapshots via
//! [`Coordinator::subscribe`](coordinator::Coordinator::subscribe) (a
//! `tokio::sync::watch` channel), read attributes through the accessors
//! on [`VacuumState`], and export [`Vacuum::diagnostics`] — which never
//! contains the device's local key.

pub mod config;
pub mod coordinator;
pub mod device;
pub mod diagnostics;
pub mod discovery;
pub mod error;
pub mod protocol;
pub mod state;
pub mod types;
pub mod vacuum;

pub use config::{Options, PollInterval, VacuumConfig};
pub use coordinator::{Coordinator, Freshness};
pub use device::DeviceClient;
pub use diagnostics::DiagnosticsReport;
pub use discovery::{Scanner, discover_ip_by_device_id};
pub use error::{Error, Result, TransportError, ValueError};
pub use protocol::{Connector, DataPoint, Transport};
pub use state::{VacuumState, decode};
pub use types::{
    Activity, CleaningMode, CurrentState, DirectionControl, FanSpeed, Fault, WaterSpeed,
};
pub use vacuum::Vacuum;
