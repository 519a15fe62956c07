// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level vacuum facade.
//!
//! [`Vacuum`] ties the device client, the polling coordinator and the
//! command layer together. Commands translate to data-point writes and are
//! serialized by one per-device lock so the command memory (last cleaning
//! mode, stored fan speed) is never updated by two commands at once;
//! polling is deliberately not covered by that lock and runs concurrently.
//!
//! # Command flow
//!
//! Every command follows the same shape: acquire the command lock, write
//! the data point(s), commit the memory update, then ask the coordinator
//! for a refresh. The refresh request is fire-and-forget — the visible
//! state update arrives asynchronously through the next poll.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::config::{Options, VacuumConfig};
use crate::coordinator::Coordinator;
use crate::device::DeviceClient;
use crate::diagnostics::DiagnosticsReport;
use crate::discovery::Scanner;
use crate::error::{Error, Result};
use crate::protocol::{Connector, DataPoint};
use crate::state::VacuumState;
use crate::types::{CleaningMode, CurrentState, DirectionControl, FanSpeed, WaterSpeed};

/// Settle time between a mode change and the fan-speed restore write.
///
/// Switching cleaning mode resets the fan speed to the firmware default;
/// writing the remembered speed too early loses the race against that
/// reset.
const FAN_SPEED_RESTORE_DELAY: Duration = Duration::from_secs(5);

/// Per-device command memory, guarded by the command lock.
#[derive(Debug, Clone, Copy, Default)]
struct CommandMemory {
    /// Most recently issued cleaning mode; decides whether `start` resumes
    /// or begins a fresh smart run.
    last_cleaning_mode: Option<CleaningMode>,
    /// Last fan speed the user explicitly requested, kept for the
    /// remember/restore policy. Not the live speed the device reports.
    stored_fan_speed: Option<FanSpeed>,
}

/// One integrated vacuum: state polling plus control operations.
///
/// # Examples
///
/// ```ignore
/// use provac_lib::{Options, Vacuum, VacuumConfig};
///
/// // `TuyaConnector` and `TuyaScanner` wrap the host application's Tuya
/// // protocol library behind this crate's `Connector`/`Scanner` traits.
/// let vacuum = Vacuum::new(
///     VacuumConfig::new("bf9348ab2cd1", "16-byte-localkey", "192.168.1.42"),
///     Options::default(),
///     TuyaConnector::v3_3(),
///     TuyaScanner::default(),
/// )?;
///
/// let vacuum = std::sync::Arc::new(vacuum);
/// tokio::spawn({
///     let vacuum = std::sync::Arc::clone(&vacuum);
///     async move { vacuum.coordinator().run().await }
/// });
///
/// vacuum.start().await?;
/// ```
#[derive(Debug)]
pub struct Vacuum<C: Connector, S: Scanner> {
    client: Arc<DeviceClient<C>>,
    coordinator: Arc<Coordinator<C, S>>,
    options: Arc<RwLock<Options>>,
    memory: Mutex<CommandMemory>,
}

impl<C: Connector, S: Scanner> Vacuum<C, S> {
    /// Creates the integration for one device.
    ///
    /// # Errors
    ///
    /// Returns an error if the connector rejects the configured host.
    pub fn new(config: VacuumConfig, options: Options, connector: C, scanner: S) -> Result<Self> {
        let client = Arc::new(DeviceClient::new(config, connector)?);
        let options = Arc::new(RwLock::new(options));
        let coordinator = Arc::new(Coordinator::new(
            Arc::clone(&client),
            scanner,
            Arc::clone(&options),
        ));
        Ok(Self {
            client,
            coordinator,
            options,
            memory: Mutex::new(CommandMemory::default()),
        })
    }

    /// Returns the polling coordinator.
    ///
    /// The host spawns [`Coordinator::run`](crate::coordinator::Coordinator::run)
    /// on it and typically calls one initial
    /// [`refresh`](crate::coordinator::Coordinator::refresh) at setup.
    #[must_use]
    pub fn coordinator(&self) -> &Arc<Coordinator<C, S>> {
        &self.coordinator
    }

    /// Returns the last decoded state, if any poll has succeeded yet.
    #[must_use]
    pub fn state(&self) -> Option<VacuumState> {
        self.coordinator.state()
    }

    /// Returns the current runtime options.
    #[must_use]
    pub fn options(&self) -> Options {
        *self.options.read()
    }

    /// Replaces the runtime options.
    ///
    /// Takes effect on the next poll cycle; the coordinator is not
    /// recreated.
    pub fn set_options(&self, options: Options) {
        *self.options.write() = options;
    }

    /// Asks the coordinator to refresh soon. Fire-and-forget.
    pub fn request_refresh(&self) {
        self.coordinator.request_refresh();
    }

    /// Starts cleaning.
    ///
    /// If the device is paused and a cleaning mode is remembered, that
    /// mode is re-sent to resume it; otherwise a fresh smart run starts
    /// and is remembered.
    ///
    /// # Errors
    ///
    /// Returns an error if the data-point write fails.
    pub async fn start(&self) -> Result<()> {
        let mut memory = self.memory.lock().await;

        let paused = self
            .state()
            .and_then(|state| state.current_state())
            .and_then(CurrentState::from_code)
            == Some(CurrentState::Pause);

        let (mode, resuming) = match memory.last_cleaning_mode {
            Some(remembered) if paused => (remembered, true),
            _ => (CleaningMode::Smart, false),
        };

        self.write_mode(mode).await?;
        if !resuming {
            memory.last_cleaning_mode = Some(mode);
        }
        self.schedule_fan_speed_restore(&memory);
        drop(memory);

        self.coordinator.request_refresh();
        Ok(())
    }

    /// Pauses the running program.
    ///
    /// The firmware has no pause data point; re-sending the current mode
    /// toggles pause. Without a remembered mode this is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the data-point write fails.
    pub async fn pause(&self) -> Result<()> {
        let memory = self.memory.lock().await;

        let Some(mode) = memory.last_cleaning_mode else {
            tracing::debug!(
                device_id = self.client.device_id(),
                "pause requested with no cleaning mode in memory, ignoring"
            );
            return Ok(());
        };

        self.write_mode(mode).await?;
        drop(memory);

        self.coordinator.request_refresh();
        Ok(())
    }

    /// Stops the running program and forgets the cleaning mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the data-point write fails.
    pub async fn stop(&self) -> Result<()> {
        let mut memory = self.memory.lock().await;

        self.client
            .set_value(
                DataPoint::DirectionControl,
                Value::from(DirectionControl::Stop.as_str()),
            )
            .await?;
        memory.last_cleaning_mode = None;
        drop(memory);

        self.coordinator.request_refresh();
        Ok(())
    }

    /// Sends the vacuum back to the charging dock.
    ///
    /// # Errors
    ///
    /// Returns an error if the data-point write fails.
    pub async fn return_to_base(&self) -> Result<()> {
        self.start_mode(CleaningMode::ChargeGo).await
    }

    /// Spot-cleans around the current position.
    ///
    /// # Errors
    ///
    /// Returns an error if the data-point write fails.
    pub async fn clean_spot(&self) -> Result<()> {
        self.start_mode(CleaningMode::Spiral).await
    }

    /// Sets the suction fan speed and stores it for later restore.
    ///
    /// # Errors
    ///
    /// Returns an error if the data-point write fails.
    pub async fn set_fan_speed(&self, speed: FanSpeed) -> Result<()> {
        let mut memory = self.memory.lock().await;

        self.client
            .set_value(DataPoint::FanSpeed, Value::from(speed.as_str()))
            .await?;
        memory.stored_fan_speed = Some(speed);
        drop(memory);

        self.coordinator.request_refresh();
        Ok(())
    }

    /// Sets the fan speed from a wire string, as received from the host UI.
    ///
    /// # Errors
    ///
    /// Returns `Error::Value` — before any write is issued — if the string
    /// is not one of the supported speeds, or an error if the write fails.
    pub async fn set_fan_speed_str(&self, speed: &str) -> Result<()> {
        let speed: FanSpeed = speed.parse()?;
        self.set_fan_speed(speed).await
    }

    /// Sets the mop water flow rate.
    ///
    /// # Errors
    ///
    /// Returns an error if the data-point write fails.
    pub async fn set_water_speed(&self, speed: WaterSpeed) -> Result<()> {
        let memory = self.memory.lock().await;

        self.client
            .set_value(DataPoint::WaterSpeed, Value::from(speed.as_str()))
            .await?;
        drop(memory);

        self.coordinator.request_refresh();
        Ok(())
    }

    /// Returns the redacted diagnostics snapshot.
    #[must_use]
    pub fn diagnostics(&self) -> DiagnosticsReport {
        let options = self.options();
        DiagnosticsReport::new(
            self.client.host(),
            self.client.device_id().to_string(),
            self.coordinator.freshness(),
            options,
            self.state(),
        )
    }

    /// Writes a mode, remembers it, and schedules the fan-speed restore.
    async fn start_mode(&self, mode: CleaningMode) -> Result<()> {
        let mut memory = self.memory.lock().await;

        self.write_mode(mode).await?;
        memory.last_cleaning_mode = Some(mode);
        self.schedule_fan_speed_restore(&memory);
        drop(memory);

        self.coordinator.request_refresh();
        Ok(())
    }

    async fn write_mode(&self, mode: CleaningMode) -> Result<()> {
        self.client
            .set_value(DataPoint::CleaningMode, Value::from(mode.as_str()))
            .await
            .map_err(Error::from)
    }

    /// Schedules the deferred fan-speed restore after a mode change.
    ///
    /// Mode changes reset the fan speed to the firmware default. When the
    /// remember option is on and a speed is stored, a detached task
    /// re-issues it after [`FAN_SPEED_RESTORE_DELAY`]. The task is not
    /// cancellable and not coordinated with later commands: a mode change
    /// issued inside the delay window will have the restored speed applied
    /// on top of its own default. Failures are logged, never surfaced.
    fn schedule_fan_speed_restore(&self, memory: &CommandMemory) {
        if !self.options.read().remember_fan_speed {
            return;
        }
        let Some(speed) = memory.stored_fan_speed else {
            return;
        };

        let client = Arc::clone(&self.client);
        tokio::spawn(async move {
            tokio::time::sleep(FAN_SPEED_RESTORE_DELAY).await;
            tracing::debug!(
                device_id = client.device_id(),
                speed = speed.as_str(),
                "restoring remembered fan speed"
            );
            if let Err(err) = client
                .set_value(DataPoint::FanSpeed, Value::from(speed.as_str()))
                .await
            {
                tracing::warn!(
                    device_id = client.device_id(),
                    error = %err,
                    "deferred fan-speed restore failed"
                );
            }
        });
    }
}
