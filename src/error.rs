// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `ProVac` library.
//!
//! This module provides the error hierarchy for handling failures across
//! the library: value validation and device transport. Decode failures are
//! absorbed per-field inside the state decoder and never surface here, and
//! discovery failures degrade to "not found" rather than becoming errors.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when polling
/// or commanding a vacuum device.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the device.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when a caller-supplied value is outside the closed
/// set or range the device accepts. They are raised before any data-point
/// write is issued.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u64,
        /// Maximum allowed value.
        max: u64,
        /// The actual value that was provided.
        actual: u64,
    },

    /// An invalid fan speed string was provided.
    #[error("invalid fan speed: {0}")]
    InvalidFanSpeed(String),

    /// An invalid water speed string was provided.
    #[error("invalid water speed: {0}")]
    InvalidWaterSpeed(String),

    /// An invalid cleaning mode string was provided.
    #[error("invalid cleaning mode: {0}")]
    InvalidCleaningMode(String),
}

/// Errors related to device communication.
///
/// These are produced by [`Transport`](crate::protocol::Transport) and
/// [`Connector`](crate::protocol::Connector) implementations. The polling
/// coordinator recovers from them with a one-shot rediscovery-and-retry;
/// if unrecovered they surface from a refresh cycle unchanged.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection to the device failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid host or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The device rejected the session key exchange.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The device answered with an unintelligible frame.
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
