// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed values for the vendor protocol.
//!
//! The device reports and accepts a handful of closed-set values: cleaning
//! modes, fan speeds, water speeds, a numeric working-state code and a fault
//! bitmask. Each gets a dedicated type here so that invalid values are
//! rejected before a data-point write is ever issued, and so that consumers
//! never deal in magic strings.
//!
//! The wire strings are vendor firmware values and must match exactly,
//! including their inconsistent casing and spelling.

mod activity;
mod cleaning_mode;
mod current_state;
mod fan_speed;
mod fault;
mod water_speed;

pub use activity::Activity;
pub use cleaning_mode::{CleaningMode, DirectionControl};
pub use current_state::CurrentState;
pub use fan_speed::FanSpeed;
pub use fault::Fault;
pub use water_speed::WaterSpeed;
