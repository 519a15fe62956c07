// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoded device state.
//!
//! The device answers status requests with an untyped string-keyed map.
//! All defensive parsing is concentrated in [`decode`], which turns that
//! map into an immutable [`VacuumState`] snapshot; everything downstream
//! of the decoder works with typed optionals and never touches raw JSON.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use provac_lib::state::decode;
//!
//! let payload = json!({"dps": {"6": 87, "5": 5, "11": 0}});
//! let state = decode(&payload);
//!
//! assert_eq!(state.battery(), Some(87));
//! assert_eq!(state.activity(), provac_lib::types::Activity::Docked);
//! ```

mod decoder;
mod vacuum_state;

pub use decoder::decode;
pub use vacuum_state::VacuumState;
