// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vacuum activity derived from the working state and fault code.

use std::fmt;

use super::{CurrentState, Fault};

/// High-level activity of the vacuum, as shown to the user.
///
/// Derived from the raw working-state code and the fault bitmask via
/// [`Activity::derive`]. A present, nonzero fault always wins over whatever
/// the working state claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    /// A cleaning program is running.
    Cleaning,
    /// Driving back to the charging dock.
    Returning,
    /// Docked and charging.
    Docked,
    /// Program suspended mid-run.
    Paused,
    /// Standing by, no program active.
    Idle,
    /// The device reports a fault.
    Error,
    /// The state code is absent or not recognized.
    Unknown,
}

impl Activity {
    /// Derives the activity from a raw state code and fault bitmask.
    ///
    /// Precedence: a present, nonzero fault maps to [`Activity::Error`]
    /// unconditionally. Otherwise the state code is looked up in the fixed
    /// table; absent or unrecognized codes map to [`Activity::Unknown`].
    ///
    /// # Examples
    ///
    /// ```
    /// use provac_lib::types::{Activity, Fault};
    ///
    /// assert_eq!(Activity::derive(Some(5), None), Activity::Docked);
    /// assert_eq!(
    ///     Activity::derive(Some(5), Some(Fault::new(1))),
    ///     Activity::Error,
    /// );
    /// ```
    #[must_use]
    pub fn derive(current_state: Option<i64>, fault: Option<Fault>) -> Self {
        if fault.is_some_and(Fault::is_fault) {
            return Self::Error;
        }
        current_state
            .and_then(CurrentState::from_code)
            .map_or(Self::Unknown, |state| state.activity())
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cleaning => "cleaning",
            Self::Returning => "returning",
            Self::Docked => "docked",
            Self::Paused => "paused",
            Self::Idle => "idle",
            Self::Error => "error",
            Self::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_fault() -> Option<Fault> {
        Some(Fault::new(0))
    }

    #[test]
    fn fault_wins_over_state() {
        let charging = CurrentState::Charging.code();
        assert_eq!(
            Activity::derive(Some(charging), Some(Fault::new(1))),
            Activity::Error,
        );
    }

    #[test]
    fn mapping_table() {
        assert_eq!(Activity::derive(Some(0), no_fault()), Activity::Idle);
        assert_eq!(Activity::derive(Some(1), no_fault()), Activity::Cleaning);
        assert_eq!(Activity::derive(Some(2), no_fault()), Activity::Cleaning);
        assert_eq!(Activity::derive(Some(3), no_fault()), Activity::Cleaning);
        assert_eq!(Activity::derive(Some(4), no_fault()), Activity::Returning);
        assert_eq!(Activity::derive(Some(5), no_fault()), Activity::Docked);
        assert_eq!(Activity::derive(Some(7), no_fault()), Activity::Paused);
        assert_eq!(Activity::derive(Some(8), no_fault()), Activity::Cleaning);
    }

    #[test]
    fn unrecognized_code_is_unknown() {
        assert_eq!(Activity::derive(Some(99), no_fault()), Activity::Unknown);
        assert_eq!(Activity::derive(None, no_fault()), Activity::Unknown);
    }

    #[test]
    fn zero_fault_does_not_error() {
        assert_eq!(Activity::derive(Some(0), Some(Fault::NONE)), Activity::Idle);
    }

    #[test]
    fn absent_fault_uses_state() {
        assert_eq!(Activity::derive(Some(4), None), Activity::Returning);
    }
}
