// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Working-state codes reported by the device.

use super::Activity;

/// Numeric working state reported on the current-state data point.
///
/// Codes 6 and anything above 8 are not produced by known firmware
/// revisions; unknown codes are deliberately not representable so that
/// consumers fall back to [`Activity::Unknown`] instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrentState {
    /// Idle, awaiting a command.
    StandBy,
    /// Whole-house cleaning in progress.
    CleanSmart,
    /// Mopping program in progress.
    Mopping,
    /// Wall-follow cleaning in progress.
    CleanWallFollow,
    /// Driving back to the dock.
    GoingCharging,
    /// Sitting on the dock, charging.
    Charging,
    /// Program suspended mid-run.
    Pause,
    /// Single-room cleaning in progress.
    CleanSingle,
}

impl CurrentState {
    /// Maps a raw state code to a known state, if recognized.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::StandBy),
            1 => Some(Self::CleanSmart),
            2 => Some(Self::Mopping),
            3 => Some(Self::CleanWallFollow),
            4 => Some(Self::GoingCharging),
            5 => Some(Self::Charging),
            7 => Some(Self::Pause),
            8 => Some(Self::CleanSingle),
            _ => None,
        }
    }

    /// Returns the raw code for this state.
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::StandBy => 0,
            Self::CleanSmart => 1,
            Self::Mopping => 2,
            Self::CleanWallFollow => 3,
            Self::GoingCharging => 4,
            Self::Charging => 5,
            Self::Pause => 7,
            Self::CleanSingle => 8,
        }
    }

    /// Returns the activity this state maps to, ignoring faults.
    ///
    /// Fault precedence is handled by [`Activity::derive`].
    #[must_use]
    pub const fn activity(&self) -> Activity {
        match self {
            Self::CleanSmart | Self::Mopping | Self::CleanWallFollow | Self::CleanSingle => {
                Activity::Cleaning
            }
            Self::GoingCharging => Activity::Returning,
            Self::Charging => Activity::Docked,
            Self::Pause => Activity::Paused,
            Self::StandBy => Activity::Idle,
        }
    }

    /// Returns whether a raw state code is the mopping state, exactly.
    ///
    /// Independent of any fault: a mopping device with a fault is still
    /// mopping as far as the mode attribute is concerned.
    #[must_use]
    pub fn is_mopping(code: Option<i64>) -> bool {
        code == Some(Self::Mopping.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_known_values() {
        assert_eq!(CurrentState::from_code(0), Some(CurrentState::StandBy));
        assert_eq!(CurrentState::from_code(5), Some(CurrentState::Charging));
        assert_eq!(CurrentState::from_code(7), Some(CurrentState::Pause));
        assert_eq!(CurrentState::from_code(8), Some(CurrentState::CleanSingle));
    }

    #[test]
    fn from_code_unknown_values() {
        assert_eq!(CurrentState::from_code(6), None);
        assert_eq!(CurrentState::from_code(99), None);
        assert_eq!(CurrentState::from_code(-1), None);
    }

    #[test]
    fn code_round_trips() {
        for code in [0, 1, 2, 3, 4, 5, 7, 8] {
            let state = CurrentState::from_code(code).unwrap();
            assert_eq!(state.code(), code);
        }
    }

    #[test]
    fn is_mopping_exact_match() {
        assert!(CurrentState::is_mopping(Some(2)));
        assert!(!CurrentState::is_mopping(Some(1)));
        assert!(!CurrentState::is_mopping(None));
    }
}
