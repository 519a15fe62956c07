// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fault bitmask reported by the device.

use std::fmt;

/// Fault bitmask from the fault data point.
///
/// Zero means no fault. Several bits can be set at once, e.g. a vacuum
/// lifted off the ground mid-run typically raises `OFF_GROUND` together
/// with a wheel bit.
///
/// # Examples
///
/// ```
/// use provac_lib::types::Fault;
///
/// let fault = Fault::new(Fault::DUST_BIN.bits() | Fault::TRAPPED.bits());
/// assert!(fault.is_fault());
/// assert!(fault.contains(Fault::DUST_BIN));
/// assert_eq!(fault.to_string(), "dust_bin+trapped");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Fault(u32);

impl Fault {
    /// No fault reported.
    pub const NONE: Self = Self(0);
    /// Side brush jammed or missing.
    pub const SIDE_BRUSH: Self = Self(1);
    /// Roller brush jammed.
    pub const ROLLER_BRUSH: Self = Self(1 << 1);
    /// Left wheel blocked.
    pub const LEFT_WHEEL: Self = Self(1 << 2);
    /// Right wheel blocked.
    pub const RIGHT_WHEEL: Self = Self(1 << 3);
    /// Dust bin missing or full.
    pub const DUST_BIN: Self = Self(1 << 4);
    /// Device lifted off the ground.
    pub const OFF_GROUND: Self = Self(1 << 5);
    /// Collision sensor stuck.
    pub const COLLISION_SENSOR: Self = Self(1 << 6);
    /// Water tank missing or empty.
    pub const WATER_TANK: Self = Self(1 << 7);
    /// Virtual wall detection error.
    pub const VIRTUAL_WALL: Self = Self(1 << 8);
    /// Device trapped, cannot move.
    pub const TRAPPED: Self = Self(1 << 9);
    /// Unspecified firmware fault.
    pub const UNKNOWN: Self = Self(1 << 10);

    const NAMED: [(Self, &'static str); 11] = [
        (Self::SIDE_BRUSH, "side_brush"),
        (Self::ROLLER_BRUSH, "roller_brush"),
        (Self::LEFT_WHEEL, "left_wheel"),
        (Self::RIGHT_WHEEL, "right_wheel"),
        (Self::DUST_BIN, "dust_bin"),
        (Self::OFF_GROUND, "off_ground"),
        (Self::COLLISION_SENSOR, "collision_sensor"),
        (Self::WATER_TANK, "water_tank"),
        (Self::VIRTUAL_WALL, "virtual_wall"),
        (Self::TRAPPED, "trapped"),
        (Self::UNKNOWN, "unknown"),
    ];

    /// Creates a fault value from the raw bitmask.
    #[must_use]
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bitmask.
    #[must_use]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Returns `true` if any fault bit is set.
    #[must_use]
    pub const fn is_fault(self) -> bool {
        self.0 != 0
    }

    /// Returns `true` if all bits of `other` are set in `self`.
    #[must_use]
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the names of all set fault bits, in bit order.
    ///
    /// Bits beyond the known set are reported as nothing; the raw value is
    /// still available through [`Fault::bits`].
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(bit, _)| self.contains(*bit))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_fault() {
            return write!(f, "no_error");
        }
        let names = self.names();
        if names.is_empty() {
            // Only unnamed high bits are set.
            return write!(f, "fault({:#x})", self.0);
        }
        write!(f, "{}", names.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_no_fault() {
        assert!(!Fault::NONE.is_fault());
        assert_eq!(Fault::NONE.to_string(), "no_error");
    }

    #[test]
    fn single_bit() {
        let fault = Fault::WATER_TANK;
        assert!(fault.is_fault());
        assert_eq!(fault.names(), vec!["water_tank"]);
    }

    #[test]
    fn combined_bits() {
        let fault = Fault::new(Fault::LEFT_WHEEL.bits() | Fault::RIGHT_WHEEL.bits());
        assert!(fault.contains(Fault::LEFT_WHEEL));
        assert!(fault.contains(Fault::RIGHT_WHEEL));
        assert!(!fault.contains(Fault::DUST_BIN));
        assert_eq!(fault.to_string(), "left_wheel+right_wheel");
    }

    #[test]
    fn unnamed_bits_display_raw() {
        let fault = Fault::new(1 << 20);
        assert!(fault.is_fault());
        assert_eq!(fault.to_string(), "fault(0x100000)");
    }
}
