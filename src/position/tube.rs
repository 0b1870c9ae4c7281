// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A single tube: a four-slot stack of colored units.
//!
//! Slot 0 is the bottom. Units fill bottom-up, so every occupied slot sits
//! on top of another occupied slot (or on the floor of the tube). Color 0 is
//! reserved for "empty".

use std::fmt;

/// Number of slots in every tube.
pub const TUBE_CAPACITY: usize = 4;

/// Color value of an empty slot.
pub const EMPTY: u8 = 0;

/// Letters used when rendering a tube, indexed by color (0 renders as a space).
const DISPLAY_LETTERS: &[u8] = b" ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A fixed-capacity stack of color values.
///
/// The derived ordering compares slot by slot from the bottom, which is the
/// order used when sorting tubes into canonical form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tube(pub [u8; TUBE_CAPACITY]);

impl Tube {
    /// A tube with no units in it.
    pub const fn empty() -> Self {
        Self([EMPTY; TUBE_CAPACITY])
    }

    /// A tube completely filled with one color.
    pub const fn filled(color: u8) -> Self {
        Self([color; TUBE_CAPACITY])
    }

    /// Index of the highest occupied slot, or `None` for an empty tube.
    pub fn top_index(&self) -> Option<usize> {
        self.0.iter().rposition(|&color| color != EMPTY)
    }

    /// Color of the top unit, if any.
    pub fn top_color(&self) -> Option<u8> {
        self.top_index().map(|index| self.0[index])
    }

    pub fn is_empty(&self) -> bool {
        self.0[0] == EMPTY
    }

    pub fn is_full(&self) -> bool {
        self.0[TUBE_CAPACITY - 1] != EMPTY
    }

    /// The raw slot values, bottom first.
    pub fn slots(&self) -> &[u8; TUBE_CAPACITY] {
        &self.0
    }
}

impl fmt::Display for Tube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for &color in &self.0 {
            let letter = DISPLAY_LETTERS.get(color as usize).copied().unwrap_or(b'?');
            write!(f, "{}", letter as char)?;
        }
        write!(f, "|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_index() {
        assert_eq!(Tube::empty().top_index(), None);
        assert_eq!(Tube([1, 0, 0, 0]).top_index(), Some(0));
        assert_eq!(Tube([1, 2, 2, 0]).top_index(), Some(2));
        assert_eq!(Tube::filled(3).top_index(), Some(3));
    }

    #[test]
    fn test_empty_and_full() {
        assert!(Tube::empty().is_empty());
        assert!(!Tube::empty().is_full());
        assert!(Tube::filled(1).is_full());
        assert!(!Tube([2, 1, 0, 0]).is_empty());
        assert!(!Tube([2, 1, 0, 0]).is_full());
    }

    #[test]
    fn test_ordering_is_bottom_first() {
        assert!(Tube::empty() < Tube([1, 0, 0, 0]));
        assert!(Tube([1, 1, 1, 1]) < Tube([1, 2, 0, 0]));
        assert!(Tube([1, 2, 0, 0]) < Tube([2, 0, 0, 0]));
    }

    #[test]
    fn test_display() {
        assert_eq!(Tube([1, 2, 0, 0]).to_string(), "|AB  |");
        assert_eq!(Tube::empty().to_string(), "|    |");
        assert_eq!(Tube([27, 0, 0, 0]).to_string(), "|?   |");
    }
}
