// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ball sort puzzle positions.
//!
//! A [`Position`] is an ordered sequence of [`Tube`]s, `num_colors + num_spares`
//! long, in which every nonzero color appears exactly [`TUBE_CAPACITY`] times.
//! Positions are value-like: moves return new positions and leave their
//! input untouched. The only in-place operation is canonicalization
//! (see [`crate::symmetry`]), which normalizes a freshly generated position
//! before it is keyed.
//!
//! # Example
//!
//! ```
//! use ballsort_census::position::Position;
//!
//! let solved = Position::end_state(2, 1);
//! assert!(solved.is_start_position(1));
//! assert_eq!(solved.to_string(), "|    |\n|AAAA|\n|BBBB|\n");
//! ```

pub mod moves;
pub mod tube;

pub use tube::{Tube, EMPTY, TUBE_CAPACITY};

use std::fmt;

/// A full snapshot of every tube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    tubes: Vec<Tube>,
}

impl Position {
    /// Build a position from explicit tubes.
    pub fn from_tubes(tubes: Vec<Tube>) -> Self {
        Self { tubes }
    }

    /// The unique solved position: `num_spares` empty tubes followed by one
    /// full tube per color, in increasing color order.
    ///
    /// This is the root of the breadth-first enumeration.
    pub fn end_state(num_colors: usize, num_spares: usize) -> Self {
        let mut tubes = Vec::with_capacity(num_colors + num_spares);
        tubes.extend(std::iter::repeat(Tube::empty()).take(num_spares));
        tubes.extend((1..=num_colors).map(|color| Tube::filled(color as u8)));
        Self { tubes }
    }

    /// True iff the first `num_empty` tubes, in current order, are empty.
    ///
    /// Canonical order puts empty tubes first, whereas the game usually
    /// shows the spares last.
    pub fn is_start_position(&self, num_empty: usize) -> bool {
        self.tubes.len() >= num_empty
            && self.tubes[..num_empty]
                .iter()
                .all(|tube| *tube == Tube::empty())
    }

    pub fn tubes(&self) -> &[Tube] {
        &self.tubes
    }

    pub(crate) fn tubes_mut(&mut self) -> &mut [Tube] {
        &mut self.tubes
    }

    pub fn num_tubes(&self) -> usize {
        self.tubes.len()
    }

    /// Number of units of each color, indexed by color (index 0 counts empty slots).
    pub fn color_counts(&self) -> Vec<usize> {
        let max_color = self
            .tubes
            .iter()
            .flat_map(|tube| tube.slots().iter().copied())
            .max()
            .unwrap_or(EMPTY);
        let mut counts = vec![0; max_color as usize + 1];
        for tube in &self.tubes {
            for &color in tube.slots() {
                counts[color as usize] += 1;
            }
        }
        counts
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tube in &self.tubes {
            writeln!(f, "{}", tube)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_state_layout() {
        let p = Position::end_state(3, 2);
        assert_eq!(
            p.tubes(),
            &[
                Tube::empty(),
                Tube::empty(),
                Tube::filled(1),
                Tube::filled(2),
                Tube::filled(3),
            ]
        );
    }

    #[test]
    fn test_end_state_is_start_position() {
        let p = Position::end_state(4, 2);
        assert!(p.is_start_position(2));
        assert!(p.is_start_position(0));
        assert!(!p.is_start_position(3));
    }

    #[test]
    fn test_partially_filled_spare_is_not_start() {
        let p = Position::from_tubes(vec![
            Tube::empty(),
            Tube([1, 0, 0, 0]),
            Tube([1, 1, 1, 0]),
        ]);
        assert!(p.is_start_position(1));
        assert!(!p.is_start_position(2));
    }

    #[test]
    fn test_color_counts() {
        let p = Position::end_state(2, 1);
        assert_eq!(p.color_counts(), vec![4, 4, 4]);
    }

    #[test]
    fn test_display_one_line_per_tube() {
        let p = Position::from_tubes(vec![Tube([1, 2, 0, 0]), Tube([2, 2, 2, 1])]);
        assert_eq!(p.to_string(), "|AB  |\n|BBBA|\n");
    }
}
