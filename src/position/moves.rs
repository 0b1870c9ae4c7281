// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Forward pours and their reverses.
//!
//! The enumeration walks the move graph backwards from the solved state, so
//! the interesting operation is [`Position::predecessors`]: every position
//! from which a single legal pour leads to `self`.

use super::{Position, EMPTY, TUBE_CAPACITY};

impl Position {
    /// Undo a pour from `from` into `to`: the top unit of `to` goes back to
    /// the next open slot of `from`.
    ///
    /// Returns a new position; `self` is not modified.
    ///
    /// # Panics
    ///
    /// Panics if `to` is empty or `from` is full.
    pub fn reverse_move(&self, from: usize, to: usize) -> Position {
        let mut tubes = self.tubes().to_vec();
        let top = tubes[to]
            .top_index()
            .expect("reverse_move: destination tube is empty");
        let color = tubes[to].0[top];
        tubes[to].0[top] = EMPTY;
        let slot = tubes[from].top_index().map_or(0, |index| index + 1);
        assert!(slot < TUBE_CAPACITY, "reverse_move: source tube is full");
        tubes[from].0[slot] = color;
        Position::from_tubes(tubes)
    }

    /// All `(from, to)` pairs for which [`Position::reverse_move`] yields a
    /// legal predecessor.
    ///
    /// The top unit of `to` can only have been poured there if it sits at
    /// slot 0 or on a unit of the same color. It can have come from any other
    /// tube that is not full.
    pub fn reverse_moves(&self) -> Vec<(usize, usize)> {
        let tubes = self.tubes();
        let mut moves = Vec::with_capacity(2 * tubes.len());
        for (to, to_tube) in tubes.iter().enumerate() {
            let Some(top) = to_tube.top_index() else {
                continue;
            };
            if top > 0 && to_tube.0[top - 1] != to_tube.0[top] {
                continue;
            }
            for (from, from_tube) in tubes.iter().enumerate() {
                if from != to && !from_tube.is_full() {
                    moves.push((from, to));
                }
            }
        }
        moves
    }

    /// Every position that reaches `self` by one forward pour.
    pub fn predecessors(&self) -> Vec<Position> {
        self.reverse_moves()
            .into_iter()
            .map(|(from, to)| self.reverse_move(from, to))
            .collect()
    }

    /// Whether the top unit of `from` may be poured onto `to`.
    pub fn can_pour(&self, from: usize, to: usize) -> bool {
        if from == to {
            return false;
        }
        let tubes = self.tubes();
        match (tubes[from].top_color(), tubes[to].top_color()) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(moving), Some(resting)) => moving == resting && !tubes[to].is_full(),
        }
    }

    /// Pour one unit from `from` onto `to`, or `None` if the pour is illegal.
    pub fn pour(&self, from: usize, to: usize) -> Option<Position> {
        if !self.can_pour(from, to) {
            return None;
        }
        let mut tubes = self.tubes().to_vec();
        let top = tubes[from].top_index()?;
        let color = tubes[from].0[top];
        tubes[from].0[top] = EMPTY;
        let slot = tubes[to].top_index().map_or(0, |index| index + 1);
        tubes[to].0[slot] = color;
        Some(Position::from_tubes(tubes))
    }
}
