// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical form of a position under tube permutation and color relabeling.
//!
//! The canonical form sorts tubes ascending and relabels colors so that the
//! whole position, read tube by tube from the bottom slot up, is
//! lexicographically smallest. Empty tubes come first, then `A___`, `AA__`,
//! `AAA_`, `AAAA`, then tubes that need a second letter, and so on.
//!
//! Tube order and relabeling interact: picking which color becomes `A`
//! changes which tubes sort first, which in turn decides which color should
//! be `B`. For example, with
//!
//! ```text
//! A___
//! B___
//! Bxxx
//! Bxxx
//! Bxxx
//! ```
//!
//! `B` should become `A` to pull the three `Bxxx` tubes forward. Rather
//! than trust a heuristic, the relabeling is found by best-first
//! branch-and-bound over partial [`ColorMapping`]s:
//!
//! 1. Start from the empty mapping.
//! 2. Pop the mapping with the least [`LowerBound`](super::LowerBound).
//! 3. If it assigns every color it is optimal, because no queued bound is
//!    smaller and bounds never overstate a completion.
//! 4. Otherwise push one child per unassigned color, giving that color the
//!    next canonical id.

use std::cmp::Ordering;

use super::heap::MinHeap;
use super::mapping::{ColorMapping, MappingPool};
use crate::position::Position;

type MappingQueue = MinHeap<ColorMapping, fn(&ColorMapping, &ColorMapping) -> Ordering>;

fn by_bound(a: &ColorMapping, b: &ColorMapping) -> Ordering {
    a.bound().cmp(b.bound())
}

/// Reusable canonicalization workspace.
///
/// Holds the priority queue and a [`MappingPool`], so repeated calls do not
/// allocate once the pool has warmed up. Not shared between threads: each
/// enumeration worker owns one.
pub struct Canonicalizer {
    pool: MappingPool,
    queue: MappingQueue,
    expansions: u64,
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Canonicalizer {
    pub fn new() -> Self {
        Self {
            pool: MappingPool::new(),
            queue: MinHeap::with_capacity(16, by_bound as fn(&ColorMapping, &ColorMapping) -> Ordering),
            expansions: 0,
        }
    }

    /// Rewrite `position` in place into its canonical form.
    ///
    /// `num_colors` is the number of distinct nonzero colors; every color in
    /// the position must lie in `1..=num_colors`.
    ///
    /// # Panics
    ///
    /// Panics if the search queue runs dry before a complete mapping is
    /// found. That cannot happen for a well-formed position and signals a
    /// logic error; continuing would corrupt the counts.
    pub fn canonicalize(&mut self, position: &mut Position, num_colors: usize) {
        let num_tubes = position.num_tubes();

        let mut root = self.pool.acquire(num_colors, num_tubes);
        root.compute_bound(position);
        self.queue.push(root);

        let best = loop {
            let Some(best) = self.queue.pop() else {
                panic!(
                    "canonicalization queue exhausted without a complete mapping \
                     ({} colors) for position:\n{}",
                    num_colors, position
                );
            };
            if best.is_complete() {
                break best;
            }
            self.expansions += 1;
            for color in 1..=num_colors {
                let color = color as u8;
                if best.is_assigned(color) {
                    continue;
                }
                let mut child = self.pool.acquire(num_colors, num_tubes);
                child.extend_from(&best, color, position);
                self.queue.push(child);
            }
            self.pool.release(best);
        };

        // The winning bound is already the rewritten, sorted position.
        position.tubes_mut().copy_from_slice(best.bound().tubes());

        self.pool.release(best);
        for mapping in self.queue.drain() {
            self.pool.release(mapping);
        }
    }

    /// Canonical form of `position`, leaving the original untouched.
    pub fn canonical_form(&mut self, position: &Position, num_colors: usize) -> Position {
        let mut canonical = position.clone();
        self.canonicalize(&mut canonical, num_colors);
        canonical
    }

    /// Canonical forms of every predecessor of `position`.
    pub fn canonical_predecessors(&mut self, position: &Position, num_colors: usize) -> Vec<Position> {
        let mut predecessors = position.predecessors();
        for predecessor in &mut predecessors {
            self.canonicalize(predecessor, num_colors);
        }
        predecessors
    }

    /// Partial mappings expanded since this canonicalizer was created.
    pub fn expansions(&self) -> u64 {
        self.expansions
    }

    /// Mappings allocated by the internal pool so far.
    pub fn mappings_allocated(&self) -> usize {
        self.pool.allocated()
    }
}
