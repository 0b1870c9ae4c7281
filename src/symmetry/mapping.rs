// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Partial color relabelings and their lower bounds.
//!
//! A [`ColorMapping`] assigns canonical ids `1..next_color` to some of the
//! original colors, in the order they were chosen. Its [`LowerBound`] is the
//! position rewritten under the mapping, with every still-unassigned color
//! written as `next_color`, then sorted ascending tube by tube.
//!
//! Unassigned colors can only ever receive ids `>= next_color`, so every
//! completion of the mapping rewrites each slot to a value at least as large
//! as the bound's. Sorting preserves that pointwise domination, hence the
//! bound never exceeds the canonical form of any completion.

use rustc_hash::FxHashMap;

use crate::position::{Position, Tube, EMPTY};

/// Marker for an original color that has no canonical id yet.
pub const UNASSIGNED: u8 = 0;

/// Sorted rewritten tubes of a (possibly partial) mapping.
///
/// Ordered lexicographically tube by tube; a shorter sequence that is a
/// prefix of a longer one sorts first.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct LowerBound(Vec<Tube>);

impl LowerBound {
    pub fn tubes(&self) -> &[Tube] {
        &self.0
    }
}

/// Search state of the canonicalizer: a partial injective color map.
#[derive(Debug, Clone)]
pub struct ColorMapping {
    /// Canonical id per original color (index `color - 1`), or [`UNASSIGNED`].
    colors: Vec<u8>,
    next_color: usize,
    bound: LowerBound,
}

impl ColorMapping {
    /// An empty mapping for `num_colors` colors spread over `num_tubes` tubes.
    pub fn new(num_colors: usize, num_tubes: usize) -> Self {
        Self {
            colors: vec![UNASSIGNED; num_colors],
            next_color: 1,
            bound: LowerBound(vec![Tube::empty(); num_tubes]),
        }
    }

    /// Forget every assignment, keeping the buffers.
    pub fn reset(&mut self) {
        self.colors.fill(UNASSIGNED);
        self.next_color = 1;
        self.bound.0.fill(Tube::empty());
    }

    pub fn num_colors(&self) -> usize {
        self.colors.len()
    }

    pub fn num_tubes(&self) -> usize {
        self.bound.0.len()
    }

    /// The canonical id the next assignment will receive.
    pub fn next_color(&self) -> usize {
        self.next_color
    }

    /// Canonical id of an original color, if assigned.
    pub fn canonical_id(&self, color: u8) -> Option<u8> {
        match color.checked_sub(1).and_then(|index| self.colors.get(index as usize)) {
            Some(&UNASSIGNED) | None => None,
            Some(&id) => Some(id),
        }
    }

    pub fn is_assigned(&self, color: u8) -> bool {
        self.canonical_id(color).is_some()
    }

    /// Every color has a canonical id.
    pub fn is_complete(&self) -> bool {
        self.next_color > self.colors.len()
    }

    pub fn bound(&self) -> &LowerBound {
        &self.bound
    }

    /// Overwrite `self` with `parent` extended by `color -> parent.next_color()`,
    /// and recompute the bound against `position`.
    ///
    /// # Panics
    ///
    /// Panics if the buffers of `self` and `parent` have different sizes.
    pub fn extend_from(&mut self, parent: &ColorMapping, color: u8, position: &Position) {
        self.colors.copy_from_slice(&parent.colors);
        self.colors[color as usize - 1] = parent.next_color as u8;
        self.next_color = parent.next_color + 1;
        self.compute_bound(position);
    }

    /// Rewrite every tube of `position` under the mapping and sort.
    pub fn compute_bound(&mut self, position: &Position) {
        let pending = u8::try_from(self.next_color).unwrap_or(u8::MAX);
        for (bound_tube, tube) in self.bound.0.iter_mut().zip(position.tubes()) {
            for (slot, &color) in bound_tube.0.iter_mut().zip(tube.slots()) {
                *slot = if color == EMPTY {
                    EMPTY
                } else {
                    match self.colors.get(color as usize - 1) {
                        Some(&id) if id != UNASSIGNED => id,
                        _ => pending,
                    }
                };
            }
        }
        self.bound.0.sort_unstable();
    }
}

/// Free list of mappings, keyed by `(num_colors, num_tubes)`.
///
/// Canonicalization pushes and pops many short-lived mappings; recycling
/// them keeps allocation out of the inner loop.
#[derive(Debug, Default)]
pub struct MappingPool {
    free: FxHashMap<(usize, usize), Vec<ColorMapping>>,
    allocated: usize,
}

impl MappingPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// A reset mapping of the requested size, recycled when possible.
    pub fn acquire(&mut self, num_colors: usize, num_tubes: usize) -> ColorMapping {
        match self
            .free
            .get_mut(&(num_colors, num_tubes))
            .and_then(Vec::pop)
        {
            Some(mut mapping) => {
                mapping.reset();
                mapping
            }
            None => {
                self.allocated += 1;
                ColorMapping::new(num_colors, num_tubes)
            }
        }
    }

    /// Return a mapping for later reuse.
    pub fn release(&mut self, mapping: ColorMapping) {
        self.free
            .entry((mapping.num_colors(), mapping.num_tubes()))
            .or_default()
            .push(mapping);
    }

    /// Mappings ever allocated by this pool.
    pub fn allocated(&self) -> usize {
        self.allocated
    }

    /// Mappings currently waiting in the free lists.
    pub fn available(&self) -> usize {
        self.free.values().map(Vec::len).sum()
    }
}
