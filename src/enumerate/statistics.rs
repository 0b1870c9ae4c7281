// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters gathered over a run. Each worker fills its own [`Statistics`]
//! during fan-out; the driver merges them during the join.

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

#[derive(EnumCountMacro, EnumIter, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Frontier positions whose predecessors were generated.
    PositionsExpanded,
    /// Predecessors produced, before deduplication.
    PredecessorsGenerated,
    /// Partial color mappings expanded by the canonicalizer.
    MappingsExpanded,
    /// Predecessors already in the visited set when the depth started.
    KnownDuplicates,
    /// Predecessors a worker had already found earlier in the same depth.
    LocalDuplicates,
    /// Predecessors another worker found first in the same depth.
    MergeDuplicates,
    /// Positions added to the visited set.
    NewPositions,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    pub fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Fold another set of counters into this one.
    pub fn merge(&mut self, other: &Statistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Counters, u64)> + '_ {
        Counters::iter().map(move |counter| (counter, self.get(counter)))
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (counter, value) in self.iter() {
            writeln!(f, "{:?}: {}", counter, value)?;
        }
        Ok(())
    }
}
