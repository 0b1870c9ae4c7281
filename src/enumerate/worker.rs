// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fan-out phase of one depth.
//!
//! A worker expands a contiguous batch of the frontier against a read-only
//! view of the visited set. It never writes shared state: anything it
//! considers new goes into its own output, and the driver decides during the
//! join which discoveries really are new.

use rustc_hash::FxHashSet;

use super::statistics::{Counters, Statistics};
use crate::key::CanonicalKey;
use crate::position::Position;
use crate::symmetry::Canonicalizer;

/// Discoveries and counters of one worker.
#[derive(Debug, Default)]
pub struct WorkerOutput {
    /// Canonical predecessors not in the visited snapshot, first occurrence
    /// only, in the order they were found.
    pub discoveries: Vec<(CanonicalKey, Position)>,
    pub statistics: Statistics,
}

/// Expand every position of `batch` into its canonical predecessors and
/// keep the ones that are locally novel.
pub fn expand_batch(
    batch: &[Position],
    visited: &FxHashSet<CanonicalKey>,
    num_colors: usize,
) -> WorkerOutput {
    let mut canonicalizer = Canonicalizer::new();
    let mut seen_here = FxHashSet::default();
    let mut output = WorkerOutput {
        discoveries: Vec::with_capacity(batch.len()),
        statistics: Statistics::new(),
    };

    for position in batch {
        output.statistics.increment(Counters::PositionsExpanded);
        for predecessor in canonicalizer.canonical_predecessors(position, num_colors) {
            output.statistics.increment(Counters::PredecessorsGenerated);
            let key = CanonicalKey::new(&predecessor, num_colors);
            if visited.contains(&key) {
                output.statistics.increment(Counters::KnownDuplicates);
                continue;
            }
            if !seen_here.insert(key.clone()) {
                output.statistics.increment(Counters::LocalDuplicates);
                continue;
            }
            output.discoveries.push((key, predecessor));
        }
    }

    output
        .statistics
        .add(Counters::MappingsExpanded, canonicalizer.expansions());
    output
}

/// Split `frontier` into `workers` contiguous batches of `len / workers`
/// positions; the last batch also takes the remainder.
///
/// # Panics
///
/// Panics if `workers` is zero.
pub fn partition(frontier: &[Position], workers: usize) -> Vec<&[Position]> {
    assert!(workers > 0, "partition needs at least one worker");
    let batch_size = frontier.len() / workers;
    (0..workers)
        .map(|i| {
            let start = i * batch_size;
            let end = if i == workers - 1 {
                frontier.len()
            } else {
                start + batch_size
            };
            &frontier[start..end]
        })
        .collect()
}
