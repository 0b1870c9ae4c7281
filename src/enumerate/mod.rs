// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Breadth-first enumeration of the reachable state space.
//!
//! The search starts at the solved position and walks reverse moves, so depth
//! `d` holds every position whose shortest solution is `d` pours long.
//!
//! # Protocol per depth
//!
//! 1. **Fan-out**: the frontier is cut into contiguous batches, one per
//!    worker. Workers canonicalize predecessors and check them against a
//!    shared, read-only borrow of the visited set. Nothing shared is written.
//! 2. **Join**: once every worker has returned, the driver merges their
//!    outputs into the visited set in worker order, single-threaded, and
//!    builds the next frontier.
//!
//! Workers are scoped threads spawned afresh for every depth. Small frontiers
//! (below [`EnumerationConfig::parallel_threshold`]) are expanded on the
//! calling thread. Merging in worker order makes the frontier order, and so
//! every report, independent of the worker count.
//!
//! # Example
//!
//! ```
//! use ballsort_census::config::EnumerationConfig;
//! use ballsort_census::enumerate::LevelEnumerator;
//!
//! let mut enumerator = LevelEnumerator::new(EnumerationConfig::new(1, 1, 1)).unwrap();
//! let reports = enumerator.run(&mut []);
//! let totals: Vec<usize> = reports.iter().map(|r| r.total).collect();
//! assert_eq!(totals, vec![1, 1, 1, 0]);
//! ```

pub mod observer;
pub mod report;
pub mod statistics;
pub mod worker;

pub use observer::{DepthObserver, MemorySnapshot, ReportPrinter};
pub use report::DepthReport;
pub use statistics::{Counters, Statistics};

use std::time::Instant;

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::config::EnumerationConfig;
use crate::error::ConfigError;
use crate::key::CanonicalKey;
use crate::position::Position;
use worker::WorkerOutput;

/// Rough byte counts held by the enumerator's two big collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryEstimate {
    pub visited_bytes: usize,
    pub frontier_bytes: usize,
}

/// Level-by-level driver of the enumeration.
pub struct LevelEnumerator {
    config: EnumerationConfig,
    depth: usize,
    visited: FxHashSet<CanonicalKey>,
    frontier: Vec<Position>,
    statistics: Statistics,
    key_len: usize,
}

impl LevelEnumerator {
    /// Validate `config` and seed depth 0 with the solved position.
    pub fn new(config: EnumerationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let end = Position::end_state(config.num_colors, config.num_spares);
        let key = CanonicalKey::new(&end, config.num_colors);
        let key_len = key.len();
        let mut visited = FxHashSet::default();
        visited.insert(key);

        info!(
            num_colors = config.num_colors,
            num_spares = config.num_spares,
            num_workers = config.num_workers,
            parallel_threshold = config.parallel_threshold,
            "starting enumeration"
        );

        Ok(Self {
            config,
            depth: 0,
            visited,
            frontier: vec![end],
            statistics: Statistics::new(),
            key_len,
        })
    }

    pub fn config(&self) -> &EnumerationConfig {
        &self.config
    }

    /// Depth of the current frontier.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Positions at the current depth.
    pub fn frontier(&self) -> &[Position] {
        &self.frontier
    }

    /// Distinct positions discovered so far, all depths included.
    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    /// Whether the canonical form with this key has been reached.
    pub fn is_visited(&self, key: &CanonicalKey) -> bool {
        self.visited.contains(key)
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// True once a depth produced no new positions.
    pub fn is_finished(&self) -> bool {
        self.frontier.is_empty()
    }

    pub fn estimated_memory(&self) -> MemoryEstimate {
        let per_key = std::mem::size_of::<CanonicalKey>() + self.key_len;
        let per_position = std::mem::size_of::<Position>()
            + self.config.num_tubes() * std::mem::size_of::<crate::position::Tube>();
        MemoryEstimate {
            visited_bytes: self.visited.capacity() * per_key,
            frontier_bytes: self.frontier.capacity() * per_position,
        }
    }

    /// Report for depth 0: the solved position alone.
    pub fn initial_report(&self) -> DepthReport {
        let end = Position::end_state(self.config.num_colors, self.config.num_spares);
        let is_start = end.is_start_position(self.config.num_spares);
        DepthReport {
            depth: 0,
            total: 1,
            starts: usize::from(is_start),
            example: is_start.then_some(end),
            visited: 1,
        }
    }

    /// Expand the current frontier by one depth.
    ///
    /// Returns `None` once the frontier is empty. The depth whose expansion
    /// first comes up empty still yields a report, with `total == 0`.
    pub fn step(&mut self) -> Option<DepthReport> {
        if self.frontier.is_empty() {
            return None;
        }
        let started = Instant::now();
        self.depth += 1;

        let outputs = self.fan_out();
        let report = self.join(outputs);

        info!(
            depth = report.depth,
            total = report.total,
            starts = report.starts,
            visited = report.visited,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "depth completed"
        );
        Some(report)
    }

    /// Run to exhaustion, notifying `observers` after every depth, depth 0
    /// included. Returns every report in depth order.
    pub fn run(&mut self, observers: &mut [&mut dyn DepthObserver]) -> Vec<DepthReport> {
        let mut reports = Vec::new();
        if self.depth == 0 {
            let initial = self.initial_report();
            for observer in observers.iter_mut() {
                observer.on_depth_completed(&initial, self);
            }
            reports.push(initial);
        }
        while let Some(report) = self.step() {
            for observer in observers.iter_mut() {
                observer.on_depth_completed(&report, self);
            }
            reports.push(report);
        }
        info!(
            depths = self.depth,
            positions = self.visited.len(),
            "enumeration finished"
        );
        reports
    }

    /// Phase 1: expand the frontier in parallel against the visited set.
    fn fan_out(&self) -> Vec<WorkerOutput> {
        let num_colors = self.config.num_colors;
        let workers = self.config.workers_for(self.frontier.len());
        let batches = worker::partition(&self.frontier, workers);
        let visited = &self.visited;

        debug!(
            depth = self.depth,
            frontier = self.frontier.len(),
            workers,
            batch_size = self.frontier.len() / workers,
            "fan-out"
        );

        if workers == 1 {
            return vec![worker::expand_batch(batches[0], visited, num_colors)];
        }

        std::thread::scope(|scope| {
            let handles: Vec<_> = batches
                .iter()
                .copied()
                .map(|batch| scope.spawn(move || worker::expand_batch(batch, visited, num_colors)))
                .collect();
            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(output) => output,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    }

    /// Phase 2: merge worker discoveries and install the next frontier.
    fn join(&mut self, outputs: Vec<WorkerOutput>) -> DepthReport {
        let num_spares = self.config.num_spares;
        let mut next = Vec::with_capacity(outputs.iter().map(|o| o.discoveries.len()).sum());
        let mut starts = 0;
        let mut example = None;

        for output in outputs {
            self.statistics.merge(&output.statistics);
            for (key, position) in output.discoveries {
                if !self.visited.insert(key) {
                    self.statistics.increment(Counters::MergeDuplicates);
                    continue;
                }
                self.statistics.increment(Counters::NewPositions);
                if position.is_start_position(num_spares) {
                    starts += 1;
                    if example.is_none() {
                        example = Some(position.clone());
                    }
                }
                next.push(position);
            }
        }

        self.frontier = next;
        DepthReport {
            depth: self.depth,
            total: self.frontier.len(),
            starts,
            example,
            visited: self.visited.len(),
        }
    }
}
