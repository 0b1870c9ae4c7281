// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Census of the ball sort puzzle state space.
//!
//! Starting from the solved position, the enumeration walks the move graph
//! backwards, one breadth-first depth at a time, and reports for every depth
//! how many distinct positions first appear there and how many of those are
//! legal starting layouts (the spare tubes empty).
//!
//! # Architecture
//!
//! Positions that differ only by the order of the tubes or by a renaming of
//! the colors are the same puzzle, so every position is reduced to a
//! canonical representative before it is counted:
//!
//! - [`position`]: tubes, positions, pours and reverse pours
//! - [`symmetry`]: branch-and-bound search for the canonical form
//! - [`key`]: compact byte keys for canonical positions
//! - [`enumerate`]: the level-by-level driver, its workers and reports
//!
//! # Parallelization
//!
//! Each depth is a fork-join: scoped worker threads expand contiguous slices
//! of the frontier against a read-only view of the visited set, then the
//! driver merges their results single-threaded. See [`enumerate`].

pub mod config;
pub mod enumerate;
pub mod error;
pub mod key;
pub mod position;
pub mod symmetry;

// Re-export commonly used types
pub use config::EnumerationConfig;
pub use enumerate::{DepthObserver, DepthReport, LevelEnumerator};
pub use key::CanonicalKey;
pub use position::{Position, Tube};
pub use symmetry::Canonicalizer;
