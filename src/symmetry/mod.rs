// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reduction of positions to a canonical representative.
//!
//! Two positions are equivalent if one becomes the other by reordering the
//! tubes and renaming the colors (empty stays empty). Counting distinct
//! positions therefore means counting canonical forms.
//!
//! ## Module Structure
//!
//! - `canonical`: the branch-and-bound [`Canonicalizer`]
//! - `mapping`: partial color mappings, their lower bounds, and the free list
//! - `heap`: comparator-driven binary min-heap used as the search queue

pub mod canonical;
pub mod heap;
pub mod mapping;

pub use canonical::Canonicalizer;
pub use heap::MinHeap;
pub use mapping::{ColorMapping, LowerBound, MappingPool, UNASSIGNED};
