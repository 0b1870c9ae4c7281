// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-depth results.

use std::fmt;

use crate::position::Position;

/// What one breadth-first depth discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthReport {
    /// Distance from the solved position.
    pub depth: usize,
    /// Distinct positions first reached at this depth.
    pub total: usize,
    /// How many of those are legal starting layouts.
    pub starts: usize,
    /// The first start position found at this depth, if any.
    pub example: Option<Position>,
    /// Size of the visited set once this depth was merged.
    pub visited: usize,
}

impl fmt::Display for DepthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Depth {:2}: {:8} total {:8} starts ",
            self.depth, self.total, self.starts
        )?;
        if let Some(example) = &self.example {
            writeln!(f, "Example:\n{}", example)?;
        }
        Ok(())
    }
}
