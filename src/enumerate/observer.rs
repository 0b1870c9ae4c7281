// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hooks run once per completed depth.
//!
//! The driver calls every registered [`DepthObserver`] after a depth has been
//! merged and the next frontier installed, which is when memory use peaks.

use std::io::Write;
use std::path::PathBuf;

use super::report::DepthReport;
use super::LevelEnumerator;
use crate::error::SnapshotError;

/// Receives the "depth completed" event.
pub trait DepthObserver {
    fn on_depth_completed(&mut self, report: &DepthReport, enumerator: &LevelEnumerator);
}

/// Prints each [`DepthReport`] to a writer, typically standard output.
pub struct ReportPrinter<W: Write> {
    out: W,
}

impl<W: Write> ReportPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DepthObserver for ReportPrinter<W> {
    fn on_depth_completed(&mut self, report: &DepthReport, _enumerator: &LevelEnumerator) {
        if let Err(err) = write!(self.out, "{}", report).and_then(|()| self.out.flush()) {
            tracing::warn!(depth = report.depth, error = %err, "could not write depth report");
        }
    }
}

/// Writes a memory snapshot to `<prefix>.<depth>` after every depth.
///
/// A snapshot records the sizes of the visited set and frontier together
/// with an estimate of the bytes they hold. A failed write is logged and the
/// run carries on.
pub struct MemorySnapshot {
    prefix: PathBuf,
}

impl MemorySnapshot {
    pub fn new(prefix: impl Into<PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// File written for `depth`.
    pub fn path_for(&self, depth: usize) -> PathBuf {
        let mut name = self.prefix.clone().into_os_string();
        name.push(format!(".{}", depth));
        PathBuf::from(name)
    }

    /// Write the snapshot for the enumerator's current depth.
    pub fn write(&self, enumerator: &LevelEnumerator) -> Result<PathBuf, SnapshotError> {
        let path = self.path_for(enumerator.depth());
        let memory = enumerator.estimated_memory();
        let contents = format!(
            "depth: {}\nvisited_keys: {}\nfrontier_positions: {}\nvisited_bytes: {}\nfrontier_bytes: {}\n",
            enumerator.depth(),
            enumerator.visited_len(),
            enumerator.frontier().len(),
            memory.visited_bytes,
            memory.frontier_bytes,
        );
        std::fs::write(&path, contents).map_err(|source| SnapshotError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

impl DepthObserver for MemorySnapshot {
    fn on_depth_completed(&mut self, _report: &DepthReport, enumerator: &LevelEnumerator) {
        match self.write(enumerator) {
            Ok(path) => tracing::debug!(path = %path.display(), "wrote memory snapshot"),
            Err(err) => tracing::warn!(error = %err, "could not write memory snapshot"),
        }
    }
}
