// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types.

use std::path::PathBuf;

/// Errors raised while validating an [`EnumerationConfig`](crate::config::EnumerationConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors raised while writing a per-depth memory snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to write snapshot {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
