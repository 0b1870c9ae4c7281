// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run parameters for an enumeration.

use crate::error::ConfigError;

/// Frontier size below which a depth is expanded by a single worker.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// Colors are stored as `u8` ids with 0 reserved for "empty".
pub const MAX_COLORS: usize = u8::MAX as usize;

/// Parameters of one enumeration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationConfig {
    /// Number of distinct colors; each fills exactly one tube when solved.
    pub num_colors: usize,
    /// Number of extra tubes, empty in the solved position.
    pub num_spares: usize,
    /// Worker threads used per depth once the frontier is large enough.
    pub num_workers: usize,
    /// Frontiers smaller than this are expanded single-threaded.
    pub parallel_threshold: usize,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            num_colors: 4,
            num_spares: 2,
            num_workers: 2,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl EnumerationConfig {
    pub fn new(num_colors: usize, num_spares: usize, num_workers: usize) -> Self {
        Self {
            num_colors,
            num_spares,
            num_workers,
            ..Self::default()
        }
    }

    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Total tubes in every position.
    pub fn num_tubes(&self) -> usize {
        self.num_colors + self.num_spares
    }

    /// Workers to use for a frontier of `frontier_len` positions.
    pub fn workers_for(&self, frontier_len: usize) -> usize {
        if frontier_len < self.parallel_threshold {
            1
        } else {
            self.num_workers.min(frontier_len).max(1)
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_colors == 0 {
            return Err(ConfigError::Validation("num_colors must be > 0".into()));
        }
        if self.num_colors > MAX_COLORS {
            return Err(ConfigError::Validation(format!(
                "num_colors must be <= {}",
                MAX_COLORS
            )));
        }
        if self.num_spares == 0 {
            return Err(ConfigError::Validation("num_spares must be > 0".into()));
        }
        if self.num_workers == 0 {
            return Err(ConfigError::Validation("num_workers must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = EnumerationConfig::default();
        assert_eq!(config.num_colors, 4);
        assert_eq!(config.num_spares, 2);
        assert_eq!(config.num_workers, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_values() {
        for config in [
            EnumerationConfig::new(0, 2, 2),
            EnumerationConfig::new(4, 0, 2),
            EnumerationConfig::new(4, 2, 0),
        ] {
            assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
        }
    }

    #[test]
    fn test_rejects_too_many_colors() {
        let err = EnumerationConfig::new(256, 1, 1).validate().unwrap_err();
        assert_eq!(err.to_string(), "config validation error: num_colors must be <= 255");
        assert!(EnumerationConfig::new(255, 1, 1).validate().is_ok());
    }

    #[test]
    fn test_workers_for_small_frontier() {
        let config = EnumerationConfig::new(4, 2, 8);
        assert_eq!(config.workers_for(1), 1);
        assert_eq!(config.workers_for(99), 1);
        assert_eq!(config.workers_for(100), 8);

        let config = config.with_parallel_threshold(0);
        assert_eq!(config.workers_for(3), 3);
    }
}
