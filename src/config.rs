//! Grid configuration and builder
//!
//! The grid cell size is a configuration value rather than a compiled-in
//! constant, so the containment engine can be reused at other granularities.
//! A world partition index must be rebuilt whenever the cell size changes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{RegionError, Result};

/// Edge length of one exterior grid cell in world units
pub const DEFAULT_CELL_SIZE: f64 = 4096.0;

/// Default upper bound on candidate cells swept for a single polygon area
///
/// Real world regions span at most a few dozen cells per axis, so a million
/// candidates only trips on garbage coordinates.
pub const DEFAULT_MAX_CANDIDATES: usize = 1 << 20;

/// How a candidate cell is tested against a polygon area
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SampleMode {
    /// Sample only the cell's lower-left corner
    ///
    /// A cell is covered when its corner lies inside the polygon (odd probe
    /// crossings) or exactly on one of its edges.
    #[default]
    Corner,
    /// Corner sampling plus cell-side probes
    ///
    /// Additionally covers a cell when any of its four sides touches a polygon
    /// edge, or when the whole polygon sits inside the cell. Polygons smaller
    /// than a cell and thin slivers between corners are then never lost.
    Overlap,
}

impl SampleMode {
    /// Get a human-readable name for this mode
    pub fn name(self) -> &'static str {
        match self {
            SampleMode::Corner => "Corner",
            SampleMode::Overlap => "Overlap",
        }
    }
}

/// Configuration shared by grid math, containment and partition construction
///
/// # Example
///
/// ```rust
/// use rust_region_grid::*;
///
/// let config = GridConfigBuilder::new()
///     .cell_size(1024.0)
///     .unwrap()
///     .sample_mode(SampleMode::Overlap)
///     .build();
///
/// assert_eq!(config.cell_size, 1024.0);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Edge length of one grid cell in world units
    ///
    /// Must be positive and finite. The builder enforces this; the engine
    /// returns empty results for anything else.
    pub cell_size: f64,

    /// Cell sampling strategy used by the containment engine
    pub sample_mode: SampleMode,

    /// Largest candidate range swept for one area before it is refused
    pub max_candidates: usize,
}

impl GridConfig {
    /// Check whether the cell size can drive a grid sweep
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.cell_size.is_finite() && self.cell_size > 0.0 && self.max_candidates > 0
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            sample_mode: SampleMode::default(),
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

/// Builder for creating GridConfig with validation
///
/// # Example
///
/// ```rust
/// use rust_region_grid::*;
///
/// // Use defaults (4096 unit cells, corner sampling)
/// let config = GridConfigBuilder::new().build();
/// assert_eq!(config.cell_size, DEFAULT_CELL_SIZE);
///
/// // Invalid cell sizes are rejected
/// assert!(GridConfigBuilder::new().cell_size(0.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct GridConfigBuilder {
    cell_size: f64,
    sample_mode: SampleMode,
    max_candidates: usize,
}

impl GridConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - cell_size: 4096.0
    /// - sample_mode: Corner
    /// - max_candidates: 1,048,576
    pub fn new() -> Self {
        let defaults = GridConfig::default();
        Self {
            cell_size: defaults.cell_size,
            sample_mode: defaults.sample_mode,
            max_candidates: defaults.max_candidates,
        }
    }

    /// Set the grid cell edge length
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the size is not a positive finite number
    pub fn cell_size(mut self, cell_size: f64) -> Result<Self> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(RegionError::InvalidConfig(format!(
                "cell size must be positive and finite (got {})",
                cell_size
            )));
        }
        self.cell_size = cell_size;
        Ok(self)
    }

    /// Set the cell sampling strategy
    pub fn sample_mode(mut self, mode: SampleMode) -> Self {
        self.sample_mode = mode;
        self
    }

    /// Set the per-area candidate cell limit
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the limit is zero
    pub fn max_candidates(mut self, limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(RegionError::InvalidConfig(
                "max candidates must be at least 1".to_string(),
            ));
        }
        self.max_candidates = limit;
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> GridConfig {
        GridConfig {
            cell_size: self.cell_size,
            sample_mode: self.sample_mode,
            max_candidates: self.max_candidates,
        }
    }
}

impl Default for GridConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
