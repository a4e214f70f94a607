//! Polygon region assignment for grid-partitioned worlds
//!
//! Converts named regions (one or more 2-D polygons) into the set of
//! fixed-size grid cells they cover, and tags the matching cells of a world
//! partition with the region's identifier.
//!
//! Loading the world, resolving records and writing results back are the
//! caller's business. The caller supplies the regions and a
//! [`WorldPartitionIndex`] of cell handles implementing [`CellTags`], and gets
//! back a per-region count of newly tagged cells.
//!
//! # Quick Start
//!
//! ```rust
//! use std::collections::HashSet;
//! use rust_region_grid::*;
//!
//! // Index the exterior cells of each world by grid coordinate
//! let mut index: WorldPartitionIndex<&str, HashSet<&str>> = WorldPartitionIndex::new();
//! for col in -2..2 {
//!     for row in -2..2 {
//!         index.insert_cell("Tamriel", GridCellIndex::new(col, row), HashSet::new());
//!     }
//! }
//!
//! // A region made of one triangular area
//! let region = Region::new("PineForest", "Tamriel").with_area(PolygonArea::from_coords([
//!     (-8192.0, -8192.0),
//!     (4096.0, -8192.0),
//!     (-8192.0, 4096.0),
//! ]));
//!
//! let config = GridConfig::default();
//! let report = assign_all([&region], &mut index, &config);
//! println!("tagged {} cells", report.total());
//! ```
//!
//! # Features
//!
//! - `parallel`: Enables [`assign_all_par`], computing coverage on the rayon thread pool
//! - `serde`: Enables serialization support for configuration, regions and grid indices

// Modules
pub mod error;
pub mod config;
pub mod geometry;
pub mod grid;
pub mod area;
pub mod containment;
pub mod region;
pub mod partition;
pub mod assign;

// Re-export core types for convenience
pub use error::{RegionError, Result};
pub use config::{GridConfig, GridConfigBuilder, SampleMode, DEFAULT_CELL_SIZE, DEFAULT_MAX_CANDIDATES};
pub use geometry::{is_point_on_segment, orientation, segments_intersect, Bounds, Orientation, Point2D, Segment};
pub use grid::{cell_range, nearest_ceiling, nearest_floor, to_grid_index, CellRange, GridCellIndex};
pub use area::PolygonArea;
pub use containment::{area_contains, covered_cells, covered_cells_union, CellSet};
pub use region::Region;
pub use partition::{CellTags, WorldPartition, WorldPartitionIndex};
pub use assign::{assign, assign_all, tag_cells, AssignmentReport};

#[cfg(feature = "parallel")]
pub use assign::assign_all_par;

// Re-export glam::DVec2 for convenience
pub use glam::DVec2;
