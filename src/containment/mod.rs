//! Polygon containment engine
//!
//! Converts a polygon area into the set of grid cells it covers.
//!
//! # Algorithm
//!
//! 1. Build the edge list, including the closing edge
//! 2. Snap the area's bounding box outward to the grid and take the candidate
//!    cell range (see [`cell_range`])
//! 3. For every candidate cell, sample its lower-left corner. The sample
//!    coordinates come from `index * cell_size`, so there is no drift across
//!    large boxes
//! 4. Cast a probe leftward from the sample to beyond the bounding box and
//!    count edge crossings; an odd count means inside. A sample lying exactly
//!    on an edge is covered as well
//! 5. With [`SampleMode::Overlap`], also cover cells whose sides touch the
//!    polygon or that contain the whole polygon
//!
//! Ambiguous boundary samples are always covered: an extra boundary cell is a
//! smaller error than a gap.

mod probe;

use std::collections::BTreeSet;

use tracing::warn;

use crate::area::PolygonArea;
use crate::config::{GridConfig, SampleMode};
use crate::geometry::{Point2D, Segment};
use crate::grid::{cell_range, GridCellIndex};

/// Set of covered grid cells, iterated column by column
pub type CellSet = BTreeSet<GridCellIndex>;

/// Compute the grid cells covered by one polygon area
///
/// Returns an empty set when the area is malformed (fewer than three points,
/// NaN or infinite coordinates), when the configuration is invalid, or when
/// the candidate range exceeds `config.max_candidates`. Degenerate areas
/// (collinear points, zero-length edges) never panic; they produce whatever
/// the boundary test implies.
///
/// # Example
///
/// ```
/// use rust_region_grid::*;
///
/// let area = PolygonArea::from_coords([
///     (0.0, 0.0),
///     (4096.0, 0.0),
///     (4096.0, 4096.0),
///     (0.0, 4096.0),
/// ]);
///
/// let cells = covered_cells(&area, &GridConfig::default());
/// assert_eq!(cells.into_iter().collect::<Vec<_>>(), vec![GridCellIndex::new(0, 0)]);
/// ```
pub fn covered_cells(area: &PolygonArea, config: &GridConfig) -> CellSet {
    let mut cells = CellSet::new();
    extend_covered_cells(area, config, &mut cells);
    cells
}

/// Union of the cells covered by several areas of one region
///
/// # Example
///
/// ```
/// use rust_region_grid::*;
///
/// let a = PolygonArea::rectangle(Point2D::new(0.0, 0.0), Point2D::new(4096.0, 4096.0));
/// let b = PolygonArea::rectangle(Point2D::new(16384.0, 0.0), Point2D::new(20480.0, 4096.0));
///
/// let cells = covered_cells_union([&a, &b], &GridConfig::default());
/// assert_eq!(cells.len(), 2);
/// ```
pub fn covered_cells_union<'a, I>(areas: I, config: &GridConfig) -> CellSet
where
    I: IntoIterator<Item = &'a PolygonArea>,
{
    let mut cells = CellSet::new();
    for area in areas {
        extend_covered_cells(area, config, &mut cells);
    }
    cells
}

/// Check whether a world position lies inside or on the border of an area
///
/// Uses the same probe and boundary rules as [`covered_cells`]. Malformed
/// areas contain nothing.
pub fn area_contains(area: &PolygonArea, point: Point2D) -> bool {
    let Some(bounds) = area.bounds() else {
        return false;
    };
    if !point.is_finite() {
        return false;
    }

    let edges: Vec<Segment> = area.edges().collect();
    let probe_end_x = bounds.min.x.min(point.x) - bounds.min.x.abs().max(1.0);
    probe::contains_or_touches(&edges, point, probe_end_x)
}

fn extend_covered_cells(area: &PolygonArea, config: &GridConfig, out: &mut CellSet) {
    if !config.is_valid() {
        return;
    }
    let Some(bounds) = area.bounds() else {
        return;
    };

    let cell_size = config.cell_size;
    let range = cell_range(&bounds, cell_size);
    if range.len() > config.max_candidates as u64 {
        warn!(
            candidates = range.len(),
            limit = config.max_candidates,
            "polygon area spans too many grid cells, ignoring it"
        );
        return;
    }

    let edges: Vec<Segment> = area.edges().collect();
    // Strictly left of both the bounding box and the leftmost sample
    let probe_end_x = bounds.min.x.min(range.min.origin(cell_size).x) - cell_size;

    for cell in range.iter() {
        let sample = cell.origin(cell_size);
        let covered = probe::contains_or_touches(&edges, sample, probe_end_x)
            || (config.sample_mode == SampleMode::Overlap
                && probe::cell_overlaps(&edges, cell, cell_size));

        if covered {
            out.insert(cell);
        }
    }
}
