//! Region descriptors
//!
//! A region is an identifier, the world it belongs to, and one or more polygon
//! areas. Regions are built once from caller input and only read afterwards.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::area::PolygonArea;
use crate::config::GridConfig;
use crate::containment::{covered_cells_union, CellSet};

/// A named area of a world, made of one or more polygons
///
/// Generic over the identifier `R` (whatever the caller tags cells with) and
/// the world reference `W`.
///
/// # Example
///
/// ```
/// use rust_region_grid::*;
///
/// let region = Region::new("FalkreathHold", "Tamriel")
///     .with_area(PolygonArea::rectangle(
///         Point2D::new(0.0, 0.0),
///         Point2D::new(8192.0, 4096.0),
///     ));
///
/// assert_eq!(region.covered_cells(&GridConfig::default()).len(), 2);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Region<R, W> {
    /// Identifier written into the tag set of every covered cell
    pub id: R,

    /// World partition this region belongs to
    ///
    /// `None` when the caller's world reference did not resolve; such a
    /// region never tags anything.
    pub world: Option<W>,

    /// Polygon areas, combined with union semantics
    pub areas: Vec<PolygonArea>,
}

impl<R, W> Region<R, W> {
    /// Create a region with no areas yet
    pub fn new(id: R, world: W) -> Self {
        Self {
            id,
            world: Some(world),
            areas: Vec::new(),
        }
    }

    /// Create a region whose world reference is unresolved
    pub fn without_world(id: R) -> Self {
        Self {
            id,
            world: None,
            areas: Vec::new(),
        }
    }

    /// Add an area, builder style
    pub fn with_area(mut self, area: impl Into<PolygonArea>) -> Self {
        self.areas.push(area.into());
        self
    }

    /// Add an area in place
    pub fn push_area(&mut self, area: impl Into<PolygonArea>) {
        self.areas.push(area.into());
    }

    /// Number of areas
    #[inline]
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// Union of the cells covered by all areas
    pub fn covered_cells(&self, config: &GridConfig) -> CellSet {
        covered_cells_union(&self.areas, config)
    }
}
