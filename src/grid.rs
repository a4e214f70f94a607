//! Grid math: world coordinates to integer cell indices
//!
//! Cells are `cell_size` x `cell_size` squares anchored at multiples of
//! `cell_size`, so cell `(col, row)` spans
//! `[col * cell_size, (col + 1) * cell_size]` on the x axis and likewise on y.

use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Point2D, Segment};

/// Integer address of one grid cell
///
/// Ordered column-first so sets of indices iterate deterministically.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridCellIndex {
    /// Column (x axis)
    pub col: i32,
    /// Row (y axis)
    pub row: i32,
}

impl GridCellIndex {
    /// Create an index from a column and row
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Index of the cell containing a world position
    ///
    /// # Example
    ///
    /// ```
    /// use rust_region_grid::*;
    ///
    /// let cell = GridCellIndex::of(Point2D::new(-1.0, 8192.0), 4096.0);
    /// assert_eq!(cell, GridCellIndex::new(-1, 2));
    /// ```
    #[inline]
    pub fn of(position: Point2D, cell_size: f64) -> Self {
        Self::new(
            to_grid_index(position.x, cell_size),
            to_grid_index(position.y, cell_size),
        )
    }

    /// Lower-left corner of the cell, the canonical sample point
    ///
    /// Computed by multiplying the integer index, never by accumulating steps.
    #[inline]
    pub fn origin(self, cell_size: f64) -> Point2D {
        DVec2::new(f64::from(self.col) * cell_size, f64::from(self.row) * cell_size)
    }

    /// The four corners, counter-clockwise from the origin
    pub fn corners(self, cell_size: f64) -> [Point2D; 4] {
        let min = self.origin(cell_size);
        let max = GridCellIndex::new(self.col.saturating_add(1), self.row.saturating_add(1))
            .origin(cell_size);
        [
            min,
            DVec2::new(max.x, min.y),
            max,
            DVec2::new(min.x, max.y),
        ]
    }

    /// The four sides of the cell as closed segments
    pub fn sides(self, cell_size: f64) -> [Segment; 4] {
        let [a, b, c, d] = self.corners(cell_size);
        [
            Segment::new(a, b),
            Segment::new(b, c),
            Segment::new(c, d),
            Segment::new(d, a),
        ]
    }

    /// World-space bounds of the cell
    #[inline]
    pub fn bounds(self, cell_size: f64) -> Bounds {
        let [min, _, max, _] = self.corners(cell_size);
        Bounds { min, max }
    }
}

impl From<(i32, i32)> for GridCellIndex {
    #[inline]
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

/// Convert one world coordinate to a grid index: `floor(coord / cell_size)`
///
/// Out-of-range results saturate at the `i32` limits; NaN maps to 0.
#[inline]
pub fn to_grid_index(coord: f64, cell_size: f64) -> i32 {
    (coord / cell_size).floor() as i32
}

/// Round `value` down to a multiple of `cell_size`
#[inline]
pub fn nearest_floor(value: f64, cell_size: f64) -> f64 {
    (value / cell_size).floor() * cell_size
}

/// Round `value` up to a multiple of `cell_size`
#[inline]
pub fn nearest_ceiling(value: f64, cell_size: f64) -> f64 {
    (value / cell_size).ceil() * cell_size
}

/// Index of a coordinate already snapped to a multiple of `cell_size`
///
/// Rounds instead of flooring so a quotient landing one ulp below the integer
/// does not shift the index.
#[inline]
fn snapped_index(snapped: f64, cell_size: f64) -> i32 {
    (snapped / cell_size).round() as i32
}

/// Inclusive rectangle of grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    /// Lowest column and row
    pub min: GridCellIndex,
    /// Highest column and row (inclusive)
    pub max: GridCellIndex,
}

impl CellRange {
    /// Number of columns in the range
    #[inline]
    pub fn columns(&self) -> u64 {
        (i64::from(self.max.col) - i64::from(self.min.col) + 1).max(0) as u64
    }

    /// Number of rows in the range
    #[inline]
    pub fn rows(&self) -> u64 {
        (i64::from(self.max.row) - i64::from(self.min.row) + 1).max(0) as u64
    }

    /// Total number of cells in the range
    #[inline]
    pub fn len(&self) -> u64 {
        self.columns().saturating_mul(self.rows())
    }

    /// Check whether the range holds no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether `cell` lies in the range
    #[inline]
    pub fn contains(&self, cell: GridCellIndex) -> bool {
        (self.min.col..=self.max.col).contains(&cell.col)
            && (self.min.row..=self.max.row).contains(&cell.row)
    }

    /// Iterate all cells, column by column
    pub fn iter(&self) -> impl Iterator<Item = GridCellIndex> {
        let (min, max) = (self.min, self.max);
        (min.col..=max.col)
            .flat_map(move |col| (min.row..=max.row).map(move |row| GridCellIndex::new(col, row)))
    }
}

/// Candidate cells for a world-space bounding box
///
/// The box is snapped outward with [`nearest_floor`] and [`nearest_ceiling`].
/// A cell is a candidate when it overlaps the snapped box with positive
/// extent, so a box aligned exactly to one cell yields exactly that cell and
/// the neighbours sharing its far edges are left out. An axis with zero extent
/// yields the single cell containing it.
///
/// # Example
///
/// ```
/// use rust_region_grid::*;
///
/// let bounds = Bounds {
///     min: Point2D::new(0.0, 0.0),
///     max: Point2D::new(4096.0, 4096.0),
/// };
/// let range = cell_range(&bounds, 4096.0);
/// assert_eq!(range.iter().collect::<Vec<_>>(), vec![GridCellIndex::new(0, 0)]);
/// ```
pub fn cell_range(bounds: &Bounds, cell_size: f64) -> CellRange {
    let axis = |lo: f64, hi: f64| {
        let first = snapped_index(nearest_floor(lo, cell_size), cell_size);
        let last = snapped_index(nearest_ceiling(hi, cell_size), cell_size).saturating_sub(1);
        (first, last.max(first))
    };

    let (min_col, max_col) = axis(bounds.min.x, bounds.max.x);
    let (min_row, max_row) = axis(bounds.min.y, bounds.max.y);

    CellRange {
        min: GridCellIndex::new(min_col, min_row),
        max: GridCellIndex::new(max_col, max_row),
    }
}
