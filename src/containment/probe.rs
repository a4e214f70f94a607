//! Per-sample tests used by the containment sweep

use crate::geometry::{is_point_on_segment, orientation, segments_intersect, Orientation, Point2D, Segment};
use crate::grid::GridCellIndex;

/// Check whether `edge` crosses the horizontal line at `y` under the half-open rule
///
/// An endpoint lying exactly on the line counts as below it, so a probe
/// through a vertex sees that vertex once when the polygon passes through the
/// line there, and zero or two times when it only touches. Horizontal edges
/// never straddle.
#[inline]
fn straddles(edge: &Segment, y: f64) -> bool {
    (edge.p1.y > y) != (edge.p2.y > y)
}

/// Number of edges crossed by the probe from `sample` leftward to `probe_end_x`
pub(crate) fn crossing_count(edges: &[Segment], sample: Point2D, probe_end_x: f64) -> usize {
    let probe = Segment::new(sample, Point2D::new(probe_end_x, sample.y));
    edges
        .iter()
        .filter(|edge| straddles(edge, sample.y) && segments_intersect(&probe, edge))
        .count()
}

/// Check whether `sample` lies exactly on one of the edges
pub(crate) fn on_boundary(edges: &[Segment], sample: Point2D) -> bool {
    edges.iter().any(|edge| {
        orientation(edge.p1, sample, edge.p2) == Orientation::Collinear
            && is_point_on_segment(edge.p1, sample, edge.p2)
    })
}

/// Even-odd containment with boundary points counted as inside
///
/// `probe_end_x` must lie strictly left of every vertex.
#[inline]
pub(crate) fn contains_or_touches(edges: &[Segment], sample: Point2D, probe_end_x: f64) -> bool {
    on_boundary(edges, sample) || crossing_count(edges, sample, probe_end_x) % 2 == 1
}

/// Check whether a cell's sides touch the polygon, or the polygon sits inside the cell
///
/// Together with [`contains_or_touches`] on the cell origin this decides
/// whether the closed cell square and the closed polygon share a point.
pub(crate) fn cell_overlaps(edges: &[Segment], cell: GridCellIndex, cell_size: f64) -> bool {
    let sides = cell.sides(cell_size);
    let crosses_side = edges
        .iter()
        .any(|edge| sides.iter().any(|side| segments_intersect(side, edge)));

    crosses_side
        || edges
            .first()
            .is_some_and(|edge| cell.bounds(cell_size).contains(edge.p1))
}
