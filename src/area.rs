//! Polygon areas
//!
//! One simple closed polygon belonging to a region. The point list is stored
//! open: the closing edge from the last point back to the first is implied.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{RegionError, Result};
use crate::geometry::{Bounds, Point2D, Segment};

/// An implicitly closed polygon given by its ordered vertices
///
/// Construction never fails; use [`PolygonArea::validate`] to find out whether
/// the area is usable. The containment engine treats invalid areas as covering
/// nothing.
///
/// # Example
///
/// ```
/// use rust_region_grid::*;
///
/// let area = PolygonArea::new(vec![
///     Point2D::new(0.0, 0.0),
///     Point2D::new(4096.0, 0.0),
///     Point2D::new(4096.0, 4096.0),
///     Point2D::new(0.0, 4096.0),
/// ]);
///
/// assert!(area.validate().is_ok());
/// assert_eq!(area.edges().count(), 4);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolygonArea {
    points: Vec<Point2D>,
}

impl PolygonArea {
    /// Create an area from its vertices
    pub fn new(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    /// Create an area from raw `(x, y)` pairs
    pub fn from_coords<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::new(
            coords
                .into_iter()
                .map(|(x, y)| Point2D::new(x, y))
                .collect(),
        )
    }

    /// Axis-aligned rectangle from two opposite corners
    pub fn rectangle(min: Point2D, max: Point2D) -> Self {
        Self::new(vec![
            min,
            Point2D::new(max.x, min.y),
            max,
            Point2D::new(min.x, max.y),
        ])
    }

    /// The vertices in order
    #[inline]
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Check that the area has at least three finite vertices
    ///
    /// # Errors
    ///
    /// - `TooFewPoints` if there are fewer than three vertices
    /// - `NonFiniteCoordinate` for the first NaN or infinite vertex
    pub fn validate(&self) -> Result<()> {
        if self.points.len() < 3 {
            return Err(RegionError::TooFewPoints {
                count: self.points.len(),
            });
        }
        if let Some(index) = self.points.iter().position(|p| !p.is_finite()) {
            return Err(RegionError::NonFiniteCoordinate { index });
        }
        Ok(())
    }

    /// Shorthand for `validate().is_ok()`
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Edges in order, ending with the closing edge back to the first point
    ///
    /// Yields nothing for an empty area and a single zero-length edge for a
    /// one-point area.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let closing = match (self.points.first(), self.points.last()) {
            (Some(&first), Some(&last)) => Some(Segment::new(last, first)),
            _ => None,
        };
        self.points
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
            .chain(closing)
    }

    /// Bounding box of the vertices, `None` when the area is invalid
    pub fn bounds(&self) -> Option<Bounds> {
        if self.points.len() < 3 {
            return None;
        }
        Bounds::from_points(&self.points)
    }

    /// Signed shoelace area; positive for counter-clockwise vertex order
    pub fn signed_area(&self) -> f64 {
        self.edges()
            .map(|edge| edge.p1.perp_dot(edge.p2))
            .sum::<f64>()
            * 0.5
    }
}

impl From<Vec<Point2D>> for PolygonArea {
    fn from(points: Vec<Point2D>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn unit_square() -> PolygonArea {
        PolygonArea::from_coords([(0.0, 0.0), (4096.0, 0.0), (4096.0, 4096.0), (0.0, 4096.0)])
    }

    #[test]
    fn test_edges_close_the_ring() {
        let area = unit_square();
        let edges: Vec<_> = area.edges().collect();

        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0], Segment::new(DVec2::new(0.0, 0.0), DVec2::new(4096.0, 0.0)));
        assert_eq!(edges[3], Segment::new(DVec2::new(0.0, 4096.0), DVec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_edges_of_short_lists() {
        assert_eq!(PolygonArea::default().edges().count(), 0);

        let single = PolygonArea::from_coords([(1.0, 1.0)]);
        let edges: Vec<_> = single.edges().collect();
        assert_eq!(edges.len(), 1);
        assert!(edges[0].is_degenerate());
    }

    #[test]
    fn test_validate() {
        assert!(unit_square().validate().is_ok());
        assert!(unit_square().is_valid());

        let two = PolygonArea::from_coords([(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(two.validate(), Err(RegionError::TooFewPoints { count: 2 }));

        let nan = PolygonArea::from_coords([(0.0, 0.0), (1.0, f64::NAN), (1.0, 1.0)]);
        assert_eq!(nan.validate(), Err(RegionError::NonFiniteCoordinate { index: 1 }));
        assert!(nan.bounds().is_none());
    }

    #[test]
    fn test_bounds() {
        let area = PolygonArea::from_coords([(-100.0, 50.0), (300.0, -20.0), (10.0, 900.0)]);
        let bounds = area.bounds().unwrap();
        assert_eq!(bounds.min, DVec2::new(-100.0, -20.0));
        assert_eq!(bounds.max, DVec2::new(300.0, 900.0));

        assert!(PolygonArea::from_coords([(0.0, 0.0), (1.0, 1.0)]).bounds().is_none());
    }

    #[test]
    fn test_rectangle() {
        let rect = PolygonArea::rectangle(DVec2::new(0.0, 0.0), DVec2::new(4096.0, 4096.0));
        assert_eq!(rect, unit_square());
    }

    #[test]
    fn test_signed_area() {
        assert_eq!(unit_square().signed_area(), 4096.0 * 4096.0);

        let mut reversed = unit_square().points().to_vec();
        reversed.reverse();
        assert_eq!(PolygonArea::new(reversed).signed_area(), -4096.0 * 4096.0);

        let collinear = PolygonArea::from_coords([(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
        assert_eq!(collinear.signed_area(), 0.0);
    }
}
