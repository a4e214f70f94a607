//! 2-D geometry primitives
//!
//! Points are `glam::DVec2` in world units. Everything here is pure and
//! stateless; the predicates live in [`predicates`].

mod predicates;

pub use predicates::{is_point_on_segment, orientation, segments_intersect, Orientation};

use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in world space
pub type Point2D = DVec2;

/// An ordered pair of points: one polygon edge or a probe ray
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point
    pub p1: Point2D,
    /// End point
    pub p2: Point2D,
}

impl Segment {
    /// Create a segment from `p1` to `p2`
    #[inline]
    pub fn new(p1: Point2D, p2: Point2D) -> Self {
        Self { p1, p2 }
    }

    /// The same segment traversed in the opposite direction
    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.p2, self.p1)
    }

    /// Check whether both endpoints coincide
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }

    /// Axis-aligned bounding box of the segment
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min: self.p1.min(self.p2),
            max: self.p1.max(self.p2),
        }
    }

    /// Check whether this segment crosses or touches `other`
    #[inline]
    pub fn intersects(&self, other: &Segment) -> bool {
        segments_intersect(self, other)
    }
}

/// Axis-aligned bounding box in world space (closed on all sides)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Lower-left corner
    pub min: Point2D,
    /// Upper-right corner
    pub max: Point2D,
}

impl Bounds {
    /// Compute the bounding box of a point list
    ///
    /// Returns `None` for an empty list or when any coordinate is NaN or
    /// infinite.
    pub fn from_points(points: &[Point2D]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        if !first.is_finite() {
            return None;
        }

        let mut bounds = Bounds {
            min: *first,
            max: *first,
        };
        for point in rest {
            if !point.is_finite() {
                return None;
            }
            bounds.min = bounds.min.min(*point);
            bounds.max = bounds.max.max(*point);
        }
        Some(bounds)
    }

    /// Width and height of the box
    #[inline]
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// Check whether `point` lies inside or on the border of the box
    #[inline]
    pub fn contains(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}
