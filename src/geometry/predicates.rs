//! Orientation, on-segment and segment intersection predicates
//!
//! Segments are closed: touching at an endpoint or overlapping along a shared
//! line counts as an intersection.

use super::{Point2D, Segment};

/// Relative tolerance for the orientation cross term
///
/// Scaled by the magnitude of the two products, so exactly representable grid
/// coordinates are classified exactly while round-off from repeated additions
/// of the grid step is still read as collinear.
const ORIENTATION_EPSILON: f64 = 8.0 * f64::EPSILON;

/// Turn direction of an ordered point triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// All three points lie on one line (or the cross term is within tolerance)
    Collinear,
    /// `p1 -> p2 -> p3` turns right
    Clockwise,
    /// `p1 -> p2 -> p3` turns left
    CounterClockwise,
}

impl Orientation {
    /// Orientation of the same triple traversed backwards
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Collinear => Orientation::Collinear,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}

/// Classify the turn `p1 -> p2 -> p3`
///
/// Uses the sign of `(p2 - p1) x (p3 - p2)` written as
/// `(p2.y - p1.y) * (p3.x - p2.x) - (p2.x - p1.x) * (p3.y - p2.y)`:
/// positive is clockwise, negative counter-clockwise. NaN input reads as
/// collinear.
///
/// # Example
///
/// ```
/// use rust_region_grid::*;
///
/// let a = Point2D::new(0.0, 0.0);
/// let b = Point2D::new(4096.0, 0.0);
/// let c = Point2D::new(4096.0, 4096.0);
///
/// assert_eq!(orientation(a, b, c), Orientation::CounterClockwise);
/// assert_eq!(orientation(c, b, a), Orientation::Clockwise);
/// ```
pub fn orientation(p1: Point2D, p2: Point2D, p3: Point2D) -> Orientation {
    let lhs = (p2.y - p1.y) * (p3.x - p2.x);
    let rhs = (p2.x - p1.x) * (p3.y - p2.y);
    let det = lhs - rhs;
    let tolerance = ORIENTATION_EPSILON * (lhs.abs() + rhs.abs());

    if !(det.abs() > tolerance) {
        Orientation::Collinear
    } else if det > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Check whether `b` lies within the closed bounding box of `a` and `c`
///
/// Only meaningful once `orientation(a, b, c)` is known to be collinear; on its
/// own this is a box test, not an on-line test.
#[inline]
pub fn is_point_on_segment(a: Point2D, b: Point2D, c: Point2D) -> bool {
    b.x <= a.x.max(c.x) && b.x >= a.x.min(c.x) && b.y <= a.y.max(c.y) && b.y >= a.y.min(c.y)
}

/// Check whether two closed segments cross or touch
///
/// Symmetric in its arguments.
///
/// # Example
///
/// ```
/// use rust_region_grid::*;
///
/// let s1 = Segment::new(Point2D::new(0.0, 0.0), Point2D::new(4.0, 4.0));
/// let s2 = Segment::new(Point2D::new(0.0, 4.0), Point2D::new(4.0, 0.0));
/// assert!(segments_intersect(&s1, &s2));
///
/// // Shared endpoints count
/// let s3 = Segment::new(Point2D::new(4.0, 4.0), Point2D::new(8.0, 0.0));
/// assert!(segments_intersect(&s1, &s3));
/// ```
pub fn segments_intersect(s1: &Segment, s2: &Segment) -> bool {
    let o1 = orientation(s1.p1, s1.p2, s2.p1);
    let o2 = orientation(s1.p1, s1.p2, s2.p2);
    let o3 = orientation(s2.p1, s2.p2, s1.p1);
    let o4 = orientation(s2.p1, s2.p2, s1.p2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && is_point_on_segment(s1.p1, s2.p1, s1.p2))
        || (o2 == Orientation::Collinear && is_point_on_segment(s1.p1, s2.p2, s1.p2))
        || (o3 == Orientation::Collinear && is_point_on_segment(s2.p1, s1.p1, s2.p2))
        || (o4 == Orientation::Collinear && is_point_on_segment(s2.p1, s1.p2, s2.p2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(DVec2::new(x1, y1), DVec2::new(x2, y2))
    }

    /// Random point snapped to a coarse lattice so collinear and touching
    /// configurations show up often.
    fn lattice_point(rng: &mut ChaCha8Rng) -> DVec2 {
        DVec2::new(
            rng.gen_range(-6i32..=6) as f64 * 1024.0,
            rng.gen_range(-6i32..=6) as f64 * 1024.0,
        )
    }

    #[test]
    fn test_orientation_basic() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(4096.0, 0.0);

        assert_eq!(orientation(a, b, DVec2::new(4096.0, 1.0)), Orientation::CounterClockwise);
        assert_eq!(orientation(a, b, DVec2::new(4096.0, -1.0)), Orientation::Clockwise);
        assert_eq!(orientation(a, b, DVec2::new(8192.0, 0.0)), Orientation::Collinear);
        assert_eq!(orientation(a, b, DVec2::new(-8192.0, 0.0)), Orientation::Collinear);
    }

    #[test]
    fn test_orientation_coincident_points() {
        let p = DVec2::new(12.0, -7.0);
        assert_eq!(orientation(p, p, p), Orientation::Collinear);
        assert_eq!(orientation(p, p, DVec2::new(3.0, 3.0)), Orientation::Collinear);
    }

    #[test]
    fn test_orientation_absorbs_round_off() {
        // 0.1 + 0.2 != 0.3 in binary floating point
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(0.1 + 0.2, 0.3);
        let c = DVec2::new(0.6, 0.6);
        assert_eq!(orientation(a, b, c), Orientation::Collinear);
        assert_eq!(orientation(c, b, a), Orientation::Collinear);
    }

    #[test]
    fn test_orientation_keeps_small_grid_scale_turns() {
        // A one-unit bend over a 64-cell span is a genuine turn
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(64.0 * 4096.0, 64.0 * 4096.0);
        let c = DVec2::new(128.0 * 4096.0, 128.0 * 4096.0 + 1.0);
        assert_eq!(orientation(a, b, c), Orientation::CounterClockwise);
    }

    #[test]
    fn test_orientation_nan_is_collinear() {
        let a = DVec2::new(f64::NAN, 0.0);
        assert_eq!(
            orientation(a, DVec2::new(1.0, 0.0), DVec2::new(0.0, 1.0)),
            Orientation::Collinear
        );
    }

    #[test]
    fn test_orientation_symmetry() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..2_000 {
            let p1 = lattice_point(&mut rng);
            let p2 = lattice_point(&mut rng);
            let p3 = lattice_point(&mut rng);
            assert_eq!(orientation(p3, p2, p1), orientation(p1, p2, p3).reversed());
        }
    }

    #[test]
    fn test_orientation_symmetry_unsnapped() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..2_000 {
            let mut point = || DVec2::new(rng.gen_range(-1e5..1e5), rng.gen_range(-1e5..1e5));
            let (p1, p2, p3) = (point(), point(), point());
            assert_eq!(orientation(p3, p2, p1), orientation(p1, p2, p3).reversed());
        }
    }

    #[test]
    fn test_is_point_on_segment() {
        let a = DVec2::new(0.0, 0.0);
        let c = DVec2::new(10.0, 0.0);
        assert!(is_point_on_segment(a, DVec2::new(0.0, 0.0), c));
        assert!(is_point_on_segment(a, DVec2::new(5.0, 0.0), c));
        assert!(is_point_on_segment(a, DVec2::new(10.0, 0.0), c));
        assert!(!is_point_on_segment(a, DVec2::new(11.0, 0.0), c));
        assert!(!is_point_on_segment(a, DVec2::new(5.0, 1.0), c));
        // Argument order of the endpoints does not matter
        assert!(is_point_on_segment(c, DVec2::new(5.0, 0.0), a));
    }

    #[test]
    fn test_segments_proper_crossing() {
        assert!(segments_intersect(&seg(0.0, 0.0, 10.0, 10.0), &seg(0.0, 10.0, 10.0, 0.0)));
    }

    #[test]
    fn test_segments_disjoint() {
        // Parallel
        assert!(!segments_intersect(&seg(0.0, 0.0, 10.0, 0.0), &seg(0.0, 1.0, 10.0, 1.0)));
        // Would cross if extended
        assert!(!segments_intersect(&seg(0.0, 0.0, 1.0, 1.0), &seg(3.0, 0.0, 2.0, 1.0)));
        // Same line, no overlap
        assert!(!segments_intersect(&seg(0.0, 0.0, 1.0, 0.0), &seg(2.0, 0.0, 3.0, 0.0)));
    }

    #[test]
    fn test_segments_touching() {
        // Shared endpoint
        assert!(segments_intersect(&seg(0.0, 0.0, 5.0, 5.0), &seg(5.0, 5.0, 10.0, 0.0)));
        // T-junction
        assert!(segments_intersect(&seg(0.0, 0.0, 2.0, 0.0), &seg(1.0, 0.0, 1.0, 1.0)));
        // Collinear overlap
        assert!(segments_intersect(&seg(0.0, 0.0, 4.0, 0.0), &seg(2.0, 0.0, 6.0, 0.0)));
        // One contains the other
        assert!(segments_intersect(&seg(0.0, 0.0, 8.0, 8.0), &seg(2.0, 2.0, 3.0, 3.0)));
    }

    #[test]
    fn test_segments_degenerate() {
        // A point segment intersects a segment it lies on, and nothing else
        assert!(segments_intersect(&seg(2.0, 0.0, 2.0, 0.0), &seg(0.0, 0.0, 4.0, 0.0)));
        assert!(!segments_intersect(&seg(2.0, 1.0, 2.0, 1.0), &seg(0.0, 0.0, 4.0, 0.0)));
        assert!(segments_intersect(&seg(1.0, 1.0, 1.0, 1.0), &seg(1.0, 1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_segments_intersect_symmetry() {
        let mut rng = ChaCha8Rng::seed_from_u64(1234);
        for _ in 0..5_000 {
            let s1 = Segment::new(lattice_point(&mut rng), lattice_point(&mut rng));
            let s2 = Segment::new(lattice_point(&mut rng), lattice_point(&mut rng));
            assert_eq!(
                segments_intersect(&s1, &s2),
                segments_intersect(&s2, &s1),
                "asymmetric result for {:?} / {:?}",
                s1,
                s2
            );
            assert_eq!(s1.intersects(&s2), s1.reversed().intersects(&s2));
        }
    }
}
