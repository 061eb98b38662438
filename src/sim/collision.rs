//! Cube versus circle intersection
//!
//! The gameplay oracle: a cube touches a shield when one of its edges crosses
//! the shield's boundary. Each edge `p(t) = p1 + t (p2 - p1)` is substituted
//! into `|p(t) - c|² = r²`, giving `A t² - 2 B t + C = 0`; a root in [0, 1]
//! means the edge meets the circle.
//!
//! A cube lying entirely inside a circle (or the reverse) without any edge
//! crossing is not reported. Shields are much larger than the gap a cube can
//! close in one tick, so the boundary is always crossed first.

use super::shapes::{Circle, Cube};
use crate::geometry::Vertex;

/// Corners farther than this many radii from the center skip the exact test
const COARSE_FACTOR: f64 = 1.5;

/// Roots of the edge/circle quadratic for the segment `p1 -> p2`
///
/// `None` when the supporting line misses the circle or the segment is
/// degenerate (zero length).
pub fn segment_circle_roots(p1: Vertex, p2: Vertex, center: Vertex, r: f64) -> Option<(f64, f64)> {
    let d = p2 - p1;
    let to_center = center - p1;

    let a = d.length_squared();
    if a == 0.0 {
        return None;
    }
    let b = to_center.dot(d);
    let c = to_center.length_squared() - r * r;

    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    let sqr = disc.sqrt();
    Some(((b + sqr) / a, (b - sqr) / a))
}

/// Whether the segment `p1 -> p2` crosses or touches the circle boundary
pub fn segment_hits_circle(p1: Vertex, p2: Vertex, center: Vertex, r: f64) -> bool {
    let in_unit = |t: f64| (0.0..=1.0).contains(&t);
    segment_circle_roots(p1, p2, center, r).is_some_and(|(t1, t2)| in_unit(t1) || in_unit(t2))
}

/// Cheap bounding check: is any corner near the circle at all
pub fn is_close(cube: &Cube, circle: &Circle) -> bool {
    let limit = COARSE_FACTOR * circle.r;
    cube.points
        .iter()
        .any(|p| p.distance_squared(circle.center) < limit * limit)
}

/// Whether any edge of `cube` crosses the boundary of `circle`
///
/// Exact tangency (zero discriminant) counts as a hit.
pub fn intersects(cube: &Cube, circle: &Circle) -> bool {
    if !is_close(cube, circle) {
        return false;
    }
    cube.edges()
        .any(|(p1, p2)| segment_hits_circle(p1, p2, circle.center, circle.r))
}

/// Whether `cube` touches any of `circles`
pub fn intersects_any(cube: &Cube, circles: &[Circle]) -> bool {
    circles.iter().any(|circle| intersects(cube, circle))
}
