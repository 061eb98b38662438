//! Vertex helpers
//!
//! Positions and velocities are `glam::DVec2`; pixel coordinates are
//! `glam::IVec2`. Every float-to-pixel conversion goes through
//! [`round_to_int`] so outlines and fill seeds agree on boundary pixels.

use glam::{DVec2, IVec2};

/// Floating-point 2D vertex (position or displacement)
pub type Vertex = DVec2;

/// Round to the nearest integer, ties away from zero
#[inline]
pub fn round_to_int(v: f64) -> i32 {
    v.round() as i32
}

/// Round both components to a pixel coordinate
#[inline]
pub fn to_pixel(v: Vertex) -> IVec2 {
    IVec2::new(round_to_int(v.x), round_to_int(v.y))
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> Vertex {
    Vertex::new(r * theta.cos(), r * theta.sin())
}

/// Rotate `point` about `pivot` by `phi` radians (counter-clockwise in math
/// orientation, clockwise on screen since y grows downward)
#[inline]
pub fn rotate_about(point: Vertex, pivot: Vertex, phi: f64) -> Vertex {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let v = point - pivot;
    pivot
        + Vertex::new(
            v.x * cos_phi - v.y * sin_phi,
            v.x * sin_phi + v.y * cos_phi,
        )
}

/// Wrap an index that may overshoot `n` by at most one lap
#[inline]
pub fn circle_idx(i: usize, n: usize) -> usize {
    if i < n { i } else { i - n }
}

/// Binomial coefficients C(n-1, k) for k in 0..n, i.e. the Bernstein weights
/// of a Bézier curve with `n` control points
///
/// Exact up to 68 points. Past that the middle coefficients no longer fit in
/// a `u64` and saturate at `u64::MAX`.
pub fn binomial_coeffs(n: usize) -> Vec<u64> {
    let Some(m) = n.checked_sub(1) else {
        return Vec::new();
    };
    let mut coeffs = vec![1u64; n];
    let mut c = Some(1u128);
    for k in 1..=m / 2 {
        // k * C(m, k) = C(m, k - 1) * (m - k + 1), so the division is exact
        c = c
            .and_then(|c| c.checked_mul((m - k + 1) as u128))
            .map(|c| c / k as u128);
        let value = c.and_then(|c| u64::try_from(c).ok()).unwrap_or(u64::MAX);
        coeffs[k] = value;
        coeffs[m - k] = value;
    }
    coeffs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_round_to_int_ties_away_from_zero() {
        assert_eq!(round_to_int(0.5), 1);
        assert_eq!(round_to_int(-0.5), -1);
        assert_eq!(round_to_int(2.49), 2);
        assert_eq!(round_to_int(-2.51), -3);
    }

    #[test]
    fn test_to_pixel() {
        assert_eq!(to_pixel(Vertex::new(10.4, 19.6)), IVec2::new(10, 20));
    }

    #[test]
    fn test_rotate_about_quarter_turn() {
        let p = rotate_about(Vertex::new(2.0, 1.0), Vertex::new(1.0, 1.0), PI / 2.0);
        assert!((p.x - 1.0).abs() < 1e-12);
        assert!((p.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_about_preserves_distance() {
        let pivot = Vertex::new(-3.0, 7.0);
        let p = Vertex::new(4.0, -2.0);
        let q = rotate_about(p, pivot, 1.234);
        assert!((p.distance(pivot) - q.distance(pivot)).abs() < 1e-9);
    }

    #[test]
    fn test_circle_idx() {
        assert_eq!(circle_idx(3, 4), 3);
        assert_eq!(circle_idx(4, 4), 0);
    }

    #[test]
    fn test_binomial_coeffs() {
        assert_eq!(binomial_coeffs(1), vec![1]);
        assert_eq!(binomial_coeffs(2), vec![1, 1]);
        assert_eq!(binomial_coeffs(3), vec![1, 2, 1]);
        assert_eq!(binomial_coeffs(4), vec![1, 3, 3, 1]);
        assert_eq!(binomial_coeffs(5), vec![1, 4, 6, 4, 1]);
        assert_eq!(binomial_coeffs(6), vec![1, 5, 10, 10, 5, 1]);
        assert!(binomial_coeffs(0).is_empty());
    }

    #[test]
    fn test_binomial_coeffs_large_rows() {
        // C(67, 33) is the largest central coefficient that fits in u64
        let row = binomial_coeffs(68);
        assert_eq!(row.len(), 68);
        assert_eq!(row[33], 14_226_520_737_620_288_370);
        assert_eq!(row[1], 67);
        assert_eq!(row[66], 67);

        // Rows past the limit saturate in the middle and stay exact at the ends
        let row = binomial_coeffs(100);
        assert_eq!(row[0], 1);
        assert_eq!(row[1], 99);
        assert_eq!(row[2], 4851);
        assert_eq!(row[49], u64::MAX);
        assert_eq!(row[99], 1);

        let row = binomial_coeffs(300);
        assert_eq!(row[150], u64::MAX);
        assert_eq!(row[298], 299);
    }
}
