//! Scan conversion onto a [`Canvas`]
//!
//! Lines use Bresenham stepping, circles the integer midpoint recurrence.
//! There is no arc primitive: arcs are stitched from cubic Bézier spans of at
//! most π/4, each flattened into short line runs. Solid shapes are an outline
//! followed by a 4-connected stack flood fill.

use glam::IVec2;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use super::pixel_buffer::{Canvas, Clip, Color};
use crate::geometry::{Vertex, binomial_coeffs, polar_to_cartesian, to_pixel};

/// Parameter step used when sampling a Bézier curve
const BEZIER_SAMPLES: u32 = 100;

/// Consecutive samples closer than this (squared pixels) are merged
const BEZIER_MIN_DIST2: i32 = 3;

/// A full π/4 span is still used if it overshoots the arc end by this much
const ARC_OVERSHOOT: f64 = 1e-2;

/// Remaining arc below this is considered closed
const ARC_EPSILON: f64 = 1e-9;

/// Draw an 8-connected segment between two pixels (inclusive)
///
/// Endpoints are normalized so that `a -> b` and `b -> a` plot the same set.
pub fn draw_line<C: Canvas + ?Sized>(canvas: &mut C, a: IVec2, b: IVec2, color: Color, clip: Clip) {
    let (from, to) = if (a.x, a.y) <= (b.x, b.y) { (a, b) } else { (b, a) };

    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let step_x = if from.x < to.x { 1 } else { -1 };
    let step_y = if from.y < to.y { 1 } else { -1 };
    let mut error = dx + dy;
    let mut p = from;

    loop {
        canvas.plot(p, color, clip);
        if p == to {
            break;
        }
        let e2 = 2 * error;
        if e2 >= dy {
            error += dy;
            p.x += step_x;
        }
        if e2 <= dx {
            error += dx;
            p.y += step_y;
        }
    }
}

/// Draw a segment between two float points, rounding each to a pixel first
pub fn draw_line_f<C: Canvas + ?Sized>(
    canvas: &mut C,
    a: Vertex,
    b: Vertex,
    color: Color,
    clip: Clip,
) {
    draw_line(canvas, to_pixel(a), to_pixel(b), color, clip);
}

/// Draw a closed polyline through `points`
pub fn draw_polygon<C: Canvas + ?Sized>(canvas: &mut C, points: &[Vertex], color: Color, clip: Clip) {
    for (i, &p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        draw_line_f(canvas, p, q, color, clip);
    }
}

/// Plot the 8 octant reflections of `(x, y)` around `center`
fn plot_octants<C: Canvas + ?Sized>(canvas: &mut C, center: IVec2, x: i32, y: i32, color: Color, clip: Clip) {
    for (ox, oy) in [
        (x, y),
        (-x, y),
        (x, -y),
        (-x, -y),
        (y, x),
        (-y, x),
        (y, -x),
        (-y, -x),
    ] {
        canvas.plot(center + IVec2::new(ox, oy), color, clip);
    }
}

/// Midpoint circle outline
pub fn draw_circle<C: Canvas + ?Sized>(
    canvas: &mut C,
    center: IVec2,
    radius: i32,
    color: Color,
    clip: Clip,
) {
    let mut x = 0;
    let mut y = radius;
    let mut d = 3 - 2 * radius;
    plot_octants(canvas, center, x, y, color, clip);
    while y >= x {
        x += 1;
        if d > 0 {
            y -= 1;
            d += 4 * (x - y) + 10;
        } else {
            d += 4 * x + 6;
        }
        plot_octants(canvas, center, x, y, color, clip);
    }
}

/// Evaluate a Bézier curve of arbitrary degree at `t`
pub fn bezier_point(points: &[Vertex], coeffs: &[u64], t: f64) -> Vertex {
    let n = points.len();
    points
        .iter()
        .zip(coeffs)
        .enumerate()
        .fold(Vertex::ZERO, |acc, (i, (&p, &c))| {
            let weight = c as f64 * (1.0 - t).powi((n - i - 1) as i32) * t.powi(i as i32);
            acc + p * weight
        })
}

/// Flatten a Bézier curve into line runs
///
/// Samples are taken every 0.01 of the parameter; a line is emitted only once
/// the rounded sample has moved more than √3 pixels from the last plotted one.
/// The last run always ends exactly on the final control point.
pub fn draw_bezier_curve<C: Canvas + ?Sized>(
    canvas: &mut C,
    points: &[Vertex],
    color: Color,
    clip: Clip,
) {
    let (Some(&first), Some(&end)) = (points.first(), points.last()) else {
        return;
    };
    let coeffs = binomial_coeffs(points.len());

    let mut last = to_pixel(first);
    for step in 0..=BEZIER_SAMPLES {
        let t = f64::from(step) / f64::from(BEZIER_SAMPLES);
        let cur = to_pixel(bezier_point(points, &coeffs, t));
        if (cur - last).length_squared() > BEZIER_MIN_DIST2 {
            draw_line(canvas, last, cur, color, clip);
            last = cur;
        }
    }
    draw_line(canvas, last, to_pixel(end), color, clip);
}

/// Cubic control points approximating the arc `[phi, phi + step]`
pub fn arc_control_points(center: Vertex, r: f64, phi: f64, step: f64) -> [Vertex; 4] {
    // Tangent lines at both ends meet at radius `big_r` on the bisector
    let big_r = r / (FRAC_PI_2 - step / 2.0).sin();
    let f = 4.0 / 3.0 / (1.0 + 1.0 / (step / 4.0).cos());

    let p1 = center + polar_to_cartesian(r, phi);
    let p4 = center + polar_to_cartesian(r, phi + step);
    let pt = center + polar_to_cartesian(big_r, phi + step / 2.0);
    let p2 = p1 + (pt - p1) * f;
    let p3 = p4 + (pt - p4) * f;
    [p1, p2, p3, p4]
}

/// Circular arc from `phi1` to `phi2` (counter-clockwise, `phi1 < phi2`)
///
/// Built from cubic Bézier spans of π/4; the final span shrinks to land on
/// `phi2`. An empty or inverted range draws nothing.
pub fn draw_arc<C: Canvas + ?Sized>(
    canvas: &mut C,
    center: Vertex,
    r: f64,
    phi1: f64,
    phi2: f64,
    color: Color,
    clip: Clip,
) {
    let mut phi = phi1;
    while phi2 - phi > ARC_EPSILON {
        let remaining = phi2 - phi;
        let step = if FRAC_PI_4 <= remaining + ARC_OVERSHOOT {
            FRAC_PI_4
        } else {
            remaining
        };
        let span = arc_control_points(center, r, phi, step);
        draw_bezier_curve(canvas, &span, color, clip);
        phi += step;
    }
}

/// 4-connected flood fill from `seed`
///
/// Spreads through every pixel that is neither `color` nor `stop`. The region
/// must be enclosed by a continuous `stop` boundary (or the surface edge),
/// otherwise the fill covers everything reachable. A seed outside the surface
/// is replaced by its first in-bounds, unpainted 4-neighbor.
pub fn flood_fill<C: Canvas + ?Sized>(canvas: &mut C, seed: IVec2, color: Color, stop: Color) {
    const NEIGHBORS: [IVec2; 4] = [IVec2::X, IVec2::NEG_X, IVec2::Y, IVec2::NEG_Y];

    let fillable = |canvas: &C, p: IVec2| {
        canvas
            .get_pixel(p.x, p.y)
            .is_some_and(|c| c != color && c != stop)
    };

    let mut stack = Vec::new();
    if canvas.is_point_in_image(seed.x, seed.y) {
        stack.push(seed);
    } else if let Some(p) = NEIGHBORS
        .iter()
        .map(|&d| seed + d)
        .find(|&p| fillable(&*canvas, p))
    {
        stack.push(p);
    }

    while let Some(p) = stack.pop() {
        if !fillable(&*canvas, p) {
            continue;
        }
        canvas.plot(p, color, Clip::SkipMiss);
        for d in NEIGHBORS {
            let next = p + d;
            if fillable(&*canvas, next) {
                stack.push(next);
            }
        }
    }
}

/// Paint solid bands of width `size` along all four surface edges
pub fn draw_frame_bounds<C: Canvas + ?Sized>(canvas: &mut C, size: i32, color: Color) {
    let (width, height) = (canvas.width(), canvas.height());
    // Top and bottom span the full width, the sides only the rows between
    canvas.fill_rect(IVec2::ZERO, IVec2::new(width, size), color);
    canvas.fill_rect(IVec2::new(0, height - size), IVec2::new(width, height), color);
    canvas.fill_rect(IVec2::new(0, size), IVec2::new(size, height - size), color);
    canvas.fill_rect(
        IVec2::new(width - size, size),
        IVec2::new(width, height - size),
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::PixelBuffer;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::f64::consts::TAU;

    const INK: Color = Color::new(255, 255, 255);
    const PAINT: Color = Color::new(0, 200, 0);

    fn lit(buf: &PixelBuffer, color: Color) -> HashSet<(i32, i32)> {
        let mut set = HashSet::new();
        for y in 0..buf.height() {
            for x in 0..buf.width() {
                if buf.get_pixel(x, y) == Some(color) {
                    set.insert((x, y));
                }
            }
        }
        set
    }

    fn is_8_connected(pixels: &HashSet<(i32, i32)>) -> bool {
        let Some(&start) = pixels.iter().next() else {
            return true;
        };
        let mut seen = HashSet::from([start]);
        let mut stack = vec![start];
        while let Some((x, y)) = stack.pop() {
            for dx in -1..=1 {
                for dy in -1..=1 {
                    let n = (x + dx, y + dy);
                    if pixels.contains(&n) && seen.insert(n) {
                        stack.push(n);
                    }
                }
            }
        }
        seen.len() == pixels.len()
    }

    #[test]
    fn test_line_horizontal_vertical_diagonal() {
        let mut buf = PixelBuffer::new(20, 20);
        draw_line(&mut buf, IVec2::new(2, 3), IVec2::new(8, 3), INK, Clip::Strict);
        assert_eq!(lit(&buf, INK), (2..=8).map(|x| (x, 3)).collect());

        let mut buf = PixelBuffer::new(20, 20);
        draw_line(&mut buf, IVec2::new(5, 9), IVec2::new(5, 1), INK, Clip::Strict);
        assert_eq!(lit(&buf, INK), (1..=9).map(|y| (5, y)).collect());

        let mut buf = PixelBuffer::new(20, 20);
        draw_line(&mut buf, IVec2::new(0, 10), IVec2::new(6, 4), INK, Clip::Strict);
        assert_eq!(lit(&buf, INK), (0..=6).map(|i| (i, 10 - i)).collect());
    }

    #[test]
    fn test_line_single_point() {
        let mut buf = PixelBuffer::new(4, 4);
        draw_line(&mut buf, IVec2::new(1, 1), IVec2::new(1, 1), INK, Clip::Strict);
        assert_eq!(buf.count(INK), 1);
    }

    #[test]
    fn test_line_skip_miss_partially_outside() {
        let mut buf = PixelBuffer::new(10, 10);
        draw_line(&mut buf, IVec2::new(-5, 5), IVec2::new(15, 5), INK, Clip::SkipMiss);
        assert_eq!(buf.count(INK), 10);
    }

    #[test]
    fn test_line_float_endpoints_round() {
        let mut buf = PixelBuffer::new(10, 10);
        draw_line_f(
            &mut buf,
            Vertex::new(1.4, 2.5),
            Vertex::new(6.6, 2.4),
            INK,
            Clip::Strict,
        );
        // (1, 3) -> (7, 2)
        let pixels = lit(&buf, INK);
        assert!(pixels.contains(&(1, 3)));
        assert!(pixels.contains(&(7, 2)));
        assert!(is_8_connected(&pixels));
    }

    proptest! {
        #[test]
        fn prop_line_symmetric_and_connected(
            x1 in 0i32..40, y1 in 0i32..40, x2 in 0i32..40, y2 in 0i32..40,
        ) {
            let a = IVec2::new(x1, y1);
            let b = IVec2::new(x2, y2);
            let mut fwd = PixelBuffer::new(40, 40);
            let mut back = PixelBuffer::new(40, 40);
            draw_line(&mut fwd, a, b, INK, Clip::Strict);
            draw_line(&mut back, b, a, INK, Clip::Strict);

            let pixels = lit(&fwd, INK);
            prop_assert_eq!(&pixels, &lit(&back, INK));
            prop_assert!(pixels.contains(&(x1, y1)));
            prop_assert!(pixels.contains(&(x2, y2)));
            prop_assert!(is_8_connected(&pixels));
            let major = (x2 - x1).abs().max((y2 - y1).abs());
            prop_assert!(pixels.len() as i32 >= major + 1);
        }
    }

    #[test]
    fn test_midpoint_circle_ring() {
        let mut buf = PixelBuffer::new(64, 64);
        let center = IVec2::new(32, 32);
        draw_circle(&mut buf, center, 20, INK, Clip::Strict);
        let pixels = lit(&buf, INK);
        assert!(is_8_connected(&pixels));
        for &(x, y) in &pixels {
            let d = (((x - 32).pow(2) + (y - 32).pow(2)) as f64).sqrt();
            assert!((d - 20.0).abs() < 1.5, "pixel ({x}, {y}) at distance {d}");
        }
        // Cardinal points
        for p in [(52, 32), (12, 32), (32, 52), (32, 12)] {
            assert!(pixels.contains(&p));
        }
    }

    #[test]
    fn test_bezier_straight_control_polygon() {
        let mut buf = PixelBuffer::new(30, 10);
        let points = [
            Vertex::new(2.0, 5.0),
            Vertex::new(9.0, 5.0),
            Vertex::new(16.0, 5.0),
            Vertex::new(23.0, 5.0),
        ];
        draw_bezier_curve(&mut buf, &points, INK, Clip::Strict);
        assert_eq!(lit(&buf, INK), (2..=23).map(|x| (x, 5)).collect());
    }

    #[test]
    fn test_bezier_point_endpoints() {
        let points = [
            Vertex::new(0.0, 0.0),
            Vertex::new(1.0, 3.0),
            Vertex::new(4.0, 3.0),
            Vertex::new(5.0, 0.0),
        ];
        let coeffs = binomial_coeffs(4);
        assert!(bezier_point(&points, &coeffs, 0.0).distance(points[0]) < 1e-12);
        assert!(bezier_point(&points, &coeffs, 1.0).distance(points[3]) < 1e-12);
        let mid = bezier_point(&points, &coeffs, 0.5);
        assert!((mid.x - 2.5).abs() < 1e-12);
        assert!((mid.y - 2.25).abs() < 1e-12);
    }

    #[test]
    fn test_arc_control_points_quarter_span() {
        let cps = arc_control_points(Vertex::ZERO, 100.0, 0.0, FRAC_PI_4);
        assert!(cps[0].distance(Vertex::new(100.0, 0.0)) < 1e-9);
        assert!((cps[3].length() - 100.0).abs() < 1e-9);
        // Inner control points sit just outside the circle
        for p in &cps[1..3] {
            assert!(p.length() > 100.0 && p.length() < 104.0);
        }
    }

    #[test]
    fn test_full_bezier_circle_is_closed_ring() {
        let mut buf = PixelBuffer::new(100, 100);
        let center = Vertex::new(50.0, 50.0);
        let r = 30.0;
        draw_arc(&mut buf, center, r, 0.0, TAU, INK, Clip::Strict);
        let pixels = lit(&buf, INK);
        assert!(is_8_connected(&pixels));
        for &(x, y) in &pixels {
            let d = Vertex::new(x as f64, y as f64).distance(center);
            assert!((d - r).abs() <= 2.0, "pixel ({x}, {y}) at distance {d}");
        }
        // Every sampled direction hits the ring within 2 pixels
        for k in 0..72 {
            let theta = k as f64 * TAU / 72.0;
            let target = center + polar_to_cartesian(r, theta);
            let near = pixels.iter().any(|&(x, y)| {
                Vertex::new(x as f64, y as f64).distance(target) <= 2.0
            });
            assert!(near, "no ring pixel near angle {theta}");
        }
    }

    #[test]
    fn test_partial_arc_stays_in_range() {
        let mut buf = PixelBuffer::new(100, 100);
        let center = Vertex::new(50.0, 50.0);
        draw_arc(&mut buf, center, 30.0, 0.0, 1.0, INK, Clip::Strict);
        for (x, y) in lit(&buf, INK) {
            let theta = (y as f64 - 50.0).atan2(x as f64 - 50.0);
            assert!((-0.1..=1.1).contains(&theta), "angle {theta} outside arc");
        }
    }

    #[test]
    fn test_empty_arc_draws_nothing() {
        let mut buf = PixelBuffer::new(50, 50);
        draw_arc(&mut buf, Vertex::new(25.0, 25.0), 10.0, 2.0, 2.0, INK, Clip::Strict);
        draw_arc(&mut buf, Vertex::new(25.0, 25.0), 10.0, 2.0, 1.0, INK, Clip::Strict);
        assert_eq!(buf.count(INK), 0);
    }

    #[test]
    fn test_flood_fill_rectangle_interior() {
        let mut buf = PixelBuffer::new(20, 20);
        let corners = [
            Vertex::new(3.0, 3.0),
            Vertex::new(12.0, 3.0),
            Vertex::new(12.0, 10.0),
            Vertex::new(3.0, 10.0),
        ];
        draw_polygon(&mut buf, &corners, INK, Clip::Strict);
        flood_fill(&mut buf, IVec2::new(7, 6), PAINT, INK);

        // Interior is 8 x 6 pixels
        assert_eq!(buf.count(PAINT), 8 * 6);
        for (x, y) in lit(&buf, PAINT) {
            assert!((4..=11).contains(&x) && (4..=9).contains(&y));
        }
        assert_eq!(buf.count(INK), 2 * 10 + 2 * 6);
    }

    #[test]
    fn test_flood_fill_same_color_outline() {
        let mut buf = PixelBuffer::new(40, 40);
        draw_arc(&mut buf, Vertex::new(20.0, 20.0), 10.0, 0.0, TAU, INK, Clip::Strict);
        let outline = buf.count(INK);
        flood_fill(&mut buf, IVec2::new(20, 20), INK, INK);
        let filled = buf.count(INK);
        assert!(filled > outline);
        // Nothing leaked outside the ring
        assert_eq!(buf.get_pixel(0, 0), Some(Color::BLACK));
        assert_eq!(buf.get_pixel(39, 39), Some(Color::BLACK));
        let area = std::f64::consts::PI * 100.0;
        assert!((filled as f64 - area).abs() < 0.25 * area);
    }

    #[test]
    fn test_flood_fill_seed_outside_uses_neighbor() {
        let mut buf = PixelBuffer::new(10, 10);
        // Box touching the left edge, open on the surface boundary
        draw_line(&mut buf, IVec2::new(0, 2), IVec2::new(4, 2), INK, Clip::Strict);
        draw_line(&mut buf, IVec2::new(4, 2), IVec2::new(4, 6), INK, Clip::Strict);
        draw_line(&mut buf, IVec2::new(4, 6), IVec2::new(0, 6), INK, Clip::Strict);
        flood_fill(&mut buf, IVec2::new(-1, 4), PAINT, INK);
        assert_eq!(buf.count(PAINT), 4 * 3);
        assert_eq!(buf.get_pixel(0, 4), Some(PAINT));
        assert_eq!(buf.get_pixel(5, 4), Some(Color::BLACK));
    }

    #[test]
    fn test_flood_fill_seed_far_outside_is_noop() {
        let mut buf = PixelBuffer::new(10, 10);
        flood_fill(&mut buf, IVec2::new(-5, -5), PAINT, INK);
        assert_eq!(buf.count(PAINT), 0);
    }

    #[test]
    fn test_frame_bounds() {
        let mut buf = PixelBuffer::new(40, 30);
        let orange = Color::new(230, 116, 19);
        draw_frame_bounds(&mut buf, 5, orange);
        assert_eq!(buf.get_pixel(0, 0), Some(orange));
        assert_eq!(buf.get_pixel(4, 15), Some(orange));
        assert_eq!(buf.get_pixel(35, 15), Some(orange));
        assert_eq!(buf.get_pixel(5, 5), Some(Color::BLACK));
        assert_eq!(buf.get_pixel(34, 24), Some(Color::BLACK));
        assert_eq!(buf.count(orange), 40 * 30 - 30 * 20);

        // Bands wider than half the surface just cover it
        let mut buf = PixelBuffer::new(30, 20);
        draw_frame_bounds(&mut buf, 12, orange);
        assert_eq!(buf.count(orange), 30 * 20);
    }
}
