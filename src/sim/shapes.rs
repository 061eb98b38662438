//! Moving shapes: shield circles and spinning cubes
//!
//! Shapes own their kinematics and know how to draw themselves through the
//! rasterizer; gameplay rules live elsewhere.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::geometry::{Vertex, round_to_int, rotate_about, to_pixel};
use crate::renderer::raster::{draw_arc, draw_circle, draw_polygon, flood_fill};
use crate::renderer::{Canvas, Clip, Color};

/// Gameplay kind of a launched cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CubeKind {
    /// Lethal on contact with a shield
    #[default]
    Projectile,
    /// Adds one point when caught
    Bonus,
    /// Stops the ring for a while when caught
    Freeze,
}

/// A shield circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vertex,
    pub r: f64,
    /// Own linear velocity (ring members leave this at zero)
    pub velocity: Vertex,
}

impl Circle {
    pub fn new(center: Vertex, r: f64) -> Self {
        Self::with_velocity(center, r, Vertex::ZERO)
    }

    pub fn with_velocity(center: Vertex, r: f64, velocity: Vertex) -> Self {
        Self {
            center,
            r,
            velocity,
        }
    }

    /// Translate by `velocity * dt`
    pub fn move_by(&mut self, dt: f64) {
        self.center += self.velocity * dt;
    }

    /// Midpoint-circle outline
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, color: Color) {
        draw_circle(
            canvas,
            to_pixel(self.center),
            round_to_int(self.r),
            color,
            Clip::SkipMiss,
        );
    }

    /// Bézier-approximated arc from `phi1` to `phi2` (counter-clockwise)
    pub fn draw_with_bezier<C: Canvas + ?Sized>(&self, canvas: &mut C, color: Color, phi1: f64, phi2: f64) {
        draw_arc(canvas, self.center, self.r, phi1, phi2, color, Clip::SkipMiss);
    }

    /// Full Bézier outline
    pub fn draw_outline<C: Canvas + ?Sized>(&self, canvas: &mut C, color: Color) {
        self.draw_with_bezier(canvas, color, 0.0, TAU);
    }

    /// Solid disc: Bézier outline, then fill from the center
    pub fn fill<C: Canvas + ?Sized>(&self, canvas: &mut C, color: Color) {
        self.draw_outline(canvas, color);
        flood_fill(canvas, to_pixel(self.center), color, color);
    }

    /// Dashed outline: `count` dashes, each covering half of its `2π/count` slot
    pub fn draw_segment_line<C: Canvas + ?Sized>(&self, canvas: &mut C, color: Color, count: u32) {
        if count == 0 {
            return;
        }
        let delta = TAU / f64::from(count);
        for i in 0..count {
            let phi = delta * f64::from(i);
            self.draw_with_bezier(canvas, color, phi, phi + delta / 2.0);
        }
    }
}

/// A spinning quadrilateral
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    pub points: [Vertex; 4],
    /// Mean of `points`, kept in sync by `move_by`
    pub center: Vertex,
    pub velocity: Vertex,
    /// Angular velocity in rad/s
    pub w: f64,
    pub kind: CubeKind,
}

impl Cube {
    /// Build from four corners in drawing order
    pub fn new(points: [Vertex; 4], velocity: Vertex, w: f64, kind: CubeKind) -> Self {
        let center = points.iter().copied().sum::<Vertex>() / 4.0;
        Self {
            points,
            center,
            velocity,
            w,
            kind,
        }
    }

    /// Axis-aligned square of side `size` centered at `center`
    pub fn from_center(center: Vertex, size: f64, velocity: Vertex, w: f64, kind: CubeKind) -> Self {
        let h = size / 2.0;
        let points = [
            center + Vertex::new(-h, -h),
            center + Vertex::new(h, -h),
            center + Vertex::new(h, h),
            center + Vertex::new(-h, h),
        ];
        Self {
            points,
            center,
            velocity,
            w,
            kind,
        }
    }

    /// Translate corners and centroid by `velocity * dt`
    pub fn move_by(&mut self, dt: f64) {
        let shift = self.velocity * dt;
        for p in &mut self.points {
            *p += shift;
        }
        self.center += shift;
    }

    /// Rotate corners about the centroid by `w * dt`
    pub fn rotate(&mut self, dt: f64) {
        let phi = self.w * dt;
        for p in &mut self.points {
            *p = rotate_about(*p, self.center, phi);
        }
    }

    /// One kinematic step: translate, then spin
    pub fn step(&mut self, dt: f64) {
        self.move_by(dt);
        self.rotate(dt);
    }

    /// Edges as `(start, end)` pairs, wrapping back to the first corner
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[crate::geometry::circle_idx(i + 1, n)]))
    }

    /// Outline only
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, color: Color) {
        draw_polygon(canvas, &self.points, color, Clip::SkipMiss);
    }

    /// Solid quad: outline, then fill from the rounded centroid
    pub fn fill<C: Canvas + ?Sized>(&self, canvas: &mut C, color: Color) {
        self.draw(canvas, color);
        flood_fill(canvas, to_pixel(self.center), color, color);
    }

    /// Whether every corner rounds to a pixel inside the canvas area
    pub fn is_inside(&self, width: i32, height: i32) -> bool {
        self.points.iter().all(|&p| {
            let px = to_pixel(p);
            px.x >= 0 && px.y >= 0 && px.x < width && px.y < height
        })
    }
}
