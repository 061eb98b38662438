//! Ring of shield circles orbiting a common pivot

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::shapes::Circle;
use crate::error::{ConfigError, ConfigResult};
use crate::geometry::{Vertex, polar_to_cartesian, rotate_about};
use crate::renderer::{Canvas, Color};

/// Ring geometry and speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotatorConfig {
    /// Pivot of the ring
    pub center: Vertex,
    /// Ring radius (pivot to circle centers)
    pub ring_radius: f64,
    /// Radius of each shield
    pub circle_radius: f64,
    /// Angular speed in rad/s
    pub w: f64,
    /// Number of shields
    pub count: usize,
}

impl Default for RotatorConfig {
    fn default() -> Self {
        use crate::consts::*;
        Self {
            center: Vertex::new(
                f64::from(SCREEN_WIDTH) / 2.0,
                f64::from(SCREEN_HEIGHT) / 2.0,
            ),
            ring_radius: RING_RADIUS,
            circle_radius: SHIELD_RADIUS,
            w: RING_ANGULAR_SPEED,
            count: SHIELD_COUNT,
        }
    }
}

impl RotatorConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.count < 1 {
            return Err(ConfigError::NoCircles);
        }
        if self.ring_radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius {
                name: "ring",
                value: self.ring_radius,
            });
        }
        if self.circle_radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius {
                name: "circle",
                value: self.circle_radius,
            });
        }
        Ok(())
    }
}

/// Shield circles evenly spaced on a rotating ring
///
/// Direction flips are toggles; the speed only ever ratchets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rotator {
    center: Vertex,
    ring_radius: f64,
    w: f64,
    circles: Vec<Circle>,
    forward: bool,
}

impl Rotator {
    /// Place `count` circles at angles `2πi/count` around the pivot
    pub fn new(config: &RotatorConfig) -> ConfigResult<Self> {
        config.validate()?;

        let interval = TAU / config.count as f64;
        let circles = (0..config.count)
            .map(|i| {
                let phi = interval * i as f64;
                Circle::new(
                    config.center + polar_to_cartesian(config.ring_radius, phi),
                    config.circle_radius,
                )
            })
            .collect();

        Ok(Self {
            center: config.center,
            ring_radius: config.ring_radius,
            w: config.w,
            circles,
            forward: true,
        })
    }

    /// Reverse rotation, effective from the next `rotate`
    pub fn change_direction(&mut self) {
        self.forward = !self.forward;
    }

    /// Rotate every circle about the pivot by `±w * dt`
    pub fn rotate(&mut self, dt: f64) {
        let phi = if self.forward {
            self.w * dt
        } else {
            -self.w * dt
        };
        for circle in &mut self.circles {
            circle.center = rotate_about(circle.center, self.center, phi);
        }
    }

    /// Scale angular speed by `alpha`
    pub fn up_w(&mut self, alpha: f64) {
        self.w *= alpha;
    }

    /// Fill every shield with `color`
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, color: Color) {
        for circle in &self.circles {
            circle.fill(canvas, color);
        }
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn center(&self) -> Vertex {
        self.center
    }

    pub fn ring_radius(&self) -> f64 {
        self.ring_radius
    }

    pub fn w(&self) -> f64 {
        self.w
    }

    pub fn is_forward(&self) -> bool {
        self.forward
    }
}
