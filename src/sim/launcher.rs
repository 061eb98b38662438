//! Cube spawning and retirement
//!
//! Cubes enter from a random screen edge, aimed at a random point in the
//! central 40% box, and are retired as soon as any corner leaves the screen.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f64::consts::SQRT_2;

use super::shapes::{Cube, CubeKind};
use crate::consts::{BONUS_COLOR, FREEZE_COLOR, PROJECTILE_COLOR};
use crate::error::{ConfigError, ConfigResult};
use crate::geometry::Vertex;
use crate::renderer::Canvas;

/// Stream offset separating the kind roll from the geometry rolls
const KIND_STREAM_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Launcher tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Maximum live cubes; no spawn while at the cap
    pub cube_limit: usize,
    /// Share of Bonus cubes
    pub bonus_part: f64,
    /// Share of Freeze cubes
    pub freeze_part: f64,
    /// Seconds between spawns
    pub period: f64,
    pub speed_min: f64,
    pub speed_max: f64,
    pub w_min: f64,
    pub w_max: f64,
    pub size_min: i32,
    pub size_max: i32,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        use crate::consts::*;
        Self {
            cube_limit: CUBE_LIMIT,
            bonus_part: BONUS_PART,
            freeze_part: FREEZE_PART,
            period: SPAWN_PERIOD,
            speed_min: CUBE_SPEED_MIN,
            speed_max: CUBE_SPEED_MAX,
            w_min: CUBE_W_MIN,
            w_max: CUBE_W_MAX,
            size_min: CUBE_SIZE_MIN,
            size_max: CUBE_SIZE_MAX,
        }
    }
}

fn check_range(name: &'static str, min: f64, max: f64) -> ConfigResult<()> {
    if min <= 0.0 {
        return Err(ConfigError::NonPositiveMinimum { name, value: min });
    }
    if max < min {
        return Err(ConfigError::InvertedRange { name, min, max });
    }
    Ok(())
}

impl LauncherConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        for (name, value) in [("bonus", self.bonus_part), ("freeze", self.freeze_part)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::FractionOutOfRange { name, value });
            }
        }
        if self.period <= 0.0 {
            return Err(ConfigError::NonPositivePeriod(self.period));
        }
        if self.cube_limit == 0 {
            return Err(ConfigError::ZeroCubeLimit);
        }
        check_range("speed", self.speed_min, self.speed_max)?;
        check_range("angular speed", self.w_min, self.w_max)?;
        check_range("size", f64::from(self.size_min), f64::from(self.size_max))?;
        Ok(())
    }
}

/// Map a uniform roll in [0, 1) to a cube kind
///
/// Rolls below `bonus_part` are Bonus, rolls in
/// `[bonus_part, bonus_part + freeze_part)` are Freeze, the rest Projectile.
/// The Freeze test relies on the Bonus test running first.
pub fn classify_kind(value: f64, bonus_part: f64, freeze_part: f64) -> CubeKind {
    if value < bonus_part {
        CubeKind::Bonus
    } else if bonus_part + freeze_part > value {
        CubeKind::Freeze
    } else {
        CubeKind::Projectile
    }
}

/// Spawns, moves and retires cubes
#[derive(Debug, Clone)]
pub struct CubeLauncher {
    cubes: Vec<Cube>,
    config: LauncherConfig,
    width: i32,
    height: i32,
    /// Countdown to the next spawn attempt
    time: f64,
    rng: Pcg32,
    kind_rng: Pcg32,
}

impl CubeLauncher {
    /// Build a launcher whose random streams derive from `seed`
    pub fn new(config: LauncherConfig, width: i32, height: i32, seed: u64) -> ConfigResult<Self> {
        Self::with_rngs(
            config,
            width,
            height,
            Pcg32::seed_from_u64(seed),
            Pcg32::seed_from_u64(seed ^ KIND_STREAM_SALT),
        )
    }

    /// Build a launcher from explicit random sources for spawn geometry and
    /// for kind selection
    pub fn with_rngs(
        config: LauncherConfig,
        width: i32,
        height: i32,
        rng: Pcg32,
        kind_rng: Pcg32,
    ) -> ConfigResult<Self> {
        config.validate()?;
        if width <= 0 || height <= 0 {
            return Err(ConfigError::InvalidScreen { width, height });
        }
        Ok(Self {
            cubes: Vec::new(),
            config,
            width,
            height,
            time: 0.0,
            rng,
            kind_rng,
        })
    }

    /// Advance every cube (translate, then spin) and drop those with a corner
    /// off screen
    pub fn move_all(&mut self, dt: f64) {
        let (width, height) = (self.width, self.height);
        let before = self.cubes.len();
        self.cubes.retain_mut(|cube| {
            cube.step(dt);
            cube.is_inside(width, height)
        });
        let retired = before - self.cubes.len();
        if retired > 0 {
            log::debug!("retired {retired} cube(s), {} live", self.cubes.len());
        }
    }

    /// Count down and, when due and below the cap, launch one cube
    ///
    /// Returns the kind of the launched cube.
    pub fn generate(&mut self, dt: f64) -> Option<CubeKind> {
        self.time -= dt;
        if self.time > 0.0 || self.cubes.len() >= self.config.cube_limit {
            return None;
        }
        self.time = self.config.period;

        let cube = self.roll_cube();
        let kind = cube.kind;
        log::debug!(
            "spawned {kind:?} at ({:.1}, {:.1}) heading ({:.1}, {:.1})",
            cube.center.x,
            cube.center.y,
            cube.velocity.x,
            cube.velocity.y
        );
        self.cubes.push(cube);
        Some(kind)
    }

    fn roll_cube(&mut self) -> Cube {
        let (w, h) = (f64::from(self.width), f64::from(self.height));
        let cfg = &self.config;

        let wall = self.rng.random_range(0..4);
        let place: f64 = self.rng.random();
        let size = f64::from(self.rng.random_range(cfg.size_min..=cfg.size_max));
        let shift = SQRT_2 * size;
        let from = match wall {
            0 => Vertex::new(place * w, shift),
            1 => Vertex::new(w - shift, place * h),
            2 => Vertex::new(place * w, h - shift),
            _ => Vertex::new(shift, place * h),
        };

        let speed = self.rng.random_range(cfg.speed_min..=cfg.speed_max);
        let target = Vertex::new(
            self.rng.random_range(0.3 * w..=0.7 * w),
            self.rng.random_range(0.3 * h..=0.7 * h),
        );
        let velocity = (target - from).normalize_or_zero() * speed;
        let spin = self.rng.random_range(cfg.w_min..=cfg.w_max);

        let kind = self.roll_kind();
        Cube::from_center(from, size, velocity, spin, kind)
    }

    /// Draw one kind from the configured population shares
    pub fn roll_kind(&mut self) -> CubeKind {
        let value: f64 = self.kind_rng.random();
        classify_kind(value, self.config.bonus_part, self.config.freeze_part)
    }

    /// Add an externally built cube
    pub fn spawn(&mut self, cube: Cube) {
        self.cubes.push(cube);
    }

    /// Remove the cube at `index`, keeping spawn order
    pub fn remove(&mut self, index: usize) -> Cube {
        self.cubes.remove(index)
    }

    /// Scale both ends of the speed range by `alpha`
    pub fn up_speed(&mut self, alpha: f64) {
        self.config.speed_min *= alpha;
        self.config.speed_max *= alpha;
    }

    /// Scale the spawn period by `alpha` (below 1 spawns faster)
    pub fn up_period(&mut self, alpha: f64) {
        self.config.period *= alpha;
    }

    /// Fill each cube in its kind color
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for cube in &self.cubes {
            let color = match cube.kind {
                CubeKind::Projectile => PROJECTILE_COLOR,
                CubeKind::Bonus => BONUS_COLOR,
                CubeKind::Freeze => FREEZE_COLOR,
            };
            cube.fill(canvas, color);
        }
    }

    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }
}
