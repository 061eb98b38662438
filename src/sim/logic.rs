//! Per-tick rules tying the ring and the launcher together

use serde::{Deserialize, Serialize};

use super::collision::intersects_any;
use super::launcher::CubeLauncher;
use super::rotator::Rotator;
use super::shapes::CubeKind;
use crate::consts::{CIRCLE_COLOR, FREEZE_COLOR};
use crate::error::{ConfigError, ConfigResult};
use crate::renderer::Canvas;

/// Timers and difficulty ramp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogicConfig {
    /// Seconds the ring stays still after catching a Freeze cube
    pub freeze_time: f64,
    /// Minimum seconds between two accepted direction changes
    pub wait_after_press: f64,
    /// Ramp difficulty as the score grows
    pub dynamic_difficulty: bool,
    /// Score at which the first ramp step applies; doubles after each step
    pub first_ramp_score: u32,
    /// Cube speed factor per ramp step
    pub ramp_speed: f64,
    /// Spawn period factor per ramp step
    pub ramp_period: f64,
    /// Ring angular speed factor per ramp step
    pub ramp_w: f64,
}

impl Default for LogicConfig {
    fn default() -> Self {
        use crate::consts::*;
        Self {
            freeze_time: FREEZE_TIME,
            wait_after_press: WAIT_AFTER_PRESS,
            dynamic_difficulty: true,
            first_ramp_score: FIRST_RAMP_SCORE,
            ramp_speed: RAMP_SPEED,
            ramp_period: RAMP_PERIOD,
            ramp_w: RAMP_RING_W,
        }
    }
}

impl LogicConfig {
    /// Reject settings a ramp step or a timer could turn into a broken game
    pub fn validate(&self) -> ConfigResult<()> {
        for (name, value) in [
            ("freeze time", self.freeze_time),
            ("wait after press", self.wait_after_press),
        ] {
            if value < 0.0 || value.is_nan() {
                return Err(ConfigError::NegativeDuration { name, value });
            }
        }
        if self.first_ramp_score == 0 {
            return Err(ConfigError::ZeroRampScore);
        }
        for (name, value) in [
            ("speed", self.ramp_speed),
            ("period", self.ramp_period),
            ("angular speed", self.ramp_w),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NonPositiveRampFactor { name, value });
            }
        }
        Ok(())
    }
}

/// Game rules over one ring and one launcher
#[derive(Debug, Clone)]
pub struct GameLogic {
    rotator: Rotator,
    launcher: CubeLauncher,
    config: LogicConfig,
    score: u32,
    frozen: bool,
    /// Remaining freeze, counts down every tick
    freeze_timer: f64,
    /// Remaining direction-change lockout, counts down every tick
    press_timer: f64,
    next_ramp_score: u32,
}

impl GameLogic {
    pub fn new(rotator: Rotator, launcher: CubeLauncher, config: LogicConfig) -> Self {
        let next_ramp_score = config.first_ramp_score;
        Self {
            rotator,
            launcher,
            config,
            score: 0,
            frozen: false,
            freeze_timer: 0.0,
            press_timer: 0.0,
            next_ramp_score,
        }
    }

    /// Advance timers, spin the ring unless frozen, move and spawn cubes
    pub fn actions(&mut self, dt: f64) {
        self.press_timer -= dt;
        self.freeze_timer -= dt;
        if self.frozen && self.freeze_timer <= 0.0 {
            self.frozen = false;
            log::debug!("freeze over");
        }

        if !self.frozen {
            self.rotator.rotate(dt);
        }

        self.launcher.move_all(dt);
        self.launcher.generate(dt);
    }

    /// Resolve cube/shield contacts
    ///
    /// Bonus cubes score and vanish, Freeze cubes stop the ring and vanish.
    /// Returns `false` as soon as a Projectile touches a shield; the caller
    /// must end the game.
    pub fn update_score(&mut self) -> bool {
        let hits: Vec<bool> = self
            .launcher
            .cubes()
            .iter()
            .map(|cube| intersects_any(cube, self.rotator.circles()))
            .collect();

        let mut index = 0;
        for hit in hits {
            if !hit {
                index += 1;
                continue;
            }
            match self.launcher.cubes()[index].kind {
                CubeKind::Projectile => {
                    log::info!("projectile hit a shield, final score {}", self.score);
                    return false;
                }
                CubeKind::Bonus => {
                    self.score += 1;
                    log::info!("bonus caught, score {}", self.score);
                }
                CubeKind::Freeze => {
                    self.frozen = true;
                    self.freeze_timer = self.config.freeze_time;
                    log::info!("freeze caught, ring stopped for {:.2}s", self.config.freeze_time);
                }
            }
            self.launcher.remove(index);
        }

        if self.config.dynamic_difficulty && self.score >= self.next_ramp_score {
            self.ramp_up();
        }

        true
    }

    /// One difficulty step: faster cubes, shorter period, faster ring
    fn ramp_up(&mut self) {
        self.next_ramp_score = self.next_ramp_score.saturating_mul(2);
        self.launcher.up_speed(self.config.ramp_speed);
        self.launcher.up_period(self.config.ramp_period);
        self.rotator.up_w(self.config.ramp_w);
        log::info!(
            "difficulty up at score {}, next step at {}",
            self.score,
            self.next_ramp_score
        );
    }

    /// Reverse the ring unless the lockout from the last press is still running
    ///
    /// Returns whether the press was accepted.
    pub fn change_direction(&mut self) -> bool {
        if self.press_timer > 0.0 {
            return false;
        }
        self.rotator.change_direction();
        self.press_timer = self.config.wait_after_press;
        true
    }

    /// Shields (in the freeze color while frozen), then cubes
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let ring_color = if self.frozen { FREEZE_COLOR } else { CIRCLE_COLOR };
        self.rotator.draw(canvas, ring_color);
        self.launcher.draw(canvas);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn next_ramp_score(&self) -> u32 {
        self.next_ramp_score
    }

    pub fn rotator(&self) -> &Rotator {
        &self.rotator
    }

    pub fn launcher(&self) -> &CubeLauncher {
        &self.launcher
    }

    pub fn launcher_mut(&mut self) -> &mut CubeLauncher {
        &mut self.launcher
    }
}
