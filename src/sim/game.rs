//! Host-facing game object
//!
//! The frame driver calls `act` then `draw` once per frame. Losing requests
//! quit; the driver decides when to actually stop.

use super::launcher::CubeLauncher;
use super::logic::GameLogic;
use super::rotator::Rotator;
use crate::consts::{
    BACKGROUND_COLOR, BOUNDS_COLOR, BOUNDS_SIZE, SCORE_BACKGROUND_COLOR, SCORE_COLOR,
};
use crate::error::ConfigResult;
use crate::renderer::{Canvas, Scoreboard, draw_frame_bounds};
use crate::settings::GameSettings;

/// Input sampled by the host for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Input {
    /// Quit key
    pub escape: bool,
    /// Reverse-direction key (held keys are debounced by the rules)
    pub reverse: bool,
}

/// Where the run stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// One run of the game
#[derive(Debug, Clone)]
pub struct Game {
    logic: GameLogic,
    scoreboard: Scoreboard,
    phase: GamePhase,
    quit_requested: bool,
}

impl Game {
    /// Build the ring, the launcher and the rules from `settings`
    pub fn initialize(settings: &GameSettings) -> ConfigResult<Self> {
        settings.validate()?;
        let rotator = Rotator::new(&settings.rotator)?;
        let launcher = CubeLauncher::new(
            settings.launcher.clone(),
            settings.width,
            settings.height,
            settings.seed,
        )?;
        log::info!(
            "game initialized: {} shield(s), seed {:#x}, {}x{}",
            settings.rotator.count,
            settings.seed,
            settings.width,
            settings.height
        );
        Ok(Self {
            logic: GameLogic::new(rotator, launcher, settings.logic.clone()),
            scoreboard: Scoreboard::for_screen(
                settings.width,
                BOUNDS_SIZE,
                SCORE_COLOR,
                SCORE_BACKGROUND_COLOR,
            ),
            phase: GamePhase::Playing,
            quit_requested: false,
        })
    }

    /// Advance one tick
    pub fn act(&mut self, dt: f64, input: &Input) {
        if input.escape {
            self.quit_requested = true;
        }
        if self.phase == GamePhase::GameOver {
            return;
        }

        if input.reverse {
            self.logic.change_direction();
        }
        self.logic.actions(dt);
        if !self.logic.update_score() {
            log::info!("game over with score {}", self.logic.score());
            self.phase = GamePhase::GameOver;
            self.quit_requested = true;
        }
    }

    /// Paint the whole frame
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.clear(BACKGROUND_COLOR);
        draw_frame_bounds(canvas, BOUNDS_SIZE, BOUNDS_COLOR);
        self.logic.draw(canvas);
        self.scoreboard.draw(canvas, self.logic.score());
    }

    /// Nothing is held outside the process
    pub fn finalize(self) {
        log::info!("final score {}", self.logic.score());
    }

    pub fn score(&self) -> u32 {
        self.logic.score()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn logic(&self) -> &GameLogic {
        &self.logic
    }

    pub fn logic_mut(&mut self) -> &mut GameLogic {
        &mut self.logic
    }
}
