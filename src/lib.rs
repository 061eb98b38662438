//! Shield Ring - orbiting shields versus incoming cubes
//!
//! Core modules:
//! - `geometry`: Vertex helpers on top of glam (rounding, rotation, polar)
//! - `renderer`: Software rasterizer writing into a packed pixel buffer
//! - `sim`: Gameplay (shapes, collision oracle, rotator, launcher, logic)
//! - `settings`: Serializable game configuration

pub mod error;
pub mod geometry;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use geometry::{
    Vertex, binomial_coeffs, circle_idx, polar_to_cartesian, rotate_about, round_to_int, to_pixel,
};
pub use settings::GameSettings;

/// Game configuration constants
pub mod consts {
    use crate::renderer::Color;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions
    pub const SCREEN_WIDTH: i32 = 1024;
    pub const SCREEN_HEIGHT: i32 = 768;

    /// Width of the decorative frame around the play field
    pub const BOUNDS_SIZE: i32 = 50;

    /// Ring defaults
    pub const RING_RADIUS: f64 = 280.0;
    pub const SHIELD_RADIUS: f64 = 40.0;
    pub const RING_ANGULAR_SPEED: f64 = 2.0;
    pub const SHIELD_COUNT: usize = 2;

    /// Launcher defaults
    pub const CUBE_LIMIT: usize = 4;
    pub const BONUS_PART: f64 = 0.3;
    pub const FREEZE_PART: f64 = 0.1;
    pub const SPAWN_PERIOD: f64 = 1.0;
    pub const CUBE_SPEED_MIN: f64 = 100.0;
    pub const CUBE_SPEED_MAX: f64 = 200.0;
    pub const CUBE_W_MIN: f64 = 1.0;
    pub const CUBE_W_MAX: f64 = 3.0;
    pub const CUBE_SIZE_MIN: i32 = 20;
    pub const CUBE_SIZE_MAX: i32 = 40;

    /// Logic defaults
    pub const FREEZE_TIME: f64 = 1.0;
    pub const WAIT_AFTER_PRESS: f64 = 0.2;
    pub const FIRST_RAMP_SCORE: u32 = 5;
    pub const RAMP_SPEED: f64 = 1.2;
    pub const RAMP_PERIOD: f64 = 0.8;
    pub const RAMP_RING_W: f64 = 1.1;

    /// Palette
    pub const BACKGROUND_COLOR: Color = Color::new(4, 64, 64);
    pub const BOUNDS_COLOR: Color = Color::new(230, 116, 19);
    pub const CIRCLE_COLOR: Color = Color::new(255, 255, 255);
    pub const PROJECTILE_COLOR: Color = Color::new(236, 23, 50);
    pub const BONUS_COLOR: Color = Color::new(176, 230, 0);
    pub const FREEZE_COLOR: Color = Color::new(0, 175, 255);
    pub const SCORE_COLOR: Color = Color::new(230, 116, 19);
    pub const SCORE_BACKGROUND_COLOR: Color = Color::new(230, 230, 230);
}
