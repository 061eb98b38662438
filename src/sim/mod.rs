//! Deterministic simulation module
//!
//! All gameplay lives here. Given the same settings, seed and inputs, a run
//! replays exactly:
//! - Caller-supplied `dt` only, no clock reads
//! - Seeded RNG only
//! - Cubes kept in spawn order

pub mod collision;
pub mod game;
pub mod launcher;
pub mod logic;
pub mod rotator;
pub mod shapes;

pub use collision::{intersects, intersects_any, is_close, segment_circle_roots, segment_hits_circle};
pub use game::{Game, GamePhase, Input};
pub use launcher::{CubeLauncher, LauncherConfig, classify_kind};
pub use logic::{GameLogic, LogicConfig};
pub use rotator::{Rotator, RotatorConfig};
pub use shapes::{Circle, Cube, CubeKind};
