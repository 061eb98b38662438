//! Shield Ring entry point
//!
//! Headless native host: runs the fixed-timestep loop with a simple autopilot
//! on the reverse key and renders every frame into an off-screen buffer.
//!
//! Usage: `shield-ring [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
use std::process::ExitCode;

#[cfg(not(target_arch = "wasm32"))]
use shield_ring::{
    GameSettings,
    consts::{MAX_SUBSTEPS, SIM_DT},
    renderer::PixelBuffer,
    sim::{CubeKind, Game, Input, is_close},
};

/// Simulated host frame length; deliberately not a multiple of `SIM_DT`
#[cfg(not(target_arch = "wasm32"))]
const FRAME_DT: f64 = 1.0 / 50.0;

/// Stop after this many frames even if nobody lost
#[cfg(not(target_arch = "wasm32"))]
const MAX_FRAMES: u32 = 50 * 180;

#[cfg(not(target_arch = "wasm32"))]
fn load_settings() -> Result<GameSettings, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading settings from {path}");
            let json = std::fs::read_to_string(&path)?;
            Ok(GameSettings::from_json(&json)?)
        }
        None => Ok(GameSettings::default()),
    }
}

/// Press reverse whenever a projectile gets near a shield
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(game: &Game) -> Input {
    let logic = game.logic();
    let danger = logic.launcher().cubes().iter().any(|cube| {
        cube.kind == CubeKind::Projectile
            && logic.rotator().circles().iter().any(|circle| is_close(cube, circle))
    });
    Input {
        escape: false,
        reverse: danger,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::init();
    log::info!("Shield Ring (headless) starting...");

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("invalid settings: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut game = match Game::initialize(&settings) {
        Ok(game) => game,
        Err(e) => {
            log::error!("failed to initialize: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut frame = PixelBuffer::new(settings.width, settings.height);
    let mut accumulator = 0.0;
    let mut frames = 0;

    while !game.quit_requested() && frames < MAX_FRAMES {
        accumulator += FRAME_DT;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = autopilot(&game);
            game.act(SIM_DT, &input);
            accumulator -= SIM_DT;
            substeps += 1;
            if game.quit_requested() {
                break;
            }
        }

        game.draw(&mut frame);
        frames += 1;
    }

    log::info!(
        "stopped after {frames} frames ({:.1}s simulated), {} bytes per frame",
        f64::from(frames) * FRAME_DT,
        frame.as_bytes().len()
    );
    println!("score: {}", game.score());
    game.finalize();
    ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host; the library is usable from wasm directly
}
