//! Game settings
//!
//! Everything tunable about a run, loadable from JSON. Missing fields fall
//! back to the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::sim::{LauncherConfig, LogicConfig, RotatorConfig};

/// All tunables for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Seed for the launcher's random streams
    pub seed: u64,
    /// Screen size the launcher spawns into
    pub width: i32,
    pub height: i32,
    pub rotator: RotatorConfig,
    pub launcher: LauncherConfig,
    pub logic: LogicConfig,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            width: crate::consts::SCREEN_WIDTH,
            height: crate::consts::SCREEN_HEIGHT,
            rotator: RotatorConfig::default(),
            launcher: LauncherConfig::default(),
            logic: LogicConfig::default(),
        }
    }
}

impl GameSettings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Run every construction-time check without building anything
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::InvalidScreen {
                width: self.width,
                height: self.height,
            });
        }
        self.rotator.validate()?;
        self.launcher.validate()?;
        self.logic.validate()
    }
}
