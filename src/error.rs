//! Configuration error types.

use thiserror::Error;

/// Rejected game configuration.
///
/// Raised only while building the ring, the launcher or the settings
/// aggregate; nothing in the per-frame path can fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A population fraction lies outside [0, 1].
    #[error("part of {name} cubes must be between 0 and 1, got {value}")]
    FractionOutOfRange { name: &'static str, value: f64 },

    /// Spawn period must be strictly positive.
    #[error("period of cube generation must be greater than zero, got {0}")]
    NonPositivePeriod(f64),

    /// A range minimum (speed, angular speed, size) must be strictly positive.
    #[error("minimum {name} must be greater than zero, got {value}")]
    NonPositiveMinimum { name: &'static str, value: f64 },

    /// Range maximum below its minimum.
    #[error("maximum {name} ({max}) must not be less than the minimum ({min})")]
    InvertedRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    /// The ring needs at least one circle.
    #[error("count of circles must be greater than zero")]
    NoCircles,

    /// Launcher population cap of zero would never spawn.
    #[error("cube limit must be greater than zero")]
    ZeroCubeLimit,

    /// Ring or shield radius must be strictly positive.
    #[error("{name} radius must be greater than zero, got {value}")]
    NonPositiveRadius { name: &'static str, value: f64 },

    /// A difficulty ramp factor must be finite and strictly positive.
    #[error("{name} ramp factor must be a positive number, got {value}")]
    NonPositiveRampFactor { name: &'static str, value: f64 },

    /// The first difficulty threshold must be at least one point.
    #[error("first ramp score must be greater than zero")]
    ZeroRampScore,

    /// Freeze and press lockout durations cannot be negative.
    #[error("{name} must not be negative, got {value}")]
    NegativeDuration { name: &'static str, value: f64 },

    /// Screen too small to hold the spawn and target regions.
    #[error("screen size must be positive, got {width}x{height}")]
    InvalidScreen { width: i32, height: i32 },

    /// Settings text could not be parsed.
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;
