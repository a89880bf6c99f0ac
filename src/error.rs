//! Configuration error types
//!
//! The simulation step itself cannot fail; everything that can go wrong is
//! caught while building a [`GameConfig`](crate::config::GameConfig).

use thiserror::Error;

/// Errors raised while loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A length or speed that must be strictly positive was not
    #[error("{name} must be positive, got {value}")]
    NonPositive {
        /// Field name
        name: &'static str,
        /// Offending value
        value: f32,
    },

    /// A `(min, max)` range is reversed, negative, or not finite
    #[error("{name} must satisfy 0 <= min <= max, got ({min}, {max})")]
    InvalidRange {
        /// Field name
        name: &'static str,
        /// Lower bound
        min: f32,
        /// Upper bound
        max: f32,
    },

    /// An integer rate (frames or samples per second) of zero
    #[error("{name} must be non-zero")]
    ZeroRate {
        /// Field name
        name: &'static str,
    },

    /// The paddle does not fit inside the playfield
    #[error("paddle height {paddle_height} does not fit screen height {screen_height}")]
    PaddleTooTall {
        /// Configured paddle height
        paddle_height: f32,
        /// Configured screen height
        screen_height: f32,
    },

    /// Malformed JSON document
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config file could not be read
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
