//! Game configuration
//!
//! Immutable numeric parameters for the playfield, physics and audio.
//! Loaded once at startup (defaults or a JSON document) and validated
//! before the first simulation step.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Screen dimensions and frame cadence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,
    /// Target simulation rate (steps per second)
    pub fps: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 540.0,
            fps: 60,
        }
    }
}

impl ScreenConfig {
    /// Fixed simulation timestep derived from the target rate
    pub fn step_dt(&self) -> f32 {
        1.0 / self.fps as f32
    }
}

/// Ball and paddle physics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub ball_radius: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between the screen edge and the paddle's back
    pub paddle_padding: f32,
    /// Pixels per second squared
    pub paddle_acceleration: f32,
    /// Clamp to keep control snappy
    pub paddle_max_speed: f32,
    /// Horizontal serve speed, drawn uniformly
    pub ball_speed_range: (f32, f32),
    /// Vertical serve speed magnitude, drawn uniformly
    pub ball_vertical_range: (f32, f32),
    /// Multiplier applied to both velocity components on each paddle hit
    pub ball_speedup_factor: f32,
    pub ball_speed_cap: f32,
    /// Vertical velocity added for a hit at the very tip of a paddle
    pub spin_factor: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            ball_radius: 14.0,
            paddle_width: 12.0,
            paddle_height: 110.0,
            paddle_padding: 48.0,
            paddle_acceleration: 1800.0,
            paddle_max_speed: 720.0,
            ball_speed_range: (320.0, 380.0),
            ball_vertical_range: (180.0, 240.0),
            ball_speedup_factor: 1.05,
            ball_speed_cap: 820.0,
            spin_factor: 160.0,
        }
    }
}

/// A synthesized sine tone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    /// Hz
    pub frequency: f32,
    /// Seconds
    pub duration: f32,
    /// 0.0 - 1.0
    pub volume: f32,
}

/// Sound effect parameters (consumed by the host's audio backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub sample_rate: u32,
    pub channels: u16,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    pub paddle_tone: Tone,
    pub score_tone: Tone,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            channels: 2,
            master_volume: 1.0,
            paddle_tone: Tone {
                frequency: 520.0,
                duration: 0.09,
                volume: 0.6,
            },
            score_tone: Tone {
                frequency: 220.0,
                duration: 0.28,
                volume: 0.5,
            },
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen: ScreenConfig,
    pub physics: PhysicsConfig,
    pub audio: AudioConfig,
}

impl GameConfig {
    /// Build a configuration, rejecting degenerate values
    pub fn new(
        screen: ScreenConfig,
        physics: PhysicsConfig,
        audio: AudioConfig,
    ) -> ConfigResult<Self> {
        let config = Self {
            screen,
            physics,
            audio,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a (possibly partial) JSON document; missing fields keep defaults
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> ConfigResult<()> {
        let screen = &self.screen;
        let physics = &self.physics;

        positive("screen.width", screen.width)?;
        positive("screen.height", screen.height)?;
        if screen.fps == 0 {
            return Err(ConfigError::ZeroRate { name: "screen.fps" });
        }

        positive("physics.ball_radius", physics.ball_radius)?;
        positive("physics.paddle_width", physics.paddle_width)?;
        positive("physics.paddle_height", physics.paddle_height)?;
        non_negative("physics.paddle_padding", physics.paddle_padding)?;
        positive("physics.paddle_acceleration", physics.paddle_acceleration)?;
        positive("physics.paddle_max_speed", physics.paddle_max_speed)?;
        positive("physics.ball_speedup_factor", physics.ball_speedup_factor)?;
        positive("physics.ball_speed_cap", physics.ball_speed_cap)?;
        non_negative("physics.spin_factor", physics.spin_factor)?;
        range("physics.ball_speed_range", physics.ball_speed_range)?;
        range("physics.ball_vertical_range", physics.ball_vertical_range)?;

        if physics.paddle_height > screen.height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: physics.paddle_height,
                screen_height: screen.height,
            });
        }

        let audio = &self.audio;
        if audio.sample_rate == 0 {
            return Err(ConfigError::ZeroRate {
                name: "audio.sample_rate",
            });
        }
        if audio.channels == 0 {
            return Err(ConfigError::ZeroRate {
                name: "audio.channels",
            });
        }

        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn range(name: &'static str, (min, max): (f32, f32)) -> ConfigResult<()> {
    if min.is_finite() && max.is_finite() && 0.0 <= min && min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange { name, min, max })
    }
}
