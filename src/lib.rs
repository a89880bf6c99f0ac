//! Pong Deluxe - A two-player Pong simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scoring)
//! - `config`: Validated game parameters
//! - `platform`: Input mapping and fixed-step timing for hosts
//! - `game`: Host-side session tying input, simulation, HUD and audio together

pub mod audio;
pub mod config;
pub mod error;
pub mod game;
pub mod hud;
pub mod platform;
pub mod sim;

pub use config::GameConfig;
pub use error::{ConfigError, ConfigResult};
pub use game::{FrameReport, Game};

/// Host loop constants
pub mod consts {
    /// Maximum simulation steps per display frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the clock will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
