//! Game state and core simulation types
//!
//! Everything one frame of the simulation reads or writes lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Which side the next ball is served toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServeDirection {
    Left,
    #[default]
    Right,
}

impl ServeDirection {
    /// Horizontal sign of a ball served this way
    pub fn sign(self) -> f32 {
        match self {
            ServeDirection::Left => -1.0,
            ServeDirection::Right => 1.0,
        }
    }
}

/// The ball. Replaced wholesale on every score or restart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
        }
    }
}

/// A vertical paddle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Paddle {
    /// Top edge, clamped to `[0, screen_height - paddle_height]`
    pub y: f32,
    /// Vertical velocity, clamped to `[-max_speed, max_speed]`
    pub velocity: f32,
}

impl Paddle {
    pub fn new(y: f32) -> Self {
        Self { y, velocity: 0.0 }
    }

    /// A stationary paddle centered vertically on the playfield
    pub fn centered(config: &GameConfig) -> Self {
        Self::new(config.screen.height / 2.0 - config.physics.paddle_height / 2.0)
    }

    /// Whether `y` lies on the paddle's face (edges inclusive)
    pub fn contains_y(&self, y: f32, paddle_height: f32) -> bool {
        self.y <= y && y <= self.y + paddle_height
    }

    /// Vertical center of the paddle
    pub fn center(&self, paddle_height: f32) -> f32 {
        self.y + paddle_height / 2.0
    }

    /// Accelerate along `axis`, or brake toward rest when `axis` is 0
    pub fn drive(&mut self, axis: i8, acceleration: f32, max_speed: f32, dt: f32) {
        let delta = acceleration * dt;
        if axis != 0 {
            self.velocity += f32::from(axis.signum()) * delta;
        } else if self.velocity > 0.0 {
            self.velocity = (self.velocity - delta).max(0.0);
        } else if self.velocity < 0.0 {
            self.velocity = (self.velocity + delta).min(0.0);
        }
        self.velocity = self.velocity.clamp(-max_speed, max_speed);
    }

    /// Integrate position and keep the paddle on the playfield.
    /// Velocity survives the clamp so a held key keeps pressing the wall.
    pub fn integrate(&mut self, dt: f32, max_y: f32) {
        self.y = (self.y + self.velocity * dt).clamp(0.0, max_y);
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub score_left: u32,
    pub score_right: u32,
    pub next_serve: ServeDirection,
}

impl GameState {
    /// Build a state around an existing ball with centered paddles and zero scores
    pub fn with_ball(config: &GameConfig, ball: Ball) -> Self {
        Self {
            ball,
            left_paddle: Paddle::centered(config),
            right_paddle: Paddle::centered(config),
            score_left: 0,
            score_right: 0,
            next_serve: ServeDirection::Right,
        }
    }
}

/// Per-frame player input snapshot, produced by the host
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    /// -1 (up), 0 (neutral), 1 (down)
    pub left_axis: i8,
    pub right_axis: i8,
    pub restart_requested: bool,
    pub mouse_restart: bool,
    /// Cursor y; overrides the right paddle's axis for this frame
    pub mouse_paddle_y: Option<f32>,
}

impl InputState {
    /// Whether either restart trigger is set
    pub fn wants_restart(&self) -> bool {
        self.restart_requested || self.mouse_restart
    }

    /// Drop the one-shot flags after a step has consumed them
    pub fn clear_frame_flags(&mut self) {
        self.restart_requested = false;
        self.mouse_restart = false;
        self.mouse_paddle_y = None;
    }
}

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub paddle_hit: bool,
    pub scored_left: bool,
    pub scored_right: bool,
    pub restarted: bool,
}

impl StepOutcome {
    pub fn scored(&self) -> bool {
        self.scored_left || self.scored_right
    }
}
