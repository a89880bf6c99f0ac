//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep
//! - Caller-supplied RNG only
//! - Left paddle always resolved before right
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, Side, accelerate, apply_spin, bounce_off_walls};
pub use state::{Ball, GameState, InputState, Paddle, ServeDirection, StepOutcome};
pub use tick::{create_initial_state, spawn_ball, step};
