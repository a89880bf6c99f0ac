//! Collision detection and response
//!
//! Walls reflect the ball vertically. Paddles either return the ball (with
//! spin and a speed-up) or, on a miss, award the point to the other side.

use super::state::{Ball, GameState, Paddle, ServeDirection};
use crate::config::{GameConfig, PhysicsConfig};

/// A side of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl From<Side> for ServeDirection {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => ServeDirection::Left,
            Side::Right => ServeDirection::Right,
        }
    }
}

/// Result of resolving paddle contacts for one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    /// Ball was returned by a paddle
    pub paddle_hit: bool,
    /// Side that won the point, if any
    pub scorer: Option<Side>,
}

impl CollisionResult {
    fn point(paddle_hit: bool, scorer: Side) -> Self {
        Self {
            paddle_hit,
            scorer: Some(scorer),
        }
    }
}

/// Resolve walls first, then paddles
pub fn resolve_collisions(state: &mut GameState, config: &GameConfig) -> CollisionResult {
    bounce_off_walls(&mut state.ball, config.physics.ball_radius, config.screen.height);
    resolve_paddles(state, config)
}

/// Reflect the ball off the top and bottom edges.
/// Position is clamped to the boundary and `vy` inverted without energy loss.
pub fn bounce_off_walls(ball: &mut Ball, radius: f32, height: f32) {
    if ball.pos.y - radius <= 0.0 {
        ball.pos.y = radius;
        ball.vel.y = -ball.vel.y;
    } else if ball.pos.y + radius >= height {
        ball.pos.y = height - radius;
        ball.vel.y = -ball.vel.y;
    }
}

/// Check both paddle faces, left first.
///
/// A miss on the left returns immediately, so when both faces are reachable
/// in one step (only possible with a huge `dt`) the right side is never
/// evaluated.
pub fn resolve_paddles(state: &mut GameState, config: &GameConfig) -> CollisionResult {
    let physics = &config.physics;
    let width = config.screen.width;
    let radius = physics.ball_radius;
    let ball = &mut state.ball;
    let mut paddle_hit = false;

    let left_face = physics.paddle_padding + physics.paddle_width;
    let right_face = width - physics.paddle_padding - physics.paddle_width;

    if ball.pos.x - radius <= left_face {
        if state.left_paddle.contains_y(ball.pos.y, physics.paddle_height) {
            ball.pos.x = left_face + radius;
            apply_spin(ball, &state.left_paddle, physics);
            accelerate(ball, physics, Side::Left);
            paddle_hit = true;
        } else {
            return CollisionResult::point(paddle_hit, Side::Right);
        }
    }

    if ball.pos.x + radius >= right_face {
        if state.right_paddle.contains_y(ball.pos.y, physics.paddle_height) {
            ball.pos.x = right_face - radius;
            apply_spin(ball, &state.right_paddle, physics);
            accelerate(ball, physics, Side::Right);
            paddle_hit = true;
        } else {
            return CollisionResult::point(paddle_hit, Side::Left);
        }
    }

    // Safety net for a ball that left the court without touching a face check
    if ball.pos.x < -radius {
        return CollisionResult::point(paddle_hit, Side::Right);
    }
    if ball.pos.x > width + radius {
        return CollisionResult::point(paddle_hit, Side::Left);
    }

    CollisionResult {
        paddle_hit,
        scorer: None,
    }
}

/// Add vertical velocity proportional to how far off-center the ball struck
pub fn apply_spin(ball: &mut Ball, paddle: &Paddle, physics: &PhysicsConfig) {
    let half = physics.paddle_height / 2.0;
    let relative = ((ball.pos.y - paddle.center(physics.paddle_height)) / half).clamp(-1.0, 1.0);
    ball.vel.y += relative * physics.spin_factor;
}

/// Speed the ball up after a hit by `hit_by`, sending it away from that paddle.
/// Both components stay within the speed cap.
pub fn accelerate(ball: &mut Ball, physics: &PhysicsConfig, hit_by: Side) {
    let speedup = physics.ball_speedup_factor;
    let cap = physics.ball_speed_cap;

    let vx = (ball.vel.x.abs() * speedup).min(cap);
    ball.vel.x = match hit_by {
        Side::Left => vx,
        Side::Right => -vx,
    };
    ball.vel.y = (ball.vel.y * speedup).clamp(-cap, cap);
}
