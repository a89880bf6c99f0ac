//! Simulation step
//!
//! Advances the game by `dt` seconds: restart handling, paddle motion, ball
//! integration, collisions and scoring. The only nondeterminism is the
//! caller-supplied RNG used when serving a new ball.

use rand::Rng;

use super::collision::{Side, resolve_collisions};
use super::state::{Ball, GameState, InputState, Paddle, ServeDirection, StepOutcome};
use crate::config::GameConfig;

/// Fresh game: centered ball served right, centered paddles, zero scores
pub fn create_initial_state<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> GameState {
    let ball = spawn_ball(config, ServeDirection::Right, rng);
    GameState::with_ball(config, ball)
}

/// A new ball at the screen center heading toward `direction`.
///
/// Horizontal speed is drawn from `ball_speed_range`; vertical speed from
/// `ball_vertical_range` with a coin-flip sign.
pub fn spawn_ball<R: Rng + ?Sized>(
    config: &GameConfig,
    direction: ServeDirection,
    rng: &mut R,
) -> Ball {
    let physics = &config.physics;
    let (min_speed, max_speed) = physics.ball_speed_range;
    let (min_vy, max_vy) = physics.ball_vertical_range;

    let speed = rng.random_range(min_speed..=max_speed);
    let vy = rng.random_range(min_vy..=max_vy);
    let vy = if rng.random_bool(0.5) { -vy } else { vy };

    Ball::new(
        config.screen.width / 2.0,
        config.screen.height / 2.0,
        speed * direction.sign(),
        vy,
    )
}

/// Advance the game state by `dt` seconds
pub fn step<R: Rng + ?Sized>(
    state: &mut GameState,
    input: &InputState,
    dt: f32,
    config: &GameConfig,
    rng: &mut R,
) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    if input.wants_restart() {
        restart(state, config, rng);
        outcome.restarted = true;
        return outcome;
    }

    move_paddles(state, input, dt, config);

    let ball = &mut state.ball;
    ball.pos += ball.vel * dt;

    let collisions = resolve_collisions(state, config);
    outcome.paddle_hit = collisions.paddle_hit;

    if let Some(scorer) = collisions.scorer {
        match scorer {
            Side::Left => {
                state.score_left += 1;
                outcome.scored_left = true;
            }
            Side::Right => {
                state.score_right += 1;
                outcome.scored_right = true;
            }
        }
        // Next ball heads toward the side that conceded
        serve(state, config, scorer.opponent().into(), rng);
        log::debug!(
            "{:?} scores ({} : {})",
            scorer,
            state.score_left,
            state.score_right
        );
    }

    outcome
}

/// Zero the scores, center the paddles and serve right
fn restart<R: Rng + ?Sized>(state: &mut GameState, config: &GameConfig, rng: &mut R) {
    state.left_paddle = Paddle::centered(config);
    state.right_paddle = Paddle::centered(config);
    state.score_left = 0;
    state.score_right = 0;
    serve(state, config, ServeDirection::Right, rng);
    log::debug!("Game restarted");
}

fn serve<R: Rng + ?Sized>(
    state: &mut GameState,
    config: &GameConfig,
    direction: ServeDirection,
    rng: &mut R,
) {
    state.next_serve = direction;
    state.ball = spawn_ball(config, direction, rng);
}

/// Keyboard axes drive both paddles, except that a mouse position snaps the
/// right paddle directly and zeroes its velocity.
fn move_paddles(state: &mut GameState, input: &InputState, dt: f32, config: &GameConfig) {
    let physics = &config.physics;
    let max_y = config.screen.height - physics.paddle_height;

    let drive = |paddle: &mut Paddle, axis: i8| {
        paddle.drive(axis, physics.paddle_acceleration, physics.paddle_max_speed, dt);
        paddle.integrate(dt, max_y);
    };

    drive(&mut state.left_paddle, input.left_axis);

    match input.mouse_paddle_y {
        Some(mouse_y) => {
            let paddle = &mut state.right_paddle;
            paddle.y = (mouse_y - physics.paddle_height / 2.0).clamp(0.0, max_y);
            paddle.velocity = 0.0;
        }
        None => drive(&mut state.right_paddle, input.right_axis),
    }
}
