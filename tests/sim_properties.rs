//! Property tests for the simulation step

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use pong_deluxe::GameConfig;
use pong_deluxe::sim::{
    Ball, GameState, InputState, Paddle, create_initial_state, step,
};

fn axis() -> impl Strategy<Value = i8> {
    prop_oneof![Just(-1i8), Just(0i8), Just(1i8)]
}

proptest! {
    #[test]
    fn initial_ball_is_centered(
        width in 200.0f32..4000.0,
        height in 200.0f32..4000.0,
        seed in any::<u64>(),
    ) {
        let mut config = GameConfig::default();
        config.screen.width = width;
        config.screen.height = height;
        prop_assert!(config.validate().is_ok());

        let state = create_initial_state(&config, &mut Pcg32::seed_from_u64(seed));
        prop_assert_eq!(state.ball.pos.x, width / 2.0);
        prop_assert_eq!(state.ball.pos.y, height / 2.0);
    }

    #[test]
    fn paddles_stay_on_playfield(
        start_left in 0.0f32..430.0,
        start_right in 0.0f32..430.0,
        velocity in -720.0f32..720.0,
        left_axis in axis(),
        right_axis in axis(),
        mouse in proptest::option::of(-500.0f32..1500.0),
        dt in 0.0f32..0.5,
        seed in any::<u64>(),
    ) {
        let config = GameConfig::default();
        let max_y = config.screen.height - config.physics.paddle_height;
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut state = create_initial_state(&config, &mut rng);
        state.left_paddle = Paddle { y: start_left, velocity };
        state.right_paddle = Paddle { y: start_right, velocity: -velocity };

        let input = InputState {
            left_axis,
            right_axis,
            mouse_paddle_y: mouse,
            ..Default::default()
        };
        for _ in 0..5 {
            step(&mut state, &input, dt, &config, &mut rng);
            for paddle in [state.left_paddle, state.right_paddle] {
                prop_assert!((0.0..=max_y).contains(&paddle.y));
                prop_assert!(paddle.velocity.abs() <= config.physics.paddle_max_speed);
            }
        }
    }

    #[test]
    fn missing_left_paddle_scores_right(
        ball_y in 20.0f32..520.0,
        ball_x in 0.0f32..70.0,
        vx in -600.0f32..-50.0,
        seed in any::<u64>(),
    ) {
        let config = GameConfig::default();
        let paddle_height = config.physics.paddle_height;
        // Park the paddle well away from the ball
        let paddle_y = if ball_y > 270.0 { 0.0 } else { 540.0 - paddle_height };
        let mut state = GameState::with_ball(&config, Ball::new(ball_x, ball_y, vx, 0.0));
        state.left_paddle = Paddle::new(paddle_y);
        state.score_right = 3;

        let outcome = step(
            &mut state,
            &InputState::default(),
            0.001,
            &config,
            &mut Pcg32::seed_from_u64(seed),
        );
        prop_assert!(outcome.scored_right);
        prop_assert!(!outcome.scored_left);
        prop_assert_eq!(state.score_right, 4);
    }

    #[test]
    fn paddle_hit_caps_speed_and_reflects(
        offset in -50.0f32..50.0,
        vx in 100.0f32..2000.0,
        vy in -2000.0f32..2000.0,
        hit_left in any::<bool>(),
    ) {
        let config = GameConfig::default();
        let physics = &config.physics;
        let paddle_y = 215.0;
        let ball_y = paddle_y + physics.paddle_height / 2.0 + offset;
        let left_face = physics.paddle_padding + physics.paddle_width;
        let right_face = config.screen.width - left_face;

        let ball = if hit_left {
            Ball::new(left_face + physics.ball_radius - 1.0, ball_y, -vx, vy)
        } else {
            Ball::new(right_face - physics.ball_radius + 1.0, ball_y, vx, vy)
        };
        let mut state = GameState::with_ball(&config, ball);
        state.left_paddle = Paddle::new(paddle_y);
        state.right_paddle = Paddle::new(paddle_y);

        // Tiny dt so the ball barely moves before contact is resolved
        let outcome = step(
            &mut state,
            &InputState::default(),
            1e-4,
            &config,
            &mut Pcg32::seed_from_u64(0),
        );
        prop_assert!(outcome.paddle_hit);
        prop_assert!(!outcome.scored_left && !outcome.scored_right);
        prop_assert!(state.ball.vel.x.abs() <= physics.ball_speed_cap);
        prop_assert!(state.ball.vel.y.abs() <= physics.ball_speed_cap);
        if hit_left {
            prop_assert!(state.ball.vel.x > 0.0);
        } else {
            prop_assert!(state.ball.vel.x < 0.0);
        }
    }

    #[test]
    fn restart_overrides_everything(
        score_left in 0u32..100,
        score_right in 0u32..100,
        left_axis in axis(),
        mouse in proptest::option::of(0.0f32..540.0),
        via_mouse in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut state = create_initial_state(&config, &mut rng);
        state.score_left = score_left;
        state.score_right = score_right;
        state.left_paddle.velocity = 400.0;
        state.right_paddle.velocity = -400.0;

        let input = InputState {
            left_axis,
            restart_requested: !via_mouse,
            mouse_restart: via_mouse,
            mouse_paddle_y: mouse,
            ..Default::default()
        };
        let outcome = step(&mut state, &input, 0.016, &config, &mut rng);
        prop_assert!(outcome.restarted);
        prop_assert_eq!(state.score_left, 0);
        prop_assert_eq!(state.score_right, 0);
        prop_assert_eq!(state.left_paddle.velocity, 0.0);
        prop_assert_eq!(state.right_paddle.velocity, 0.0);
    }
}

#[test]
fn miss_scenario_with_default_config() {
    let config = GameConfig::default();
    let mut state = GameState::with_ball(&config, Ball::new(10.0, 270.0, -400.0, 0.0));
    state.left_paddle = Paddle::new(0.0);

    let outcome = step(
        &mut state,
        &InputState::default(),
        0.2,
        &config,
        &mut Pcg32::seed_from_u64(1),
    );
    assert!(outcome.scored_right);
    assert_eq!(state.score_right, 1);
}
