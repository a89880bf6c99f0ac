//! Pong Deluxe entry point
//!
//! Runs a headless session: there is no window here, so key holds are
//! scripted on a timer and every event is logged. Set `RUST_LOG=info` (or
//! `debug` for per-step detail) to watch the match.
//!
//! Usage: `pong-deluxe [config.json]`, seed via `PONG_SEED`.

use std::time::{SystemTime, UNIX_EPOCH};

use pong_deluxe::platform::Key;
use pong_deluxe::{ConfigResult, Game, GameConfig};

/// Simulated match length in seconds
const MATCH_SECONDS: u32 = 60;

/// Scripted key holds: (start second, key), released after one second
const SCRIPT: &[(u32, Key)] = &[
    (2, Key::W),
    (5, Key::Down),
    (9, Key::S),
    (12, Key::Up),
    (20, Key::W),
    (21, Key::Down),
    (33, Key::S),
    (34, Key::Up),
];

fn main() {
    env_logger::init();
    log::info!("Pong Deluxe (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> ConfigResult<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => {
            log::info!("Using default configuration");
            GameConfig::default()
        }
    };

    let seed = std::env::var("PONG_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(clock_seed);

    let frames_per_second = config.screen.fps;
    let frame_dt = config.screen.step_dt();
    let mut game = Game::new(config, seed)?;

    let mut paddle_hits = 0usize;
    for frame in 0..MATCH_SECONDS * frames_per_second {
        if frame % frames_per_second == 0 {
            let second = frame / frames_per_second;
            for &(start, key) in SCRIPT {
                if start == second {
                    game.key_down(key);
                } else if start + 1 == second {
                    game.key_up(key);
                }
            }
        }

        let report = game.frame(frame_dt);
        paddle_hits += report.outcomes.iter().filter(|o| o.paddle_hit).count();
        if report.outcomes.iter().any(|o| o.scored()) {
            log::info!("{}", game.hud().message());
        }
        if !game.is_running() {
            break;
        }
    }

    let state = game.state();
    log::info!(
        "Final score {} : {} after {} paddle hits",
        state.score_left,
        state.score_right,
        paddle_hits
    );
    println!("{}", pong_deluxe::hud::score_line(state));
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
