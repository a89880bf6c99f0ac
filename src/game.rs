//! Game session
//!
//! Owns everything the host needs between frames: the simulation state, the
//! input snapshot being built from device events, the fixed-step clock, HUD
//! and sounds. A windowing/rendering layer feeds events in and calls
//! [`Game::frame`] once per display frame.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::{SoundBank, SoundEffect, cues_for};
use crate::config::GameConfig;
use crate::error::ConfigResult;
use crate::hud::Hud;
use crate::platform::{FixedClock, Key, KeyTracker};
use crate::sim::{GameState, InputState, StepOutcome, create_initial_state, step};

/// Everything that happened during one display frame
#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    /// One entry per simulation step run this frame
    pub outcomes: Vec<StepOutcome>,
    /// Sounds to play, in order
    pub cues: Vec<SoundEffect>,
}

impl FrameReport {
    pub fn steps(&self) -> usize {
        self.outcomes.len()
    }
}

pub struct Game {
    config: GameConfig,
    state: GameState,
    input: InputState,
    keys: KeyTracker,
    clock: FixedClock,
    hud: Hud,
    sounds: SoundBank,
    rng: Pcg32,
    running: bool,
}

impl Game {
    /// Start a session; `seed` fixes every serve for the whole run.
    /// Degenerate configurations are rejected here, before any step runs.
    pub fn new(config: GameConfig, seed: u64) -> ConfigResult<Self> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = create_initial_state(&config, &mut rng);
        log::info!(
            "New game: {}x{} @ {} Hz, seed {}",
            config.screen.width,
            config.screen.height,
            config.screen.fps,
            seed
        );
        Ok(Self {
            clock: FixedClock::new(config.screen.step_dt()),
            sounds: SoundBank::new(&config.audio),
            config,
            state,
            input: InputState::default(),
            keys: KeyTracker::new(),
            hud: Hud::new(),
            rng,
            running: true,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn sounds(&self) -> &SoundBank {
        &self.sounds
    }

    pub fn sounds_mut(&mut self) -> &mut SoundBank {
        &mut self.sounds
    }

    /// Input that the next simulation step will see
    pub fn pending_input(&self) -> &InputState {
        &self.input
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Fraction of a step left over after the last frame, for interpolating
    /// the rendered ball between simulation states
    pub fn render_alpha(&self) -> f32 {
        self.clock.alpha()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Escape => {
                log::info!("Quit requested");
                self.running = false;
            }
            Key::R => self.input.restart_requested = true,
            _ => self.keys.press(key),
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.keys.release(key);
    }

    /// Cursor moved; the right paddle follows it on the next step
    pub fn mouse_moved(&mut self, y: f32) {
        self.input.mouse_paddle_y = Some(y);
    }

    /// Primary button pressed
    pub fn mouse_clicked(&mut self) {
        self.input.mouse_restart = true;
    }

    /// Advance by one display frame of `frame_dt` seconds
    pub fn frame(&mut self, frame_dt: f32) -> FrameReport {
        let mut report = FrameReport::default();
        if !self.running {
            return report;
        }

        self.input.left_axis = self.keys.left_axis();
        self.input.right_axis = self.keys.right_axis();

        let dt = self.clock.step_dt();
        for _ in 0..self.clock.advance(frame_dt) {
            let outcome = step(&mut self.state, &self.input, dt, &self.config, &mut self.rng);
            // One-shot flags only apply to the first step that sees them
            self.input.clear_frame_flags();

            if outcome.scored() {
                log::info!(
                    "Score {} : {}",
                    self.state.score_left,
                    self.state.score_right
                );
            } else if outcome.restarted {
                log::info!("Game reset");
            }

            self.hud.on_outcome(&outcome);
            report.cues.extend(cues_for(&outcome));
            report.outcomes.push(outcome);
        }

        self.hud.tick(frame_dt);
        report
    }
}
