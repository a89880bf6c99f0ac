//! HUD text state
//!
//! A status message that reacts to step outcomes and falls back to the
//! default prompt once its timer runs out.

use crate::sim::{GameState, StepOutcome};

/// Prompt shown when nothing has happened recently
pub const DEFAULT_MESSAGE: &str = "Click or press R to restart";

/// Seconds an event message stays up
pub const MESSAGE_DURATION: f32 = 2.0;

#[derive(Debug, Clone)]
pub struct Hud {
    message: String,
    timer: f32,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            timer: 0.0,
        }
    }
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Show an event message for the outcome, if it has one
    pub fn on_outcome(&mut self, outcome: &StepOutcome) {
        let text = if outcome.restarted {
            "Game reset! Rally on."
        } else if outcome.scored_left {
            "Left scores! R or click to restart."
        } else if outcome.scored_right {
            "Right scores! R or click to restart."
        } else {
            return;
        };
        self.set_message(text, MESSAGE_DURATION);
    }

    pub fn set_message(&mut self, text: &str, duration: f32) {
        self.message = text.to_string();
        self.timer = duration;
    }

    /// Count down the active message
    pub fn tick(&mut self, dt: f32) {
        self.timer = (self.timer - dt).max(0.0);
        if self.timer == 0.0 && self.message != DEFAULT_MESSAGE {
            self.message = DEFAULT_MESSAGE.to_string();
        }
    }
}

/// Scoreboard line, e.g. `"3  :  5"`
pub fn score_line(state: &GameState) -> String {
    format!("{}  :  {}", state.score_left, state.score_right)
}
