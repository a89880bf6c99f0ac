//! Fixed timestep accumulator
//!
//! Real frame times vary; the simulation always advances in whole steps of
//! `1 / fps` seconds.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};

#[derive(Debug, Clone)]
pub struct FixedClock {
    step_dt: f32,
    accumulator: f32,
}

impl FixedClock {
    pub fn new(step_dt: f32) -> Self {
        Self {
            step_dt,
            accumulator: 0.0,
        }
    }

    /// Simulation timestep in seconds
    pub fn step_dt(&self) -> f32 {
        self.step_dt
    }

    /// Add a frame's worth of real time and return how many steps to run.
    ///
    /// Long frames are clamped and at most `MAX_SUBSTEPS` steps are emitted
    /// to prevent a spiral of death; any excess time is dropped.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        // `max` maps NaN to 0.0, so a bad frame time never poisons the accumulator
        self.accumulator += frame_dt.max(0.0).min(MAX_FRAME_DT);

        let mut steps = 0;
        while self.accumulator >= self.step_dt && steps < MAX_SUBSTEPS {
            self.accumulator -= self.step_dt;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.step_dt);
        }
        steps
    }

    /// Leftover time, as a fraction of one step (for render interpolation)
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step_dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = FixedClock::new(0.01);
        assert_eq!(clock.advance(0.004), 0);
        assert_eq!(clock.advance(0.004), 0);
        assert_eq!(clock.advance(0.004), 1);
        assert!(clock.alpha() > 0.1 && clock.alpha() < 0.3);
    }

    #[test]
    fn test_caps_substeps() {
        let mut clock = FixedClock::new(1.0 / 120.0);
        // 0.1s at 120Hz would be 12 steps
        assert_eq!(clock.advance(5.0), MAX_SUBSTEPS);
        assert!(clock.alpha() <= 1.0);
    }

    #[test]
    fn test_nan_frame_time_ignored() {
        let mut clock = FixedClock::new(0.01);
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.alpha(), 0.0);
        assert_eq!(clock.advance(0.015), 1);
    }

    #[test]
    fn test_negative_frame_time_ignored() {
        let mut clock = FixedClock::new(0.01);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.alpha(), 0.0);
    }
}
