//! Procedurally generated sound effects
//!
//! Sine tones rendered to interleaved 16-bit PCM. No external files needed;
//! the host hands the buffers to whatever playback backend it has.

use std::f32::consts::TAU;

use crate::config::{AudioConfig, Tone};
use crate::sim::StepOutcome;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// A point was scored
    Score,
}

/// Sound effects triggered by one simulation step
pub fn cues_for(outcome: &StepOutcome) -> Vec<SoundEffect> {
    let mut cues = Vec::new();
    if outcome.paddle_hit {
        cues.push(SoundEffect::PaddleHit);
    }
    if outcome.scored() {
        cues.push(SoundEffect::Score);
    }
    cues
}

/// Render a sine tone, duplicating each mono sample across `channels`
pub fn synthesize_tone(tone: &Tone, sample_rate: u32, channels: u16) -> Vec<i16> {
    let frames = (sample_rate as f32 * tone.duration) as usize;
    let channels = usize::from(channels);
    let amplitude = tone.volume.clamp(0.0, 1.0) * f32::from(i16::MAX);

    let mut samples = Vec::with_capacity(frames * channels);
    for i in 0..frames {
        let t = i as f32 / sample_rate as f32;
        let sample = ((TAU * tone.frequency * t).sin() * amplitude) as i16;
        samples.extend(std::iter::repeat_n(sample, channels));
    }
    samples
}

/// Prebuilt PCM buffers for every effect
#[derive(Debug, Clone)]
pub struct SoundBank {
    paddle: Vec<i16>,
    score: Vec<i16>,
    master_volume: f32,
    muted: bool,
}

impl SoundBank {
    pub fn new(config: &AudioConfig) -> Self {
        let bank = Self {
            paddle: synthesize_tone(&config.paddle_tone, config.sample_rate, config.channels),
            score: synthesize_tone(&config.score_tone, config.sample_rate, config.channels),
            master_volume: config.master_volume.clamp(0.0, 1.0),
            muted: false,
        };
        log::debug!(
            "Synthesized sounds: paddle={} samples, score={} samples",
            bank.paddle.len(),
            bank.score.len()
        );
        bank
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Gain the backend should apply on playback
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// PCM buffer for an effect
    pub fn samples(&self, effect: SoundEffect) -> &[i16] {
        match effect {
            SoundEffect::PaddleHit => &self.paddle,
            SoundEffect::Score => &self.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cues_for_outcome() {
        assert!(cues_for(&StepOutcome::default()).is_empty());

        let hit = StepOutcome {
            paddle_hit: true,
            ..Default::default()
        };
        assert_eq!(cues_for(&hit), vec![SoundEffect::PaddleHit]);

        let score = StepOutcome {
            scored_right: true,
            ..Default::default()
        };
        assert_eq!(cues_for(&score), vec![SoundEffect::Score]);

        let restart = StepOutcome {
            restarted: true,
            ..Default::default()
        };
        assert!(cues_for(&restart).is_empty());
    }

    #[test]
    fn test_tone_length_and_channels() {
        let tone = Tone {
            frequency: 440.0,
            duration: 0.5,
            volume: 1.0,
        };
        let mono = synthesize_tone(&tone, 1000, 1);
        assert_eq!(mono.len(), 500);

        let stereo = synthesize_tone(&tone, 1000, 2);
        assert_eq!(stereo.len(), 1000);
        assert!(stereo.chunks(2).all(|frame| frame[0] == frame[1]));
    }

    #[test]
    fn test_tone_amplitude_scaled_by_volume() {
        let tone = Tone {
            frequency: 250.0,
            duration: 0.01,
            volume: 0.5,
        };
        // 250 Hz at 1 kHz: sample 1 lands on the sine peak
        let samples = synthesize_tone(&tone, 1000, 1);
        assert_eq!(samples[0], 0);
        let peak = i16::MAX / 2;
        assert!((samples[1] - peak).abs() <= 1);
        assert!(samples.iter().all(|s| s.abs() <= peak + 1));
    }

    #[test]
    fn test_sound_bank_volume() {
        let mut bank = SoundBank::new(&AudioConfig::default());
        assert!(!bank.samples(SoundEffect::PaddleHit).is_empty());
        assert!(bank.samples(SoundEffect::Score).len() > bank.samples(SoundEffect::PaddleHit).len());

        bank.set_master_volume(2.0);
        assert_eq!(bank.effective_volume(), 1.0);
        bank.set_muted(true);
        assert_eq!(bank.effective_volume(), 0.0);
    }
}
