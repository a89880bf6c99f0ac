//! Keyboard state tracking

use std::collections::HashSet;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left paddle up
    W,
    /// Left paddle down
    S,
    /// Right paddle up
    Up,
    /// Right paddle down
    Down,
    /// Restart the match
    R,
    /// Quit
    Escape,
}

/// Tracks which movement keys are currently held
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    held: HashSet<Key>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press
    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    /// Record a key release
    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Axis for the left paddle (W/S)
    pub fn left_axis(&self) -> i8 {
        self.axis(Key::W, Key::S)
    }

    /// Axis for the right paddle (Up/Down)
    pub fn right_axis(&self) -> i8 {
        self.axis(Key::Up, Key::Down)
    }

    /// -1 for up only, 1 for down only, 0 for neither or both
    fn axis(&self, up: Key, down: Key) -> i8 {
        match (self.is_held(up), self.is_held(down)) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}
