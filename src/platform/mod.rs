//! Platform abstraction layer
//!
//! Host-side helpers that sit between raw device events and the simulation:
//! - Input: held keys to axis values
//! - Time: real frame time to fixed simulation steps

pub mod input;
pub mod time;

pub use input::{Key, KeyTracker};
pub use time::FixedClock;
