//! Cadence: the falling-note timed-response game.
//!
//! Notes drop down three lanes toward a finish line. Striking a lane key
//! while a note crosses the line scores by accuracy; a 3-up/1-down staircase
//! speeds the fall up after three straight hits and slows it after a miss.

pub mod generators;
pub mod logic;
pub mod staircase;
pub mod types;

pub use logic::*;
pub use types::*;
