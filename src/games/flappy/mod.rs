//! Flappy: guide a bird through scrolling gates.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
