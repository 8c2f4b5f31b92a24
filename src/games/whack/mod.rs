//! Whack: strike the mole's pad before it ducks back down.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
