//! Lander: set the ship down on the pad before the fuel runs out.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
