//! Snake: eat apples, avoid the walls and yourself.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
