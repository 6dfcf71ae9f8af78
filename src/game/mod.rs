//! Search-side game state and move generation

pub mod moves;
pub mod state;

pub use state::{GameState, Trial};
