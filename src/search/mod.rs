//! Search module for the Zobang engine
//!
//! Contains the two-ply max/min search that picks the engine's move.

pub mod minimax;

pub use minimax::{SearchPhase, SearchResult, Searcher};
