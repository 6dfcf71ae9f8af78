//! Evaluation: line pattern extraction and scoring
//!
//! Only the lines through the two most recently played stones are scored;
//! the search compares the engine's lines against the opponent's.

pub mod line;
pub mod patterns;

pub use patterns::{extract_segments, max_run, score_segment, Segment};
