//! Zobang: five-in-a-row with a two-ply heuristic engine
//!
//! Two players alternate placing stones on a 20x20 board; the first to line
//! up five in a row (horizontally, vertically or diagonally) wins. One side
//! is played by a fast, good-enough search engine.
//!
//! # Architecture
//!
//! - [`board`]: per-color position sets, the empty-cell set and the win test
//! - [`game`]: the search-side grid mirror, move history, scoped trial moves
//!   and locality-restricted candidate generation
//! - [`eval`]: line pattern extraction and scoring
//! - [`search`]: the two-ply max/min search
//! - [`engine`]: the session-level API used by the GUI
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use zobang::{Pos, SearchEngine, Stone};
//!
//! let mut engine = SearchEngine::new(Stone::Black);
//!
//! // Human (White) plays, engine answers
//! engine.apply_human_move(10, 10, Stone::White).unwrap();
//! if !engine.is_win(Stone::White) {
//!     let reply = engine.reply().unwrap();
//!     println!("Engine plays {}", reply.chosen_move);
//! }
//! ```
//!
//! # Evaluation
//!
//! Only the lines through the two most recently played stones are scored.
//! A run of stones is worth `10^k * ways`, where `k` is the longest line one
//! more stone can make and `ways` the number of cells that make it; a
//! completed five is worth `WIN_SCORE`.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Axis, Board, Pos, PositionSet, Stone};
pub use config::{GameConfig, Score, BOARD_SIZE, WIN_LINE_LEN, WIN_SCORE};
pub use engine::{MoveResult, SearchEngine};
pub use error::{ConfigError, EngineError, InvalidMove};
pub use game::GameState;
