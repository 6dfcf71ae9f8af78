//! Search engine facing the presentation layer
//!
//! The engine owns one game session: its [`GameState`] (and through it the
//! [`Board`]). Callers apply the opponent's moves and ask for replies; every
//! permanent move goes through the same update path as the search trials.
//!
//! # Example
//!
//! ```
//! use zobang::{Pos, SearchEngine, Stone};
//!
//! // The engine plays Black; the human plays White.
//! let mut engine = SearchEngine::new(Stone::Black);
//!
//! let result = engine.react_to_move(Pos::new(10, 10)).unwrap();
//! println!("Engine plays {}", result.chosen_move);
//! assert!(!result.engine_wins);
//! assert_eq!(engine.board().get(result.chosen_move), Stone::Black);
//! ```

use std::time::Instant;

use tracing::{info, warn};

use crate::board::{Board, Pos, Stone};
use crate::config::{GameConfig, Score};
use crate::error::EngineError;
use crate::game::GameState;
use crate::search::{SearchPhase, Searcher};

/// The engine's reply to a move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    /// Cell the engine played
    pub chosen_move: Pos,
    /// Whether that stone completed a five-in-a-row
    pub engine_wins: bool,
    /// Min-ply value of the chosen move
    pub score: Score,
    /// Leaf positions evaluated
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Two-ply heuristic engine for one game session.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    state: GameState,
    searcher: Searcher,
}

impl SearchEngine {
    /// Engine playing `engine_color` on a default 20x20 board.
    #[must_use]
    pub fn new(engine_color: Stone) -> Self {
        Self::with_config(GameConfig::default(), engine_color)
    }

    #[must_use]
    pub fn with_config(config: GameConfig, engine_color: Stone) -> Self {
        Self {
            state: GameState::new(config, engine_color),
            searcher: Searcher::new(),
        }
    }

    #[inline]
    pub fn engine_color(&self) -> Stone {
        self.state.engine_color()
    }

    #[inline]
    pub fn opponent_color(&self) -> Stone {
        self.state.peer_color()
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        self.state.config()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn phase(&self) -> SearchPhase {
        self.searcher.phase()
    }

    /// Permanently place `color` at `(row, col)`.
    ///
    /// Fails with [`EngineError::InvalidMove`] when the cell is off the board
    /// or occupied; the session is unchanged in that case.
    pub fn apply_human_move(&mut self, row: i32, col: i32, color: Stone) -> Result<(), EngineError> {
        let applied = Pos::try_new(row, col, self.config().board_size)
            .and_then(|pos| self.state.update(pos, color));
        if let Err(err) = &applied {
            warn!(row, col, ?color, %err, "rejected move");
        }
        applied.map_err(EngineError::from)
    }

    /// Apply the opponent's move, then search and play the engine's reply.
    pub fn react_to_move(&mut self, incoming: Pos) -> Result<MoveResult, EngineError> {
        let peer = self.opponent_color();
        self.apply_human_move(i32::from(incoming.row), i32::from(incoming.col), peer)?;
        self.reply()
    }

    /// Search and permanently play the engine's move for the current position.
    ///
    /// The board must be neither full nor already decided.
    pub fn reply(&mut self) -> Result<MoveResult, EngineError> {
        if self.board().is_full() {
            return Err(EngineError::InternalInvariant(
                "reply requested on a full board".to_string(),
            ));
        }
        let start = Instant::now();
        let me = self.engine_color();

        let result = self.searcher.search(&mut self.state)?;
        let chosen_move = result.best_move.ok_or_else(|| {
            EngineError::InternalInvariant("search produced no move".to_string())
        })?;
        self.state.update(chosen_move, me)?;

        let engine_wins = self.state.is_win(me);
        let time_ms = start.elapsed().as_millis() as u64;
        info!(
            row = chosen_move.row,
            col = chosen_move.col,
            score = %result.score,
            nodes = result.nodes,
            time_ms,
            engine_wins,
            "engine move"
        );

        Ok(MoveResult {
            chosen_move,
            engine_wins,
            score: result.score,
            nodes: result.nodes,
            time_ms,
        })
    }

    /// Play the first move of the game.
    pub fn open(&mut self) -> Result<MoveResult, EngineError> {
        if !self.board().is_board_empty() {
            return Err(EngineError::InternalInvariant(
                "opening move requested on a non-empty board".to_string(),
            ));
        }
        self.reply()
    }

    #[inline]
    pub fn is_win(&self, color: Stone) -> bool {
        self.state.is_win(color)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.board().is_full()
    }

    /// Read-only copy of the grid for display
    pub fn renderable_grid(&self) -> Vec<Vec<Stone>> {
        self.board().renderable_grid()
    }
}
