//! Two-ply max/min search over locality-restricted candidates
//!
//! The max ply tries every candidate for the engine; for each, the min ply
//! tries every opponent reply and keeps the one worst for the engine. A
//! leaf is valued as the engine's line score through its last stone minus
//! the opponent's line score through theirs.
//!
//! # Example
//!
//! ```
//! use zobang::{GameConfig, GameState, Pos, Stone};
//! use zobang::search::Searcher;
//!
//! let mut state = GameState::new(GameConfig::default(), Stone::Black);
//! state.update(Pos::new(10, 10), Stone::White).unwrap();
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&mut state).unwrap();
//! assert!(result.best_move.is_some());
//! ```

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::board::Pos;
use crate::config::Score;
use crate::error::EngineError;
use crate::game::GameState;

/// Where the searcher currently is. Always `Idle` between searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    EvaluatingMaxPly,
    EvaluatingMinPly,
}

/// Result of one search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<Pos>,
    /// Min-ply value of the chosen move
    pub score: Score,
    /// Leaf positions evaluated
    pub nodes: u64,
}

/// Two-ply searcher
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    phase: SearchPhase,
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Pick the engine's move. `state` is left exactly as it was given.
    pub fn search(&mut self, state: &mut GameState) -> Result<SearchResult, EngineError> {
        self.nodes = 0;
        self.phase = SearchPhase::EvaluatingMaxPly;
        let result = self.max_search(state);
        self.phase = SearchPhase::Idle;
        result
    }

    fn max_search(&mut self, state: &mut GameState) -> Result<SearchResult, EngineError> {
        let me = state.engine_color();
        let candidates = state.possible_moves();
        if candidates.is_empty() {
            return Err(EngineError::InternalInvariant(
                "no candidate moves for the engine".to_string(),
            ));
        }

        let mut best_score = Score::MIN;
        let mut best_move = None;

        for pos in candidates {
            let value = state.with_trial_move(pos, me, |trial| {
                let replies = trial.possible_moves();
                self.min_search(trial, &replies)
            })??;
            debug!(row = pos.row, col = pos.col, %value, "max-ply candidate");

            // Strictly greater: the first candidate reaching the best value keeps it.
            if value > best_score {
                best_score = value;
                best_move = Some(pos);
            }
        }

        Ok(SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
        })
    }

    /// Value of the position for the engine, assuming the opponent answers
    /// with the reply worst for the engine.
    fn min_search(
        &mut self,
        state: &mut GameState,
        replies: &BTreeSet<Pos>,
    ) -> Result<Score, EngineError> {
        if replies.is_empty() {
            return Err(EngineError::InternalInvariant(
                "no candidate replies for the opponent".to_string(),
            ));
        }
        self.phase = SearchPhase::EvaluatingMinPly;

        let me = state.engine_color();
        let peer = state.peer_color();
        let win_score = state.config().win_score;
        let mut min_score = Score::MAX;

        for &pos in replies {
            let leaf = state.with_trial_move(pos, peer, |trial| {
                let (Some(my_last), Some(peer_last)) = (trial.last_move(me), trial.last_move(peer))
                else {
                    return Err(EngineError::InternalInvariant(
                        "leaf evaluated without both sides on the board".to_string(),
                    ));
                };
                let player_score = trial.line_score(my_last, me);
                if player_score >= win_score {
                    return Ok(None);
                }
                let peer_score = trial.line_score(peer_last, peer);
                Ok(Some(player_score - peer_score))
            })??;
            self.nodes += 1;

            // A completed five cannot be undone by any reply.
            let Some(diff) = leaf else {
                self.phase = SearchPhase::EvaluatingMaxPly;
                return Ok(win_score);
            };
            trace!(row = pos.row, col = pos.col, %diff, "min-ply reply");
            min_score = min_score.min(diff);
        }

        self.phase = SearchPhase::EvaluatingMaxPly;
        Ok(min_score)
    }
}
