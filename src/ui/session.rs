//! Game session state for the Zobang GUI

use crate::{EngineError, MoveResult, Pos, SearchEngine, Stone};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// How the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Stone),
    Draw,
    /// The engine could not produce a move; the game cannot continue
    Aborted,
}

/// Engine computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<(SearchEngine, Result<MoveResult, EngineError>)>,
        start_time: Instant,
    },
}

/// One human-vs-engine game
pub struct Session {
    pub engine: SearchEngine,
    pub human_color: Stone,
    pub engine_first: bool,
    pub current_turn: Stone,
    pub game_over: Option<GameOutcome>,
    pub last_move: Option<Pos>,
    pub last_engine_move: Option<Pos>,
    pub move_history: Vec<(Pos, Stone)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
}

impl Session {
    pub fn new(human_color: Stone, engine_first: bool) -> Self {
        let engine_color = human_color.opponent();
        Self {
            engine: SearchEngine::new(engine_color),
            human_color,
            engine_first,
            current_turn: if engine_first { engine_color } else { human_color },
            game_over: None,
            last_move: None,
            last_engine_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
        }
    }

    /// Start over with the same colors, or with new ones
    pub fn reset(&mut self, human_color: Stone, engine_first: bool) {
        *self = Self::new(human_color, engine_first);
    }

    #[inline]
    pub fn engine_color(&self) -> Stone {
        self.human_color.opponent()
    }

    pub fn is_human_turn(&self) -> bool {
        self.game_over.is_none() && self.current_turn == self.human_color
    }

    pub fn is_ai_turn(&self) -> bool {
        self.game_over.is_none() && self.current_turn == self.engine_color()
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place the human's stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("Engine is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.engine
            .apply_human_move(i32::from(pos.row), i32::from(pos.col), self.human_color)
            .map_err(|err| err.to_string())?;
        self.record_move(pos, self.human_color);
        Ok(())
    }

    /// Bookkeeping after a stone is on the engine's board
    fn record_move(&mut self, pos: Pos, color: Stone) {
        self.move_history.push((pos, color));
        self.last_move = Some(pos);
        self.message = None;

        if self.engine.is_win(color) {
            info!(?color, "game won");
            self.game_over = Some(GameOutcome::Winner(color));
        } else if self.engine.is_full() {
            info!("game drawn");
            self.game_over = Some(GameOutcome::Draw);
        } else {
            self.current_turn = color.opponent();
        }
    }

    /// Search the engine's reply on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let mut engine = self.engine.clone();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.reply();
            let _ = tx.send((engine, result));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Pick up the engine's reply if the worker has finished
    pub fn check_ai_result(&mut self) {
        let received = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(received) => received,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.abort("Engine stopped unexpectedly".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };
        self.ai_state = AiState::Idle;

        match received {
            (engine, Ok(result)) => {
                self.engine = engine;
                self.last_ai_result = Some(result);
                self.last_engine_move = Some(result.chosen_move);
                self.record_move(result.chosen_move, self.engine_color());
            }
            (_, Err(err)) => {
                warn!(%err, "engine failed to reply");
                self.abort(format!("Engine error: {err}"));
            }
        }
    }

    /// End the game after an engine failure. Retrying would fail the same way.
    fn abort(&mut self, message: String) {
        self.game_over = Some(GameOutcome::Aborted);
        self.message = Some(message);
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Take back moves until the human's last stone is gone
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }
        let human = self.human_color;
        let Some(cut) = self.move_history.iter().rposition(|&(_, color)| color == human) else {
            return;
        };

        let kept: Vec<_> = self.move_history[..cut].to_vec();
        let mut replayed = Self::new(human, self.engine_first);
        for (pos, color) in kept {
            if let Err(err) = replayed
                .engine
                .apply_human_move(i32::from(pos.row), i32::from(pos.col), color)
            {
                // History only ever holds moves the engine accepted
                warn!(%err, "undo replay failed");
                return;
            }
            if color == replayed.engine_color() {
                replayed.last_engine_move = Some(pos);
            }
            replayed.record_move(pos, color);
        }
        *self = replayed;
    }
}
