//! Search-side game state: grid mirror, move history and scoped trial moves

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Pos, Stone};
use crate::config::GameConfig;
use crate::error::InvalidMove;

/// Full-grid mirror of a [`Board`] plus per-side move history.
///
/// The grid gives O(1) lookups during search; the board gives directional
/// win tests. All mutation goes through [`GameState::update`] and
/// [`GameState::rollback`], which touch both.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    config: GameConfig,
    grid: Vec<Stone>,
    board: Board,
    engine_color: Stone,
    /// Every stone placed by the engine's color, oldest first
    self_moves: Vec<Pos>,
    /// Every stone placed by the opponent's color, oldest first
    peer_moves: Vec<Pos>,
}

impl GameState {
    /// Fresh state on an empty board
    pub fn new(config: GameConfig, engine_color: Stone) -> Self {
        Self::from_board(Board::new(config), engine_color)
    }

    /// Mirror an existing board. Each side's history starts from the board's
    /// last placed stone of that color, if any.
    pub fn from_board(board: Board, engine_color: Stone) -> Self {
        let config = *board.config();
        let size = config.board_size;
        let mut grid = vec![Stone::Empty; size * size];
        for color in [Stone::Black, Stone::White] {
            for pos in board.stones(color).iter() {
                grid[pos.to_index(size)] = color;
            }
        }
        let self_moves = board.last_placed(engine_color).into_iter().collect();
        let peer_moves = board.last_placed(engine_color.opponent()).into_iter().collect();
        Self {
            config,
            grid,
            board,
            engine_color,
            self_moves,
            peer_moves,
        }
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.config.board_size
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn engine_color(&self) -> Stone {
        self.engine_color
    }

    #[inline]
    pub fn peer_color(&self) -> Stone {
        self.engine_color.opponent()
    }

    /// Stone at `pos`; cells off the board read as empty.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        let size = self.size();
        if usize::from(pos.row) < size && usize::from(pos.col) < size {
            self.grid[pos.to_index(size)]
        } else {
            Stone::Empty
        }
    }

    /// Move history of one side (engine or opponent), oldest first
    pub fn moves(&self, color: Stone) -> &[Pos] {
        if color == Stone::Empty {
            &[]
        } else if color == self.engine_color {
            &self.self_moves
        } else {
            &self.peer_moves
        }
    }

    /// Most recent stone of `color`, if it has played at all
    #[inline]
    pub fn last_move(&self, color: Stone) -> Option<Pos> {
        self.moves(color).last().copied()
    }

    fn history_mut(&mut self, color: Stone) -> &mut Vec<Pos> {
        if color == self.engine_color {
            &mut self.self_moves
        } else {
            &mut self.peer_moves
        }
    }

    /// Place `color` at `pos` on both the grid and the board and record it.
    pub fn update(&mut self, pos: Pos, color: Stone) -> Result<(), InvalidMove> {
        // Board validates bounds, occupancy and color before anything changes.
        self.board.update(pos, color)?;
        let idx = pos.to_index(self.size());
        self.grid[idx] = color;
        self.history_mut(color).push(pos);
        Ok(())
    }

    /// Undo a placement of `color` at `pos` on both representations.
    pub fn rollback(&mut self, pos: Pos, color: Stone) -> Result<(), InvalidMove> {
        self.board.rollback(pos, color)?;
        let idx = pos.to_index(self.size());
        self.grid[idx] = Stone::Empty;

        let history = self.history_mut(color);
        if history.last() == Some(&pos) {
            history.pop();
        } else if let Some(i) = history.iter().rposition(|&p| p == pos) {
            history.remove(i);
        }
        let last = history.last().copied();
        self.board.set_last_placed(color, last);
        Ok(())
    }

    /// Apply a speculative move; it is rolled back when the guard drops,
    /// including during unwinding.
    pub fn trial(&mut self, pos: Pos, color: Stone) -> Result<Trial<'_>, InvalidMove> {
        self.update(pos, color)?;
        Ok(Trial {
            state: self,
            pos,
            color,
        })
    }

    /// Run `body` with `color` speculatively placed at `pos`.
    /// The state is always restored before this returns.
    pub fn with_trial_move<R>(
        &mut self,
        pos: Pos,
        color: Stone,
        body: impl FnOnce(&mut GameState) -> R,
    ) -> Result<R, InvalidMove> {
        let mut trial = self.trial(pos, color)?;
        Ok(body(&mut trial))
    }

    #[inline]
    pub fn is_win(&self, color: Stone) -> bool {
        self.board.is_win(color)
    }
}

/// Guard for a speculative move made by [`GameState::trial`].
pub struct Trial<'a> {
    state: &'a mut GameState,
    pos: Pos,
    color: Stone,
}

impl Deref for Trial<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        &*self.state
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        &mut *self.state
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        let restored = self.state.rollback(self.pos, self.color);
        debug_assert!(restored.is_ok(), "trial move vanished: {restored:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn state_with_moves(moves: &[(u8, u8, Stone)]) -> GameState {
        let mut state = GameState::new(GameConfig::default(), Stone::Black);
        for &(r, c, color) in moves {
            state.update(Pos::new(r, c), color).unwrap();
        }
        state
    }

    #[test]
    fn test_update_mirrors_board_and_history() {
        let state = state_with_moves(&[(10, 10, Stone::White), (9, 9, Stone::Black)]);

        assert_eq!(state.get(Pos::new(10, 10)), Stone::White);
        assert_eq!(state.board().get(Pos::new(10, 10)), Stone::White);
        assert_eq!(state.moves(Stone::Black), &[Pos::new(9, 9)]);
        assert_eq!(state.moves(Stone::White), &[Pos::new(10, 10)]);
        assert_eq!(state.last_move(Stone::Black), Some(Pos::new(9, 9)));
    }

    #[test]
    fn test_update_occupied_leaves_state_untouched() {
        let mut state = state_with_moves(&[(10, 10, Stone::White)]);
        let before = state.clone();

        let err = state.update(Pos::new(10, 10), Stone::Black).unwrap_err();
        assert!(matches!(err, InvalidMove::Occupied { .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_update_rollback_round_trip() {
        let mut state = state_with_moves(&[
            (10, 10, Stone::White),
            (9, 9, Stone::Black),
            (10, 11, Stone::White),
            (8, 8, Stone::Black),
        ]);
        let before = state.clone();

        for color in [Stone::Black, Stone::White] {
            state.update(Pos::new(0, 19), color).unwrap();
            state.rollback(Pos::new(0, 19), color).unwrap();
            assert_eq!(state, before);
        }
        assert_eq!(state.board().last_placed(Stone::Black), Some(Pos::new(8, 8)));
        assert_eq!(state.board().last_placed(Stone::White), Some(Pos::new(10, 11)));
    }

    #[test]
    fn test_with_trial_move_restores_state() {
        let mut state = state_with_moves(&[(10, 10, Stone::White)]);
        let before = state.clone();

        let seen = state
            .with_trial_move(Pos::new(10, 11), Stone::Black, |s| {
                assert_eq!(s.last_move(Stone::Black), Some(Pos::new(10, 11)));
                s.with_trial_move(Pos::new(10, 12), Stone::White, |inner| {
                    inner.get(Pos::new(10, 12))
                })
            })
            .unwrap()
            .unwrap();

        assert_eq!(seen, Stone::White);
        assert_eq!(state, before);
    }

    #[test]
    fn test_trial_on_occupied_cell_fails_cleanly() {
        let mut state = state_with_moves(&[(10, 10, Stone::White)]);
        let before = state.clone();

        let result = state.with_trial_move(Pos::new(10, 10), Stone::Black, |_| ());
        assert!(result.is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_trial_rolled_back_on_panic() {
        let mut state = state_with_moves(&[(10, 10, Stone::White)]);
        let before = state.clone();

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            let _ = state.with_trial_move(Pos::new(3, 3), Stone::Black, |_| {
                panic!("evaluation failed");
            });
        }));

        assert!(outcome.is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_from_board_mirrors_stones() {
        let mut board = Board::default();
        board.update(Pos::new(1, 2), Stone::Black).unwrap();
        board.update(Pos::new(3, 4), Stone::White).unwrap();

        let state = GameState::from_board(board, Stone::White);
        assert_eq!(state.get(Pos::new(1, 2)), Stone::Black);
        assert_eq!(state.get(Pos::new(3, 4)), Stone::White);
        assert_eq!(state.moves(Stone::White), &[Pos::new(3, 4)]);
        assert_eq!(state.last_move(Stone::Black), Some(Pos::new(1, 2)));
        assert_eq!(state.peer_color(), Stone::Black);
    }

    #[test]
    fn test_from_board_round_trip_keeps_last_placed() {
        let mut board = Board::default();
        board.update(Pos::new(1, 2), Stone::Black).unwrap();
        board.update(Pos::new(3, 4), Stone::White).unwrap();
        let mut state = GameState::from_board(board, Stone::Black);
        let before = state.clone();

        for color in [Stone::Black, Stone::White] {
            state.update(Pos::new(5, 5), color).unwrap();
            state.rollback(Pos::new(5, 5), color).unwrap();
            assert_eq!(state, before);
        }
        assert_eq!(state.board().last_placed(Stone::Black), Some(Pos::new(1, 2)));
        assert_eq!(state.board().last_placed(Stone::White), Some(Pos::new(3, 4)));
    }

    #[test]
    fn test_from_board_win_survives_trial() {
        let mut board = Board::default();
        for col in 0..5 {
            board.update(Pos::new(7, col), Stone::White).unwrap();
        }
        let mut state = GameState::from_board(board, Stone::Black);
        assert!(state.is_win(Stone::White));

        state
            .with_trial_move(Pos::new(12, 12), Stone::White, |_| ())
            .unwrap();
        assert!(state.is_win(Stone::White));
    }

    #[test]
    fn test_empty_color_has_no_history() {
        let state = state_with_moves(&[(10, 10, Stone::White), (9, 9, Stone::Black)]);
        assert!(state.moves(Stone::Empty).is_empty());
        assert_eq!(state.last_move(Stone::Empty), None);
    }
}
