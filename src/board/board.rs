//! Board structure: one position set per color plus the empty cells

use std::fmt;

use super::position_set::PositionSet;
use super::{Pos, Stone};
use crate::config::GameConfig;
use crate::error::InvalidMove;

/// Game board.
///
/// Every cell is a member of exactly one of `white`, `black` or `empty`.
/// `update` and `rollback` move a cell between a color set and the empty
/// set in one call, so no caller ever sees it in two sets or none.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    config: GameConfig,
    white: PositionSet,
    black: PositionSet,
    empty: PositionSet,
}

impl Board {
    pub fn new(config: GameConfig) -> Self {
        let size = config.board_size;
        Self {
            config,
            white: PositionSet::new(size),
            black: PositionSet::new(size),
            empty: PositionSet::full(size),
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

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.contains(pos) {
            Stone::Black
        } else if self.white.contains(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.empty.contains(pos)
    }

    /// Position set for a color (the empty-cell set for `Stone::Empty`)
    #[inline]
    pub fn stones(&self, stone: Stone) -> &PositionSet {
        match stone {
            Stone::Black => &self.black,
            Stone::White => &self.white,
            Stone::Empty => &self.empty,
        }
    }

    fn color_set_mut(&mut self, stone: Stone) -> Result<&mut PositionSet, InvalidMove> {
        match stone {
            Stone::Black => Ok(&mut self.black),
            Stone::White => Ok(&mut self.white),
            Stone::Empty => Err(InvalidMove::EmptyStone),
        }
    }

    fn check_bounds(&self, pos: Pos) -> Result<(), InvalidMove> {
        Pos::try_new(i32::from(pos.row), i32::from(pos.col), self.size()).map(|_| ())
    }

    /// Place `color` on an empty cell and record it as that color's last stone.
    pub fn update(&mut self, pos: Pos, color: Stone) -> Result<(), InvalidMove> {
        self.check_bounds(pos)?;
        if !self.empty.contains(pos) {
            return Err(InvalidMove::Occupied {
                pos,
                occupant: self.get(pos),
            });
        }
        self.color_set_mut(color)?.add(pos);
        self.empty.remove(pos);
        Ok(())
    }

    /// Inverse of `update`: return a `color` stone to the empty set.
    ///
    /// Only the single last-placed coordinate is tracked per color, so it is
    /// cleared when the removed stone was it; restoring an older one is up
    /// to the caller (see [`Board::set_last_placed`]).
    pub fn rollback(&mut self, pos: Pos, color: Stone) -> Result<(), InvalidMove> {
        self.check_bounds(pos)?;
        let set = self.color_set_mut(color)?;
        if !set.contains(pos) {
            return Err(InvalidMove::NotOwned { pos, color });
        }
        set.remove(pos);
        self.empty.insert_silent(pos);
        Ok(())
    }

    pub(crate) fn set_last_placed(&mut self, color: Stone, last: Option<Pos>) {
        if let Ok(set) = self.color_set_mut(color) {
            set.set_last(last);
        }
    }

    /// Last stone placed by `color`
    #[inline]
    pub fn last_placed(&self, color: Stone) -> Option<Pos> {
        match color {
            Stone::Empty => None,
            _ => self.stones(color).last(),
        }
    }

    /// Whether `color`'s last stone completes a five-in-a-row
    pub fn is_win(&self, color: Stone) -> bool {
        match color {
            Stone::Empty => false,
            _ => self.stones(color).is_win(self.config.win_line_len),
        }
    }

    /// Read-only copy of the grid, row by row
    pub fn renderable_grid(&self) -> Vec<Vec<Stone>> {
        let size = self.size();
        (0..size)
            .map(|r| {
                (0..size)
                    .map(|c| self.get(Pos::new(r as u8, c as u8)))
                    .collect()
            })
            .collect()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty.is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.renderable_grid() {
            let line: Vec<String> = row.iter().map(|s| s.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
