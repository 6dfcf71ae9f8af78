//! Locality-restricted candidate move generation
//!
//! Full-board branching (400 cells) is too wide for the search. Candidates
//! are restricted to empty cells adjacent to stones lying on the lines
//! through each side's most recent move.

use std::collections::BTreeSet;

use super::state::GameState;
use crate::board::{Axis, Pos, Stone};

impl GameState {
    /// Empty cells at Chebyshev distance 1 from `pos`
    pub fn nearby_moves(&self, pos: Pos) -> BTreeSet<Pos> {
        let size = self.size();
        let mut moves = BTreeSet::new();
        for dr in -1i32..=1 {
            for dc in -1i32..=1 {
                if let Some(p) = pos.offset(dr, dc, 1, size) {
                    if self.get(p) == Stone::Empty {
                        moves.insert(p);
                    }
                }
            }
        }
        moves
    }

    /// Cells along `axis` from `pos - (win_len - 1)` to `pos + (win_len - 1)`,
    /// clipped to the board, in ascending axis order.
    pub fn line_window(&self, pos: Pos, axis: Axis) -> Vec<Pos> {
        let size = self.size();
        let reach = self.config().win_line_len as i32 - 1;
        let (dr, dc) = axis.delta();

        let mut window: Vec<Pos> = (1..=reach)
            .map_while(|step| pos.offset(-dr, -dc, step, size))
            .collect();
        window.reverse();
        window.push(pos);
        window.extend((1..=reach).map_while(|step| pos.offset(dr, dc, step, size)));
        window
    }

    /// The four line windows through `pos`
    pub fn locally_cared_rows(&self, pos: Pos) -> [Vec<Pos>; 4] {
        Axis::ALL.map(|axis| self.line_window(pos, axis))
    }

    /// Stones of `color` on any line window through `pos`
    pub fn cared_stones(&self, pos: Pos, color: Stone) -> BTreeSet<Pos> {
        self.locally_cared_rows(pos)
            .iter()
            .flatten()
            .copied()
            .filter(|&p| self.get(p) == color)
            .collect()
    }

    /// The one or two central cells, whichever are still empty
    pub fn center_moves(&self) -> BTreeSet<Pos> {
        let mid = self.size() / 2;
        [mid, mid + 1]
            .into_iter()
            .filter(|&row| row < self.size())
            .map(|row| Pos::new(row as u8, mid as u8))
            .filter(|&p| self.get(p) == Stone::Empty)
            .collect()
    }

    /// Candidate replies around `color`'s most recent stone.
    pub fn candidate_moves(&self, color: Stone) -> BTreeSet<Pos> {
        let Some(last) = self.last_move(color) else {
            return self.center_moves();
        };
        self.cared_stones(last, color)
            .into_iter()
            .flat_map(|stone| self.nearby_moves(stone))
            .collect()
    }

    /// Branching set offered to the search at every ply
    pub fn possible_moves(&self) -> BTreeSet<Pos> {
        let mut moves = self.candidate_moves(self.engine_color());
        moves.extend(self.candidate_moves(self.peer_color()));
        moves
    }
}
