//! Per-color coordinate membership backed by a bitset

use super::{Axis, Pos};

/// Set of coordinates held by one color (or the empty cells), plus the
/// most recently added coordinate.
///
/// Uses `ceil(size² / 64)` words; a 20x20 board needs 7.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionSet {
    bits: Vec<u64>,
    size: usize,
    last: Option<Pos>,
}

impl PositionSet {
    /// Create an empty set for a board of side `size`
    pub fn new(size: usize) -> Self {
        Self {
            bits: vec![0; (size * size).div_ceil(64)],
            size,
            last: None,
        }
    }

    /// Create a set holding every cell of the board.
    /// `last` stays unset: filling is not a placement.
    pub fn full(size: usize) -> Self {
        let mut set = Self::new(size);
        for idx in 0..size * size {
            set.bits[idx / 64] |= 1u64 << (idx % 64);
        }
        set
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Add a coordinate and record it as the last placed one
    #[inline]
    pub fn add(&mut self, pos: Pos) {
        let idx = pos.to_index(self.size);
        self.bits[idx / 64] |= 1u64 << (idx % 64);
        self.last = Some(pos);
    }

    /// Remove a coordinate. Forgets it as last placed if it was.
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        let idx = pos.to_index(self.size);
        self.bits[idx / 64] &= !(1u64 << (idx % 64));
        if self.last == Some(pos) {
            self.last = None;
        }
    }

    /// Add a coordinate without touching `last` (used for the empty set)
    #[inline]
    pub(crate) fn insert_silent(&mut self, pos: Pos) {
        let idx = pos.to_index(self.size);
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        if !Pos::is_valid(i32::from(pos.row), i32::from(pos.col), self.size) {
            return false;
        }
        let idx = pos.to_index(self.size);
        (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    #[inline]
    pub fn last(&self) -> Option<Pos> {
        self.last
    }

    #[inline]
    pub(crate) fn set_last(&mut self, last: Option<Pos>) {
        self.last = last;
    }

    /// Count total members (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Iterate over members in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        self.bits.iter().enumerate().flat_map(move |(word_idx, &word)| {
            let mut current = word;
            std::iter::from_fn(move || {
                if current == 0 {
                    return None;
                }
                let bit = current.trailing_zeros() as usize;
                current &= current - 1;
                Some(word_idx * 64 + bit)
            })
            .map(move |idx| Pos::from_index(idx, size))
        })
    }

    /// Far end of the run of members starting at `from` and walking along
    /// `(dr, dc)`, looking at most `max_steps` cells ahead.
    fn run_edge(&self, from: Pos, dr: i32, dc: i32, max_steps: i32) -> Pos {
        let mut edge = from;
        for step in 1..=max_steps {
            match from.offset(dr, dc, step, self.size) {
                Some(next) if self.contains(next) => edge = next,
                _ => break,
            }
        }
        edge
    }

    /// Whether the last placed coordinate completes a line of `win_line_len`.
    ///
    /// For each of the 8 half-directions: find the edge of the run from the
    /// last stone, then count `win_line_len - 1` cells back from that edge.
    pub fn is_win(&self, win_line_len: usize) -> bool {
        let Some(last) = self.last else {
            return false;
        };
        let reach = win_line_len as i32 - 1;

        Axis::ALL.iter().any(|axis| {
            let (dr, dc) = axis.delta();
            [(dr, dc), (-dr, -dc)].into_iter().any(|(sr, sc)| {
                let edge = self.run_edge(last, sr, sc, reach);
                (1..=reach).all(|step| {
                    edge.offset(-sr, -sc, step, self.size)
                        .is_some_and(|p| self.contains(p))
                })
            })
        })
    }
}
