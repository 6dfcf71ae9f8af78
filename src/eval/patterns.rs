//! Line pattern extraction and segment scoring
//!
//! A line window is scanned for runs of one color's stones. Each run,
//! widened by one open cell on either side, becomes a binary segment
//! (stone = 1, gap = 0) scored by how close one more stone brings it to
//! a five and by how many cells achieve that.

use std::collections::BTreeMap;

use crate::board::Stone;
use crate::config::{GameConfig, Score};

/// Binary occupancy vector of one extracted run
pub type Segment = Vec<u8>;

/// Gaps tolerated inside a run before it is closed
const MAX_GAPS: u32 = 2;

/// Cut the run `start..=end` out of `row`, widened by one empty cell on
/// each side, as a binary vector.
fn widen_segment(row: &[Stone], start: usize, end: usize) -> Segment {
    let from = if start > 0 && row[start - 1] == Stone::Empty {
        start - 1
    } else {
        start
    };
    let to = if end + 1 < row.len() && row[end + 1] == Stone::Empty {
        end + 1
    } else {
        end
    };
    row[from..=to]
        .iter()
        .map(|&s| u8::from(s != Stone::Empty))
        .collect()
}

/// Extract the gap-tolerant runs of `color` in a line window.
///
/// A run closes on an opposing stone or when its gap counter reaches 2.
/// The counter is shared by the whole run and is not reset by stones that
/// follow a gap, so stone-gap-stone-gap already closes it.
pub fn extract_segments(row: &[Stone], color: Stone) -> Vec<Segment> {
    let opponent = color.opponent();
    let mut segments = Vec::new();
    let mut run: Option<(usize, usize)> = None;
    let mut gaps = 0u32;

    for (i, &cell) in row.iter().enumerate() {
        if cell == color {
            run = Some(match run {
                Some((start, _)) => (start, i),
                None => (i, i),
            });
            continue;
        }
        let Some((start, end)) = run else {
            continue;
        };
        let closes = if cell == opponent {
            true
        } else {
            gaps += 1;
            gaps == MAX_GAPS
        };
        if closes {
            segments.push(widen_segment(row, start, end));
            run = None;
            gaps = 0;
        }
    }
    if let Some((start, end)) = run {
        segments.push(widen_segment(row, start, end));
    }
    segments
}

/// Longest run of 1s
pub fn max_run(segment: &[u8]) -> usize {
    let mut best = 0;
    let mut current = 0;
    for &v in segment {
        if v == 1 {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}

/// Best run reachable with one more stone, and the number of cells reaching it.
/// A segment without gaps reports its own length once.
fn best_single_fill(segment: &[u8]) -> (usize, u32) {
    let mut filled = segment.to_vec();
    let mut histogram: BTreeMap<usize, u32> = BTreeMap::new();
    for i in 0..filled.len() {
        if filled[i] == 0 {
            filled[i] = 1;
            *histogram.entry(max_run(&filled)).or_default() += 1;
            filled[i] = 0;
        }
    }
    histogram
        .last_key_value()
        .map_or((segment.len(), 1), |(&run, &ways)| (run, ways))
}

/// Score one segment: `WIN_SCORE` for a completed line, otherwise
/// `10^best_run * ways`.
pub fn score_segment(segment: &[u8], config: &GameConfig) -> Score {
    if max_run(segment) >= config.win_line_len {
        return config.win_score;
    }
    let (best_run, ways) = best_single_fill(segment);
    Score::points(10i64.saturating_pow(best_run as u32).saturating_mul(i64::from(ways)))
}
