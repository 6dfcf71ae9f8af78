//! Fixed game parameters
//!
//! A `GameConfig` is built once per session and handed to [`Board`](crate::Board)
//! and [`GameState`](crate::GameState) at construction. Nothing mutates it afterwards.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};

use crate::error::ConfigError;

/// Heuristic score, numerically `wins * 10^40 + rest`.
///
/// Completed lines are counted apart from the pattern sum, so subtracting
/// a win never swallows the smaller terms. The derived ordering is
/// lexicographic, which is the numeric order as long as `|rest| < 10^40`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score {
    /// Completed lines; negative once the opponent's are subtracted
    pub wins: i64,
    /// Sum of the non-winning pattern values
    pub rest: i64,
}

impl Score {
    pub const ZERO: Score = Score { wins: 0, rest: 0 };
    /// One completed line
    pub const WIN: Score = Score { wins: 1, rest: 0 };
    pub const MIN: Score = Score { wins: i64::MIN, rest: i64::MIN };
    pub const MAX: Score = Score { wins: i64::MAX, rest: i64::MAX };

    /// A plain pattern value
    #[inline]
    pub const fn points(rest: i64) -> Self {
        Self { wins: 0, rest }
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, other: Score) -> Score {
        Score {
            wins: self.wins.saturating_add(other.wins),
            rest: self.rest.saturating_add(other.rest),
        }
    }
}

impl Sub for Score {
    type Output = Score;

    fn sub(self, other: Score) -> Score {
        Score {
            wins: self.wins.saturating_sub(other.wins),
            rest: self.rest.saturating_sub(other.rest),
        }
    }
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        Score::ZERO - self
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Score>>(iter: I) -> Score {
        iter.fold(Score::ZERO, Add::add)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.wins, self.rest) {
            (0, rest) => write!(f, "{rest}"),
            (wins, 0) => write!(f, "{wins}W"),
            (wins, rest) => write!(f, "{wins}W{rest:+}"),
        }
    }
}

/// Default board side length (20x20)
pub const BOARD_SIZE: usize = 20;

/// Stones in a row needed to win
pub const WIN_LINE_LEN: usize = 5;

/// Sentinel score for an unconditional five-in-a-row (10^40)
pub const WIN_SCORE: Score = Score::WIN;

/// Immutable game configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub board_size: usize,
    pub win_line_len: usize,
    pub win_score: Score,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            win_line_len: WIN_LINE_LEN,
            win_score: WIN_SCORE,
        }
    }
}

impl GameConfig {
    /// Build and validate a configuration.
    pub fn new(board_size: usize, win_line_len: usize, win_score: Score) -> Result<Self, ConfigError> {
        let config = Self {
            board_size,
            win_line_len,
            win_score,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_line_len < 2 {
            return Err(ConfigError::Validation(
                "win_line_len must be >= 2".into(),
            ));
        }
        if self.board_size < self.win_line_len {
            return Err(ConfigError::Validation(format!(
                "board_size ({}) must be >= win_line_len ({})",
                self.board_size, self.win_line_len
            )));
        }
        if self.board_size > usize::from(u8::MAX) {
            return Err(ConfigError::Validation(format!(
                "board_size must be <= {}",
                u8::MAX
            )));
        }
        if self.win_score <= Score::ZERO {
            return Err(ConfigError::Validation(
                "win_score must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Number of cells on the board
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.board_size * self.board_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 20);
        assert_eq!(config.win_line_len, 5);
        assert_eq!(config.win_score, WIN_SCORE);
        assert_eq!(config.total_cells(), 400);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_board_smaller_than_line_rejected() {
        let err = GameConfig::new(4, 5, WIN_SCORE).unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: board_size (4) must be >= win_line_len (5)"
        );
    }

    #[test]
    fn test_non_positive_win_score_rejected() {
        assert!(GameConfig::new(20, 5, Score::ZERO).is_err());
        assert!(GameConfig::new(20, 5, -WIN_SCORE).is_err());
        assert!(GameConfig::new(20, 5, Score::points(1)).is_ok());
    }

    #[test]
    fn test_oversized_board_rejected() {
        assert!(GameConfig::new(300, 5, WIN_SCORE).is_err());
        assert!(GameConfig::new(255, 5, WIN_SCORE).is_ok());
    }

    #[test]
    fn test_losing_scores_keep_their_pattern_terms() {
        // 10^5 - 10^40 and 10^2 - 10^40 are distinct and ordered
        let better = Score::points(100_000) - WIN_SCORE;
        let worse = Score::points(100) - WIN_SCORE;
        assert!(better > worse);
        assert!(worse < Score::ZERO);
        assert!(better < Score::points(-1_000_000));
        assert_eq!(better.rest, 100_000);
    }

    #[test]
    fn test_win_dominates_any_pattern_sum() {
        assert!(WIN_SCORE + Score::points(600) > WIN_SCORE);
        assert!(Score::points(i64::MAX / 2) < WIN_SCORE);
        assert!(-WIN_SCORE < Score::points(i64::MIN / 2));
        assert!(Score::MIN < -WIN_SCORE && WIN_SCORE < Score::MAX);
    }

    #[test]
    fn test_score_sum_and_display() {
        let total: Score = [Score::points(200_000), Score::points(600), WIN_SCORE]
            .into_iter()
            .sum();
        assert_eq!(total, Score { wins: 1, rest: 200_600 });
        assert_eq!(total.to_string(), "1W+200600");
        assert_eq!((Score::points(30) - WIN_SCORE).to_string(), "-1W+30");
        assert_eq!(WIN_SCORE.to_string(), "1W");
        assert_eq!(Score::points(-5).to_string(), "-5");
    }
}
