//! Scoring of the lines through an anchor stone

use super::patterns::{extract_segments, score_segment};
use crate::board::{Axis, Pos, Stone};
use crate::config::Score;
use crate::game::GameState;

impl GameState {
    /// Cell states of the `axis` window through `anchor`
    pub fn window_stones(&self, anchor: Pos, axis: Axis) -> Vec<Stone> {
        self.line_window(anchor, axis)
            .into_iter()
            .map(|p| self.get(p))
            .collect()
    }

    /// Sum of segment scores for `color` on one axis through `anchor`
    pub fn axis_score(&self, anchor: Pos, axis: Axis, color: Stone) -> Score {
        let row = self.window_stones(anchor, axis);
        extract_segments(&row, color)
            .iter()
            .map(|segment| score_segment(segment, self.config()))
            .sum()
    }

    /// Sum of segment scores for `color` over all four axes through `anchor`
    pub fn line_score(&self, anchor: Pos, color: Stone) -> Score {
        Axis::ALL
            .iter()
            .map(|&axis| self.axis_score(anchor, axis, color))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn state_with(stones: &[(u8, u8, Stone)]) -> GameState {
        let mut state = GameState::new(GameConfig::default(), Stone::White);
        for &(r, c, color) in stones {
            state.update(Pos::new(r, c), color).unwrap();
        }
        state
    }

    #[test]
    fn test_open_four_axis_score() {
        let state = state_with(&[
            (10, 10, Stone::White),
            (10, 11, Stone::White),
            (10, 12, Stone::White),
            (10, 13, Stone::White),
        ]);
        let anchor = Pos::new(10, 13);
        assert_eq!(state.axis_score(anchor, Axis::Horizontal, Stone::White), Score::points(200_000));
        // Each other axis only holds the anchor: [0, 1, 0] -> 10^2 * 2
        assert_eq!(state.axis_score(anchor, Axis::Vertical, Stone::White), Score::points(200));
        assert_eq!(state.line_score(anchor, Stone::White), Score::points(200_600));
    }

    #[test]
    fn test_blocked_flank_reduces_score() {
        let state = state_with(&[
            (10, 9, Stone::Black),
            (10, 10, Stone::White),
            (10, 11, Stone::White),
            (10, 12, Stone::White),
            (10, 13, Stone::White),
        ]);
        // [1, 1, 1, 1, 0]: one way to five
        assert_eq!(
            state.axis_score(Pos::new(10, 13), Axis::Horizontal, Stone::White),
            Score::points(100_000)
        );
    }

    #[test]
    fn test_five_scores_win() {
        let state = state_with(&[
            (5, 5, Stone::Black),
            (5, 6, Stone::Black),
            (5, 7, Stone::Black),
            (5, 8, Stone::Black),
            (5, 9, Stone::Black),
        ]);
        let win = state.config().win_score;
        assert_eq!(state.axis_score(Pos::new(5, 9), Axis::Horizontal, Stone::Black), win);
        assert!(state.line_score(Pos::new(5, 9), Stone::Black) >= win);
        assert!(state.is_win(Stone::Black));
    }

    #[test]
    fn test_score_ignores_other_color() {
        let state = state_with(&[(10, 10, Stone::White), (10, 11, Stone::Black)]);
        // Only the row holds a white stone, closed on the right: [0, 1]
        assert_eq!(state.line_score(Pos::new(10, 11), Stone::White), Score::points(100));
    }
}
