use crate::board::{Pos, Stone};

/// A move that cannot be applied to the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i32, col: i32, size: usize },

    #[error("{pos} is already occupied by {occupant:?}")]
    Occupied { pos: Pos, occupant: Stone },

    #[error("cannot place or remove an empty stone")]
    EmptyStone,

    #[error("no {color:?} stone at {pos}")]
    NotOwned { pos: Pos, color: Stone },
}

/// Errors surfaced by the search engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),

    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}

/// Errors that can occur when building a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_display() {
        let err = InvalidMove::Occupied {
            pos: Pos::new(3, 4),
            occupant: Stone::Black,
        };
        assert_eq!(err.to_string(), "(3, 4) is already occupied by Black");

        let err = InvalidMove::OutOfBounds {
            row: -1,
            col: 7,
            size: 20,
        };
        assert_eq!(err.to_string(), "(-1, 7) is outside the 20x20 board");
    }

    #[test]
    fn test_engine_error_wraps_invalid_move() {
        let err: EngineError = InvalidMove::EmptyStone.into();
        assert_eq!(
            err.to_string(),
            "invalid move: cannot place or remove an empty stone"
        );
    }

    #[test]
    fn test_internal_invariant_display() {
        let err = EngineError::InternalInvariant("no candidate moves".to_string());
        assert_eq!(
            err.to_string(),
            "internal invariant violated: no candidate moves"
        );
    }
}
