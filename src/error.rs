//! Error types for the analysis engine
//!
//! Every error here is local and recoverable: text decoding and move replay
//! report them to the caller, who decides whether to surface or abort.

use thiserror::Error;

/// Why a move was rejected by the rules.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IllegalMoveReason {
    /// The move targets a subboard other than the active one
    #[error("wrong subboard")]
    WrongSubBoard,
    /// The target cell already holds a mark
    #[error("cell occupied")]
    CellOccupied,
    /// The target subboard has already been won
    #[error("subboard already decided")]
    SubBoardDecided,
    /// Cell or subboard index outside 0-8
    #[error("cell index out of range")]
    CellOutOfRange,
}

/// Malformed position or move-list text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Position text is not exactly 83 characters
    #[error("expected {expected} characters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// A character is not a digit in the range allowed at its offset
    #[error("unexpected {found:?} at offset {offset} (expected {expected})")]
    InvalidCharacter {
        offset: usize,
        found: char,
        expected: &'static str,
    },

    /// The compact format has no digit for "any subboard"
    #[error("position with a free active subboard cannot be encoded")]
    UnrepresentableActive,
}

/// Errors that can occur in the rules engine, codecs and variation tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Malformed position or move-list text
    #[error("invalid format: {0}")]
    InvalidFormat(#[from] FormatError),

    /// Move violates the active-subboard or occupancy rule
    #[error("illegal move: {reason}")]
    IllegalMove { reason: IllegalMoveReason },

    /// Illegal move while replaying a move list (ply is 1-based)
    #[error("illegal move at ply {ply}: {reason}")]
    IllegalMoveAt { ply: usize, reason: IllegalMoveReason },

    /// A move was added below a node whose game is already decided
    #[error("game is already over")]
    GameAlreadyOver,
}

impl GameError {
    pub(crate) fn illegal(reason: IllegalMoveReason) -> Self {
        GameError::IllegalMove { reason }
    }

    /// Attach a ply number to an `IllegalMove`; other errors pass through.
    pub(crate) fn at_ply(self, ply: usize) -> Self {
        match self {
            GameError::IllegalMove { reason } => GameError::IllegalMoveAt { ply, reason },
            other => other,
        }
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, GameError>;
