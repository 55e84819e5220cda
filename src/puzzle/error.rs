//! Errors raised while loading or validating a puzzle

use crate::core::Position;
use thiserror::Error;

/// Why a puzzle could not be loaded or turned into a playable grid
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("failed to read puzzle file: {0}")]
    Io(#[from] std::io::Error),

    #[error("file type not supported: {0:?} (expected .puz)")]
    UnsupportedFormat(String),

    #[error("not an Across Lite file: missing ACROSS&DOWN magic")]
    BadMagic,

    #[error("puzzle data truncated while reading {0}")]
    Truncated(&'static str),

    #[error("invalid grid dimensions {cols}x{rows}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("{field} grid has {found} squares, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid character {ch:?} at index {index} of the {field} grid")]
    InvalidSquare {
        field: &'static str,
        index: usize,
        ch: char,
    },

    #[error("scrambled puzzles are not supported")]
    Scrambled,

    #[error("puzzle provides {expected} clues but its grid numbers {found}")]
    ClueCountMismatch { expected: usize, found: usize },

    #[error("puzzle has no playable squares")]
    NoPlayableCells,

    #[error("player state and solution disagree about the black square at {0}")]
    BlackCellMismatch(Position),
}
