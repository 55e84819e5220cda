//! Core domain types for crossword grids
//!
//! This module contains the fundamental grid vocabulary with zero external dependencies.
//! All types here are small `Copy` values shared by the loader, the navigation engine and the UI.

mod geometry;
mod square;

pub use geometry::{Direction, Orientation, Position, unit_delta};
pub use square::{BLACK_MARKER, EMPTY_MARKER, Square, parse_squares};
