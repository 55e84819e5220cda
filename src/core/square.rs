//! Crossword square representation
//!
//! A square is either black (not playable), empty, or holds a letter.
//! The text encoding follows the `.puz` grid strings: `.` for black,
//! `-` for empty, anything alphanumeric for a letter.

use std::fmt;

/// Marker used for black squares in grid strings
pub const BLACK_MARKER: char = '.';

/// Marker used for unfilled squares in grid strings
pub const EMPTY_MARKER: char = '-';

/// A single square of a crossword grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    /// Not playable, impassable to traversal
    Black,
    /// Playable but not filled in yet
    Empty,
    /// Filled with an (uppercase) letter or digit
    Letter(char),
}

impl Square {
    /// Parse a square from its grid character
    ///
    /// Letters are normalized to uppercase. Returns `None` for characters
    /// that have no meaning in a grid.
    ///
    /// # Examples
    /// ```
    /// use puzterm::core::Square;
    ///
    /// assert_eq!(Square::from_char('.'), Some(Square::Black));
    /// assert_eq!(Square::from_char('-'), Some(Square::Empty));
    /// assert_eq!(Square::from_char('q'), Some(Square::Letter('Q')));
    /// assert_eq!(Square::from_char('?'), None);
    /// ```
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            BLACK_MARKER => Some(Self::Black),
            EMPTY_MARKER => Some(Self::Empty),
            c if c.is_ascii_alphanumeric() => Some(Self::Letter(c.to_ascii_uppercase())),
            _ => None,
        }
    }

    /// Grid character for this square
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Black => BLACK_MARKER,
            Self::Empty => EMPTY_MARKER,
            Self::Letter(c) => c,
        }
    }

    /// Is this a black (non-playable) square?
    #[inline]
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }

    /// Is this a playable square that has not been filled in?
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The letter in this square, if any
    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Letter(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Parse a whole grid string into squares
///
/// Returns the index and character of the first invalid square on failure.
pub fn parse_squares(text: &str) -> Result<Vec<Square>, (usize, char)> {
    text.chars()
        .enumerate()
        .map(|(i, ch)| Square::from_char(ch).ok_or((i, ch)))
        .collect()
}
