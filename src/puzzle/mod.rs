//! Puzzle definitions
//!
//! A [`Puzzle`] is the raw content of a crossword file: metadata, the
//! solution and player-state grid strings, and the flat clue list in the
//! order the grid numbering discovers the clues.

mod error;
pub mod loader;
mod sample;

pub use error::PuzzleError;
pub use sample::sample;

use crate::core::{Square, parse_squares};

/// A loaded crossword puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub title: String,
    pub author: String,
    pub copyright: String,
    pub notes: String,
    pub version: String,
    pub rows: usize,
    pub cols: usize,
    /// Row-major solution, `.` for black squares
    pub solution: String,
    /// Row-major player state, `.` for black squares and `-` for empty ones
    pub state: String,
    /// Clue texts, across before down for clues sharing a number
    pub clues: Vec<String>,
    /// Whether the file's checksums matched its content
    pub checksums_valid: bool,
}

impl Puzzle {
    /// Create a puzzle from its grids and clues
    ///
    /// # Errors
    /// Returns `PuzzleError` if a dimension is zero, a grid string has the
    /// wrong length, or a grid contains a character that is not a square.
    ///
    /// # Examples
    /// ```
    /// use puzterm::puzzle::Puzzle;
    ///
    /// let puzzle = Puzzle::new(1, 3, "CAT", "---", vec!["Feline".into(), "C".into(), "A".into(), "T".into()]).unwrap();
    /// assert_eq!(puzzle.num_cells(), 3);
    ///
    /// assert!(Puzzle::new(1, 3, "CATS", "---", vec![]).is_err());
    /// ```
    pub fn new(
        rows: usize,
        cols: usize,
        solution: impl Into<String>,
        state: impl Into<String>,
        clues: Vec<String>,
    ) -> Result<Self, PuzzleError> {
        if rows == 0 || cols == 0 {
            return Err(PuzzleError::InvalidDimensions { rows, cols });
        }

        let solution = solution.into();
        let state = state.into();
        validate_grid("solution", &solution, rows * cols)?;
        validate_grid("state", &state, rows * cols)?;

        Ok(Self {
            title: String::new(),
            author: String::new(),
            copyright: String::new(),
            notes: String::new(),
            version: String::new(),
            rows,
            cols,
            solution,
            state,
            clues,
            checksums_valid: true,
        })
    }

    /// Create an unsolved puzzle whose player state is derived from the solution
    ///
    /// # Errors
    /// Same as [`Puzzle::new`].
    pub fn unsolved(
        rows: usize,
        cols: usize,
        solution: impl Into<String>,
        clues: Vec<String>,
    ) -> Result<Self, PuzzleError> {
        let solution = solution.into();
        let state: String = solution
            .chars()
            .map(|c| if c == '.' { '.' } else { '-' })
            .collect();
        Self::new(rows, cols, solution, state, clues)
    }

    /// Attach title, author and copyright
    #[must_use]
    pub fn with_metadata(
        mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        copyright: impl Into<String>,
    ) -> Self {
        self.title = title.into();
        self.author = author.into();
        self.copyright = copyright.into();
        self
    }

    #[inline]
    #[must_use]
    pub const fn num_cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Solution as squares
    ///
    /// # Panics
    /// Will not panic - grids are validated on construction.
    #[must_use]
    pub fn solution_squares(&self) -> Vec<Square> {
        parse_squares(&self.solution).expect("solution validated on construction")
    }

    /// Player state as squares
    ///
    /// # Panics
    /// Will not panic - grids are validated on construction.
    #[must_use]
    pub fn state_squares(&self) -> Vec<Square> {
        parse_squares(&self.state).expect("state validated on construction")
    }
}

fn validate_grid(field: &'static str, grid: &str, expected: usize) -> Result<(), PuzzleError> {
    let found = grid.chars().count();
    if found != expected {
        return Err(PuzzleError::LengthMismatch {
            field,
            expected,
            found,
        });
    }
    parse_squares(grid)
        .map(|_| ())
        .map_err(|(index, ch)| PuzzleError::InvalidSquare { field, index, ch })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(
            Puzzle::new(0, 3, "", "", vec![]),
            Err(PuzzleError::InvalidDimensions { rows: 0, cols: 3 })
        ));
    }

    #[test]
    fn new_rejects_length_mismatch() {
        assert!(matches!(
            Puzzle::new(2, 2, "ABC", "----", vec![]),
            Err(PuzzleError::LengthMismatch {
                field: "solution",
                expected: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn new_rejects_bad_characters() {
        assert!(matches!(
            Puzzle::new(1, 3, "AB*", "---", vec![]),
            Err(PuzzleError::InvalidSquare {
                field: "solution",
                index: 2,
                ch: '*'
            })
        ));
    }

    #[test]
    fn unsolved_blanks_letters_and_keeps_blacks() {
        let puzzle = Puzzle::unsolved(1, 4, "AB.C", vec![]).unwrap();
        assert_eq!(puzzle.state, "--.-");
        assert_eq!(
            puzzle.state_squares(),
            vec![Square::Empty, Square::Empty, Square::Black, Square::Empty]
        );
    }

    #[test]
    fn metadata_is_attached() {
        let puzzle = Puzzle::unsolved(1, 1, "A", vec![])
            .unwrap()
            .with_metadata("Title", "Author", "(c)");
        assert_eq!(puzzle.title, "Title");
        assert_eq!(puzzle.author, "Author");
        assert_eq!(puzzle.copyright, "(c)");
    }
}
