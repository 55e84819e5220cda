//! Clue numbering
//!
//! Clues are discovered by a single row-major scan of the black-square
//! pattern. A playable square starts an across clue when it sits in the
//! first column or right of a black square, and a down clue when it sits in
//! the first row or below a black square. Every starting square takes the
//! next number, shared by both clues when it starts two.

use crate::core::{Direction, Orientation, Position, Square, unit_delta};
use crate::puzzle::PuzzleError;
use rustc_hash::FxHashMap;

/// A numbered across or down clue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    pub number: u16,
    pub orientation: Orientation,
    pub start: Position,
    pub end: Position,
    pub text: String,
    /// Solution letters along the clue (`-` where the solution is blank)
    pub answer: String,
}

impl Clue {
    /// Number of squares in the clue, never zero
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub const fn len(&self) -> usize {
        match self.orientation {
            Orientation::Horizontal => self.end.col - self.start.col + 1,
            Orientation::Vertical => self.end.row - self.start.row + 1,
        }
    }

    /// Does the clue cover this position?
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                pos.row == self.start.row && pos.col >= self.start.col && pos.col <= self.end.col
            }
            Orientation::Vertical => {
                pos.col == self.start.col && pos.row >= self.start.row && pos.row <= self.end.row
            }
        }
    }

    /// Positions covered by the clue, start to end
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let (dr, dc) = unit_delta(self.orientation, Direction::Forward);
        let start = self.start;
        (0..self.len()).filter_map(move |i| start.offset(dr * i as isize, dc * i as isize))
    }
}

/// A square that starts at least one clue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClueStart {
    pub number: u16,
    pub position: Position,
    pub across: bool,
    pub down: bool,
}

impl ClueStart {
    /// How many clue texts this square consumes
    pub const fn clue_count(self) -> usize {
        self.across as usize + self.down as usize
    }
}

/// Scan the grid for clue starts in row-major order
pub(crate) fn scan_starts(rows: usize, cols: usize, squares: &[Square]) -> Vec<ClueStart> {
    let is_black = |row: usize, col: usize| squares[row * cols + col].is_black();
    let mut starts = Vec::new();
    let mut number = 1u16;

    for row in 0..rows {
        for col in 0..cols {
            if is_black(row, col) {
                continue;
            }
            let across = col == 0 || is_black(row, col - 1);
            let down = row == 0 || is_black(row - 1, col);
            if across || down {
                starts.push(ClueStart {
                    number,
                    position: Position::new(row, col),
                    across,
                    down,
                });
                number += 1;
            }
        }
    }
    starts
}

/// Ordered across and down clue lists for one grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueIndex {
    across: Vec<Clue>,
    down: Vec<Clue>,
    numbers: FxHashMap<Position, u16>,
}

impl ClueIndex {
    /// Number the grid and attach clue texts
    ///
    /// `solution` supplies the black-square pattern and the answers; `texts`
    /// is the flat clue list in numbering order, across before down when
    /// both start on the same square.
    ///
    /// # Errors
    /// Returns `PuzzleError::ClueCountMismatch` if `texts` does not hold
    /// exactly one entry per clue, `PuzzleError::LengthMismatch` if
    /// `solution` is not `rows * cols` long, and
    /// `PuzzleError::NoPlayableCells` if the grid has no clues at all.
    ///
    /// # Examples
    /// ```
    /// use puzterm::core::{Orientation, parse_squares};
    /// use puzterm::navigation::ClueIndex;
    ///
    /// // A B
    /// // C .
    /// let solution = parse_squares("ABC.").unwrap();
    /// let texts = ["1A", "1D", "2D", "3A"].map(String::from);
    /// let index = ClueIndex::build(2, 2, &solution, &texts).unwrap();
    ///
    /// assert_eq!(index.across().len(), 2);
    /// assert_eq!(index.down().len(), 2);
    /// assert_eq!(index.get(Orientation::Vertical, 1).answer, "B");
    /// ```
    pub fn build(
        rows: usize,
        cols: usize,
        solution: &[Square],
        texts: &[String],
    ) -> Result<Self, PuzzleError> {
        if solution.len() != rows * cols {
            return Err(PuzzleError::LengthMismatch {
                field: "solution",
                expected: rows * cols,
                found: solution.len(),
            });
        }

        let starts = scan_starts(rows, cols, solution);
        let found: usize = starts.iter().map(|s| s.clue_count()).sum();
        if found == 0 {
            return Err(PuzzleError::NoPlayableCells);
        }
        if found != texts.len() {
            return Err(PuzzleError::ClueCountMismatch {
                expected: texts.len(),
                found,
            });
        }

        let mut across = Vec::new();
        let mut down = Vec::new();
        let mut numbers = FxHashMap::default();
        let mut texts = texts.iter();
        let make = |start: &ClueStart, orientation: Orientation, text: &String| {
            let end = walk_to_end(rows, cols, solution, start.position, orientation);
            let mut clue = Clue {
                number: start.number,
                orientation,
                start: start.position,
                end,
                text: text.clone(),
                answer: String::new(),
            };
            clue.answer = clue
                .positions()
                .map(|p| solution[p.row * cols + p.col].to_char())
                .collect();
            clue
        };

        for start in &starts {
            numbers.insert(start.position, start.number);
            // Texts were counted above, so the iterator cannot run dry
            if start.across
                && let Some(text) = texts.next()
            {
                across.push(make(start, Orientation::Horizontal, text));
            }
            if start.down
                && let Some(text) = texts.next()
            {
                down.push(make(start, Orientation::Vertical, text));
            }
        }

        Ok(Self {
            across,
            down,
            numbers,
        })
    }

    /// Across clues in numbering order
    #[must_use]
    pub fn across(&self) -> &[Clue] {
        &self.across
    }

    /// Down clues in numbering order
    #[must_use]
    pub fn down(&self) -> &[Clue] {
        &self.down
    }

    /// Clues for one orientation in numbering order
    #[must_use]
    pub fn list(&self, orientation: Orientation) -> &[Clue] {
        match orientation {
            Orientation::Horizontal => &self.across,
            Orientation::Vertical => &self.down,
        }
    }

    /// Clue by its index in the orientation's list
    ///
    /// # Panics
    /// Panics if `index` is out of range for that list.
    #[must_use]
    pub fn get(&self, orientation: Orientation, index: usize) -> &Clue {
        &self.list(orientation)[index]
    }

    /// Find a clue by number
    #[must_use]
    pub fn find(&self, orientation: Orientation, number: u16) -> Option<&Clue> {
        self.list(orientation).iter().find(|c| c.number == number)
    }

    /// The number printed in a square, if it starts a clue
    #[must_use]
    pub fn number_at(&self, pos: Position) -> Option<u16> {
        self.numbers.get(&pos).copied()
    }

    /// Total number of clues in both orientations
    #[must_use]
    pub fn len(&self) -> usize {
        self.across.len() + self.down.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn walk_to_end(
    rows: usize,
    cols: usize,
    solution: &[Square],
    start: Position,
    orientation: Orientation,
) -> Position {
    let mut end = start;
    loop {
        let next = match orientation {
            Orientation::Horizontal => Position::new(end.row, end.col + 1),
            Orientation::Vertical => Position::new(end.row + 1, end.col),
        };
        if next.row >= rows || next.col >= cols || solution[next.row * cols + next.col].is_black() {
            return end;
        }
        end = next;
    }
}
