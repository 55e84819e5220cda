//! Per-cell clue annotations
//!
//! Every playable cell records which across and down clue it belongs to and
//! the clues before and after those in each orientation's circular order, so
//! the navigator never has to search the clue lists during a walk.

use super::clues::{Clue, ClueIndex};
use crate::core::{Orientation, Position, Square};
use crate::puzzle::{Puzzle, PuzzleError};

/// Indices into one orientation's clue list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClueLinks {
    pub current: usize,
    pub next: usize,
    pub prev: usize,
}

impl ClueLinks {
    const fn circular(current: usize, len: usize) -> Self {
        Self {
            current,
            next: (current + 1) % len,
            prev: (current + len - 1) % len,
        }
    }
}

/// Clue links of a playable cell in both orientations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLinks {
    pub across: ClueLinks,
    pub down: ClueLinks,
}

impl CellLinks {
    #[inline]
    #[must_use]
    pub const fn get(&self, orientation: Orientation) -> ClueLinks {
        match orientation {
            Orientation::Horizontal => self.across,
            Orientation::Vertical => self.down,
        }
    }
}

/// One grid square with its clue links (`None` for black squares)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub content: Square,
    links: Option<CellLinks>,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn links(&self) -> Option<CellLinks> {
        self.links
    }
}

/// The playable grid: cell contents plus precomputed clue topology
///
/// Only cell contents change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    clues: ClueIndex,
}

impl NavigationGrid {
    /// Build the grid for a puzzle
    ///
    /// Cell contents come from the player state; clue numbering and
    /// answers come from the solution.
    ///
    /// # Errors
    /// Returns `PuzzleError::BlackCellMismatch` when the state and solution
    /// disagree about a black square, and any error from
    /// [`ClueIndex::build`].
    ///
    /// # Examples
    /// ```
    /// use puzterm::core::{Orientation, Position};
    /// use puzterm::navigation::NavigationGrid;
    /// use puzterm::puzzle;
    ///
    /// let grid = NavigationGrid::new(&puzzle::sample()).unwrap();
    /// let clue = grid.clue_at(Position::new(2, 3), Orientation::Vertical).unwrap();
    /// assert_eq!(clue.number, 4);
    /// ```
    pub fn new(puzzle: &Puzzle) -> Result<Self, PuzzleError> {
        Self::from_squares(
            puzzle.rows,
            puzzle.cols,
            &puzzle.solution_squares(),
            puzzle.state_squares(),
            &puzzle.clues,
        )
    }

    pub(crate) fn from_squares(
        rows: usize,
        cols: usize,
        solution: &[Square],
        state: Vec<Square>,
        texts: &[String],
    ) -> Result<Self, PuzzleError> {
        if state.len() != rows * cols {
            return Err(PuzzleError::LengthMismatch {
                field: "state",
                expected: rows * cols,
                found: state.len(),
            });
        }
        let clues = ClueIndex::build(rows, cols, solution, texts)?;

        for (i, (sol, cur)) in solution.iter().zip(&state).enumerate() {
            if sol.is_black() != cur.is_black() {
                return Err(PuzzleError::BlackCellMismatch(Position::new(i / cols, i % cols)));
            }
        }

        let cells = link_cells(rows, cols, &state, &clues);
        Ok(Self {
            rows,
            cols,
            cells,
            clues,
        })
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    const fn index(&self, pos: Position) -> Option<usize> {
        if pos.row < self.rows && pos.col < self.cols {
            Some(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// Content of a square, `None` outside the grid
    #[must_use]
    pub fn content(&self, pos: Position) -> Option<Square> {
        self.cell(pos).map(|c| c.content)
    }

    /// Overwrite a playable square
    ///
    /// Returns `false` and leaves the grid untouched when `pos` is outside
    /// the grid, is black, or `square` is black.
    pub fn set_content(&mut self, pos: Position, square: Square) -> bool {
        let Some(i) = self.index(pos) else {
            return false;
        };
        let cell = &mut self.cells[i];
        if cell.content.is_black() || square.is_black() {
            return false;
        }
        cell.content = square;
        true
    }

    /// In bounds and not black
    #[must_use]
    pub fn is_visitable(&self, row: isize, col: isize) -> bool {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return false;
        };
        self.content(Position::new(row, col))
            .is_some_and(|s| !s.is_black())
    }

    /// Clue links of a cell in one orientation
    #[must_use]
    pub fn links(&self, pos: Position, orientation: Orientation) -> Option<ClueLinks> {
        self.cell(pos)?.links.map(|l| l.get(orientation))
    }

    /// Index of the clue under a cell in the orientation's list
    #[must_use]
    pub fn clue_id(&self, pos: Position, orientation: Orientation) -> Option<usize> {
        self.links(pos, orientation).map(|l| l.current)
    }

    /// The clue under a cell
    #[must_use]
    pub fn clue_at(&self, pos: Position, orientation: Orientation) -> Option<&Clue> {
        self.clue_id(pos, orientation)
            .map(|i| self.clues.get(orientation, i))
    }

    #[must_use]
    pub const fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    /// First playable cell in row-major order (the start of 1-Across)
    #[must_use]
    pub fn first_playable(&self) -> Position {
        self.clues
            .across()
            .first()
            .map_or(Position::new(0, 0), |c| c.start)
    }

    /// Every playable square holds a letter
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|c| c.content.is_black() || c.content.letter().is_some())
    }

    /// Contents equal `solution` square for square
    #[must_use]
    pub fn matches(&self, solution: &[Square]) -> bool {
        solution.len() == self.cells.len()
            && self.cells.iter().zip(solution).all(|(c, s)| c.content == *s)
    }

    /// Contents of one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = Square> + '_ {
        let start = (row * self.cols).min(self.cells.len());
        let end = (start + self.cols).min(self.cells.len());
        self.cells[start..end].iter().map(|c| c.content)
    }
}

fn link_cells(rows: usize, cols: usize, state: &[Square], clues: &ClueIndex) -> Vec<Cell> {
    let across = clues.across();
    let down = clues.down();
    let mut cells: Vec<Cell> = Vec::with_capacity(rows * cols);

    let mut current_across = 0;
    let mut next_across = 0;
    let mut current_down = 0;
    let mut next_down = 0;

    for row in 0..rows {
        for col in 0..cols {
            let pos = Position::new(row, col);
            let content = state[row * cols + col];
            if content.is_black() {
                cells.push(Cell {
                    content,
                    links: None,
                });
                continue;
            }

            if across.get(next_across).is_some_and(|c| c.start == pos) {
                current_across = next_across;
                next_across += 1;
            }
            if down.get(next_down).is_some_and(|c| c.start == pos) {
                current_down = next_down;
                next_down += 1;
            }

            let above = (row > 0)
                .then(|| cells[(row - 1) * cols + col].links)
                .flatten();
            let down_links = match above {
                Some(links) => links.down,
                None => ClueLinks::circular(current_down, down.len()),
            };

            cells.push(Cell {
                content,
                links: Some(CellLinks {
                    across: ClueLinks::circular(current_across, across.len()),
                    down: down_links,
                }),
            });
        }
    }
    cells
}

/// Build a grid from row strings in `.puz` notation (`.` black, `-` empty)
///
/// Empty squares get `X` in the solution; clue texts are generated.
#[cfg(test)]
pub(crate) fn grid_from_rows(rows: &[&str]) -> NavigationGrid {
    use crate::core::parse_squares;

    let cols = rows[0].len();
    let state = parse_squares(&rows.concat()).unwrap();
    let solution: Vec<Square> = state
        .iter()
        .map(|s| match s {
            Square::Empty => Square::Letter('X'),
            other => *other,
        })
        .collect();
    let count: usize = super::clues::scan_starts(rows.len(), cols, &solution)
        .iter()
        .map(|s| s.clue_count())
        .sum();
    let texts: Vec<String> = (0..count).map(|i| format!("clue {i}")).collect();
    NavigationGrid::from_squares(rows.len(), cols, &solution, state, &texts).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donut() -> NavigationGrid {
        grid_from_rows(&["-----", "-----", "--.--", "-----", "-----"])
    }

    #[test]
    fn playable_cells_have_links_and_black_cells_do_not() {
        let grid = donut();
        for row in 0..5 {
            for col in 0..5 {
                let pos = Position::new(row, col);
                let black = grid.content(pos).unwrap().is_black();
                assert_eq!(grid.links(pos, Orientation::Horizontal).is_none(), black);
                assert_eq!(grid.links(pos, Orientation::Vertical).is_none(), black);
            }
        }
    }

    #[test]
    fn across_clue_per_cell() {
        let grid = donut();
        let number = |r, c| grid.clue_at(Position::new(r, c), Orientation::Horizontal).unwrap().number;
        assert_eq!(number(0, 4), 1);
        assert_eq!(number(1, 3), 6);
        assert_eq!(number(2, 1), 7);
        assert_eq!(number(2, 4), 8);
        assert_eq!(number(3, 2), 9);
        assert_eq!(number(4, 0), 11);
    }

    #[test]
    fn down_clue_propagates_through_rows() {
        let grid = donut();
        let number = |r, c| grid.clue_at(Position::new(r, c), Orientation::Vertical).unwrap().number;
        assert_eq!(number(4, 0), 1);
        assert_eq!(number(3, 1), 2);
        assert_eq!(number(1, 2), 3);
        assert_eq!(number(3, 2), 10);
        assert_eq!(number(4, 2), 10);
        assert_eq!(number(2, 3), 4);
        assert_eq!(number(4, 4), 5);
    }

    #[test]
    fn next_and_prev_are_circular() {
        let grid = donut();
        let across = grid.links(Position::new(0, 0), Orientation::Horizontal).unwrap();
        assert_eq!(across.current, 0);
        assert_eq!(across.next, 1);
        assert_eq!(across.prev, 5);

        let down = grid.links(Position::new(4, 2), Orientation::Vertical).unwrap();
        assert_eq!(down.current, 5);
        assert_eq!(down.next, 0);
        assert_eq!(down.prev, 4);
    }

    #[test]
    fn single_clue_links_to_itself() {
        let grid = grid_from_rows(&["-----"]);
        let links = grid.links(Position::new(0, 3), Orientation::Horizontal).unwrap();
        assert_eq!((links.current, links.next, links.prev), (0, 0, 0));
    }

    #[test]
    fn set_content_refuses_black_and_out_of_range() {
        let mut grid = donut();
        assert!(grid.set_content(Position::new(0, 0), Square::Letter('A')));
        assert_eq!(grid.content(Position::new(0, 0)), Some(Square::Letter('A')));
        assert!(!grid.set_content(Position::new(2, 2), Square::Letter('A')));
        assert!(!grid.set_content(Position::new(5, 0), Square::Letter('A')));
        assert!(!grid.set_content(Position::new(0, 1), Square::Black));
        assert_eq!(grid.content(Position::new(2, 2)), Some(Square::Black));
    }

    #[test]
    fn visitability() {
        let grid = donut();
        assert!(grid.is_visitable(0, 0));
        assert!(!grid.is_visitable(2, 2));
        assert!(!grid.is_visitable(-1, 0));
        assert!(!grid.is_visitable(0, 5));
    }

    #[test]
    fn filled_and_matching() {
        let mut grid = grid_from_rows(&["-.", "--"]);
        let solution = vec![
            Square::Letter('X'),
            Square::Black,
            Square::Letter('X'),
            Square::Letter('X'),
        ];
        assert!(!grid.is_filled());
        for pos in [Position::new(0, 0), Position::new(1, 0), Position::new(1, 1)] {
            grid.set_content(pos, Square::Letter('X'));
        }
        assert!(grid.is_filled());
        assert!(grid.matches(&solution));

        grid.set_content(Position::new(1, 1), Square::Letter('Y'));
        assert!(grid.is_filled());
        assert!(!grid.matches(&solution));
    }

    #[test]
    fn black_cell_disagreement_is_rejected() {
        let puzzle = Puzzle::new(1, 3, "AB.", "--", vec![]);
        assert!(puzzle.is_err());

        let puzzle = Puzzle::new(1, 3, "A.B", "---", vec!["1".into(), "1".into(), "2".into(), "2".into()]).unwrap();
        assert!(matches!(
            NavigationGrid::new(&puzzle),
            Err(PuzzleError::BlackCellMismatch(p)) if p == Position::new(0, 1)
        ));
    }

    #[test]
    fn first_playable_skips_black_squares() {
        let grid = grid_from_rows(&[".--", "---"]);
        assert_eq!(grid.first_playable(), Position::new(0, 1));
    }

    #[test]
    fn rows_iterate_contents() {
        let grid = donut();
        let middle: Vec<Square> = grid.row(2).collect();
        assert_eq!(middle[2], Square::Black);
        assert_eq!(middle.len(), 5);
    }
}
