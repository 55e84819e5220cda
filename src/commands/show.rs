//! Grid display command

use crate::core::{Position, Square};
use crate::navigation::ClueIndex;
use crate::puzzle::{Puzzle, PuzzleError};

/// Which grid to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridSource {
    #[default]
    State,
    Solution,
}

/// A square ready for printing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCell {
    pub square: Square,
    pub number: Option<u16>,
}

/// A numbered grid, row by row
pub struct GridView {
    pub title: String,
    pub rows: Vec<Vec<ViewCell>>,
}

/// Lay out a puzzle grid with its clue numbers
///
/// # Errors
///
/// Returns an error if the grid cannot be numbered against its clue list.
pub fn grid_view(puzzle: &Puzzle, source: GridSource) -> Result<GridView, PuzzleError> {
    let solution = puzzle.solution_squares();
    let index = ClueIndex::build(puzzle.rows, puzzle.cols, &solution, &puzzle.clues)?;
    let squares = match source {
        GridSource::State => puzzle.state_squares(),
        GridSource::Solution => solution,
    };

    let rows = squares
        .chunks(puzzle.cols)
        .enumerate()
        .map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(|(col, &square)| ViewCell {
                    square,
                    number: index.number_at(Position::new(row, col)),
                })
                .collect()
        })
        .collect();

    Ok(GridView {
        title: puzzle.title.clone(),
        rows,
    })
}
