//! Puzzle summary command
//!
//! Collects a puzzle's metadata and numbered clue lists for printing.

use crate::core::Orientation;
use crate::navigation::ClueIndex;
use crate::puzzle::{Puzzle, PuzzleError};

/// One numbered clue
pub struct ClueEntry {
    pub number: u16,
    pub text: String,
    pub length: usize,
}

/// Result of summarizing a puzzle
pub struct PuzzleSummary {
    pub title: String,
    pub author: String,
    pub copyright: String,
    pub notes: String,
    pub version: String,
    pub rows: usize,
    pub cols: usize,
    pub checksums_valid: bool,
    pub filled: usize,
    pub playable: usize,
    pub across: Vec<ClueEntry>,
    pub down: Vec<ClueEntry>,
}

/// Summarize a loaded puzzle
///
/// # Errors
///
/// Returns an error if the grid cannot be numbered against its clue list.
pub fn summarize(puzzle: &Puzzle) -> Result<PuzzleSummary, PuzzleError> {
    let index = ClueIndex::build(
        puzzle.rows,
        puzzle.cols,
        &puzzle.solution_squares(),
        &puzzle.clues,
    )?;
    let entries = |orientation: Orientation| -> Vec<ClueEntry> {
        index
            .list(orientation)
            .iter()
            .map(|c| ClueEntry {
                number: c.number,
                text: c.text.clone(),
                length: c.len(),
            })
            .collect()
    };

    let state = puzzle.state_squares();
    let playable = state.iter().filter(|s| !s.is_black()).count();
    let filled = state.iter().filter(|s| s.letter().is_some()).count();

    Ok(PuzzleSummary {
        title: puzzle.title.clone(),
        author: puzzle.author.clone(),
        copyright: puzzle.copyright.clone(),
        notes: puzzle.notes.clone(),
        version: puzzle.version.clone(),
        rows: puzzle.rows,
        cols: puzzle.cols,
        checksums_valid: puzzle.checksums_valid,
        filled,
        playable,
        across: entries(Orientation::Horizontal),
        down: entries(Orientation::Vertical),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle;

    #[test]
    fn summarizes_the_sample() {
        let summary = summarize(&puzzle::sample()).unwrap();
        assert_eq!(summary.title, "Heart of the Matter");
        assert_eq!((summary.rows, summary.cols), (5, 5));
        assert_eq!(summary.playable, 25);
        assert_eq!(summary.filled, 0);

        let across: Vec<u16> = summary.across.iter().map(|c| c.number).collect();
        let down: Vec<u16> = summary.down.iter().map(|c| c.number).collect();
        assert_eq!(across, vec![1, 6, 7, 8, 9]);
        assert_eq!(down, vec![1, 2, 3, 4, 5]);
        assert_eq!(summary.across[0].text, "Organ with four chambers");
        assert_eq!(summary.down[0].length, 5);
    }

    #[test]
    fn counts_filled_squares() {
        let puzzle = Puzzle::new(1, 3, "CAT", "C-T", vec!["a".into(), "b".into(), "c".into(), "d".into()]).unwrap();
        let summary = summarize(&puzzle).unwrap();
        assert_eq!(summary.filled, 2);
        assert_eq!(summary.playable, 3);
    }

    #[test]
    fn clue_mismatch_is_reported() {
        let puzzle = Puzzle::unsolved(1, 3, "CAT", vec!["only one".into()]).unwrap();
        assert!(matches!(
            summarize(&puzzle),
            Err(PuzzleError::ClueCountMismatch { .. })
        ));
    }
}
