//! Embedded demo puzzle
//!
//! A 5x5 word square (every row reads the same as the matching column),
//! used when `play` is started without a file.

use super::Puzzle;

const SOLUTION: &str = concat!("HEART", "EMBER", "ABUSE", "RESIN", "TREND");

/// Clue texts in grid-numbering order: 1A, 1D, 2D, 3D, 4D, 5D, 6A, 7A, 8A, 9A
const CLUES: &[&str] = &[
    "Organ with four chambers",
    "Courage, figuratively",
    "Glowing coal remnant",
    "Misuse",
    "Pine tree secretion",
    "Fashion movement",
    "Dying fire's glow",
    "Mistreat",
    "Amber, once",
    "What's hot right now",
];

/// The built-in sample puzzle
///
/// # Panics
/// Will not panic - the embedded grid is a fixed valid 5x5 puzzle.
#[must_use]
pub fn sample() -> Puzzle {
    Puzzle::unsolved(5, 5, SOLUTION, CLUES.iter().map(|&c| c.to_string()).collect())
        .expect("embedded sample puzzle is valid")
        .with_metadata("Heart of the Matter", "puzterm", "Public domain")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_a_word_square() {
        let puzzle = sample();
        let rows: Vec<&str> = (0..5).map(|r| &puzzle.solution[r * 5..r * 5 + 5]).collect();
        for (i, row) in rows.iter().enumerate() {
            let column: String = rows.iter().map(|r| r.as_bytes()[i] as char).collect();
            assert_eq!(*row, column);
        }
    }

    #[test]
    fn sample_starts_unsolved() {
        let puzzle = sample();
        assert!(puzzle.state.chars().all(|c| c == '-'));
        assert_eq!(puzzle.clues.len(), 10);
    }
}
