//! Grid coordinates and movement vocabulary

use std::fmt;

/// A cell coordinate, zero-based, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset by a signed delta, returning `None` if either coordinate
    /// would become negative
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

/// Which clue direction governs movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Across
    #[default]
    Horizontal,
    /// Down
    Vertical,
}

impl Orientation {
    /// The perpendicular orientation
    ///
    /// # Examples
    /// ```
    /// use puzterm::core::Orientation;
    ///
    /// assert_eq!(Orientation::Horizontal.toggled(), Orientation::Vertical);
    /// assert_eq!(Orientation::Vertical.toggled(), Orientation::Horizontal);
    /// ```
    #[inline]
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Crossword name of the orientation ("Across" / "Down")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Horizontal => "Across",
            Self::Vertical => "Down",
        }
    }
}

/// Direction of travel along an orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    #[inline]
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }

    /// +1 for forward, -1 for reverse
    #[inline]
    #[must_use]
    pub const fn sign(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }
}

/// Unit step `(d_row, d_col)` for an orientation and direction
///
/// # Examples
/// ```
/// use puzterm::core::{Direction, Orientation, unit_delta};
///
/// assert_eq!(unit_delta(Orientation::Horizontal, Direction::Forward), (0, 1));
/// assert_eq!(unit_delta(Orientation::Vertical, Direction::Reverse), (-1, 0));
/// ```
#[inline]
#[must_use]
pub const fn unit_delta(orientation: Orientation, direction: Direction) -> (isize, isize) {
    match orientation {
        Orientation::Horizontal => (0, direction.sign()),
        Orientation::Vertical => (direction.sign(), 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_rejects_negative() {
        let p = Position::new(0, 3);
        assert_eq!(p.offset(0, -1), Some(Position::new(0, 2)));
        assert_eq!(p.offset(-1, 0), None);
        assert_eq!(Position::new(2, 0).offset(0, -1), None);
    }

    #[test]
    fn unit_deltas_cover_all_cases() {
        use Direction::{Forward, Reverse};
        use Orientation::{Horizontal, Vertical};

        assert_eq!(unit_delta(Horizontal, Forward), (0, 1));
        assert_eq!(unit_delta(Horizontal, Reverse), (0, -1));
        assert_eq!(unit_delta(Vertical, Forward), (1, 0));
        assert_eq!(unit_delta(Vertical, Reverse), (-1, 0));
    }

    #[test]
    fn toggles_are_involutions() {
        for o in [Orientation::Horizontal, Orientation::Vertical] {
            assert_eq!(o.toggled().toggled(), o);
        }
        for d in [Direction::Forward, Direction::Reverse] {
            assert_eq!(d.reversed().reversed(), d);
        }
    }

    #[test]
    fn position_display() {
        assert_eq!(Position::new(3, 7).to_string(), "[3, 7]");
    }
}
