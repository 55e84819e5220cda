//! Stopping conditions for navigator walks

use super::grid::NavigationGrid;
use crate::core::{Position, Square};

/// What a walk is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltCondition {
    /// Any square that is not black
    ValidSquare,
    /// A square with no letter in it
    EmptySquare,
    /// The walk has left the clue it started in
    ClueChange,
}

/// A stopping condition plus whether the starting square may satisfy it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Halter {
    pub condition: HaltCondition,
    pub check_initial: bool,
}

impl Halter {
    #[must_use]
    pub const fn new(condition: HaltCondition) -> Self {
        Self {
            condition,
            check_initial: false,
        }
    }

    #[must_use]
    pub const fn valid_square() -> Self {
        Self::new(HaltCondition::ValidSquare)
    }

    #[must_use]
    pub const fn empty_square() -> Self {
        Self::new(HaltCondition::EmptySquare)
    }

    #[must_use]
    pub const fn clue_change() -> Self {
        Self::new(HaltCondition::ClueChange)
    }

    /// Also test the square the walk starts on
    #[must_use]
    pub const fn checking_initial(mut self) -> Self {
        self.check_initial = true;
        self
    }

    /// Does the walk stop on `pos`?
    #[must_use]
    pub fn matches(self, grid: &NavigationGrid, pos: Position, did_change_clue: bool) -> bool {
        match self.condition {
            HaltCondition::ValidSquare => grid.content(pos).is_some_and(|s| !s.is_black()),
            HaltCondition::EmptySquare => grid.content(pos) == Some(Square::Empty),
            HaltCondition::ClueChange => did_change_clue,
        }
    }
}
