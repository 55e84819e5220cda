//! Grid navigation engine
//!
//! [`ClueIndex`] numbers the grid, [`NavigationGrid`] annotates each cell
//! with its clues, and [`advance`] moves the cursor according to a
//! [`NavConfig`] and its [`Halter`]s.

mod clues;
mod grid;
mod halter;
mod navigator;

pub use clues::{Clue, ClueIndex};
pub use grid::{Cell, CellLinks, ClueLinks, NavigationGrid};
pub use halter::{HaltCondition, Halter};
pub use navigator::{
    IterationMode, JumpLanding, NavConfig, Navigation, NavigationOutcome, advance,
};

#[cfg(test)]
pub(crate) use grid::grid_from_rows;
