//! Command implementations

pub mod info;
pub mod show;

pub use info::{ClueEntry, PuzzleSummary, summarize};
pub use show::{GridSource, GridView, ViewCell, grid_view};
