//! Interactive terminal front end

pub mod app;
pub mod keymap;
pub mod rendering;
pub mod stopwatch;

pub use app::{App, run_tui};
