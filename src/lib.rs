//! puzterm
//!
//! Solve Across Lite crossword puzzles in the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use puzterm::core::Position;
//! use puzterm::preferences::Preferences;
//! use puzterm::puzzle;
//! use puzterm::session::{Action, Session};
//!
//! let mut session = Session::new(&puzzle::sample(), Preferences::default()).unwrap();
//!
//! // Type the first across answer; the cursor moves on to 6-Across
//! for ch in "HEART".chars() {
//!     session.apply(Action::Type(ch));
//! }
//! assert_eq!(session.cursor(), Position::new(1, 0));
//! assert_eq!(session.current_clue().unwrap().number, 6);
//! ```

// Core domain types
pub mod core;

// Puzzle definitions and the .puz loader
pub mod puzzle;

// Grid navigation engine
pub mod navigation;

// Play state
pub mod session;

// Behavior toggles and the config file
pub mod config;
pub mod preferences;

// File logging
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
