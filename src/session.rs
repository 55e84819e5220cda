//! Play state for one puzzle
//!
//! A [`Session`] owns the navigation grid, the cursor and the current
//! orientation. Each user [`Action`] is turned into a fresh [`NavConfig`]
//! according to the [`Preferences`], run through [`advance`], and the cursor
//! and orientation are updated from the result.

use crate::core::{Direction, Orientation, Position, Square};
use crate::navigation::{
    Clue, Halter, IterationMode, JumpLanding, NavConfig, Navigation, NavigationGrid, advance,
};
use crate::preferences::Preferences;
use crate::puzzle::{Puzzle, PuzzleError};
use tracing::{debug, info};

/// Arrow key directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Up,
    Down,
    Left,
    Right,
}

impl Arrow {
    /// Orientation and direction of travel
    #[must_use]
    pub const fn heading(self) -> (Orientation, Direction) {
        match self {
            Self::Up => (Orientation::Vertical, Direction::Reverse),
            Self::Down => (Orientation::Vertical, Direction::Forward),
            Self::Left => (Orientation::Horizontal, Direction::Reverse),
            Self::Right => (Orientation::Horizontal, Direction::Forward),
        }
    }
}

/// Something the player did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Write a letter or digit and move on
    Type(char),
    /// Clear the square and move back
    Delete,
    NextClue,
    PrevClue,
    ToggleOrientation,
    Move(Arrow),
}

/// Where an action left the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionReport {
    pub cursor: Position,
    pub orientation: Orientation,
    pub did_wrap: bool,
    pub did_change_clue: bool,
}

/// An in-progress puzzle
#[derive(Debug, Clone)]
pub struct Session {
    grid: NavigationGrid,
    solution: Vec<Square>,
    cursor: Position,
    orientation: Orientation,
    preferences: Preferences,
    solved: bool,
}

impl Session {
    /// Start playing a puzzle
    ///
    /// # Errors
    /// Returns `PuzzleError` if the puzzle cannot be turned into a
    /// navigation grid.
    ///
    /// # Examples
    /// ```
    /// use puzterm::core::Position;
    /// use puzterm::preferences::Preferences;
    /// use puzterm::puzzle;
    /// use puzterm::session::{Action, Session};
    ///
    /// let mut session = Session::new(&puzzle::sample(), Preferences::default()).unwrap();
    /// let report = session.apply(Action::Type('h'));
    /// assert_eq!(report.cursor, Position::new(0, 1));
    /// assert!(!session.is_solved());
    /// ```
    pub fn new(puzzle: &Puzzle, preferences: Preferences) -> Result<Self, PuzzleError> {
        let grid = NavigationGrid::new(puzzle)?;
        let solution = puzzle.solution_squares();
        let cursor = grid.first_playable();
        let solved = grid.matches(&solution);
        info!(
            rows = grid.rows(),
            cols = grid.cols(),
            clues = grid.clues().len(),
            "session started"
        );

        Ok(Self {
            grid,
            solution,
            cursor,
            orientation: Orientation::Horizontal,
            preferences,
            solved,
        })
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Position {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &NavigationGrid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    #[must_use]
    pub const fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub const fn set_preferences(&mut self, preferences: Preferences) {
        self.preferences = preferences;
    }

    /// Clue under the cursor in the current orientation
    #[must_use]
    pub fn current_clue(&self) -> Option<&Clue> {
        self.grid.clue_at(self.cursor, self.orientation)
    }

    /// Across and down clues under the cursor
    #[must_use]
    pub fn current_clues(&self) -> (Option<&Clue>, Option<&Clue>) {
        (
            self.grid.clue_at(self.cursor, Orientation::Horizontal),
            self.grid.clue_at(self.cursor, Orientation::Vertical),
        )
    }

    /// Is `pos` part of the word being worked on?
    #[must_use]
    pub fn is_in_active_word(&self, pos: Position) -> bool {
        self.current_clue().is_some_and(|c| c.contains(pos))
    }

    /// Apply one player action
    ///
    /// Does nothing once the puzzle is solved.
    pub fn apply(&mut self, action: Action) -> ActionReport {
        if self.solved {
            return self.report(false, false);
        }

        let report = match action {
            Action::Type(ch) => self.type_letter(ch),
            Action::Delete => {
                self.grid.set_content(self.cursor, Square::Empty);
                let config = self
                    .clue_config()
                    .with_direction(Direction::Reverse)
                    .with_jump_landing(JumpLanding::ClueEnd);
                self.navigate(&config)
            }
            Action::NextClue => {
                let config = self.clue_jump_config().with_direction(Direction::Forward);
                self.navigate(&config)
            }
            Action::PrevClue => {
                let config = self
                    .clue_jump_config()
                    .with_move_direction(Direction::Forward)
                    .with_jump_direction(Direction::Reverse);
                self.navigate(&config)
            }
            Action::ToggleOrientation => {
                self.orientation = self.orientation.toggled();
                self.report(false, false)
            }
            Action::Move(arrow) => self.move_cursor(arrow),
        };

        self.solved = self.grid.matches(&self.solution);
        debug!(
            ?action,
            cursor = %report.cursor,
            orientation = ?report.orientation,
            wrapped = report.did_wrap,
            solved = self.solved,
            "applied action"
        );
        if self.solved {
            info!("puzzle solved");
        }
        report
    }

    fn type_letter(&mut self, ch: char) -> ActionReport {
        let Some(square @ Square::Letter(_)) = Square::from_char(ch) else {
            return self.report(false, false);
        };
        self.grid.set_content(self.cursor, square);

        let mut config = self.clue_config();
        if self.preferences.jump_to_empty_square {
            config = config.then(Halter::empty_square().checking_initial());
        }
        self.navigate(&config)
    }

    fn move_cursor(&mut self, arrow: Arrow) -> ActionReport {
        let (axis, direction) = arrow.heading();
        if self.preferences.swap_on_direction_change && axis != self.orientation {
            self.orientation = axis;
            return self.report(false, false);
        }

        let config = NavConfig::new()
            .with_orientation(axis)
            .with_direction(direction)
            .with_iteration(IterationMode::Cardinal)
            .with_wrap(self.preferences.wrap_at_grid_edge && self.preferences.wrap_arrow_keys);
        let nav = advance(&config, &self.grid, self.cursor);
        self.cursor = nav.end();
        self.report(nav.did_wrap(), nav.did_change_clue())
    }

    /// Word-to-word walk in the current orientation
    fn clue_config(&self) -> NavConfig {
        NavConfig::new()
            .with_orientation(self.orientation)
            .with_iteration(IterationMode::Clues)
            .with_wrap(self.preferences.wrap_at_grid_edge)
            .with_swap_on_wrap(self.preferences.swap_on_wrap)
    }

    /// Stop on the first square of another clue, or its first empty square
    fn clue_jump_config(&self) -> NavConfig {
        let mut halters = vec![Halter::clue_change()];
        if self.preferences.jump_to_empty_square {
            halters.push(Halter::empty_square().checking_initial());
        }
        self.clue_config()
            .with_jump_landing(JumpLanding::ClueStart)
            .with_halters(halters)
    }

    fn navigate(&mut self, config: &NavConfig) -> ActionReport {
        let nav: Navigation = advance(config, &self.grid, self.cursor);
        self.cursor = nav.end();
        self.orientation = nav.orientation();
        self.report(nav.did_wrap(), nav.did_change_clue())
    }

    const fn report(&self, did_wrap: bool, did_change_clue: bool) -> ActionReport {
        ActionReport {
            cursor: self.cursor,
            orientation: self.orientation,
            did_wrap,
            did_change_clue,
        }
    }
}
