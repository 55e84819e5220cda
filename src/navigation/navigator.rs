//! Cursor traversal
//!
//! [`advance`] walks the grid from a starting square once per configured
//! [`Halter`], each walk starting where the previous one stopped. A walk
//! steps square by square along the orientation until it runs into a black
//! square or the edge, then leaves the current word either by scanning on
//! along the row or column ([`IterationMode::Cardinal`]) or by jumping to the
//! neighbouring clue ([`IterationMode::Clues`]).
//!
//! The walk never fails. When no square satisfies a halter it gives up and
//! reports the square it started from.

use super::grid::NavigationGrid;
use super::halter::{HaltCondition, Halter};
use crate::core::{Direction, Orientation, Position, unit_delta};
use tracing::debug;

/// Where a clue jump lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpLanding {
    #[default]
    ClueStart,
    ClueEnd,
}

/// How a walk leaves the current word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IterationMode {
    /// Continue along the row or column, wrapping to the next one
    Cardinal,
    /// Jump to the next or previous clue
    #[default]
    Clues,
}

/// Immutable description of one navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    pub orientation: Orientation,
    pub move_direction: Direction,
    pub jump_direction: Direction,
    pub jump_landing: JumpLanding,
    pub iteration: IterationMode,
    pub halters: Vec<Halter>,
    pub allow_wrap: bool,
    pub swap_on_wrap: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            move_direction: Direction::Forward,
            jump_direction: Direction::Forward,
            jump_landing: JumpLanding::ClueStart,
            iteration: IterationMode::Clues,
            halters: vec![Halter::valid_square()],
            allow_wrap: true,
            swap_on_wrap: false,
        }
    }
}

impl NavConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub const fn with_move_direction(mut self, direction: Direction) -> Self {
        self.move_direction = direction;
        self
    }

    #[must_use]
    pub const fn with_jump_direction(mut self, direction: Direction) -> Self {
        self.jump_direction = direction;
        self
    }

    /// Set both the move and the jump direction
    #[must_use]
    pub const fn with_direction(self, direction: Direction) -> Self {
        self.with_move_direction(direction)
            .with_jump_direction(direction)
    }

    #[must_use]
    pub const fn with_jump_landing(mut self, landing: JumpLanding) -> Self {
        self.jump_landing = landing;
        self
    }

    #[must_use]
    pub const fn with_iteration(mut self, iteration: IterationMode) -> Self {
        self.iteration = iteration;
        self
    }

    /// Replace the halter sequence
    #[must_use]
    pub fn with_halters(mut self, halters: impl IntoIterator<Item = Halter>) -> Self {
        self.halters = halters.into_iter().collect();
        self
    }

    /// Append a halter to the sequence
    #[must_use]
    pub fn then(mut self, halter: Halter) -> Self {
        self.halters.push(halter);
        self
    }

    #[must_use]
    pub const fn with_wrap(mut self, allow_wrap: bool) -> Self {
        self.allow_wrap = allow_wrap;
        self
    }

    #[must_use]
    pub const fn with_swap_on_wrap(mut self, swap_on_wrap: bool) -> Self {
        self.swap_on_wrap = swap_on_wrap;
        self
    }
}

/// Result of walking for one halter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationOutcome {
    pub start: Position,
    pub end: Position,
    /// Orientation at the end of the walk
    pub orientation: Orientation,
    pub did_wrap: bool,
    pub did_change_clue: bool,
    /// `false` when the walk gave up without finding a match
    pub halted_on_match: bool,
}

/// All outcomes of one [`advance`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    start: Position,
    start_orientation: Orientation,
    outcomes: Vec<NavigationOutcome>,
}

impl Navigation {
    #[must_use]
    pub fn outcomes(&self) -> &[NavigationOutcome] {
        &self.outcomes
    }

    /// Final cursor position
    #[must_use]
    pub fn end(&self) -> Position {
        self.outcomes.last().map_or(self.start, |o| o.end)
    }

    /// Final orientation
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.outcomes
            .last()
            .map_or(self.start_orientation, |o| o.orientation)
    }

    #[must_use]
    pub fn did_wrap(&self) -> bool {
        self.outcomes.iter().any(|o| o.did_wrap)
    }

    #[must_use]
    pub fn did_change_clue(&self) -> bool {
        self.outcomes.iter().any(|o| o.did_change_clue)
    }

    /// Every halter found a match
    #[must_use]
    pub fn halted_on_match(&self) -> bool {
        self.outcomes.iter().all(|o| o.halted_on_match)
    }
}

/// Walk the grid from `start` for each halter in `config`
///
/// # Examples
/// ```
/// use puzterm::core::Position;
/// use puzterm::navigation::{IterationMode, NavConfig, NavigationGrid, advance};
/// use puzterm::puzzle;
///
/// let grid = NavigationGrid::new(&puzzle::sample()).unwrap();
/// let config = NavConfig::new().with_iteration(IterationMode::Cardinal);
///
/// let nav = advance(&config, &grid, Position::new(0, 4));
/// assert_eq!(nav.end(), Position::new(1, 0));
/// assert!(!nav.did_wrap());
/// ```
#[must_use]
pub fn advance(config: &NavConfig, grid: &NavigationGrid, start: Position) -> Navigation {
    let mut pos = start;
    let mut orientation = config.orientation;
    let mut outcomes = Vec::with_capacity(config.halters.len());

    for &halter in &config.halters {
        let outcome = Walk::new(config, grid, pos, orientation).run(halter);
        debug!(
            ?halter,
            from = %outcome.start,
            to = %outcome.end,
            wrapped = outcome.did_wrap,
            changed_clue = outcome.did_change_clue,
            matched = outcome.halted_on_match,
            "navigator walk"
        );
        pos = outcome.end;
        orientation = outcome.orientation;
        outcomes.push(outcome);
    }

    Navigation {
        start,
        start_orientation: config.orientation,
        outcomes,
    }
}

/// State of a single halter's walk
struct Walk<'a> {
    config: &'a NavConfig,
    grid: &'a NavigationGrid,
    start: Position,
    start_orientation: Orientation,
    origin_clue: Option<(Orientation, usize)>,
    pos: Position,
    orientation: Orientation,
    wraps: usize,
    did_change_clue: bool,
    lapped_clue: bool,
}

impl<'a> Walk<'a> {
    fn new(
        config: &'a NavConfig,
        grid: &'a NavigationGrid,
        start: Position,
        orientation: Orientation,
    ) -> Self {
        Self {
            config,
            grid,
            start,
            start_orientation: orientation,
            origin_clue: grid.clue_id(start, orientation).map(|id| (orientation, id)),
            pos: start,
            orientation,
            wraps: 0,
            did_change_clue: false,
            lapped_clue: false,
        }
    }

    fn run(mut self, halter: Halter) -> NavigationOutcome {
        if halter.check_initial && halter.matches(self.grid, self.pos, false) {
            return self.finish();
        }

        // Enough for a few laps over every square and clue
        let max_steps = 4 * (self.grid.rows() * self.grid.cols() + self.grid.clues().len());
        for _ in 0..max_steps {
            let home = self.pos == self.start && self.orientation == self.start_orientation;
            if (self.wraps > 0 && home) || self.wraps > 2 {
                break;
            }
            if !self.step() {
                break;
            }
            // The only clue on its axis counts as its own next clue
            let lapped = self.lapped_clue && halter.condition == HaltCondition::ClueChange;
            if lapped || halter.matches(self.grid, self.pos, self.did_change_clue) {
                return self.finish();
            }
        }
        self.give_up()
    }

    fn finish(&self) -> NavigationOutcome {
        NavigationOutcome {
            start: self.start,
            end: self.pos,
            orientation: self.orientation,
            did_wrap: self.wraps > 0,
            did_change_clue: self.did_change_clue,
            halted_on_match: true,
        }
    }

    fn give_up(&self) -> NavigationOutcome {
        NavigationOutcome {
            start: self.start,
            end: self.start,
            orientation: self.start_orientation,
            did_wrap: false,
            did_change_clue: false,
            halted_on_match: false,
        }
    }

    /// Move one square; `false` aborts the walk
    fn step(&mut self) -> bool {
        let (dr, dc) = unit_delta(self.orientation, self.config.move_direction);
        if let Some(next) = self.pos.offset(dr, dc)
            && self.grid.content(next).is_some_and(|s| !s.is_black())
        {
            self.pos = next;
            return true;
        }

        let left_word = match self.config.iteration {
            IterationMode::Cardinal => self.scan_line(),
            IterationMode::Clues => self.jump_clue(),
        };
        if left_word {
            self.note_clue_change();
        }
        left_word
    }

    fn wrap(&mut self) -> bool {
        if !self.config.allow_wrap {
            return false;
        }
        self.wraps += 1;
        true
    }

    /// Scan on along the row (or column) to the next playable square
    fn scan_line(&mut self) -> bool {
        let rows = self.grid.rows();
        let cols = self.grid.cols();
        let (mut along, mut cross, along_len, cross_len) = match self.orientation {
            Orientation::Horizontal => (self.pos.col, self.pos.row, cols, rows),
            Orientation::Vertical => (self.pos.row, self.pos.col, rows, cols),
        };

        for _ in 0..rows * cols {
            match self.config.move_direction {
                Direction::Forward => {
                    along += 1;
                    if along == along_len {
                        along = 0;
                        cross += 1;
                        if cross == cross_len {
                            cross = 0;
                            if !self.wrap() {
                                return false;
                            }
                        }
                    }
                }
                Direction::Reverse => {
                    if along == 0 {
                        along = along_len - 1;
                        if cross == 0 {
                            cross = cross_len - 1;
                            if !self.wrap() {
                                return false;
                            }
                        } else {
                            cross -= 1;
                        }
                    } else {
                        along -= 1;
                    }
                }
            }

            let candidate = match self.orientation {
                Orientation::Horizontal => Position::new(cross, along),
                Orientation::Vertical => Position::new(along, cross),
            };
            if self.grid.content(candidate).is_some_and(|s| !s.is_black()) {
                self.pos = candidate;
                return true;
            }
        }
        false
    }

    /// Jump to the neighbouring clue in the jump direction
    fn jump_clue(&mut self) -> bool {
        let grid = self.grid;
        let Some(links) = grid.links(self.pos, self.orientation) else {
            return self.scan_line();
        };

        let from = self.orientation;
        let list = grid.clues().list(from);
        let current = &list[links.current];
        let target_index = match self.config.jump_direction {
            Direction::Forward => links.next,
            Direction::Reverse => links.prev,
        };
        let mut target = &list[target_index];
        let wrapped = match self.config.jump_direction {
            Direction::Forward => target.number <= current.number,
            Direction::Reverse => target.number >= current.number,
        };

        if wrapped {
            if !self.wrap() {
                return false;
            }
            if self.config.swap_on_wrap {
                let other = self.orientation.toggled();
                let candidates = grid.clues().list(other);
                let swapped = match self.config.jump_direction {
                    Direction::Forward => candidates.first(),
                    Direction::Reverse => candidates.last(),
                };
                if let Some(clue) = swapped {
                    self.orientation = other;
                    target = clue;
                }
            }
            if self.orientation == from && target_index == links.current {
                self.lapped_clue = true;
            }
        }

        self.pos = match self.config.jump_landing {
            JumpLanding::ClueStart => target.start,
            JumpLanding::ClueEnd => target.end,
        };
        true
    }

    fn note_clue_change(&mut self) {
        if self.did_change_clue {
            return;
        }
        let here = self
            .grid
            .clue_id(self.pos, self.orientation)
            .map(|id| (self.orientation, id));
        if here != self.origin_clue {
            self.did_change_clue = true;
        }
    }
}
