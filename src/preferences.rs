//! Navigation behavior toggles

use serde::{Deserialize, Serialize};

/// User-adjustable navigation behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// An arrow perpendicular to the current orientation only turns the cursor
    pub swap_on_direction_change: bool,
    /// Flip orientation when typing or deleting wraps past the last clue
    pub swap_on_wrap: bool,
    /// Allow walks to wrap from the end of the grid to the start
    pub wrap_at_grid_edge: bool,
    /// Let arrow keys wrap as well (needs `wrap_at_grid_edge`)
    pub wrap_arrow_keys: bool,
    /// After typing, skip ahead to the next empty square
    pub jump_to_empty_square: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            swap_on_direction_change: true,
            swap_on_wrap: true,
            wrap_at_grid_edge: true,
            wrap_arrow_keys: true,
            jump_to_empty_square: true,
        }
    }
}

/// One toggle, for listing and editing preferences generically
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    SwapOnDirectionChange,
    SwapOnWrap,
    WrapAtGridEdge,
    WrapArrowKeys,
    JumpToEmptySquare,
}

impl Preference {
    pub const ALL: [Self; 5] = [
        Self::SwapOnDirectionChange,
        Self::SwapOnWrap,
        Self::WrapAtGridEdge,
        Self::WrapArrowKeys,
        Self::JumpToEmptySquare,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SwapOnDirectionChange => "Swap orientation on perpendicular arrow",
            Self::SwapOnWrap => "Swap orientation when wrapping",
            Self::WrapAtGridEdge => "Wrap at end of grid",
            Self::WrapArrowKeys => "Wrap with arrow keys",
            Self::JumpToEmptySquare => "Skip to next empty square",
        }
    }

    #[must_use]
    pub const fn get(self, prefs: &Preferences) -> bool {
        match self {
            Self::SwapOnDirectionChange => prefs.swap_on_direction_change,
            Self::SwapOnWrap => prefs.swap_on_wrap,
            Self::WrapAtGridEdge => prefs.wrap_at_grid_edge,
            Self::WrapArrowKeys => prefs.wrap_arrow_keys,
            Self::JumpToEmptySquare => prefs.jump_to_empty_square,
        }
    }

    /// Flip the toggle and return its new value
    pub fn toggle(self, prefs: &mut Preferences) -> bool {
        let flag = match self {
            Self::SwapOnDirectionChange => &mut prefs.swap_on_direction_change,
            Self::SwapOnWrap => &mut prefs.swap_on_wrap,
            Self::WrapAtGridEdge => &mut prefs.wrap_at_grid_edge,
            Self::WrapArrowKeys => &mut prefs.wrap_arrow_keys,
            Self::JumpToEmptySquare => &mut prefs.jump_to_empty_square,
        };
        *flag = !*flag;
        *flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_is_on_by_default() {
        let prefs = Preferences::default();
        assert!(Preference::ALL.iter().all(|p| p.get(&prefs)));
    }

    #[test]
    fn toggle_flips_one_field() {
        let mut prefs = Preferences::default();
        assert!(!Preference::WrapArrowKeys.toggle(&mut prefs));
        assert!(!prefs.wrap_arrow_keys);
        assert!(prefs.wrap_at_grid_edge);
        assert!(Preference::WrapArrowKeys.toggle(&mut prefs));
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn labels_are_distinct() {
        let mut labels: Vec<&str> = Preference::ALL.iter().map(|p| p.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Preference::ALL.len());
    }
}
