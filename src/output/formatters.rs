//! Formatting utilities for terminal output

use crate::core::Orientation;
use crate::navigation::Clue;
use std::time::Duration;

/// Format elapsed time as `MM:SS`, or `H:MM:SS` past the hour
#[must_use]
pub fn format_duration(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let (hours, minutes, seconds) = (total / 3600, total / 60 % 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Cursor arrow for an orientation
#[must_use]
pub const fn orientation_arrow(orientation: Orientation) -> char {
    match orientation {
        Orientation::Horizontal => '▶',
        Orientation::Vertical => '▼',
    }
}

/// Short clue name such as `12 Across:`
#[must_use]
pub fn clue_label(clue: &Clue) -> String {
    format!("{} {}:", clue.number, clue.orientation.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn duration_under_an_hour() {
        assert_eq!(format_duration(Duration::ZERO), "00:00");
        assert_eq!(format_duration(Duration::from_secs(59)), "00:59");
        assert_eq!(format_duration(Duration::from_millis(754_900)), "12:34");
    }

    #[test]
    fn duration_over_an_hour() {
        assert_eq!(format_duration(Duration::from_secs(3600)), "1:00:00");
        assert_eq!(format_duration(Duration::from_secs(3 * 3600 + 5 * 60 + 7)), "3:05:07");
    }

    #[test]
    fn arrows() {
        assert_eq!(orientation_arrow(Orientation::Horizontal), '▶');
        assert_eq!(orientation_arrow(Orientation::Vertical), '▼');
    }

    #[test]
    fn label() {
        let clue = Clue {
            number: 12,
            orientation: Orientation::Vertical,
            start: Position::new(0, 3),
            end: Position::new(2, 3),
            text: "Example".to_string(),
            answer: "ABC".to_string(),
        };
        assert_eq!(clue_label(&clue), "12 Down:");
    }
}
