//! Key bindings

use crate::session::{Action, Arrow};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key does while solving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    OpenPreferences,
    Quit,
}

/// What a key does in the preferences panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    Up,
    Down,
    Toggle,
    Close,
    Quit,
}

fn is_ctrl(key: &KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

/// Translate a key press in the puzzle view
#[must_use]
pub fn solving_command(key: &KeyEvent) -> Option<Command> {
    if is_ctrl(key, 'c') {
        return Some(Command::Quit);
    }
    if is_ctrl(key, 'p') {
        return Some(Command::OpenPreferences);
    }

    let action = match key.code {
        KeyCode::Esc => return Some(Command::Quit),
        KeyCode::Up => Action::Move(Arrow::Up),
        KeyCode::Down => Action::Move(Arrow::Down),
        KeyCode::Left => Action::Move(Arrow::Left),
        KeyCode::Right => Action::Move(Arrow::Right),
        KeyCode::Tab => Action::NextClue,
        KeyCode::BackTab => Action::PrevClue,
        KeyCode::Backspace | KeyCode::Delete => Action::Delete,
        KeyCode::Char(' ') => Action::ToggleOrientation,
        KeyCode::Char(c)
            if c.is_ascii_alphanumeric()
                && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Action::Type(c)
        }
        _ => return None,
    };
    Some(Command::Act(action))
}

/// Translate a key press in the preferences panel
#[must_use]
pub fn panel_command(key: &KeyEvent) -> Option<PanelCommand> {
    if is_ctrl(key, 'c') {
        return Some(PanelCommand::Quit);
    }
    if is_ctrl(key, 'p') {
        return Some(PanelCommand::Close);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(PanelCommand::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(PanelCommand::Down),
        KeyCode::Char(' ') | KeyCode::Enter => Some(PanelCommand::Toggle),
        KeyCode::Esc => Some(PanelCommand::Close),
        _ => None,
    }
}
