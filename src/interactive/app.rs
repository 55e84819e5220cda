//! TUI application state and logic

use super::keymap::{Command, PanelCommand, panel_command, solving_command};
use super::stopwatch::Stopwatch;
use crate::config::Config;
use crate::preferences::Preference;
use crate::puzzle::Puzzle;
use crate::session::{Action, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// How long to wait for input before redrawing the clock
const TICK: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    pub puzzle: Puzzle,
    pub session: Session,
    pub stopwatch: Stopwatch,
    pub mode: AppMode,
    pub message: Option<Message>,
    pub config: Config,
    pub config_path: PathBuf,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Solving,
    /// Preferences panel open with one row selected
    Preferences { selected: usize },
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Set up a session for `puzzle`
    ///
    /// # Errors
    /// Returns an error if the puzzle cannot be played.
    pub fn new(puzzle: Puzzle, config: Config, config_path: PathBuf) -> Result<Self> {
        let session = Session::new(&puzzle, config.preferences)?;
        let mut stopwatch = Stopwatch::start();
        let message = if session.is_solved() {
            stopwatch.stop();
            Message {
                text: "Already solved!".to_string(),
                style: MessageStyle::Success,
            }
        } else {
            Message {
                text: "Ctrl+P: preferences".to_string(),
                style: MessageStyle::Info,
            }
        };
        if !puzzle.checksums_valid {
            warn!("playing a puzzle whose checksums do not match");
        }

        Ok(Self {
            puzzle,
            session,
            stopwatch,
            mode: AppMode::Solving,
            message: Some(message),
            config,
            config_path,
            should_quit: false,
        })
    }

    pub fn set_message(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.message = Some(Message {
            text: text.into(),
            style,
        });
    }

    pub fn handle_key(&mut self, key: &KeyEvent) {
        match self.mode {
            AppMode::Solving => {
                if let Some(command) = solving_command(key) {
                    self.run_command(command);
                }
            }
            AppMode::Preferences { selected } => {
                if let Some(command) = panel_command(key) {
                    self.run_panel_command(command, selected);
                }
            }
        }
    }

    fn run_command(&mut self, command: Command) {
        match command {
            Command::Quit => self.should_quit = true,
            Command::OpenPreferences => self.mode = AppMode::Preferences { selected: 0 },
            Command::Act(action) => self.act(action),
        }
    }

    fn act(&mut self, action: Action) {
        if self.session.is_solved() {
            return;
        }
        self.session.apply(action);
        if self.session.is_solved() {
            self.stopwatch.stop();
            info!(elapsed = ?self.stopwatch.elapsed(), "solved");
            self.set_message("Solved!", MessageStyle::Success);
        }
    }

    fn run_panel_command(&mut self, command: PanelCommand, selected: usize) {
        let count = Preference::ALL.len();
        match command {
            PanelCommand::Up => {
                self.mode = AppMode::Preferences {
                    selected: (selected + count - 1) % count,
                };
            }
            PanelCommand::Down => {
                self.mode = AppMode::Preferences {
                    selected: (selected + 1) % count,
                };
            }
            PanelCommand::Toggle => self.toggle_preference(Preference::ALL[selected % count]),
            PanelCommand::Close => self.mode = AppMode::Solving,
            PanelCommand::Quit => self.should_quit = true,
        }
    }

    /// Flip a preference, apply it to the session and persist it
    pub fn toggle_preference(&mut self, preference: Preference) {
        let value = preference.toggle(&mut self.config.preferences);
        self.session.set_preferences(self.config.preferences);

        match self.config.save_to_file(&self.config_path) {
            Ok(()) => self.set_message(
                format!("{}: {}", preference.label(), if value { "on" } else { "off" }),
                MessageStyle::Info,
            ),
            Err(e) => {
                warn!("{e}");
                self.set_message(format!("Could not save preferences: {e}"), MessageStyle::Error);
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(&key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tempfile::TempDir;

    fn app(dir: &TempDir) -> App {
        App::new(puzzle::sample(), Config::default(), dir.path().join("config.toml")).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(&KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn typing_reaches_the_session() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.session.cursor().col, 1);
    }

    #[test]
    fn solving_stops_the_clock() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        for ch in "HEARTEMBERABUSERESINTREND".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        assert!(app.session.is_solved());
        assert!(!app.stopwatch.is_running());
        assert_eq!(app.message.as_ref().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn preferences_panel_toggles_and_saves() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.handle_key(&KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL));
        assert_eq!(app.mode, AppMode::Preferences { selected: 0 });

        press(&mut app, KeyCode::Up);
        assert_eq!(
            app.mode,
            AppMode::Preferences {
                selected: Preference::ALL.len() - 1
            }
        );
        press(&mut app, KeyCode::Enter);
        assert!(!app.session.preferences().jump_to_empty_square);

        let saved = Config::load_from_file(&app.config_path).unwrap();
        assert!(!saved.preferences.jump_to_empty_square);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Solving);
        assert!(!app.should_quit);
    }

    #[test]
    fn save_failure_becomes_a_message() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();
        let mut app = App::new(puzzle::sample(), Config::default(), blocker.join("config.toml")).unwrap();

        app.toggle_preference(Preference::SwapOnWrap);
        assert!(!app.session.preferences().swap_on_wrap);
        assert_eq!(app.message.as_ref().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn escape_quits_from_the_grid() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
