//! TUI rendering with ratatui

use super::app::{App, AppMode, MessageStyle};
use crate::core::{Orientation, Position, Square};
use crate::navigation::Clue;
use crate::output::formatters::{clue_label, format_duration, orientation_arrow};
use crate::preferences::Preference;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

/// Width of one grid square in terminal columns
const CELL_WIDTH: u16 = 4;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let grid = app.session.grid();
    let grid_width = grid.cols() as u16 * CELL_WIDTH + 2;
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(grid_width.max(24)), Constraint::Min(20)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(main_chunks[0]);

    render_grid(f, app, left[0]);
    render_stopwatch(f, app, left[1]);
    render_clues(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);

    if let AppMode::Preferences { selected } = app.mode {
        render_preferences(f, app, selected);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let puzzle = &app.puzzle;
    let title = if puzzle.title.is_empty() {
        "Untitled puzzle"
    } else {
        puzzle.title.as_str()
    };

    let mut title_line = vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if app.session.is_solved() {
        title_line.push(Span::styled(
            "  Solved!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let byline = [puzzle.author.as_str(), puzzle.copyright.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("  ");

    let header = Paragraph::new(vec![
        Line::from(title_line),
        Line::from(Span::styled(byline, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let grid = session.grid();
    let cursor = session.cursor();
    let solved = session.is_solved();
    let arrow = orientation_arrow(session.orientation());

    let mut lines = Vec::with_capacity(grid.rows() * 2);
    for row in 0..grid.rows() {
        let mut numbers = Vec::with_capacity(grid.cols());
        let mut letters = Vec::with_capacity(grid.cols());

        for (col, square) in grid.row(row).enumerate() {
            let pos = Position::new(row, col);
            if square.is_black() {
                let block = Style::default().fg(Color::DarkGray);
                numbers.push(Span::styled("████", block));
                letters.push(Span::styled("████", block));
                continue;
            }

            let style = cell_style(app, pos, solved);
            let number = grid
                .clues()
                .number_at(pos)
                .map_or_else(String::new, |n| n.to_string());
            numbers.push(Span::styled(format!("{number:<4}"), style.fg(Color::DarkGray)));

            let text = match square {
                Square::Empty if pos == cursor && !solved => format!(" {arrow}  "),
                other => format!(" {}  ", glyph(other)),
            };
            letters.push(Span::styled(text, style));
        }
        lines.push(Line::from(numbers));
        lines.push(Line::from(letters));
    }

    let title = format!(" {arrow} {} ", session.orientation().label());
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn glyph(square: Square) -> char {
    match square {
        Square::Letter(c) => c,
        Square::Empty | Square::Black => ' ',
    }
}

fn cell_style(app: &App, pos: Position, solved: bool) -> Style {
    let session = &app.session;
    if solved {
        return Style::default().fg(Color::Green).bg(Color::Black);
    }
    if pos == session.cursor() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if session.is_in_active_word(pos) {
        Style::default().fg(Color::White).bg(Color::Blue)
    } else {
        Style::default().fg(Color::White).bg(Color::Black)
    }
}

fn render_stopwatch(f: &mut Frame, app: &App, area: Rect) {
    let color = if app.stopwatch.is_running() {
        Color::Yellow
    } else {
        Color::Green
    };
    let clock = Paragraph::new(format_duration(app.stopwatch.elapsed()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Time ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(clock, area);
}

fn render_clues(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Active clue
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

    let active = app.session.current_clue();
    let active_text = active.map_or_else(String::new, |c| {
        format!("{} {}", clue_label(c), c.text)
    });
    let current = Paragraph::new(active_text)
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(current, chunks[0]);

    let (across, down) = app.session.current_clues();
    render_clue_list(f, app, Orientation::Horizontal, across, chunks[1]);
    render_clue_list(f, app, Orientation::Vertical, down, chunks[2]);
}

fn render_clue_list(
    f: &mut Frame,
    app: &App,
    orientation: Orientation,
    highlighted: Option<&Clue>,
    area: Rect,
) {
    let clues = app.session.grid().clues().list(orientation);
    let items: Vec<ListItem> = clues
        .iter()
        .map(|c| ListItem::new(format!("{:>3}. {}", c.number, c.text)))
        .collect();

    let is_active = app.session.orientation() == orientation;
    let highlight = if is_active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let selected = highlighted.and_then(|h| clues.iter().position(|c| c.number == h.number));
    let mut state = ListState::default().with_selected(selected);
    let list = List::new(items).highlight_style(highlight).block(
        Block::default()
            .title(format!(" {} ", orientation.label()))
            .borders(Borders::ALL),
    );
    f.render_stateful_widget(list, area, &mut state);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    if let Some(message) = &app.message {
        let color = match message.style {
            MessageStyle::Info => Color::White,
            MessageStyle::Success => Color::Green,
            MessageStyle::Error => Color::Red,
        };
        let text = Paragraph::new(message.text.as_str())
            .style(Style::default().fg(color))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(text, chunks[0]);
    }

    let help_text = match app.mode {
        AppMode::Solving => "Tab/Shift+Tab: clue | Space: turn | Ctrl+P: prefs | Ctrl+C: quit",
        AppMode::Preferences { .. } => "Up/Down: select | Space/Enter: toggle | Esc: close",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}

fn render_preferences(f: &mut Frame, app: &App, selected: usize) {
    let area = popup_area(f.area(), 54, Preference::ALL.len() as u16 + 2);
    let prefs = app.session.preferences();

    let items: Vec<ListItem> = Preference::ALL
        .iter()
        .map(|p| {
            let mark = if p.get(prefs) { "[x]" } else { "[ ]" };
            ListItem::new(format!("{mark} {}", p.label()))
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(selected));
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Preferences ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}

fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
