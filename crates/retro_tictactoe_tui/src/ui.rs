//! Stateless UI rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use retro_tictactoe::{Cell, Mark};

use crate::app::App;
use crate::view::{self, CellView, StatusTone};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Title + subtitle
            Constraint::Length(3),            // Status
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(1),            // Cell label
            Constraint::Length(4),            // Footer
        ])
        .split(frame.area());

    draw_header(frame, chunks[0]);
    draw_status(frame, chunks[1], app);
    draw_board(frame, chunks[2], app);

    if *app.settings().display().show_labels() {
        let label = view::cell_label(app.state().board(), app.cursor());
        let label = Paragraph::new(label)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(label, chunks[3]);
    }

    draw_footer(frame, chunks[4], app);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            view::TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            view::SUBTITLE,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.state().status();
    let style = match StatusTone::from(status) {
        StatusTone::Turn => Style::default().fg(Color::Yellow),
        StatusTone::Winner => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        StatusTone::Draw => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    };

    let paragraph = Paragraph::new(status.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(paragraph, center_rect(area, BOARD_WIDTH + 8, area.height));
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let cells = view::cell_views(app.state(), app.cursor());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    for (row, chunk) in cells.chunks(3).enumerate() {
        if row > 0 {
            draw_separator(frame, rows[row * 2 - 1]);
        }
        draw_row(frame, rows[row * 2], chunk);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, cells: &[CellView]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for (column, cell) in cells.iter().enumerate() {
        if column > 0 {
            draw_separator_vertical(frame, cols[column * 2 - 1]);
        }
        draw_cell(frame, cols[column * 2], cell);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView) {
    let (text, base_style) = match cell.cell {
        Cell::Empty if cell.playable => (
            (cell.position.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        // Game over: empty cells stay blank and inert.
        Cell::Empty => (String::new(), Style::default()),
        Cell::Marked(Mark::X) => (
            cell.symbol().to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::O) => (
            cell.symbol().to_string(),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let style = if cell.winning {
        base_style.bg(Color::Yellow).fg(Color::Black)
    } else if cell.selected {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(text)])
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    if *app.settings().display().show_hint() {
        lines.push(Line::from(Span::styled(
            view::HINT,
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(vec![
        Span::styled(
            format!("[N] {}", view::NEW_GAME),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  Arrows/1-9: play  Q: quit"),
    ]));

    let footer = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Action;
    use crate::settings::Settings;
    use ratatui::{backend::TestBackend, Terminal};
    use retro_tictactoe::Position;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 26)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_fresh_screen() {
        let screen = render(&App::new(Settings::default()));
        assert!(screen.contains("Tic Tac Toe"));
        assert!(screen.contains("Turn: X"));
        assert!(screen.contains("Square 5, empty"));
        assert!(screen.contains("Tip: X starts. First to 3 in a row wins."));
        assert!(screen.contains("New Game"));
    }

    #[test]
    fn test_winner_screen() {
        let mut app = App::new(Settings::default());
        for position in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomRight,
            Position::TopRight,
        ] {
            app.handle(Action::Play(position));
        }
        let screen = render(&app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Square 3, X"));
    }

    #[test]
    fn test_hint_can_be_hidden() {
        let settings: Settings = toml::from_str("[display]\nshow_hint = false\n").unwrap();
        let screen = render(&App::new(settings));
        assert!(!screen.contains("Tip:"));
    }
}
