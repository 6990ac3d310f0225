//! Stateless UI rendering for the territory board.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use strictly_territory::{Cell, Game, Owner, Player, Position, BOARD_SIZE};

use super::app::App;

/// Width of one rendered cell in columns.
const CELL_WIDTH: u16 = 3;

/// Draws the title, board, status and help panes.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(11),    // Board
            Constraint::Length(4),  // Status
            Constraint::Length(3),  // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Territory")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app.game(), app.cursor());

    let status_style = if app.game().phase().is_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(vec![
        Line::from(app.summary()),
        Line::from(app.status_message().to_string()),
    ])
    .style(status_style)
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows/hjkl: Move | Enter/Space: Place | R: Restart | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, game: &Game, cursor: Position) {
    let width = CELL_WIDTH * BOARD_SIZE as u16 + 2;
    let height = BOARD_SIZE as u16 + 2;
    let board_area = center_rect(area, width, height);

    let last_move = game.state().last_move;
    let lines: Vec<Line> = (0..BOARD_SIZE)
        .map(|row| {
            let spans: Vec<Span> = (0..BOARD_SIZE)
                .filter_map(|col| Position::new(row, col))
                .map(|pos| {
                    let board = game.board();
                    let (symbol, style) = cell_style(board.occupant(pos), board.owner(pos));
                    let style = if pos == cursor {
                        style.add_modifier(Modifier::REVERSED)
                    } else if Some(pos) == last_move {
                        style.add_modifier(Modifier::UNDERLINED)
                    } else {
                        style
                    };
                    Span::styled(symbol, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(board, board_area);
}

/// Glyph and colors for a cell: marker on top of its territory background.
fn cell_style(cell: Cell, owner: Owner) -> (&'static str, Style) {
    let background = match owner {
        Owner::Unclaimed => Color::Reset,
        Owner::Owned(Player::One) => Color::Rgb(30, 50, 110),
        Owner::Owned(Player::Two) => Color::Rgb(110, 30, 30),
    };
    let base = Style::default().bg(background);

    match cell {
        Cell::Empty => (" · ", base.fg(Color::DarkGray)),
        Cell::Occupied(Player::One) => (
            " X ",
            base.fg(Color::LightBlue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::Two) => (
            " O ",
            base.fg(Color::LightRed).add_modifier(Modifier::BOLD),
        ),
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
