//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;
use tictactoe_duel::{Mark, Position, Square};

use super::app::App;

const HELP: &str =
    "p: vs player  c: vs computer  r: restart  arrows/1-9: choose  enter: play  q: quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(4), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let controller = app.controller();
    let mode = controller
        .session()
        .map(|s| s.mode().to_string())
        .unwrap_or_default();

    let title = Paragraph::new(vec![
        Line::from("Tic Tac Toe"),
        Line::from(Span::styled(mode, Style::default().fg(Color::Gray))),
    ])
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status = Paragraph::new(vec![
        Line::from(controller.status_line()),
        Line::from(controller.turn_line()),
    ])
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 38, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let positions: Vec<Position> = Position::iter().collect();
    for (row, cells) in positions.chunks(3).enumerate() {
        let row_area = rows[row * 2];
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(row_area);

        for (col, &pos) in cells.iter().enumerate() {
            draw_cell(frame, cols[col * 2], app, pos);
            if col < 2 {
                let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
                frame.render_widget(sep, cols[col * 2 + 1]);
            }
        }

        if row < 2 {
            let sep = Paragraph::new("─".repeat(38)).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let controller = app.controller();
    let square = controller
        .session()
        .and_then(|s| s.board().get(pos.to_index()))
        .unwrap_or_default();

    let (symbol, mut style) = match square {
        Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::X) => ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Square::Occupied(Mark::O) => ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let winning = controller
        .winning_line()
        .is_some_and(|line| line.contains(&pos.to_index()));
    if winning {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if controller.session().is_some_and(|s| s.is_active()) && pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Pad to the middle line of the 3-line cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
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
