//! Stateless UI rendering for the bingo card.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use std::collections::HashSet;
use strictly_bingo::{GRID_SIZE, GridPosition, SessionPhase, Tile};

use crate::app::App;
use crate::input;

const CELL_WIDTH: u16 = 18;
const CELL_HEIGHT: u16 = 4;

/// Renders the card, status line and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(CELL_HEIGHT * GRID_SIZE as u16), // Card
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Bingo")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_card(frame, chunks[1], app);
    draw_status(frame, chunks[2], app);

    let help = Paragraph::new(input::help_line())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_card(frame: &mut Frame, area: Rect, app: &App) {
    let card_area = center_rect(
        area,
        CELL_WIDTH * GRID_SIZE as u16,
        CELL_HEIGHT * GRID_SIZE as u16,
    );
    let winning = app.winning_positions();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); GRID_SIZE])
        .split(card_area);

    for (row_area, tiles) in rows.iter().zip(app.session().tiles().chunks(GRID_SIZE)) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); GRID_SIZE])
            .split(*row_area);

        for (cell_area, tile) in cols.iter().zip(tiles) {
            draw_tile(frame, *cell_area, tile, app.cursor(), &winning);
        }
    }
}

fn draw_tile(
    frame: &mut Frame,
    area: Rect,
    tile: &Tile,
    cursor: GridPosition,
    winning: &HashSet<GridPosition>,
) {
    let text_style = if winning.contains(&tile.position()) {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else if tile.is_selected() {
        Style::default().fg(Color::Black).bg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let (border_type, border_style) = if tile.position() == cursor {
        (BorderType::Thick, Style::default().fg(Color::Yellow))
    } else {
        (BorderType::Plain, Style::default().fg(Color::DarkGray))
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(tile.term(), text_style)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        );

    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let color = match app.session().phase() {
        SessionPhase::Won => Color::Magenta,
        SessionPhase::Playing => Color::Yellow,
    };
    let sound = if app.sound_enabled() { "on" } else { "off" };

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} | sound {} ", app.session().phase(), sound)),
        );
    frame.render_widget(status, area);
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
