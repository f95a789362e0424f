//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_versus::{GameState, Mark, Position, Severity};

use super::app::App;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App, state: &GameState) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Turn indicator
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(1), // Help
        ])
        .split(area);

    let mode = if state.computer_smart() { "smart" } else { "random" };
    let title = Paragraph::new(format!("Strictly Versus - Tic Tac Toe ({} computer)", mode))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    frame.render_widget(status_line(app), chunks[1]);

    draw_board(frame, chunks[2], app);

    let message = match app.banner() {
        Some(banner) => Paragraph::new(banner.text.as_str()).style(severity_style(banner.severity)),
        None => Paragraph::new(""),
    };
    frame.render_widget(
        message
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        chunks[3],
    );

    let help = Paragraph::new("arrows/1-9 move · enter play · s smart mode · esc reset · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn status_line(app: &App) -> Paragraph<'static> {
    let active = Style::default().fg(Color::Black).bg(Color::Yellow);
    let idle = Style::default().fg(Color::Gray);
    let (player_style, computer_style) = match app.active_side() {
        Mark::Player => (active, idle),
        Mark::Computer => (idle, active),
    };
    let score = app.score();

    let mut spans = vec![
        Span::styled(format!(" You (X) {} ", score.player_wins()), player_style),
        Span::raw("  :  "),
        Span::styled(format!(" {} Computer (O) ", score.computer_wins()), computer_style),
    ];
    if score.ties() > 0 {
        let plural = if score.ties() > 1 { "s" } else { "" };
        spans.push(Span::styled(
            format!("   {} tie{}", score.ties(), plural),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Info => Style::default().fg(Color::White),
        Severity::Warning => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Severity::Flavor => Style::default().fg(Color::Magenta).add_modifier(Modifier::ITALIC),
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

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

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, chunk, app, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Ok(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, mut style) = match app.mark_at(pos) {
        None => (format!("{}", pos.to_index() + 1), Style::default().fg(Color::DarkGray)),
        Some(mark @ Mark::Player) => (
            mark.symbol().to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(mark @ Mark::Computer) => (
            mark.symbol().to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if app.is_highlighted(pos) {
        style = style.bg(Color::Yellow).fg(Color::Black);
    }
    if pos == app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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
