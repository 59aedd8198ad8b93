use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color as TermColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use tswap::game::{Color, Phase, Pos};

use crate::app::App;
use crate::ui::effects::Flash;

pub fn ui(f: &mut Frame, app: &App) {
    let size = f.size();
    let grid = app.game.grid();

    let board_height = grid.rows() as u16 + 2; // rows + 2 borders
    let board_width = grid.cols() as u16 * 2 + 2; // 2 chars per tile + 2 borders

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height.max(14)), // Info panel needs 12 lines + borders
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_width),
            Constraint::Length(20), // Info panel
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    render_board(f, app, horizontal_chunks[1]);
    render_info(f, app, horizontal_chunks[2]);
}

pub fn tile_color(color: Color) -> TermColor {
    match color {
        Color::Pink => TermColor::Rgb(0xff, 0x00, 0x66),
        Color::Orange => TermColor::Rgb(0xff, 0x66, 0x00),
        Color::Purple => TermColor::Rgb(0xcc, 0x33, 0xff),
        Color::Blue => TermColor::Rgb(0x00, 0x66, 0xff),
        Color::Green => TermColor::Rgb(0x00, 0xff, 0x00),
        Color::Yellow => TermColor::Rgb(0xff, 0xff, 0x00),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let grid = app.game.grid();
    let selected = app.game.selected();
    let mut board_lines = Vec::with_capacity(grid.rows());

    for row in 0..grid.rows() {
        let mut line_spans = Vec::with_capacity(grid.cols());
        for col in 0..grid.cols() {
            let pos = Pos::new(row, col);
            let tile = grid.get(pos).ok().flatten();

            let (glyph, mut style) = match (app.effects.flash_at(pos), tile) {
                (Some(Flash::Rejected), Some(color)) => {
                    ("▓▓", Style::default().fg(tile_color(color)).bg(TermColor::Red))
                }
                (Some(Flash::Cleared), _) | (_, None) => {
                    ("░░", Style::default().fg(TermColor::DarkGray))
                }
                (_, Some(color)) => ("██", Style::default().fg(tile_color(color))),
            };

            if selected == Some(pos) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            if app.cursor.pos == pos && !app.game.is_busy() {
                style = style.add_modifier(Modifier::SLOW_BLINK | Modifier::BOLD);
                if tile.is_some() && selected != Some(pos) {
                    line_spans.push(Span::styled("[]", style.fg(TermColor::White)));
                    continue;
                }
            }
            line_spans.push(Span::styled(glyph, style));
        }
        board_lines.push(Line::from(line_spans));
    }

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("tswap"));

    f.render_widget(board_widget, area);
}

fn render_info(f: &mut Frame, app: &App, area: Rect) {
    let phase_text = match app.game.phase() {
        Phase::Idle => "Pick a tile",
        Phase::AwaitingSecondSelection(_) => "Pick a neighbor",
        Phase::Swapping(..) => "Swapping",
        Phase::Resolving => "Matching",
        Phase::ApplyingGravity => "Dropping",
    };

    let cascade_text = match app.effects.last_cascade {
        Some((passes, removed)) => format!("x{} chain, {} tiles", passes, removed),
        None => String::new(),
    };

    let info_text = vec![
        Line::from(vec![Span::styled("SCORE", Style::default().fg(TermColor::Cyan))]),
        Line::from(vec![Span::raw(app.game.score().to_string())]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(format!("Moves: {}", app.game.moves()))]),
        Line::from(vec![Span::raw(format!("Best chain: {}", app.game.longest_chain()))]),
        Line::from(vec![Span::raw(cascade_text)]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(phase_text, Style::default().fg(TermColor::Yellow))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("SPACE select")]),
        Line::from(vec![Span::raw("ESC cancel")]),
        Line::from(vec![Span::raw("R restart  Q quit")]),
    ];

    let info_widget = Paragraph::new(info_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(info_widget, area);
}
