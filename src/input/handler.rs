use crossterm::event::{KeyCode, KeyEventKind};

use crate::app::App;
use crate::input::cursor::CursorDirection;

pub fn handle_input(app: &mut App, key_code: KeyCode, kind: KeyEventKind) -> tswap::Result<()> {
    match kind {
        KeyEventKind::Press | KeyEventKind::Repeat => match key_code {
            KeyCode::Up | KeyCode::Char('k') => app.cursor.shift(CursorDirection::Up),
            KeyCode::Down | KeyCode::Char('j') => app.cursor.shift(CursorDirection::Down),
            KeyCode::Left | KeyCode::Char('h') => app.cursor.shift(CursorDirection::Left),
            KeyCode::Right | KeyCode::Char('l') => app.cursor.shift(CursorDirection::Right),
            KeyCode::Char(' ') | KeyCode::Enter => {
                // Repeats would select and immediately re-click the same cell
                if kind == KeyEventKind::Press {
                    app.click_cursor()?;
                }
            }
            KeyCode::Esc => app.game.cancel_selection(),
            _ => {}
        },
        KeyEventKind::Release => {}
    }
    Ok(())
}
