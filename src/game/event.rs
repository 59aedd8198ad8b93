use crate::game::board::{Color, Pos};

/// Change notifications for whatever draws the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEvent {
    TileSet { pos: Pos, color: Color },
    TileCleared { pos: Pos },
    TileMoved { from_row: usize, to_row: usize, col: usize },
    InvalidSwap { a: Pos, b: Pos },
    ScoreChanged { score: u64 },
    CascadeFinished { passes: u32, removed: u64 },
}

pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Discards everything. Used for silent board setup and headless runs.
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}
