use std::collections::HashMap;
use std::time::{Duration, Instant};

use tswap::constants::FLASH_TIME;
use tswap::game::{EventSink, GameEvent, Pos};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flash {
    Cleared,
    Rejected,
}

/// Short-lived highlights driven by engine events.
#[derive(Default)]
pub struct Effects {
    flashes: HashMap<Pos, (Flash, Instant)>,
    pub last_cascade: Option<(u32, u64)>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flash_at(&self, pos: Pos) -> Option<Flash> {
        self.flashes.get(&pos).map(|&(flash, _)| flash)
    }

    pub fn expire(&mut self, now: Instant) {
        let ttl = Duration::from_millis(FLASH_TIME);
        self.flashes.retain(|_, (_, since)| now.duration_since(*since) < ttl);
    }

    pub fn clear(&mut self) {
        self.flashes.clear();
        self.last_cascade = None;
    }
}

impl EventSink for Effects {
    fn emit(&mut self, event: GameEvent) {
        let now = Instant::now();
        match event {
            GameEvent::TileCleared { pos } => {
                self.flashes.insert(pos, (Flash::Cleared, now));
            }
            GameEvent::InvalidSwap { a, b } => {
                self.flashes.insert(a, (Flash::Rejected, now));
                self.flashes.insert(b, (Flash::Rejected, now));
            }
            GameEvent::TileSet { pos, .. } => {
                self.flashes.remove(&pos);
            }
            GameEvent::TileMoved { to_row, col, .. } => {
                self.flashes.remove(&Pos::new(to_row, col));
            }
            GameEvent::CascadeFinished { passes, removed } => {
                if passes > 0 {
                    self.last_cascade = Some((passes, removed));
                }
            }
            GameEvent::ScoreChanged { .. } => {}
        }
    }
}
