use std::time::Instant;

use tswap::config::Config;
use tswap::game::{ClickOutcome, Game};
use tswap::Result;

use crate::input::cursor::Cursor;
use crate::ui::effects::Effects;

pub struct App {
    pub game: Game,
    pub cursor: Cursor,
    pub effects: Effects,
    pub config: Config,
    step_timer: Instant,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let game = Game::new(&config)?;
        Ok(Self {
            cursor: Cursor::new(config.rows, config.cols),
            game,
            effects: Effects::new(),
            config,
            step_timer: Instant::now(),
        })
    }

    pub fn click_cursor(&mut self) -> Result<()> {
        if self.game.click(self.cursor.pos, &mut self.effects)? == ClickOutcome::SwapQueued {
            // Show the swap right away, then pace the rest of the cascade
            self.game.step(&mut self.effects)?;
            self.step_timer = Instant::now();
        }
        Ok(())
    }

    pub fn reset(&mut self) -> Result<()> {
        self.game.reset()?;
        self.effects.clear();
        Ok(())
    }

    pub fn update(&mut self) -> Result<()> {
        let now = Instant::now();
        self.effects.expire(now);

        if self.config.step_delay.is_zero() {
            self.game.settle(&mut self.effects)?;
        } else if self.game.is_busy() && now.duration_since(self.step_timer) >= self.config.step_delay {
            self.game.step(&mut self.effects)?;
            self.step_timer = now;
        }
        Ok(())
    }
}
