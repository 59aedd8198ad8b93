pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod logging;

pub use error::{GameError, Result};
pub use game::{find_matches, ClickOutcome, Color, EventSink, Game, GameEvent, Grid, Phase, Pos};
