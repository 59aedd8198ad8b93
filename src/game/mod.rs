pub mod board;
pub mod event;
pub mod matcher;
pub mod simulate;
pub mod state;

pub use board::{Color, Grid, Pos, Tile};
pub use event::{EventSink, GameEvent, NullSink};
pub use matcher::find_matches;
pub use simulate::{simulate, SimulationReport};
pub use state::{CascadeReport, ClickOutcome, Game, Phase};
