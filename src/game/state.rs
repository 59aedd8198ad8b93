use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::error::Result;
use crate::game::board::{Color, Grid, Pos};
use crate::game::event::{EventSink, GameEvent, NullSink};
use crate::game::matcher::find_matches;
use crate::vlog;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Idle,
    AwaitingSecondSelection(Pos),
    Swapping(Pos, Pos),
    Resolving,
    ApplyingGravity,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClickOutcome {
    Selected,
    SelectionKept,
    Rejected,
    SwapQueued,
    Busy,
}

/// Totals for one cascade, from the swap until the board is stable again.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CascadeReport {
    pub passes: u32,
    pub removed: u64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Score(u64);

impl Score {
    pub fn value(self) -> u64 {
        self.0
    }

    pub fn increase(&mut self, amount: u64) {
        self.0 += amount;
    }
}

pub struct Game {
    grid: Grid,
    score: Score,
    phase: Phase,
    rng: StdRng,
    moves: u32,
    longest_chain: u32,
    cascade: CascadeReport,
}

impl Game {
    pub fn new(config: &Config) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config.rows, config.cols, rng)
    }

    /// Random board with the starting matches already cleared away,
    /// without scoring them.
    pub fn with_rng(rows: usize, cols: usize, mut rng: StdRng) -> Result<Self> {
        let grid = Grid::random(rows, cols, &mut rng)?;
        let mut game = Self::from_grid(grid, rng);
        game.settle_silently()?;
        Ok(game)
    }

    /// Takes the grid exactly as given. Empty slots are left alone until a
    /// gravity pass reaches them.
    pub fn from_grid(grid: Grid, rng: StdRng) -> Self {
        Self {
            grid,
            score: Score::default(),
            phase: Phase::Idle,
            rng,
            moves: 0,
            longest_chain: 0,
            cascade: CascadeReport::default(),
        }
    }

    fn settle_silently(&mut self) -> Result<()> {
        while !find_matches(&self.grid).is_empty() {
            self.remove_matches(&mut NullSink, false)?;
            self.apply_gravity(&mut NullSink)?;
        }
        Ok(())
    }

    pub fn reset(&mut self) -> Result<()> {
        self.grid.fill_random(&mut self.rng);
        self.score = Score::default();
        self.phase = Phase::Idle;
        self.moves = 0;
        self.longest_chain = 0;
        self.cascade = CascadeReport::default();
        self.settle_silently()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score.value()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn longest_chain(&self) -> u32 {
        self.longest_chain
    }

    /// A cascade is running and input is not accepted.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            Phase::Swapping(..) | Phase::Resolving | Phase::ApplyingGravity
        )
    }

    pub fn selected(&self) -> Option<Pos> {
        match self.phase {
            Phase::AwaitingSecondSelection(pos) => Some(pos),
            _ => None,
        }
    }

    pub fn click(&mut self, pos: Pos, sink: &mut impl EventSink) -> Result<ClickOutcome> {
        self.grid.get(pos)?;

        match self.phase {
            Phase::Idle => {
                self.phase = Phase::AwaitingSecondSelection(pos);
                Ok(ClickOutcome::Selected)
            }
            Phase::AwaitingSecondSelection(first) if first == pos => Ok(ClickOutcome::SelectionKept),
            Phase::AwaitingSecondSelection(first) => {
                if self.grid.is_adjacent(first, pos) {
                    self.phase = Phase::Swapping(first, pos);
                    Ok(ClickOutcome::SwapQueued)
                } else {
                    vlog!("invalid swap {:?} <-> {:?}", first, pos);
                    sink.emit(GameEvent::InvalidSwap { a: first, b: pos });
                    self.phase = Phase::Idle;
                    Ok(ClickOutcome::Rejected)
                }
            }
            _ => Ok(ClickOutcome::Busy),
        }
    }

    /// Drops a pending first selection.
    pub fn cancel_selection(&mut self) {
        if let Phase::AwaitingSecondSelection(_) = self.phase {
            self.phase = Phase::Idle;
        }
    }

    /// Advances the cascade by one phase and returns the phase it landed in.
    pub fn step(&mut self, sink: &mut impl EventSink) -> Result<Phase> {
        self.phase = match self.phase {
            Phase::Swapping(a, b) => {
                self.grid.swap(a, b)?;
                self.moves += 1;
                self.cascade = CascadeReport::default();
                vlog!("move {}: swap {:?} <-> {:?}", self.moves, a, b);
                for pos in [a, b] {
                    match self.grid.get(pos)? {
                        Some(color) => sink.emit(GameEvent::TileSet { pos, color }),
                        None => sink.emit(GameEvent::TileCleared { pos }),
                    }
                }
                Phase::Resolving
            }
            Phase::Resolving => {
                if self.remove_matches(sink, true)? == 0 {
                    self.finish_cascade(sink);
                    Phase::Idle
                } else {
                    Phase::ApplyingGravity
                }
            }
            Phase::ApplyingGravity => {
                self.apply_gravity(sink)?;
                Phase::Resolving
            }
            idle => idle,
        };
        Ok(self.phase)
    }

    /// Runs the current cascade to the end with no pauses. Reports zeros
    /// when no cascade was running.
    pub fn settle(&mut self, sink: &mut impl EventSink) -> Result<CascadeReport> {
        if !self.is_busy() {
            return Ok(CascadeReport::default());
        }
        while self.is_busy() {
            self.step(sink)?;
        }
        Ok(self.cascade)
    }

    /// Clears every matched cell and returns how many were cleared.
    fn remove_matches(&mut self, sink: &mut impl EventSink, scored: bool) -> Result<u64> {
        let matches = find_matches(&self.grid);
        if matches.is_empty() {
            return Ok(0);
        }

        for &pos in &matches {
            self.grid.set(pos, None)?;
            sink.emit(GameEvent::TileCleared { pos });
        }

        let removed = matches.len() as u64;
        if scored {
            self.score.increase(removed);
            self.cascade.passes += 1;
            self.cascade.removed += removed;
            vlog!(
                "pass {}: removed {} tiles, score {}",
                self.cascade.passes,
                removed,
                self.score.value()
            );
            sink.emit(GameEvent::ScoreChanged { score: self.score.value() });
        }
        Ok(removed)
    }

    /// Compacts each column toward the bottom, keeping tile order, and fills
    /// the cells left open at the top with fresh random tiles.
    fn apply_gravity(&mut self, sink: &mut impl EventSink) -> Result<()> {
        let rows = self.grid.rows();
        for col in 0..self.grid.cols() {
            let mut write = rows;
            for read in (0..rows).rev() {
                let Some(color) = self.grid.get(Pos::new(read, col))? else {
                    continue;
                };
                write -= 1;
                if write != read {
                    self.grid.set(Pos::new(write, col), Some(color))?;
                    self.grid.set(Pos::new(read, col), None)?;
                    sink.emit(GameEvent::TileMoved { from_row: read, to_row: write, col });
                }
            }

            for row in 0..write {
                let pos = Pos::new(row, col);
                let color = Color::random(&mut self.rng);
                self.grid.set(pos, Some(color))?;
                sink.emit(GameEvent::TileSet { pos, color });
            }
        }
        Ok(())
    }

    fn finish_cascade(&mut self, sink: &mut impl EventSink) {
        self.longest_chain = self.longest_chain.max(self.cascade.passes);
        vlog!(
            "cascade done: {} passes, {} removed, score {}",
            self.cascade.passes,
            self.cascade.removed,
            self.score.value()
        );
        sink.emit(GameEvent::CascadeFinished {
            passes: self.cascade.passes,
            removed: self.cascade.removed,
        });
    }
}
