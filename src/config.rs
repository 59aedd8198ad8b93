use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::constants::{COLS, ROWS, STEP_DELAY};
use crate::error::{GameError, Result};

#[derive(Parser, Debug, Clone)]
#[command(name = "tswap", about = "Swap adjacent tiles to line up three or more of a color")]
pub struct Args {
    /// Number of rows on the board
    #[arg(long, default_value_t = ROWS)]
    pub rows: usize,

    /// Number of columns on the board
    #[arg(long, default_value_t = COLS)]
    pub cols: usize,

    /// Seed for tile generation; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause between cascade steps in milliseconds (0 resolves instantly)
    #[arg(long, default_value_t = STEP_DELAY)]
    pub step_delay_ms: u64,

    /// Write a verbose log of swaps and cascades to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging (needs --log-file)
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Cmd {
    /// Play random adjacent swaps without a terminal UI and print the result
    Simulate {
        /// Number of swaps to play
        #[arg(long, default_value_t = 100)]
        moves: u32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub seed: Option<u64>,
    pub step_delay: Duration,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self> {
        if args.rows == 0 || args.cols == 0 {
            return Err(GameError::InvalidDimensions {
                rows: args.rows,
                cols: args.cols,
            });
        }
        Ok(Self {
            rows: args.rows,
            cols: args.cols,
            seed: args.seed,
            step_delay: Duration::from_millis(args.step_delay_ms),
            log_file: args.log_file.clone(),
            verbose: args.verbose,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            seed: None,
            step_delay: Duration::from_millis(STEP_DELAY),
            log_file: None,
            verbose: false,
        }
    }
}
