use std::io;

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("unknown tile '{ch}' at ({row}, {col})")]
    InvalidTile { ch: char, row: usize, col: usize },
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
