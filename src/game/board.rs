use rand::Rng;

use crate::error::{GameError, Result};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Pink,
    Orange,
    Purple,
    Blue,
    Green,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Pink,
        Color::Orange,
        Color::Purple,
        Color::Blue,
        Color::Green,
        Color::Yellow,
    ];

    /// Uniform pick over the six colors.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn to_char(self) -> char {
        match self {
            Color::Pink => 'P',
            Color::Orange => 'O',
            Color::Purple => 'U',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Yellow => 'Y',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'P' => Some(Color::Pink),
            'O' => Some(Color::Orange),
            'U' => Some(Color::Purple),
            'B' => Some(Color::Blue),
            'G' => Some(Color::Green),
            'Y' => Some(Color::Yellow),
            _ => None,
        }
    }
}

/// A slot is either empty or holds one colored tile.
pub type Tile = Option<Color>;

/// Cell coordinate, row 0 at the top.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Exactly one axis differs, and by exactly one.
    pub fn is_adjacent(self, other: Pos) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        (dr == 1 && dc == 0) || (dr == 0 && dc == 1)
    }
}

/// Fixed-size `rows x cols` matrix of tiles, mutated in place for the whole game.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            tiles: vec![None; rows * cols],
        })
    }

    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        let mut grid = Self::new(rows, cols)?;
        grid.fill_random(rng);
        Ok(grid)
    }

    /// Puts a fresh random tile in every cell, keeping the same storage.
    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for tile in self.tiles.iter_mut() {
            *tile = Some(Color::random(rng));
        }
    }

    /// Builds a grid from one string per row. Color letters as in
    /// [`Color::to_char`], `.` for an empty slot.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = Self::new(rows.len(), width)?;
        for (r, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                return Err(GameError::InvalidDimensions {
                    rows: rows.len(),
                    cols: line.chars().count(),
                });
            }
            for (c, ch) in line.chars().enumerate() {
                let tile = match ch {
                    '.' => None,
                    _ => {
                        let color = Color::from_char(ch)
                            .ok_or(GameError::InvalidTile { ch, row: r, col: c })?;
                        Some(color)
                    }
                };
                grid.set(Pos::new(r, c), tile)?;
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(&self, pos: Pos) -> Result<usize> {
        if !self.contains(pos) {
            return Err(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(pos.row * self.cols + pos.col)
    }

    pub fn get(&self, pos: Pos) -> Result<Tile> {
        Ok(self.tiles[self.index(pos)?])
    }

    pub fn set(&mut self, pos: Pos, tile: Tile) -> Result<()> {
        let i = self.index(pos)?;
        self.tiles[i] = tile;
        Ok(())
    }

    /// Exchanges two tiles. Adjacency is not checked here.
    pub fn swap(&mut self, a: Pos, b: Pos) -> Result<()> {
        let i = self.index(a)?;
        let j = self.index(b)?;
        self.tiles.swap(i, j);
        Ok(())
    }

    pub fn is_adjacent(&self, a: Pos, b: Pos) -> bool {
        a.is_adjacent(b)
    }

    /// Unchecked read for scans that already iterate inside the bounds.
    pub(crate) fn at(&self, row: usize, col: usize) -> Tile {
        self.tiles[row * self.cols + col]
    }

    pub fn count_empty(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_none()).count()
    }

    pub fn to_rows(&self) -> Vec<String> {
        (0..self.rows)
            .map(|r| {
                (0..self.cols)
                    .map(|c| self.at(r, c).map_or('.', Color::to_char))
                    .collect()
            })
            .collect()
    }
}
