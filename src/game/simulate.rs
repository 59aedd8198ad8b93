use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::error::{GameError, Result};
use crate::game::board::Pos;
use crate::game::event::NullSink;
use crate::game::state::Game;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SimulationReport {
    pub moves: u32,
    pub score: u64,
    pub longest_chain: u32,
}

/// Headless play: random adjacent swaps, every cascade resolved without
/// pauses. With a seed in `config` both the board and the moves repeat.
pub fn simulate(config: &Config, moves: u32) -> Result<SimulationReport> {
    let (rows, cols) = (config.rows, config.cols);
    if rows * cols < 2 {
        return Err(GameError::InvalidDimensions { rows, cols });
    }
    let mut game = Game::new(config)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    };

    for _ in 0..moves {
        let a = Pos::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
        let b = random_neighbor(a, rows, cols, &mut rng);

        game.click(a, &mut NullSink)?;
        game.click(b, &mut NullSink)?;
        game.settle(&mut NullSink)?;
    }

    Ok(SimulationReport {
        moves: game.moves(),
        score: game.score(),
        longest_chain: game.longest_chain(),
    })
}

fn random_neighbor<R: Rng>(a: Pos, rows: usize, cols: usize, rng: &mut R) -> Pos {
    loop {
        let (dr, dc) = match rng.gen_range(0..4) {
            0 => (-1, 0),
            1 => (1, 0),
            2 => (0, -1),
            _ => (0, 1),
        };
        let r = a.row as isize + dr;
        let c = a.col as isize + dc;
        if r >= 0 && c >= 0 && (r as usize) < rows && (c as usize) < cols {
            return Pos::new(r as usize, c as usize);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_plays_the_same_game() {
        let config = Config {
            seed: Some(7),
            ..Config::default()
        };
        let first = simulate(&config, 50).unwrap();
        let second = simulate(&config, 50).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.moves, 50);
    }

    #[test]
    fn single_cell_board_cannot_be_simulated() {
        let config = Config {
            rows: 1,
            cols: 1,
            seed: Some(1),
            ..Config::default()
        };
        assert!(matches!(
            simulate(&config, 1),
            Err(GameError::InvalidDimensions { rows: 1, cols: 1 })
        ));
    }

    #[test]
    fn neighbors_stay_on_the_board() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let b = random_neighbor(Pos::new(0, 0), 2, 2, &mut rng);
            assert!(Pos::new(0, 0).is_adjacent(b));
            assert!(b.row < 2 && b.col < 2);
        }
    }
}
