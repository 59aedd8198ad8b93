use std::collections::BTreeSet;

use crate::constants::MIN_RUN;
use crate::game::board::{Grid, Pos, Tile};

/// Every cell that belongs to a horizontal or vertical run of at least
/// `MIN_RUN` equal, non-empty tiles. Cells matched in both directions
/// appear once. Does not touch the grid.
pub fn find_matches(grid: &Grid) -> BTreeSet<Pos> {
    let mut matches = BTreeSet::new();

    for row in 0..grid.rows() {
        scan_line(grid.cols(), |i| grid.at(row, i), |i| {
            matches.insert(Pos::new(row, i));
        });
    }

    for col in 0..grid.cols() {
        scan_line(grid.rows(), |i| grid.at(i, col), |i| {
            matches.insert(Pos::new(i, col));
        });
    }

    matches
}

/// Walks one line front to back, reporting the indices of each run that is
/// long enough. A run is extended greedily toward increasing index.
fn scan_line<T, F>(len: usize, tile_at: T, mut on_match: F)
where
    T: Fn(usize) -> Tile,
    F: FnMut(usize),
{
    let mut start = 0;
    while start < len {
        let Some(color) = tile_at(start) else {
            start += 1;
            continue;
        };

        let mut end = start + 1;
        while end < len && tile_at(end) == Some(color) {
            end += 1;
        }

        if end - start >= MIN_RUN {
            (start..end).for_each(&mut on_match);
        }
        start = end;
    }
}
