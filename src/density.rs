//! Placement-count density map over the shot history.

use crate::config::BOARD_SIZE;
use crate::shots::ShotGrid;

/// Per-cell placement counts, indexed `[y][x]`.
pub type DensityMap = [[u32; BOARD_SIZE]; BOARD_SIZE];

/// Count, for every unexplored cell, how many placements of the remaining
/// ship lengths could still cover it.
///
/// A window of `len` consecutive cells (per row and per column) is a
/// valid candidate unless it crosses a recorded miss. Every unknown cell
/// inside a candidate gains one count; cells already recorded as hits
/// stay at zero since they are resolved. Recomputed from scratch on each
/// move, because the shot history changes every turn.
pub fn density_map(shots: &ShotGrid, remaining: &[usize]) -> DensityMap {
    let mut map = [[0u32; BOARD_SIZE]; BOARD_SIZE];
    for &len in remaining {
        if len == 0 || len > BOARD_SIZE {
            continue;
        }
        // horizontal windows
        for y in 0..BOARD_SIZE {
            for x in 0..=BOARD_SIZE - len {
                let cells = (0..len).map(|i| (x + i, y));
                accumulate(&mut map, shots, cells);
            }
        }
        // vertical windows
        for x in 0..BOARD_SIZE {
            for y in 0..=BOARD_SIZE - len {
                let cells = (0..len).map(|i| (x, y + i));
                accumulate(&mut map, shots, cells);
            }
        }
    }
    map
}

fn accumulate<I>(map: &mut DensityMap, shots: &ShotGrid, cells: I)
where
    I: Iterator<Item = (usize, usize)> + Clone,
{
    if cells.clone().any(|(x, y)| shots.misses().contains(x, y)) {
        return;
    }
    for (x, y) in cells {
        if shots.is_unknown(x, y) {
            map[y][x] += 1;
        }
    }
}
