//! Tri-state shot history against one opponent board.

use crate::cellset::CellSet;

/// State of a cell in the shot history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Unknown,
    Hit,
    Miss,
}

/// Record of every resolved attack, kept as disjoint hit and miss sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShotGrid {
    hits: CellSet,
    misses: CellSet,
}

impl ShotGrid {
    pub const fn new() -> Self {
        ShotGrid {
            hits: CellSet::new(),
            misses: CellSet::new(),
        }
    }

    pub fn state(&self, x: usize, y: usize) -> CellState {
        if self.hits.contains(x, y) {
            CellState::Hit
        } else if self.misses.contains(x, y) {
            CellState::Miss
        } else {
            CellState::Unknown
        }
    }

    /// In bounds and not yet resolved either way.
    pub fn is_unknown(&self, x: usize, y: usize) -> bool {
        x < crate::config::BOARD_SIZE
            && y < crate::config::BOARD_SIZE
            && !self.hits.contains(x, y)
            && !self.misses.contains(x, y)
    }

    /// Record a resolved attack. A later resolution for the same cell
    /// overwrites the earlier one, keeping the two sets disjoint.
    pub fn record(&mut self, x: usize, y: usize, hit: bool) {
        self.hits.remove(x, y);
        self.misses.remove(x, y);
        if hit {
            self.hits.insert(x, y);
        } else {
            self.misses.insert(x, y);
        }
    }

    pub fn hits(&self) -> CellSet {
        self.hits
    }

    pub fn misses(&self) -> CellSet {
        self.misses
    }

    /// All resolved cells.
    pub fn attacked(&self) -> CellSet {
        self.hits | self.misses
    }
}
