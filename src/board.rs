//! Board state: ship placements and attack resolution.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use log::warn;

use crate::cellset::CellSet;
use crate::common::{AttackResult, BoardError};
use crate::config::BOARD_SIZE;
use crate::ship::{Orientation, Ship};

/// A ship together with where it sits on the board. Hit indices are
/// derived from this record by plain arithmetic.
#[derive(Debug, Clone)]
struct PlacedShip {
    ship: Ship,
    x: usize,
    y: usize,
    orientation: Orientation,
}

impl PlacedShip {
    /// Offset of `(x, y)` within the ship's run, if the cell is covered.
    fn hit_index(&self, x: usize, y: usize) -> Option<usize> {
        let len = self.ship.length();
        match self.orientation {
            Orientation::Horizontal if y == self.y && x >= self.x && x < self.x + len => {
                Some(x - self.x)
            }
            Orientation::Vertical if x == self.x && y >= self.y && y < self.y + len => {
                Some(y - self.y)
            }
            _ => None,
        }
    }
}

/// One side's 10×10 board holding the placed fleet.
#[derive(Debug, Clone, Default)]
pub struct Board {
    occupied: CellSet,
    ships: Vec<PlacedShip>,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Board {
            occupied: CellSet::new(),
            ships: Vec::new(),
        }
    }

    /// Number of ships placed so far.
    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Occupancy mask of all placed ships.
    pub fn occupied(&self) -> CellSet {
        self.occupied
    }

    /// Place `ship` with its origin at `(x, y)`, extending right or down
    /// per `orientation`. Valid iff every covered cell is in bounds and
    /// empty; on failure the board is left untouched.
    pub fn place_ship(
        &mut self,
        ship: Ship,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let mut mask = CellSet::new();
        for i in 0..ship.length() {
            let (cx, cy) = match orientation {
                Orientation::Horizontal => (x + i, y),
                Orientation::Vertical => (x, y + i),
            };
            if cx >= BOARD_SIZE || cy >= BOARD_SIZE {
                return Err(BoardError::ShipOutOfBounds);
            }
            mask.insert(cx, cy);
        }
        if !(self.occupied & mask).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        self.occupied |= mask;
        self.ships.push(PlacedShip { ship, x, y, orientation });
        Ok(())
    }

    /// Resolve an attack at `(x, y)`. Out-of-range coordinates resolve as
    /// a miss and are reported as an anomaly; a correct caller never
    /// sends them. A hit registers on the covered ship at its derived
    /// segment index.
    pub fn receive_attack(&mut self, x: i32, y: i32) -> AttackResult {
        if x < 0 || x >= BOARD_SIZE as i32 || y < 0 || y >= BOARD_SIZE as i32 {
            warn!("attack out of bounds at ({}, {})", x, y);
            return AttackResult::Miss;
        }
        let (x, y) = (x as usize, y as usize);
        for placed in self.ships.iter_mut() {
            if let Some(index) = placed.hit_index(x, y) {
                if placed.ship.register_hit(index, x, y) {
                    return AttackResult::Hit;
                }
                warn!(
                    "hit index {} out of range for {} at ({}, {})",
                    index,
                    placed.ship.name(),
                    x,
                    y
                );
                return AttackResult::Miss;
            }
        }
        AttackResult::Miss
    }

    /// Ship covering `(x, y)`, if any.
    pub fn ship_at(&self, x: usize, y: usize) -> Option<&Ship> {
        self.ships
            .iter()
            .find(|placed| placed.hit_index(x, y).is_some())
            .map(|placed| &placed.ship)
    }

    /// False until at least one ship is placed; true once every placed
    /// ship is sunk.
    pub fn all_ships_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(|placed| placed.ship.is_sunk())
    }
}
