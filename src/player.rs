//! Opponent orchestration: board ownership, turn bookkeeping and move
//! selection across both difficulty tiers.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use log::{debug, warn};
use rand::Rng;

use crate::board::Board;
use crate::cellset::CellSet;
use crate::common::{in_bounds, BoardError, Direction, ShotResult};
use crate::config::{Difficulty, BOARD_SIZE, MULTI_HIT_BUDGET, PLACEMENT_ATTEMPTS, SHIPS};
use crate::density::density_map;
use crate::ship::{Orientation, Ship};
use crate::shots::ShotGrid;
use crate::targeting::{choose, unknown_cells, Mode, Targeting};

/// One decision produced per opponent turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// A single attack at `(x, y)`.
    Shot(usize, usize),
    /// A multi-hit cross attack centred at `(x, y)`; the cells to strike
    /// come from [`cross_cells`].
    MultiHit(usize, usize),
}

/// In-bounds cells of the cross template centred at `(cx, cy)`: the
/// centre plus its four orthogonal neighbours. Cells off the board are
/// dropped, never substituted, so an edge template lands fewer shots.
pub fn cross_cells(cx: usize, cy: usize) -> Vec<(usize, usize)> {
    let mut cells = Vec::with_capacity(5);
    cells.push((cx, cy));
    for dir in Direction::ALL {
        let (dx, dy) = dir.offset();
        let (nx, ny) = (cx as i32 + dx, cy as i32 + dy);
        if in_bounds(nx, ny) {
            cells.push((nx as usize, ny as usize));
        }
    }
    cells
}

/// The computer opponent: owns its board, the shot history against the
/// enemy, the targeting state machine and the multi-hit schedule.
pub struct AiPlayer {
    difficulty: Difficulty,
    board: Board,
    shots: ShotGrid,
    issued: CellSet,
    targeting: Targeting,
    last_hit: Option<(usize, usize)>,
    remaining_lengths: Vec<usize>,
    multi_hit_budget: u8,
    turn: u32,
}

impl AiPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        AiPlayer {
            difficulty,
            board: Board::new(),
            shots: ShotGrid::new(),
            issued: CellSet::new(),
            targeting: Targeting::new(),
            last_hit: None,
            remaining_lengths: SHIPS.iter().map(|s| s.length()).collect(),
            multi_hit_budget: MULTI_HIT_BUDGET,
            turn: 0,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn shots(&self) -> &ShotGrid {
        &self.shots
    }

    pub fn targeting(&self) -> &Targeting {
        &self.targeting
    }

    /// Lengths of enemy ships believed still afloat.
    pub fn remaining_lengths(&self) -> &[usize] {
        &self.remaining_lengths
    }

    pub fn multi_hit_budget(&self) -> u8 {
        self.multi_hit_budget
    }

    /// Turns taken so far (decisions produced).
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Whether this side has already resolved an attack at `(x, y)`.
    pub fn has_attacked(&self, x: usize, y: usize) -> bool {
        self.shots.attacked().contains(x, y)
    }

    /// Place the full fleet at random. Each ship gets a bounded number of
    /// uniform origin/orientation samples; running out is reported so an
    /// incompletely populated board is never silent.
    pub fn place_ships<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for def in SHIPS {
            let mut placed = false;
            for _ in 0..PLACEMENT_ATTEMPTS {
                let x = rng.random_range(0..BOARD_SIZE);
                let y = rng.random_range(0..BOARD_SIZE);
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                if self.board.place_ship(Ship::new(def), x, y, orientation).is_ok() {
                    placed = true;
                    break;
                }
            }
            if !placed {
                return Err(BoardError::UnableToPlaceShip);
            }
        }
        Ok(())
    }

    /// Produce the next decision. One call per turn; every cell of the
    /// result must be resolved through [`Self::update_strategy`] before
    /// the next call.
    pub fn next_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Move {
        self.turn += 1;
        if self.difficulty.multi_hit_due(self.turn, self.multi_hit_budget) {
            if let Some((cx, cy)) = self.multi_hit_center(rng) {
                self.multi_hit_budget -= 1;
                for (x, y) in cross_cells(cx, cy) {
                    self.issued.insert(x, y);
                }
                debug!("multi-hit attack centred at ({}, {}) on turn {}", cx, cy, self.turn);
                return Move::MultiHit(cx, cy);
            }
            warn!("no usable multi-hit centre on turn {}", self.turn);
        }
        let (x, y) = match self.difficulty {
            Difficulty::Easy => self.easy_shot(rng),
            Difficulty::Hard => self.hard_shot(rng),
        };
        self.issued.insert(x, y);
        Move::Shot(x, y)
    }

    /// Fold one resolved attack back into the strategy state. Multi-hit
    /// attacks report each landed cell individually.
    pub fn update_strategy(&mut self, result: ShotResult, x: usize, y: usize) {
        self.shots.record(x, y, !matches!(result, ShotResult::Miss));
        match self.difficulty {
            Difficulty::Easy => match result {
                ShotResult::Hit => self.last_hit = Some((x, y)),
                ShotResult::Miss => self.last_hit = None,
                ShotResult::Sunk { length } => {
                    self.last_hit = None;
                    self.retire_length(length);
                }
            },
            Difficulty::Hard => match result {
                ShotResult::Hit => self.targeting.on_hit(x, y),
                ShotResult::Miss => self.targeting.on_miss(x, y),
                ShotResult::Sunk { length } => {
                    self.targeting.on_sunk();
                    self.retire_length(length);
                }
            },
        }
    }

    /// Remove one entry of `length` from the remaining-length multiset.
    /// A sinking that matches no remaining length is an anomaly; the last
    /// entry is dropped instead so the density map keeps shrinking.
    fn retire_length(&mut self, length: usize) {
        if let Some(pos) = self.remaining_lengths.iter().position(|&l| l == length) {
            self.remaining_lengths.remove(pos);
        } else {
            warn!("sunk ship of length {} matches no remaining ship", length);
            self.remaining_lengths.pop();
        }
    }

    /// Advanced tier: pursue the located ship if there is one, otherwise
    /// parity hunt over the freshly computed density map.
    fn hard_shot<R: Rng + ?Sized>(&mut self, rng: &mut R) -> (usize, usize) {
        let density = density_map(&self.shots, &self.remaining_lengths);
        if self.targeting.mode() == Mode::Target {
            if let Some(cell) = self.targeting.target_shot(&self.shots, &self.issued, &density, rng)
            {
                return cell;
            }
            // nothing reachable around the stack; abandon the pursuit
            self.targeting.reset();
        }
        self.targeting
            .hunt_shot(&self.shots, &self.issued, &density, rng)
            .unwrap_or_else(|| {
                warn!("no unexplored cells left to attack");
                (0, 0)
            })
    }

    /// Simple tier: random hunting, plain adjacency follow-up on the last
    /// hit, back to hunting on a miss.
    fn easy_shot<R: Rng + ?Sized>(&mut self, rng: &mut R) -> (usize, usize) {
        if let Some((hx, hy)) = self.last_hit {
            let mut candidates: Vec<(usize, usize)> = Vec::new();
            for dir in Direction::ALL {
                let (dx, dy) = dir.offset();
                let (cx, cy) = (hx as i32 + dx, hy as i32 + dy);
                if !in_bounds(cx, cy) {
                    continue;
                }
                let (cx, cy) = (cx as usize, cy as usize);
                if self.shots.is_unknown(cx, cy) && !self.issued.contains(cx, cy) {
                    candidates.push((cx, cy));
                }
            }
            if let Some(&cell) = choose(&candidates, rng) {
                return cell;
            }
            self.last_hit = None;
        }
        let open: Vec<(usize, usize)> = unknown_cells(&self.shots, &self.issued).collect();
        choose(&open, rng).copied().unwrap_or_else(|| {
            warn!("no unexplored cells left to attack");
            (0, 0)
        })
    }

    /// Uniform choice among interior cells that are still unexplored; the
    /// interior restriction keeps the whole cross on the board.
    fn multi_hit_center<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(usize, usize)> {
        let mut candidates: Vec<(usize, usize)> = Vec::new();
        for y in 1..BOARD_SIZE - 1 {
            for x in 1..BOARD_SIZE - 1 {
                if self.shots.is_unknown(x, y) && !self.issued.contains(x, y) {
                    candidates.push((x, y));
                }
            }
        }
        choose(&candidates, rng).copied()
    }
}
