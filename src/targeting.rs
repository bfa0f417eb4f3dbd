//! Hunt/Target state machine for the advanced opponent strategy.
//!
//! Hunt mode sweeps parity cells weighted by the density map. A hit
//! switches to target mode, which pursues the located ship: gap cells
//! between confirmed hits first, then extensions along the inferred
//! axis, then any cell adjacent to the pursuit stack. The machine only
//! leaves target mode on a confirmed sinking, or when no reachable
//! candidate remains at all.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;

use crate::cellset::CellSet;
use crate::common::{in_bounds, Direction, DirectionSet};
use crate::config::BOARD_SIZE;
use crate::density::DensityMap;
use crate::ship::Orientation;
use crate::shots::ShotGrid;

/// Strategy phase: broad search or focused pursuit of a located ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Hunt,
    Target,
}

/// Targeting state for one opponent.
#[derive(Debug, Clone, Default)]
pub struct Targeting {
    mode: Mode,
    hit_stack: Vec<(usize, usize)>,
    tried: DirectionSet,
    axis: Option<Orientation>,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Hunt
    }
}

impl Targeting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Unresolved hits on the ship currently being pursued, oldest first.
    pub fn hit_stack(&self) -> &[(usize, usize)] {
        &self.hit_stack
    }

    /// Directions already probed and missed from the current target.
    pub fn tried(&self) -> DirectionSet {
        self.tried
    }

    /// Inferred orientation of the pursued ship, once two collinear hits
    /// confirm it.
    pub fn axis(&self) -> Option<Orientation> {
        self.axis
    }

    /// A hit joins the pursuit stack and puts the machine in target mode.
    pub fn on_hit(&mut self, x: usize, y: usize) {
        self.mode = Mode::Target;
        self.hit_stack.push((x, y));
        if self.hit_stack.len() == 1 {
            self.tried.clear();
        } else {
            self.infer_axis();
        }
    }

    /// A miss in target mode rules out the cardinal direction from the
    /// most recent hit towards the missed cell. Misses that are not
    /// axis-aligned with that hit carry no directional evidence.
    pub fn on_miss(&mut self, x: usize, y: usize) {
        if self.mode != Mode::Target {
            return;
        }
        if let Some(&last) = self.hit_stack.last() {
            if let Some(dir) = Direction::between(last, (x, y)) {
                self.tried.insert(dir);
            }
        }
    }

    /// A confirmed sinking resolves the pursuit entirely.
    pub fn on_sunk(&mut self) {
        self.reset();
    }

    /// Drop all pursuit state and return to hunt mode.
    pub fn reset(&mut self) {
        self.mode = Mode::Hunt;
        self.hit_stack.clear();
        self.tried.clear();
        self.axis = None;
    }

    fn infer_axis(&mut self) {
        let (x0, y0) = self.hit_stack[0];
        if self.hit_stack.iter().all(|&(_, y)| y == y0) {
            self.axis = Some(Orientation::Horizontal);
        } else if self.hit_stack.iter().all(|&(x, _)| x == x0) {
            self.axis = Some(Orientation::Vertical);
        } else {
            self.axis = None;
        }
    }

    /// Broad-search shot: unexplored parity cells ranked by the density
    /// map, uniform random tie-break; once parity is exhausted, uniform
    /// over whatever unexplored cells remain. `None` only on a fully
    /// resolved board.
    pub fn hunt_shot<R: Rng + ?Sized>(
        &self,
        shots: &ShotGrid,
        issued: &CellSet,
        density: &DensityMap,
        rng: &mut R,
    ) -> Option<(usize, usize)> {
        let mut best: Vec<(usize, usize)> = Vec::new();
        let mut best_density = 0u32;
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                if (x + y) % 2 != 0 || !shots.is_unknown(x, y) || issued.contains(x, y) {
                    continue;
                }
                let d = density[y][x];
                if best.is_empty() || d > best_density {
                    best_density = d;
                    best.clear();
                    best.push((x, y));
                } else if d == best_density {
                    best.push((x, y));
                }
            }
        }
        if let Some(&cell) = choose(&best, rng) {
            return Some(cell);
        }
        // parity exhausted: fall back to any unexplored cell
        let rest: Vec<(usize, usize)> = unknown_cells(shots, issued).collect();
        choose(&rest, rng).copied()
    }

    /// Pursuit shot. Returns `None` only when no reachable candidate
    /// remains anywhere around the stack; the caller then abandons the
    /// pursuit.
    pub fn target_shot<R: Rng + ?Sized>(
        &mut self,
        shots: &ShotGrid,
        issued: &CellSet,
        density: &DensityMap,
        rng: &mut R,
    ) -> Option<(usize, usize)> {
        if self.hit_stack.len() >= 2 {
            if let Some(cell) = self.line_shot(shots, issued) {
                return Some(cell);
            }
            return self.adjacency_shot(shots, issued, rng);
        }
        if let Some(cell) = self.neighbor_shot(shots, issued, density, rng) {
            return Some(cell);
        }
        // all four directions spent: forget them and scan adjacency once
        // more before giving up
        self.tried.clear();
        self.adjacency_shot(shots, issued, rng)
    }

    /// With the ship's axis inferred, target a gap strictly between the
    /// confirmed hits first, then extend one cell past either end.
    fn line_shot(&self, shots: &ShotGrid, issued: &CellSet) -> Option<(usize, usize)> {
        let axis = self.axis?;
        let along = |&(x, y): &(usize, usize)| match axis {
            Orientation::Horizontal => x,
            Orientation::Vertical => y,
        };
        let min = self.hit_stack.iter().map(along).min()?;
        let max = self.hit_stack.iter().map(along).max()?;
        let cell = |pos: usize| match axis {
            Orientation::Horizontal => (pos, self.hit_stack[0].1),
            Orientation::Vertical => (self.hit_stack[0].0, pos),
        };
        let open = |(x, y): (usize, usize)| shots.is_unknown(x, y) && !issued.contains(x, y);

        for pos in min + 1..max {
            if open(cell(pos)) {
                return Some(cell(pos));
            }
        }
        let (back, forward) = match axis {
            Orientation::Horizontal => (Direction::Left, Direction::Right),
            Orientation::Vertical => (Direction::Up, Direction::Down),
        };
        if min > 0 && !self.tried.contains(back) && open(cell(min - 1)) {
            return Some(cell(min - 1));
        }
        if max + 1 < BOARD_SIZE && !self.tried.contains(forward) && open(cell(max + 1)) {
            return Some(cell(max + 1));
        }
        None
    }

    /// Single-hit probe: the four cardinal neighbours not yet tried,
    /// ranked by the density map.
    fn neighbor_shot<R: Rng + ?Sized>(
        &self,
        shots: &ShotGrid,
        issued: &CellSet,
        density: &DensityMap,
        rng: &mut R,
    ) -> Option<(usize, usize)> {
        let &(hx, hy) = self.hit_stack.first()?;
        let mut best: Vec<(usize, usize)> = Vec::new();
        let mut best_density = 0u32;
        for dir in Direction::ALL {
            if self.tried.contains(dir) {
                continue;
            }
            let (dx, dy) = dir.offset();
            let (cx, cy) = (hx as i32 + dx, hy as i32 + dy);
            if !in_bounds(cx, cy) {
                continue;
            }
            let (cx, cy) = (cx as usize, cy as usize);
            if !shots.is_unknown(cx, cy) || issued.contains(cx, cy) {
                continue;
            }
            let d = density[cy][cx];
            if best.is_empty() || d > best_density {
                best_density = d;
                best.clear();
                best.push((cx, cy));
            } else if d == best_density {
                best.push((cx, cy));
            }
        }
        choose(&best, rng).copied()
    }

    /// Fallback for non-collinear contacts: every open cell adjacent to
    /// any stack entry, ranked by how many stack entries it touches.
    fn adjacency_shot<R: Rng + ?Sized>(
        &self,
        shots: &ShotGrid,
        issued: &CellSet,
        rng: &mut R,
    ) -> Option<(usize, usize)> {
        let mut best: Vec<(usize, usize)> = Vec::new();
        let mut best_rank = 0usize;
        let mut seen = CellSet::new();
        for &(hx, hy) in &self.hit_stack {
            for dir in Direction::ALL {
                let (dx, dy) = dir.offset();
                let (cx, cy) = (hx as i32 + dx, hy as i32 + dy);
                if !in_bounds(cx, cy) {
                    continue;
                }
                let (cx, cy) = (cx as usize, cy as usize);
                if seen.contains(cx, cy) || !shots.is_unknown(cx, cy) || issued.contains(cx, cy)
                {
                    continue;
                }
                seen.insert(cx, cy);
                let rank = self
                    .hit_stack
                    .iter()
                    .filter(|&&(sx, sy)| {
                        (sx as i32 - cx as i32).abs() + (sy as i32 - cy as i32).abs() == 1
                    })
                    .count();
                if best.is_empty() || rank > best_rank {
                    best_rank = rank;
                    best.clear();
                    best.push((cx, cy));
                } else if rank == best_rank {
                    best.push((cx, cy));
                }
            }
        }
        choose(&best, rng).copied()
    }
}

/// All cells that are neither resolved nor pending resolution.
pub(crate) fn unknown_cells<'a>(
    shots: &'a ShotGrid,
    issued: &'a CellSet,
) -> impl Iterator<Item = (usize, usize)> + 'a {
    (0..BOARD_SIZE).flat_map(move |y| {
        (0..BOARD_SIZE)
            .filter(move |&x| shots.is_unknown(x, y) && !issued.contains(x, y))
            .map(move |x| (x, y))
    })
}

/// Uniform random element of a non-empty slice.
pub(crate) fn choose<'a, T, R: Rng + ?Sized>(candidates: &'a [T], rng: &mut R) -> Option<&'a T> {
    if candidates.is_empty() {
        None
    } else {
        Some(&candidates[rng.random_range(0..candidates.len())])
    }
}
