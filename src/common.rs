//! Shared result, direction and error types for the engine.

use core::fmt;

use crate::config::BOARD_SIZE;

/// Outcome of a single attack resolved by a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResult {
    /// Attack landed on a ship segment.
    Hit,
    /// Attack landed on open water (or was out of bounds).
    Miss,
}

/// Resolved result reported back to the opponent strategy.
///
/// `Sunk` carries the length of the sunk ship so the remaining-length
/// multiset behind the density map stays accurate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    Hit,
    Miss,
    Sunk { length: usize },
}

/// Cardinal probe directions used by target mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Offset applied to a coordinate when stepping this way. `Up` is
    /// towards smaller `y`.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Direction from one cell to another, when the two are axis-aligned.
    /// Diagonal pairs carry no directional evidence and yield `None`.
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<Direction> {
        let (fx, fy) = from;
        let (tx, ty) = to;
        if fx == tx {
            if ty < fy {
                Some(Direction::Up)
            } else if ty > fy {
                Some(Direction::Down)
            } else {
                None
            }
        } else if fy == ty {
            if tx < fx {
                Some(Direction::Left)
            } else {
                Some(Direction::Right)
            }
        } else {
            None
        }
    }
}

/// Packed set of the four cardinal directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionSet {
    bits: u8,
}

impl DirectionSet {
    pub const fn new() -> Self {
        DirectionSet { bits: 0 }
    }

    #[inline]
    fn bit(dir: Direction) -> u8 {
        1 << dir as u8
    }

    pub fn insert(&mut self, dir: Direction) {
        self.bits |= Self::bit(dir);
    }

    pub fn contains(&self, dir: Direction) -> bool {
        self.bits & Self::bit(dir) != 0
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

/// True when `(x, y)` lies on the board.
pub fn in_bounds(x: i32, y: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&x) && (0..BOARD_SIZE as i32).contains(&y)
}

/// Errors returned by board and placement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Ship placement would extend past the board edge.
    ShipOutOfBounds,
    /// Ship placement overlaps an already placed ship.
    ShipOverlaps,
    /// Random placement exhausted its retry budget.
    UnableToPlaceShip,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::ShipOutOfBounds => write!(f, "ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "ship placement overlaps with another ship"),
            BoardError::UnableToPlaceShip => write!(f, "unable to place ship"),
        }
    }
}
