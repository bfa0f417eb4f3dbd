//! A packed set of board cells stored in a single `u128`.
//!
//! One bit per cell of the 10×10 grid, indexed `y * 10 + x`. `no_std`
//! friendly and copyable; used for occupancy masks, shot history and
//! issued-cell bookkeeping.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign, Not};

use crate::config::BOARD_SIZE;

const CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// A set of `(x, y)` cells on the board.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct CellSet {
    bits: u128,
}

impl CellSet {
    const MASK: u128 = (1u128 << CELLS) - 1;

    /// Empty set.
    pub const fn new() -> Self {
        CellSet { bits: 0 }
    }

    #[inline]
    fn index(x: usize, y: usize) -> Option<usize> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Some(y * BOARD_SIZE + x)
        } else {
            None
        }
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Membership test; out-of-range coordinates are simply absent.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        match Self::index(x, y) {
            Some(i) => self.bits >> i & 1 != 0,
            None => false,
        }
    }

    /// Insert `(x, y)`. Out-of-range coordinates are ignored.
    pub fn insert(&mut self, x: usize, y: usize) {
        if let Some(i) = Self::index(x, y) {
            self.bits |= 1 << i;
        }
    }

    /// Remove `(x, y)` if present.
    pub fn remove(&mut self, x: usize, y: usize) {
        if let Some(i) = Self::index(x, y) {
            self.bits &= !(1 << i);
        }
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Iterator over the cells of the set in `y * 10 + x` order.
    pub fn iter(&self) -> Cells {
        Cells { bits: self.bits, idx: 0 }
    }
}

impl FromIterator<(usize, usize)> for CellSet {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        let mut set = CellSet::new();
        for (x, y) in iter {
            set.insert(x, y);
        }
        set
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet:")?;
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let bit = if self.contains(x, y) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl BitAnd for CellSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellSet { bits: self.bits & rhs.bits }
    }
}

impl BitOr for CellSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellSet { bits: self.bits | rhs.bits }
    }
}

impl BitOrAssign for CellSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl Not for CellSet {
    type Output = Self;
    fn not(self) -> Self {
        CellSet { bits: !self.bits & Self::MASK }
    }
}

/// Iterator over the cells of a [`CellSet`].
#[derive(Clone, Copy)]
pub struct Cells {
    bits: u128,
    idx: usize,
}

impl Iterator for Cells {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < CELLS {
            let idx = self.idx;
            self.idx += 1;
            if self.bits >> idx & 1 != 0 {
                return Some((idx % BOARD_SIZE, idx / BOARD_SIZE));
            }
        }
        None
    }
}
