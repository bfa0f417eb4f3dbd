//! Ship definitions and per-ship hit tracking.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship tracking which of its segments have been hit and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    kind: ShipType,
    hits: Vec<bool>,
    hit_coordinates: Vec<(usize, usize)>,
}

impl Ship {
    /// Create an undamaged ship of the given type.
    pub fn new(kind: ShipType) -> Self {
        Ship {
            kind,
            hits: vec![false; kind.length()],
            hit_coordinates: Vec::new(),
        }
    }

    pub fn kind(&self) -> ShipType {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn length(&self) -> usize {
        self.kind.length()
    }

    /// Segment hit flags, index 0 at the ship's origin.
    pub fn hits(&self) -> &[bool] {
        &self.hits
    }

    /// Board coordinates of every registered hit, in order.
    pub fn hit_coordinates(&self) -> &[(usize, usize)] {
        &self.hit_coordinates
    }

    /// Register a hit on segment `index` at board coordinate `(x, y)`.
    /// Returns `false` (and changes nothing) when the index is out of
    /// range. A repeated index never raises the hit count past `length`.
    pub fn register_hit(&mut self, index: usize, x: usize, y: usize) -> bool {
        if index >= self.kind.length() {
            return false;
        }
        self.hits[index] = true;
        self.hit_coordinates.push((x, y));
        true
    }

    /// A ship is sunk once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|&hit| hit)
    }
}
