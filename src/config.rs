use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Placement attempts per ship before `place_ships` gives up.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Multi-hit attacks allotted to a side at game start.
pub const MULTI_HIT_BUDGET: u8 = 2;

/// Opponent difficulty tier. Selects both the hunting sophistication and
/// the multi-hit schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Difficulty {
    /// Whether the deterministic schedule calls for a multi-hit attack on
    /// `turn` given the current `budget`. Easy fires its first allotted
    /// attack immediately and never the second; hard fires both, on turns
    /// 3 and 6. Never fires on an empty budget.
    pub fn multi_hit_due(&self, turn: u32, budget: u8) -> bool {
        if budget == 0 {
            return false;
        }
        match self {
            Difficulty::Easy => budget == MULTI_HIT_BUDGET && turn == 1,
            Difficulty::Hard => (budget == 2 && turn == 3) || (budget == 1 && turn == 6),
        }
    }
}
