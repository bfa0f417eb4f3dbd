//! AI-vs-AI match driver used by the simulator and integration tests.

use rand::Rng;

use crate::common::{AttackResult, BoardError, ShotResult};
use crate::config::Difficulty;
use crate::player::{cross_cells, AiPlayer, Move};

/// Which side a result refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    One,
    Two,
}

/// Final report of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchReport {
    pub winner: Side,
    /// Total decisions taken across both sides.
    pub turns: u32,
}

/// Two opponents driven against each other until one fleet is gone.
pub struct Match {
    players: [AiPlayer; 2],
}

impl Match {
    pub fn new(difficulty: Difficulty) -> Self {
        Match {
            players: [AiPlayer::new(difficulty), AiPlayer::new(difficulty)],
        }
    }

    pub fn players(&self) -> &[AiPlayer; 2] {
        &self.players
    }

    /// Place both fleets.
    pub fn setup<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for player in self.players.iter_mut() {
            player.place_ships(rng)?;
        }
        Ok(())
    }

    /// Alternate turns until one side's fleet is sunk.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> MatchReport {
        let mut turns = 0u32;
        loop {
            for attacker in [0usize, 1] {
                turns += 1;
                self.play_turn(attacker, rng);
                if self.players[1 - attacker].board().all_ships_sunk() {
                    let winner = if attacker == 0 { Side::One } else { Side::Two };
                    return MatchReport { winner, turns };
                }
            }
        }
    }

    /// One attacker decision, applied to the defender's board and fed
    /// back through the attacker's strategy. A multi-hit decision lands
    /// on every template cell the attacker has not already resolved.
    fn play_turn<R: Rng + ?Sized>(&mut self, attacker: usize, rng: &mut R) {
        let (att, def) = self.pair_mut(attacker);
        match att.next_move(rng) {
            Move::Shot(x, y) => Self::resolve(att, def, x, y),
            Move::MultiHit(cx, cy) => {
                for (x, y) in cross_cells(cx, cy) {
                    if att.has_attacked(x, y) {
                        continue;
                    }
                    Self::resolve(att, def, x, y);
                }
            }
        }
    }

    fn pair_mut(&mut self, attacker: usize) -> (&mut AiPlayer, &mut AiPlayer) {
        let (left, right) = self.players.split_at_mut(1);
        if attacker == 0 {
            (&mut left[0], &mut right[0])
        } else {
            (&mut right[0], &mut left[0])
        }
    }

    fn resolve(att: &mut AiPlayer, def: &mut AiPlayer, x: usize, y: usize) {
        let result = match def.board_mut().receive_attack(x as i32, y as i32) {
            AttackResult::Miss => ShotResult::Miss,
            AttackResult::Hit => match def.board().ship_at(x, y) {
                Some(ship) if ship.is_sunk() => ShotResult::Sunk { length: ship.length() },
                _ => ShotResult::Hit,
            },
        };
        att.update_strategy(result, x, y);
    }
}
