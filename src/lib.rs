#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod cellset;
mod common;
mod config;
mod density;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod ship;
mod shots;
mod targeting;

pub use board::*;
pub use cellset::CellSet;
pub use common::*;
pub use config::*;
pub use density::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use ship::*;
pub use shots::*;
pub use targeting::{Mode, Targeting};
