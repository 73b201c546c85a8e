//! Core board types: player identity and one player's side of the board.
//!
//! These types know nothing about turn order or win conditions; the `rules`
//! module orchestrates them.

pub mod player;
pub mod side;

pub use player::Player;
pub use side::{Side, PIT_COUNT, ROW_SIZE, SEED_START_VALUE, STORE_INDEX};
