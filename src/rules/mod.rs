//! Game orchestration: the turn state machine and outcome reporting.

pub mod game;

pub use game::{BoardSnapshot, Game, GameOutcome};
