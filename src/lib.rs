//! # mancala
//!
//! A rules engine for two-player Mancala, Kalah variant: six pits and one
//! store per side, four seeds per pit at the start.
//!
//! ## Design Principles
//!
//! 1. **Pure state machine**: No I/O, no randomness, no threads. A `Game`
//!    owns its two `Side`s and every mutation runs to completion before
//!    returning.
//!
//! 2. **Silent rejection**: Illegal pit choices (out of range, empty pit,
//!    game already over) leave the board untouched and return normally, so a
//!    driving loop can re-prompt without special-casing failures.
//!
//! 3. **Seeds are conserved**: After construction, seeds only move between
//!    pits and stores. Debug builds assert conservation on every turn.
//!
//! ## Modules
//!
//! - `core`: `Player` identity and `Side` (one player's pits + store)
//! - `rules`: the `Game` orchestrator and outcome reporting
//! - `render`: presentation-only text rendering of the board

pub mod core;
pub mod rules;
pub mod render;

// Re-export commonly used types
pub use crate::core::{Player, Side, PIT_COUNT, ROW_SIZE, SEED_START_VALUE, STORE_INDEX};
pub use crate::rules::{BoardSnapshot, Game, GameOutcome};
