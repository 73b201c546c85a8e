//! One player's side of the board: six pits and one store.
//!
//! A `Side` only mutates its own seed counts; it has no knowledge of the
//! opponent or of turn order. The one subtlety it owns is the dual sowing
//! mode: when the row belongs to the player whose turn it is, sowing wraps
//! through all seven slots (store included); when the row is being crossed
//! as the *opponent's* board, the store is skipped and sowing wraps through
//! the six pits only. Sowing always skips the opponent's store, never your
//! own.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Number of seed-holding pits per side.
pub const PIT_COUNT: usize = 6;

/// Slots per side: six pits plus the store.
pub const ROW_SIZE: usize = 7;

/// Index of the store within a side's row. `row[STORE_INDEX]` is the store.
pub const STORE_INDEX: usize = 6;

/// Seeds in each pit at the start of a game.
pub const SEED_START_VALUE: u8 = 4;

/// One player's row of pits and store.
///
/// `row[0..6]` are the pits in sowing order (`row[0]` receives the first
/// seed of a pass across this side); `row[6]` is the store. `cursor` tracks
/// the slot touched by the most recent collection or seed placement, which
/// lets sowing resume across calls within a single turn and lets the
/// orchestrator ask where the last seed landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    owner: Player,
    row: [u8; ROW_SIZE],
    cursor: usize,
}

impl Side {
    /// Create a side with every pit preloaded and an empty store.
    #[must_use]
    pub fn new(owner: Player) -> Self {
        let mut row = [SEED_START_VALUE; ROW_SIZE];
        row[STORE_INDEX] = 0;
        Self { owner, row, cursor: 0 }
    }

    /// Create a side from an explicit row, store last.
    #[must_use]
    pub fn from_row(owner: Player, row: [u8; ROW_SIZE]) -> Self {
        Self { owner, row, cursor: 0 }
    }

    /// Whether `index` names a pit the owner may select: in range and
    /// currently non-empty. The store is never selectable.
    #[must_use]
    pub fn is_selectable_pit(&self, index: usize) -> bool {
        index < PIT_COUNT && self.row[index] != 0
    }

    /// Empty the chosen pit and return the seeds it held.
    ///
    /// Records `index` as the cursor so a following `sow_into` on this side
    /// resumes from the emptied pit. An already-empty pit yields 0 rather
    /// than an error; callers validate with [`Self::is_selectable_pit`]
    /// before treating this as a move.
    pub fn collect_from_pit(&mut self, index: usize) -> u8 {
        self.cursor = index;
        std::mem::take(&mut self.row[self.cursor])
    }

    /// Place `seeds` one at a time into successive slots.
    ///
    /// `own_turn == true`: this row belongs to the player sowing, so the
    /// walk continues from the current cursor and wraps through all seven
    /// slots, store included.
    ///
    /// `own_turn == false`: this row is being crossed as the opponent's
    /// board, so the walk starts at pit 0 and wraps through the six pits
    /// only, skipping the store.
    ///
    /// Either way the cursor ends on the slot that received the final seed.
    pub fn sow_into(&mut self, own_turn: bool, seeds: u8) {
        if own_turn {
            for _ in 0..seeds {
                self.cursor = (self.cursor + 1) % ROW_SIZE;
                self.row[self.cursor] += 1;
            }
        } else {
            self.cursor = PIT_COUNT - 1;
            for _ in 0..seeds {
                self.cursor = (self.cursor + 1) % PIT_COUNT;
                self.row[self.cursor] += 1;
            }
        }
    }

    /// Move every remaining pit seed into the store. Used once, at game end.
    pub fn sweep_pits_to_store(&mut self) {
        let total = self.seeds_in_pits();
        for pit in &mut self.row[..PIT_COUNT] {
            *pit = 0;
        }
        self.add_to_store(total);
    }

    /// Credit `seeds` directly to the store (capture credit).
    pub fn add_to_store(&mut self, seeds: u8) {
        self.row[STORE_INDEX] += seeds;
    }

    /// The player who owns this side.
    #[must_use]
    pub const fn owner(&self) -> Player {
        self.owner
    }

    /// Copy of the full row, pits first, store last.
    #[must_use]
    pub const fn row(&self) -> [u8; ROW_SIZE] {
        self.row
    }

    /// Slot touched by the most recent collection or seed placement.
    #[must_use]
    pub const fn last_action_index(&self) -> usize {
        self.cursor
    }

    /// Seed count of a pit, or `None` when `index` is not a pit.
    #[must_use]
    pub fn pit_count(&self, index: usize) -> Option<u8> {
        self.row[..PIT_COUNT].get(index).copied()
    }

    /// Seeds banked in the store.
    #[must_use]
    pub const fn store_count(&self) -> u8 {
        self.row[STORE_INDEX]
    }

    /// Total seeds across the six pits, excluding the store.
    #[must_use]
    pub fn seeds_in_pits(&self) -> u8 {
        self.row[..PIT_COUNT].iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_side_is_preloaded() {
        let side = Side::new(Player::One);
        assert_eq!(side.row(), [4, 4, 4, 4, 4, 4, 0]);
        assert_eq!(side.seeds_in_pits(), 24);
        assert_eq!(side.store_count(), 0);
        assert_eq!(side.owner(), Player::One);
    }

    #[test]
    fn test_selectable_pits() {
        let mut side = Side::new(Player::One);
        for i in 0..PIT_COUNT {
            assert!(side.is_selectable_pit(i));
        }
        assert!(!side.is_selectable_pit(STORE_INDEX));
        assert!(!side.is_selectable_pit(99));

        side.collect_from_pit(2);
        assert!(!side.is_selectable_pit(2));
    }

    #[test]
    fn test_collect_drains_and_records_cursor() {
        let mut side = Side::new(Player::Two);
        assert_eq!(side.collect_from_pit(3), 4);
        assert_eq!(side.pit_count(3), Some(0));
        assert_eq!(side.last_action_index(), 3);

        // Idempotent on an already-empty pit.
        assert_eq!(side.collect_from_pit(3), 0);
    }

    #[test]
    fn test_sow_own_turn_includes_store_and_wraps() {
        let mut side = Side::new(Player::One);
        side.collect_from_pit(4);
        // Two seeds: pit 5, then the store.
        side.sow_into(true, 2);
        assert_eq!(side.row(), [4, 4, 4, 4, 0, 5, 1]);
        assert_eq!(side.last_action_index(), STORE_INDEX);

        // Continuing wraps past the store back to pit 0.
        side.sow_into(true, 2);
        assert_eq!(side.row(), [5, 5, 4, 4, 0, 5, 1]);
        assert_eq!(side.last_action_index(), 1);
    }

    #[test]
    fn test_sow_as_opponent_skips_store() {
        let mut side = Side::new(Player::Two);
        side.sow_into(false, 6);
        assert_eq!(side.row(), [5, 5, 5, 5, 5, 5, 0]);
        assert_eq!(side.last_action_index(), 5);

        // A fresh crossing restarts at pit 0.
        side.sow_into(false, 2);
        assert_eq!(side.row(), [6, 6, 5, 5, 5, 5, 0]);
        assert_eq!(side.last_action_index(), 1);
    }

    #[test]
    fn test_sweep_moves_everything_to_store() {
        let mut side = Side::from_row(Player::One, [1, 0, 3, 0, 2, 6, 5]);
        side.sweep_pits_to_store();
        assert_eq!(side.row(), [0, 0, 0, 0, 0, 0, 17]);
        assert_eq!(side.seeds_in_pits(), 0);
    }

    #[test]
    fn test_pit_count_rejects_store_and_out_of_range() {
        let side = Side::new(Player::One);
        assert_eq!(side.pit_count(0), Some(4));
        assert_eq!(side.pit_count(5), Some(4));
        assert_eq!(side.pit_count(STORE_INDEX), None);
        assert_eq!(side.pit_count(100), None);
    }
}
