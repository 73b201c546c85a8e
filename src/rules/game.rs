//! The `Game` state machine.
//!
//! A turn flows one direction: the orchestrator maps a 1-based pit label to
//! an index, asks the active side to empty that pit, distributes the
//! collected seeds around the board in strict sequential order (the active
//! row store-inclusive, the waiting row store-exclusive, alternating until
//! the seeds run out), then resolves the landing slot into one of three
//! outcomes: extra turn, capture, or switch. The end condition — either
//! side out of pit seeds — triggers a final sweep of both rows into their
//! own stores, after which the game is finished and every further turn
//! request is a no-op.

use serde::{Deserialize, Serialize};

use crate::core::{Player, Side, PIT_COUNT, ROW_SIZE, STORE_INDEX};

/// Result of a finished game.
///
/// A tie is reported explicitly rather than awarding one side by comparison
/// default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The player with the higher store count.
    Winner(Player),
    /// Equal store counts.
    Draw,
}

/// Read-only copy of both rows, safe to render or inspect without touching
/// live state. Each row holds the six pits in order followed by the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub one: [u8; ROW_SIZE],
    pub two: [u8; ROW_SIZE],
}

impl BoardSnapshot {
    /// Row for the given player.
    #[must_use]
    pub const fn row(&self, player: Player) -> [u8; ROW_SIZE] {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }
}

/// A game of Mancala: two sides, whose turn it is, and whether the end
/// condition has been reached.
///
/// `sides` is fixed in `[Player::One, Player::Two]` order for the whole
/// game; turn switching swaps the `active` index, never the sides
/// themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    sides: [Side; 2],
    active: usize,
    finished: bool,
}

impl Game {
    /// Start a fresh game: four seeds in every pit, Player One to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sides: [Side::new(Player::One), Side::new(Player::Two)],
            active: Player::One.index(),
            finished: false,
        }
    }

    /// Construct a mid-game position from explicit rows (store last) with
    /// `to_move` as the active player.
    ///
    /// If either row already has no pit seeds the end condition holds, so
    /// the sweep is applied immediately and the game starts finished.
    #[must_use]
    pub fn from_rows(one: [u8; ROW_SIZE], two: [u8; ROW_SIZE], to_move: Player) -> Self {
        let mut game = Self {
            sides: [
                Side::from_row(Player::One, one),
                Side::from_row(Player::Two, two),
            ],
            active: to_move.index(),
            finished: false,
        };
        if game.end_condition_met() {
            game.finish();
        }
        game
    }

    /// Play one turn for the active player.
    ///
    /// `pit_number` is the 1-based pit label (1..=6). An invalid choice —
    /// label out of range, chosen pit empty, or game already finished —
    /// leaves the board and the turn order untouched. A valid choice runs
    /// to completion: collect, sow, then resolve the landing into an extra
    /// turn, a capture, or a switch, sweeping both rows if the end
    /// condition is met.
    pub fn perform_turn(&mut self, pit_number: i32) {
        if self.finished {
            return;
        }
        let Some(index) = pit_index(pit_number) else {
            return;
        };
        if !self.sides[self.active].is_selectable_pit(index) {
            return;
        }

        let before = self.total_seeds();
        let seeds = self.sides[self.active].collect_from_pit(index);
        let landed_on = self.sow_seeds(index, seeds);

        if landed_on == self.current_player() {
            self.resolve_landing_on_active_side();
        } else {
            self.resolve_landing_on_waiting_side();
        }
        debug_assert_eq!(self.total_seeds(), before, "seeds created or destroyed");
    }

    /// Distribute `seeds` starting just past pit `index` on the active
    /// side, alternating rows as each runs out, and report which player's
    /// row received the final seed.
    ///
    /// The first batch runs from the sown pit to the active store; after
    /// that, full or partial passes alternate between the waiting row
    /// (capped at six, store skipped) and the active row (capped at seven,
    /// store included).
    fn sow_seeds(&mut self, index: usize, mut seeds: u8) -> Player {
        let to_own_store = (STORE_INDEX - index) as u8;
        if seeds <= to_own_store {
            self.sides[self.active].sow_into(true, seeds);
            return self.current_player();
        }
        self.sides[self.active].sow_into(true, to_own_store);
        seeds -= to_own_store;

        let mut landed_on = self.current_player();
        let mut crossing_waiting_row = true;
        while seeds > 0 {
            if crossing_waiting_row {
                let batch = seeds.min(PIT_COUNT as u8);
                self.sides[self.waiting()].sow_into(false, batch);
                landed_on = self.waiting_player();
                seeds -= batch;
            } else {
                let batch = seeds.min(ROW_SIZE as u8);
                self.sides[self.active].sow_into(true, batch);
                landed_on = self.current_player();
                seeds -= batch;
            }
            crossing_waiting_row = !crossing_waiting_row;
        }
        landed_on
    }

    /// Final seed landed on the active player's row: store means an extra
    /// turn, a previously-empty pit means a capture, anything else switches.
    fn resolve_landing_on_active_side(&mut self) {
        let landed = self.sides[self.active].last_action_index();

        if landed == STORE_INDEX {
            // Extra turn. The sweep still fires if the sown pit was the
            // active side's last seeds.
            if self.end_condition_met() {
                self.finish();
            }
            return;
        }

        if self.sides[self.active].pit_count(landed) == Some(1) {
            self.capture(landed);
            if self.end_condition_met() {
                self.finish();
            } else {
                self.switch_turns();
            }
            return;
        }

        self.switch_turns();
    }

    /// Final seed landed on the waiting player's row: no capture is
    /// possible there, just check the end condition and switch.
    fn resolve_landing_on_waiting_side(&mut self) {
        if self.end_condition_met() {
            self.finish();
        } else {
            self.switch_turns();
        }
    }

    /// Move the landing seed plus the waiting player's mirror pit into the
    /// active store. Both source pits end empty.
    fn capture(&mut self, landed: usize) {
        let mirror = PIT_COUNT - 1 - landed;
        let mut captured = self.sides[self.active].collect_from_pit(landed);
        captured += self.sides[self.waiting()].collect_from_pit(mirror);
        self.sides[self.active].add_to_store(captured);
    }

    fn end_condition_met(&self) -> bool {
        self.sides.iter().any(|side| side.seeds_in_pits() == 0)
    }

    /// Sweep both rows into their own stores and enter the absorbing
    /// `Finished` state.
    fn finish(&mut self) {
        for side in &mut self.sides {
            side.sweep_pits_to_store();
        }
        self.finished = true;
    }

    fn switch_turns(&mut self) {
        self.active ^= 1;
    }

    fn waiting(&self) -> usize {
        self.active ^ 1
    }

    fn total_seeds(&self) -> u32 {
        self.sides
            .iter()
            .map(|side| u32::from(side.seeds_in_pits()) + u32::from(side.store_count()))
            .sum()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.sides[self.active].owner()
    }

    /// The player whose turn is next.
    #[must_use]
    pub fn waiting_player(&self) -> Player {
        self.sides[self.waiting()].owner()
    }

    /// Whether the end condition has been reached and the sweep performed.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// 1-based pit labels the active player may legally choose. Empty once
    /// the game is finished.
    #[must_use]
    pub fn selectable_pits(&self) -> Vec<i32> {
        if self.finished {
            return Vec::new();
        }
        (0..PIT_COUNT)
            .filter(|&i| self.sides[self.active].is_selectable_pit(i))
            .map(|i| i as i32 + 1)
            .collect()
    }

    /// Read-only copy of both rows in fixed player order.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            one: self.sides[Player::One.index()].row(),
            two: self.sides[Player::Two.index()].row(),
        }
    }

    /// Result of the game, or `None` while it is still in progress.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.finished {
            return None;
        }
        let one = self.sides[Player::One.index()].store_count();
        let two = self.sides[Player::Two.index()].store_count();
        Some(match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(Player::One),
            std::cmp::Ordering::Less => GameOutcome::Winner(Player::Two),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a 1-based pit label to a 0-based index, rejecting out-of-range
/// labels before any mutation can occur.
fn pit_index(pit_number: i32) -> Option<usize> {
    if (1..=PIT_COUNT as i32).contains(&pit_number) {
        Some(pit_number as usize - 1)
    } else {
        None
    }
}
