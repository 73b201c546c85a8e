//! Presentation-only text rendering of the board.
//!
//! Nothing here is part of the core contract: rendering consumes the
//! read-only snapshot and never mutates live state. Player Two's pits are
//! shown reversed on the top line so the two rows read as one loop around
//! the board, with both stores on the outer columns.

use std::fmt;

use crate::core::{Player, STORE_INDEX};
use crate::rules::{Game, GameOutcome};

impl fmt::Display for Game {
    /// Fixed board layout:
    ///
    /// ```text
    /// ---------------------------
    /// |   | 4| 4| 4| 4| 4| 4|   |
    /// |  0|=================|  0|
    /// |   | 4| 4| 4| 4| 4| 4|   |
    /// ---------------------------
    /// ```
    ///
    /// Top line: Player Two's pits 6..1. Middle line: Player Two's store
    /// left, Player One's store right. Bottom line: Player One's pits 1..6.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot();
        let one = snapshot.one;
        let two = snapshot.two;

        writeln!(f, "---------------------------")?;
        writeln!(
            f,
            "|   |{:2}|{:2}|{:2}|{:2}|{:2}|{:2}|   |",
            two[5], two[4], two[3], two[2], two[1], two[0]
        )?;
        writeln!(
            f,
            "|{:3}|=================|{:3}|",
            two[STORE_INDEX], one[STORE_INDEX]
        )?;
        writeln!(
            f,
            "|   |{:2}|{:2}|{:2}|{:2}|{:2}|{:2}|   |",
            one[0], one[1], one[2], one[3], one[4], one[5]
        )?;
        write!(f, "---------------------------")
    }
}

impl Game {
    /// Human-readable one-line status: whose turn it is, or the final
    /// result once the game is finished. A drawn game reports both scores
    /// without declaring a winner.
    #[must_use]
    pub fn status_message(&self) -> String {
        let snapshot = self.snapshot();
        let one = snapshot.one[STORE_INDEX];
        let two = snapshot.two[STORE_INDEX];
        match self.outcome() {
            None => format!("Player {}'s turn.", self.current_player()),
            Some(GameOutcome::Winner(Player::One)) => {
                format!("Player One has won, {one} to {two}.")
            }
            Some(GameOutcome::Winner(Player::Two)) => {
                format!("Player Two has won, {two} to {one}.")
            }
            Some(GameOutcome::Draw) => format!("The game is a draw, {one} to {two}."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board_layout() {
        let game = Game::new();
        let expected = "---------------------------\n\
                        |   | 4| 4| 4| 4| 4| 4|   |\n\
                        |  0|=================|  0|\n\
                        |   | 4| 4| 4| 4| 4| 4|   |\n\
                        ---------------------------";
        assert_eq!(game.to_string(), expected);
    }

    #[test]
    fn test_two_row_reads_right_to_left() {
        let game = Game::from_rows([4, 4, 4, 4, 4, 4, 1], [9, 2, 3, 4, 5, 6, 7], Player::Two);
        let rendered = game.to_string();
        let top = rendered.lines().nth(1).unwrap();
        assert_eq!(top, "|   | 6| 5| 4| 3| 2| 9|   |");
        let middle = rendered.lines().nth(2).unwrap();
        assert_eq!(middle, "|  7|=================|  1|");
    }

    #[test]
    fn test_status_messages() {
        let game = Game::new();
        assert_eq!(game.status_message(), "Player One's turn.");

        let won = Game::from_rows([0, 0, 0, 0, 0, 0, 30], [0, 0, 0, 0, 0, 0, 18], Player::Two);
        assert_eq!(won.status_message(), "Player One has won, 30 to 18.");

        let drawn = Game::from_rows([0, 0, 0, 0, 0, 0, 24], [0, 0, 0, 0, 0, 0, 24], Player::One);
        assert_eq!(drawn.status_message(), "The game is a draw, 24 to 24.");
    }
}
