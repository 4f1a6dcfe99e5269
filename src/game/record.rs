//! Persistence snapshot of a game.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, FenError, GameStatus, Move};

use super::{Game, GameOptions};

/// Everything a storage adapter needs to rebuild a game.
///
/// `fen` is a full six-field FEN, so castling availability and a pending en
/// passant capture survive the round trip. Undo and redo stacks are not part
/// of the record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameRecord {
    pub fen: String,
    pub turn: Color,
    pub status: GameStatus,
    pub moves: Vec<Move>,
    pub half_move_clock: u32,
    pub full_move_number: u32,
}

impl Game {
    /// Export the persistent state.
    #[must_use]
    pub fn export_record(&self) -> GameRecord {
        GameRecord {
            fen: self.to_fen(),
            turn: self.turn(),
            status: self.status(),
            moves: self.history().to_vec(),
            half_move_clock: self.half_move_clock(),
            full_move_number: self.full_move_number(),
        }
    }

    /// Rebuild a game from a record with default options.
    pub fn from_record(record: &GameRecord) -> Result<Self, FenError> {
        Self::from_record_with_options(record, GameOptions::default())
    }

    /// Rebuild a game from a record.
    ///
    /// The record's turn, clocks and status win over what the FEN says, so
    /// resignations and agreed draws are restored as saved. Repetition
    /// counting restarts from the restored position.
    pub fn from_record_with_options(
        record: &GameRecord,
        options: GameOptions,
    ) -> Result<Self, FenError> {
        let parsed = Game::from_fen_with_options(&record.fen, options)?;
        let mut game = Game::from_parts(
            parsed.board,
            record.turn,
            record.half_move_clock,
            record.full_move_number,
            options,
        );
        game.status = record.status;
        game.history = record.moves.clone();
        game.origin = origin_of(record);
        Ok(game)
    }
}

/// Turn and move number before the first recorded ply.
fn origin_of(record: &GameRecord) -> (Color, u32) {
    let plies = record.moves.len() as u32;
    // Index of the current ply counting from White's first move of game 1.
    let black_offset = u32::from(record.turn == Color::Black);
    let current = (record.full_move_number.saturating_sub(1)) * 2 + black_offset;
    let first = current.saturating_sub(plies);
    let color = if first % 2 == 0 {
        Color::White
    } else {
        Color::Black
    };
    (color, first / 2 + 1)
}
