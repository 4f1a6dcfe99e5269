//! Per-game rule configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Half-moves without a pawn move or capture before the game is drawn.
pub const DEFAULT_FIFTY_MOVE_LIMIT: u32 = 100;
/// Occurrences of one position before the game is drawn.
pub const DEFAULT_REPETITION_LIMIT: u32 = 3;

/// Rules a [`crate::Game`] applies on top of the move rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameOptions {
    /// Draw once the half-move clock reaches this value.
    pub fifty_move_limit: u32,
    /// Draw once the current position has occurred this many times;
    /// `None` turns repetition detection off.
    pub repetition_limit: Option<u32>,
    /// Draw when neither side can possibly mate.
    pub insufficient_material: bool,
    /// Maximum number of plies that can be undone; oldest dropped first.
    pub history_limit: Option<usize>,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            fifty_move_limit: DEFAULT_FIFTY_MOVE_LIMIT,
            repetition_limit: Some(DEFAULT_REPETITION_LIMIT),
            insufficient_material: true,
            history_limit: None,
        }
    }
}

impl GameOptions {
    /// Only checkmate and stalemate end the game. Used for move-tree counting.
    #[must_use]
    pub const fn rules_only() -> Self {
        GameOptions {
            fifty_move_limit: u32::MAX,
            repetition_limit: None,
            insufficient_material: false,
            history_limit: None,
        }
    }

    #[must_use]
    pub const fn fifty_move_limit(mut self, half_moves: u32) -> Self {
        self.fifty_move_limit = half_moves;
        self
    }

    #[must_use]
    pub const fn repetition_limit(mut self, limit: Option<u32>) -> Self {
        self.repetition_limit = limit;
        self
    }

    #[must_use]
    pub const fn insufficient_material(mut self, enabled: bool) -> Self {
        self.insufficient_material = enabled;
        self
    }

    #[must_use]
    pub const fn history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }
}
