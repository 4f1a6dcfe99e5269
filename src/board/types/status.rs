//! Game status vocabulary.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// Where a game stands after the last completed ply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameStatus {
    #[default]
    Playing,
    Check,
    Checkmate,
    Stalemate,
    DrawByFiftyMoveRule,
    DrawByInsufficientMaterial,
    DrawByAgreement,
    DrawByRepetition,
    Resigned,
}

impl GameStatus {
    /// Returns true once no further moves are accepted.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing | GameStatus::Check)
    }

    /// Returns true for every drawn outcome, stalemate included.
    #[inline]
    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate
                | GameStatus::DrawByFiftyMoveRule
                | GameStatus::DrawByInsufficientMaterial
                | GameStatus::DrawByAgreement
                | GameStatus::DrawByRepetition
        )
    }

    /// Human-readable status line. `to_move` personalises the in-progress states.
    #[must_use]
    pub fn description(self, to_move: Option<Color>) -> String {
        match (self, to_move) {
            (GameStatus::Playing, Some(color)) => format!("Game in progress. {color}'s turn."),
            (GameStatus::Playing, None) => "Game in progress.".to_string(),
            (GameStatus::Check, Some(color)) => format!("Check! {color} is in check."),
            (GameStatus::Check, None) => "Check!".to_string(),
            (GameStatus::Checkmate, _) => "Checkmate! Game over.".to_string(),
            (GameStatus::Stalemate, _) => "Stalemate! Game is a draw.".to_string(),
            (GameStatus::DrawByFiftyMoveRule, _) => "Game drawn by fifty-move rule.".to_string(),
            (GameStatus::DrawByInsufficientMaterial, _) => {
                "Game drawn by insufficient material.".to_string()
            }
            (GameStatus::DrawByAgreement, _) => "Game drawn by agreement.".to_string(),
            (GameStatus::DrawByRepetition, _) => "Game drawn by repetition.".to_string(),
            (GameStatus::Resigned, _) => "Game over. A player has resigned.".to_string(),
        }
    }

    /// Stable snake_case name, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::DrawByFiftyMoveRule => "draw_by_fifty_move_rule",
            GameStatus::DrawByInsufficientMaterial => "draw_by_insufficient_material",
            GameStatus::DrawByAgreement => "draw_by_agreement",
            GameStatus::DrawByRepetition => "draw_by_repetition",
            GameStatus::Resigned => "resigned",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
