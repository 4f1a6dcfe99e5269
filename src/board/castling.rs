//! Castling legality.
//!
//! The fixed squares live in `types::castling`; execution lives with the game,
//! which moves king and rook as one ply.

use super::error::{CastlingBlock, MoveError};
use super::types::castling::{king_origin, king_path, rook_origin, squares_between};
use super::types::{CastlingSide, Color, PieceKind, Position};
use super::Board;

impl Board {
    /// Returns true if `color` may castle on `side` right now.
    #[must_use]
    pub fn can_castle(&self, color: Color, side: CastlingSide) -> bool {
        self.check_castle(color, side).is_ok()
    }

    /// Check the five castling preconditions in order, reporting the first
    /// one that fails.
    pub fn check_castle(&self, color: Color, side: CastlingSide) -> Result<(), MoveError> {
        let blocked = |reason| MoveError::CastlingBlocked { side, reason };

        let king_square = king_origin(color);
        let king_ready = self
            .piece_at(king_square)
            .is_some_and(|k| k.is(PieceKind::King, color) && !k.has_moved());
        if !king_ready {
            return Err(blocked(CastlingBlock::KingMissingOrMoved));
        }

        if self.is_king_in_check(color) {
            return Err(blocked(CastlingBlock::KingInCheck));
        }

        let rook_ready = self
            .piece_at(rook_origin(color, side))
            .is_some_and(|r| r.is(PieceKind::Rook, color) && !r.has_moved());
        if !rook_ready {
            return Err(blocked(CastlingBlock::RookMissingOrMoved));
        }

        if squares_between(color, side).any(|pos| !self.is_empty(pos)) {
            return Err(blocked(CastlingBlock::PathObstructed));
        }

        let opponent = color.opponent();
        for step in king_path(color, side) {
            let mut trial = self.clone();
            trial.move_piece(king_square, step);
            if trial.is_position_under_attack(step, opponent) {
                return Err(blocked(CastlingBlock::PathAttacked));
            }
        }

        Ok(())
    }

    /// Castling availability as FEN records it: king and rook both unmoved on
    /// their home squares, regardless of checks or blockers.
    #[must_use]
    pub fn has_castling_right(&self, color: Color, side: CastlingSide) -> bool {
        let unmoved = |pos: Position, kind: PieceKind| {
            self.piece_at(pos)
                .is_some_and(|p| p.is(kind, color) && !p.has_moved())
        };
        unmoved(king_origin(color), PieceKind::King)
            && unmoved(rook_origin(color, side), PieceKind::Rook)
    }

    /// Sides on which `color` may castle now.
    #[must_use]
    pub fn castling_options(&self, color: Color) -> Vec<CastlingSide> {
        CastlingSide::BOTH
            .into_iter()
            .filter(|&side| self.can_castle(color, side))
            .collect()
    }
}
