//! Legal-move filtering: pseudo-legal moves that keep the mover's king safe.

use super::error::MoveError;
use super::types::{Color, Position};
use super::Board;

impl Board {
    /// Check that `color` may play `from -> to` as an ordinary move.
    ///
    /// Castling is validated separately by [`Board::check_castle`].
    /// Nothing is mutated; on success the move can be executed as is.
    ///
    /// The first failing check is reported, in this order: `NoPieceAtSource`,
    /// `WrongTurnOwnership`, `NoOpMove`, `SelfCapture`, `IllegalGeometry`,
    /// `SelfCheckExposure`.
    pub fn validate_move(&self, from: Position, to: Position, color: Color) -> Result<(), MoveError> {
        let piece = self
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtSource { square: from })?;
        if piece.color() != color {
            return Err(MoveError::WrongTurnOwnership { square: from });
        }
        if from == to {
            return Err(MoveError::NoOpMove { square: from });
        }
        // Generation never targets own pieces, so this must come first to be reported.
        if self.piece_at(to).is_some_and(|p| p.color() == color) {
            return Err(MoveError::SelfCapture { square: to });
        }
        if !self.piece_moves(piece).contains(&to) {
            return Err(MoveError::IllegalGeometry { from, to });
        }
        if self.would_expose_king_to_check(from, to, color) {
            return Err(MoveError::SelfCheckExposure { from, to });
        }
        Ok(())
    }

    /// Legal destinations for the piece on `pos`, castling excluded.
    #[must_use]
    pub fn legal_moves(&self, pos: Position) -> Vec<Position> {
        let Some(piece) = self.piece_at(pos) else {
            return Vec::new();
        };
        let color = piece.color();
        self.piece_moves(piece)
            .into_iter()
            .filter(|&to| !self.would_expose_king_to_check(pos, to, color))
            .collect()
    }

    /// Returns true if any piece of `color` has a legal move.
    #[must_use]
    pub fn has_legal_moves(&self, color: Color) -> bool {
        self.pieces(color)
            .any(|piece| !self.legal_moves(piece.position()).is_empty())
    }

    /// Number of legal (from, to) pairs for `color`, castling excluded and
    /// promotions counted once.
    #[must_use]
    pub fn legal_move_count(&self, color: Color) -> usize {
        self.pieces(color)
            .map(|piece| self.legal_moves(piece.position()).len())
            .sum()
    }
}
