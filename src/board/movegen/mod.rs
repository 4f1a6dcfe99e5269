//! Pseudo-legal move generation, one file per movement pattern.
//!
//! Generation ignores whether the mover's king is left attacked; see
//! `legality.rs` for the filter. Castling is not generated here.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::types::{Piece, PieceKind, Position};
use super::Board;

impl Board {
    /// Destination squares the piece on `from` could reach by its movement
    /// rules alone. Empty if `from` is empty.
    #[must_use]
    pub fn possible_moves(&self, from: Position) -> Vec<Position> {
        match self.piece_at(from) {
            Some(piece) => self.piece_moves(piece),
            None => Vec::new(),
        }
    }

    /// Returns true if `target` is among the pseudo-legal destinations from `from`.
    #[must_use]
    pub fn can_move_to(&self, from: Position, target: Position) -> bool {
        self.possible_moves(from).contains(&target)
    }

    pub(crate) fn piece_moves(&self, piece: &Piece) -> Vec<Position> {
        match piece.kind() {
            PieceKind::Pawn => self.pawn_moves(piece),
            PieceKind::Knight => self.knight_moves(piece),
            PieceKind::Bishop => self.slide(piece, &sliders::BISHOP_DIRECTIONS),
            PieceKind::Rook => self.slide(piece, &sliders::ROOK_DIRECTIONS),
            PieceKind::Queen => self.slide(piece, &sliders::QUEEN_DIRECTIONS),
            PieceKind::King => self.king_moves(piece),
        }
    }

    /// Squares the piece attacks. Same as its moves, except pawns attack both
    /// forward diagonals whether or not anything stands there.
    pub(crate) fn piece_attacks(&self, piece: &Piece) -> Vec<Position> {
        match piece.kind() {
            PieceKind::Pawn => pawns::pawn_attacks(piece).collect(),
            _ => self.piece_moves(piece),
        }
    }

    /// Push `to` if it is empty or holds an enemy piece. Returns true if the
    /// square was empty, so rays can keep going.
    #[inline]
    fn push_if_reachable(&self, piece: &Piece, to: Position, out: &mut Vec<Position>) -> bool {
        match self.piece_at(to) {
            None => {
                out.push(to);
                true
            }
            Some(other) => {
                if other.color() != piece.color() {
                    out.push(to);
                }
                false
            }
        }
    }
}
