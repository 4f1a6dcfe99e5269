use super::super::types::{Piece, Position};
use super::super::Board;

const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

impl Board {
    /// One step in each direction. Castling is handled in `castling.rs`.
    pub(super) fn king_moves(&self, piece: &Piece) -> Vec<Position> {
        let mut moves = Vec::with_capacity(8);
        for (dc, dr) in KING_OFFSETS {
            if let Some(to) = piece.position().offset(dc, dr) {
                self.push_if_reachable(piece, to, &mut moves);
            }
        }
        moves
    }
}
