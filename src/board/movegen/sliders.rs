use super::super::types::{Piece, Position};
use super::super::Board;

pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(super) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Ray-cast from the piece in each direction until the edge or a blocker.
    /// Enemy blockers are included (capture), own blockers are not.
    pub(super) fn slide(&self, piece: &Piece, directions: &[(i8, i8)]) -> Vec<Position> {
        let mut moves = Vec::with_capacity(14);
        for &(dc, dr) in directions {
            let mut current = piece.position();
            while let Some(next) = current.offset(dc, dr) {
                if !self.push_if_reachable(piece, next, &mut moves) {
                    break;
                }
                current = next;
            }
        }
        moves
    }
}
