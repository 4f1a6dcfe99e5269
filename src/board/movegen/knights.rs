use super::super::types::{Piece, Position};
use super::super::Board;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

impl Board {
    pub(super) fn knight_moves(&self, piece: &Piece) -> Vec<Position> {
        let mut moves = Vec::with_capacity(8);
        for (dc, dr) in KNIGHT_OFFSETS {
            if let Some(to) = piece.position().offset(dc, dr) {
                self.push_if_reachable(piece, to, &mut moves);
            }
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_center_and_corner() {
        let board = Board::from_fen("4k3/8/8/8/3N4/8/8/N3K3").unwrap();
        let center = board.piece_at(Position::at(3, 3)).unwrap();
        assert_eq!(board.knight_moves(center).len(), 8);
        let corner = board.piece_at(Position::at(0, 0)).unwrap();
        assert_eq!(board.knight_moves(corner).len(), 2);
    }

    #[test]
    fn test_knight_skips_own_pieces() {
        let board = Board::new();
        let knight = board.piece_at(Position::at(6, 0)).unwrap();
        let moves = board.knight_moves(knight);
        assert_eq!(moves.len(), 2);
        assert!(!moves.contains(&Position::at(4, 1)));
    }
}
