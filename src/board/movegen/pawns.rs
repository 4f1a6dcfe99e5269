use super::super::types::{Piece, PieceKind, Position};
use super::super::Board;

/// Both forward diagonals of a pawn, on-board only.
pub(super) fn pawn_attacks(piece: &Piece) -> impl Iterator<Item = Position> {
    let dir = piece.color().pawn_direction();
    let from = piece.position();
    [-1, 1]
        .into_iter()
        .filter_map(move |dc| from.offset(dc, dir))
}

impl Board {
    /// Pushes, double pushes from an unmoved pawn, diagonal captures and en
    /// passant onto the square behind a pawn that just double-stepped.
    ///
    /// Reaching the last rank is reported as a plain destination; what the
    /// pawn becomes is decided at execution time.
    pub(super) fn pawn_moves(&self, piece: &Piece) -> Vec<Position> {
        let mut moves = Vec::with_capacity(4);
        let from = piece.position();
        let dir = piece.color().pawn_direction();

        if let Some(one) = from.offset(0, dir) {
            if self.is_empty(one) {
                moves.push(one);
                if !piece.has_moved() {
                    if let Some(two) = one.offset(0, dir) {
                        if self.is_empty(two) {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        for to in pawn_attacks(piece) {
            if self.is_opponent_piece(to, piece.color()) {
                moves.push(to);
                continue;
            }
            let beside = Position::at(to.col(), from.row());
            let en_passant = self.is_empty(to)
                && self.piece_at(beside).is_some_and(|victim| {
                    victim.kind() == PieceKind::Pawn
                        && victim.color() != piece.color()
                        && victim.just_moved_two_squares()
                });
            if en_passant {
                moves.push(to);
            }
        }

        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn pawn_moves_at(board: &Board, at: &str) -> Vec<String> {
        let pawn = board.piece_at(sq(at)).unwrap();
        let mut moves = board.pawn_moves(pawn);
        moves.sort();
        moves.into_iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_single_and_double_push() {
        let board = Board::new();
        assert_eq!(pawn_moves_at(&board, "d2"), ["d3", "d4"]);
        assert_eq!(pawn_moves_at(&board, "d7"), ["d5", "d6"]);
    }

    #[test]
    fn test_moved_pawn_has_no_double_push() {
        let board = Board::from_fen("4k3/8/8/8/8/3P4/8/4K3").unwrap();
        assert_eq!(pawn_moves_at(&board, "d3"), ["d4"]);
    }

    #[test]
    fn test_blocked_pawn() {
        let board = Board::from_fen("4k3/8/8/8/8/3n4/3P4/4K3").unwrap();
        assert!(pawn_moves_at(&board, "d2").is_empty());
        let board = Board::from_fen("4k3/8/8/8/3n4/8/3P4/4K3").unwrap();
        assert_eq!(pawn_moves_at(&board, "d2"), ["d3"]);
    }

    #[test]
    fn test_diagonal_captures() {
        let board = Board::from_fen("4k3/8/8/8/8/2p1P3/3P4/4K3").unwrap();
        assert_eq!(pawn_moves_at(&board, "d2"), ["c3", "d3", "d4"]);
    }

    #[test]
    fn test_en_passant_requires_fresh_double_step() {
        let mut board = Board::from_fen("4k3/3p4/8/4P3/8/8/8/4K3").unwrap();
        board.move_piece(sq("d7"), sq("d5"));
        assert_eq!(pawn_moves_at(&board, "e5"), ["d6", "e6"]);

        board.clear_double_steps();
        assert_eq!(pawn_moves_at(&board, "e5"), ["e6"]);
    }

    #[test]
    fn test_promotion_square_is_plain_destination() {
        let board = Board::from_fen("1n2k3/P7/8/8/8/8/8/4K3").unwrap();
        assert_eq!(pawn_moves_at(&board, "a7"), ["a8", "b8"]);
    }
}
