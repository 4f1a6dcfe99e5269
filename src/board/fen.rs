use std::str::FromStr;

use super::error::FenError;
use super::types::{castling, Color, Piece, PieceKind, Position, BOARD_SIZE};
use super::Board;

impl Board {
    /// Parse the piece-placement field of a FEN string.
    ///
    /// Pieces standing off their home squares are marked as moved; kings and
    /// rooks on their home squares are treated as unmoved.
    pub fn from_fen(placement: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != BOARD_SIZE as usize {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let row = BOARD_SIZE - 1 - rank_idx as u8;
            let mut files = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 || skip > 8 {
                        return Err(FenError::InvalidPiece { char: c });
                    }
                    files += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if files >= BOARD_SIZE as usize {
                    return Err(FenError::BadRankWidth {
                        rank: rank_idx,
                        files: files + 1,
                    });
                }
                if kind == PieceKind::King && board.king_position(color).is_some() {
                    return Err(FenError::DuplicateKing { color });
                }
                let pos = Position::at(files as u8, row);
                let mut piece = Piece::new(kind, color, pos);
                piece.set_has_moved(!on_home_square(&piece));
                board.place_piece(piece);
                files += 1;
            }
            if files != BOARD_SIZE as usize {
                return Err(FenError::BadRankWidth {
                    rank: rank_idx,
                    files,
                });
            }
        }

        Ok(board)
    }

    /// Piece-placement field of FEN, rank 8 first.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(BOARD_SIZE as usize);
        for row in (0..BOARD_SIZE).rev() {
            let mut rank = String::new();
            let mut empty = 0;
            for col in 0..BOARD_SIZE {
                if let Some(piece) = self.piece_at(Position::at(col, row)) {
                    if empty > 0 {
                        rank.push_str(&empty.to_string());
                        empty = 0;
                    }
                    rank.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                rank.push_str(&empty.to_string());
            }
            rows.push(rank);
        }
        rows.join("/")
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept a full FEN too; only the first field matters here.
        let placement = s.split_whitespace().next().unwrap_or_default();
        Board::from_fen(placement)
    }
}

/// Whether a piece could still be unmoved where it stands.
fn on_home_square(piece: &Piece) -> bool {
    let pos = piece.position();
    let color = piece.color();
    match piece.kind() {
        PieceKind::Pawn => pos.row() == color.pawn_start_rank(),
        PieceKind::King => pos == castling::king_origin(color),
        PieceKind::Rook => castling::CastlingSide::BOTH
            .iter()
            .any(|&side| pos == castling::rook_origin(color, side)),
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => pos.row() == color.back_rank(),
    }
}
