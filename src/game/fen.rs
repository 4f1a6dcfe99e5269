//! Full six-field FEN for games.

use crate::board::{
    king_origin, rook_origin, Board, CastlingSide, Color, FenError, PieceKind, Position,
};

use super::{Game, GameOptions};

impl Game {
    /// Parse a FEN string into a game.
    ///
    /// Accepts the placement field alone (White to move, castling allowed
    /// wherever kings and rooks stand on their home squares), four fields, or
    /// all six. Status is derived from the position.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Self::from_fen_with_options(fen, GameOptions::default())
    }

    pub fn from_fen_with_options(fen: &str, options: GameOptions) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if !matches!(parts.len(), 1 | 4 | 6) {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        let mut board = Board::from_fen(parts[0])?;
        for color in Color::BOTH {
            if board.king_position(color).is_none() {
                return Err(FenError::MissingKing { color });
            }
        }

        let turn = match parts.get(1).copied() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        if let Some(castling) = parts.get(2) {
            apply_castling_field(&mut board, castling)?;
        }
        if let Some(ep) = parts.get(3) {
            apply_en_passant_field(&mut board, ep, turn)?;
        }

        let (half_move_clock, full_move_number) = if parts.len() == 6 {
            (parse_clock(parts[4], 0)?, parse_clock(parts[5], 1)?)
        } else {
            (0, 1)
        };

        Ok(Game::from_parts(
            board,
            turn,
            half_move_clock,
            full_move_number,
            options,
        ))
    }

    /// Full FEN of the current position.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let board = self.board();
        let mut castling = String::new();
        for color in Color::BOTH {
            for side in CastlingSide::BOTH {
                if board.has_castling_right(color, side) {
                    let c = match side {
                        CastlingSide::Kingside => 'k',
                        CastlingSide::Queenside => 'q',
                    };
                    castling.push(if color == Color::White {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    });
                }
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = board
            .double_stepped_pawn()
            .and_then(|pawn| {
                let pos = pawn.position();
                pos.offset(0, -pawn.color().pawn_direction())
            })
            .map_or_else(|| "-".to_string(), |pos| pos.to_string());

        format!(
            "{} {} {} {} {} {}",
            board.to_fen(),
            self.turn().to_fen_char(),
            castling,
            en_passant,
            self.half_move_clock(),
            self.full_move_number()
        )
    }

    /// Piece-placement field only.
    #[must_use]
    pub fn board_fen(&self) -> String {
        self.board().to_fen()
    }
}

/// Withdraw rights the field does not list by marking the pieces as moved.
fn apply_castling_field(board: &mut Board, field: &str) -> Result<(), FenError> {
    let mut listed = [[false; 2]; 2];
    if field != "-" {
        for c in field.chars() {
            let (color, side) = match c {
                'K' => (Color::White, CastlingSide::Kingside),
                'Q' => (Color::White, CastlingSide::Queenside),
                'k' => (Color::Black, CastlingSide::Kingside),
                'q' => (Color::Black, CastlingSide::Queenside),
                _ => return Err(FenError::InvalidCastling { char: c }),
            };
            listed[color.index()][side as usize] = true;
        }
    }

    for color in Color::BOTH {
        for side in CastlingSide::BOTH {
            if !listed[color.index()][side as usize] {
                if let Some(rook) = board.piece_at_mut(rook_origin(color, side)) {
                    if rook.is(PieceKind::Rook, color) {
                        rook.set_has_moved(true);
                    }
                }
            }
        }
        if listed[color.index()] == [false, false] {
            if let Some(king) = board.piece_at_mut(king_origin(color)) {
                if king.is(PieceKind::King, color) {
                    king.set_has_moved(true);
                }
            }
        }
    }
    Ok(())
}

/// Flag the pawn that just double-stepped past `field`.
fn apply_en_passant_field(board: &mut Board, field: &str, turn: Color) -> Result<(), FenError> {
    if field == "-" {
        return Ok(());
    }
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let target = Position::from_notation(field).map_err(|_| invalid())?;
    let mover = turn.opponent();
    // The skipped square sits one step behind the pawn, on its third rank.
    let pawn_square = target
        .offset(0, mover.pawn_direction())
        .filter(|_| target.row() as i8 == mover.pawn_start_rank() as i8 + mover.pawn_direction())
        .ok_or_else(invalid)?;
    // Both squares the pawn crossed must be vacant.
    let origin = target
        .offset(0, -mover.pawn_direction())
        .ok_or_else(invalid)?;
    if !board.is_empty(target) || !board.is_empty(origin) {
        return Err(invalid());
    }
    let pawn = board
        .piece_at_mut(pawn_square)
        .filter(|p| p.is(PieceKind::Pawn, mover))
        .ok_or_else(invalid)?;
    pawn.set_has_moved(true);
    pawn.set_just_moved_two_squares(true);
    Ok(())
}

fn parse_clock(field: &str, min: u32) -> Result<u32, FenError> {
    field
        .parse::<u32>()
        .ok()
        .filter(|&n| n >= min)
        .ok_or_else(|| FenError::InvalidClock {
            found: field.to_string(),
        })
}
