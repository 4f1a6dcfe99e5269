//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::{BoardBuilder, Color, PieceKind};
//!
//! let board = BoardBuilder::new()
//!     .piece("e1", Color::White, PieceKind::King)
//!     .piece("e8", Color::Black, PieceKind::King)
//!     .piece("a2", Color::White, PieceKind::Pawn)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.piece_count(), 3);
//! ```

use super::error::PositionError;
use super::types::{Color, Piece, PieceKind, Position};
use super::Board;

#[derive(Clone, Copy, Debug)]
enum Mark {
    Moved,
    DoubleStepped,
}

/// A fluent builder for constructing `Board` positions.
///
/// Squares are given in algebraic notation; a bad square is reported by
/// [`BoardBuilder::build`].
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(String, Color, PieceKind)>,
    cleared: Vec<String>,
    marks: Vec<(String, Mark)>,
    base: Option<Board>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            base: Some(Board::new()),
            ..Self::default()
        }
    }

    /// Place a never-moved piece, replacing any piece on that square.
    #[must_use]
    pub fn piece(mut self, square: &str, color: Color, kind: PieceKind) -> Self {
        self.pieces.push((square.to_string(), color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: &str) -> Self {
        self.cleared.push(square.to_string());
        self
    }

    /// Mark the piece on `square` as having moved (no castling with it,
    /// no pawn double step).
    #[must_use]
    pub fn moved(mut self, square: &str) -> Self {
        self.marks.push((square.to_string(), Mark::Moved));
        self
    }

    /// Mark the pawn on `square` as having just advanced two squares, so it
    /// can be captured en passant on the next ply.
    #[must_use]
    pub fn double_stepped(mut self, square: &str) -> Self {
        self.marks.push((square.to_string(), Mark::DoubleStepped));
        self
    }

    /// Build the board.
    ///
    /// Clears are applied first, then placements in order, then marks.
    pub fn build(self) -> Result<Board, PositionError> {
        let mut board = self.base.unwrap_or_else(Board::empty);

        for square in &self.cleared {
            board.remove_piece(Position::from_notation(square)?);
        }
        for (square, color, kind) in &self.pieces {
            let pos = Position::from_notation(square)?;
            board.place_piece(Piece::new(*kind, *color, pos));
        }
        for (square, mark) in &self.marks {
            let pos = Position::from_notation(square)?;
            if let Some(piece) = board.piece_at_mut(pos) {
                match mark {
                    Mark::Moved => piece.set_has_moved(true),
                    Mark::DoubleStepped => {
                        piece.set_has_moved(true);
                        piece.set_just_moved_two_squares(true);
                    }
                }
            }
        }

        Ok(board)
    }
}
