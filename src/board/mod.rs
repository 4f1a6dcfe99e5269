//! Board representation and the chess rules that only need a board.
//!
//! A mailbox grid of optional pieces with a cached king square per color.
//! Movement generation, attack queries, legality filtering, castling
//! preconditions and mate/stalemate detection are `impl Board` blocks, one
//! file per concern. Turn, clocks and history belong to [`crate::Game`].
//!
//! # Example
//! ```
//! use chess_rules::{Board, Color, Position};
//!
//! let board = Board::new();
//! let e2: Position = "e2".parse().unwrap();
//! assert_eq!(board.legal_moves(e2).len(), 2);
//! assert_eq!(board.legal_move_count(Color::White), 20);
//! ```

mod attacks;
mod builder;
mod castling;
mod error;
mod fen;
mod legality;
mod movegen;
mod state;
mod status;
pub mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{CastlingBlock, FenError, MoveError, PositionError};
pub use state::Board;
pub use types::castling::{
    castling_side, is_castling_move, king_destination, king_origin, rook_destination, rook_origin,
};
pub use types::{
    Captured, CastlingSide, Color, GameStatus, Move, MoveKind, MoveRequest, Piece, PieceKind,
    Position, BOARD_SIZE,
};
