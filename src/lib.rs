//! Chess rules: positions, pieces, move legality, castling, en passant,
//! promotion, check/mate/stalemate and draw detection, plus a [`Game`] with
//! undo/redo and persistence snapshots.
//!
//! No rendering, input handling or engine search lives here; hosts drive a
//! [`Game`] through its commands and read back its queries.

mod logging;

pub mod board;
pub mod game;
pub mod perft;
pub mod session;
pub mod zobrist;

pub use board::{
    Board, BoardBuilder, CastlingBlock, CastlingSide, Color, FenError, GameStatus, Move, MoveError,
    MoveKind, MoveRequest, Piece, PieceKind, Position, PositionError,
};
pub use game::{Game, GameOptions, GameRecord};
pub use session::SharedGame;
