//! Core chess types.
//!
//! This module contains the value types used throughout the rules engine:
//! - `Position` - a square as (file, rank)
//! - `Piece`, `PieceKind` and `Color` - pieces and sides
//! - `Move`, `MoveKind` and `MoveRequest` - completed plies and requested ones
//! - `CastlingSide` plus the fixed castling squares
//! - `GameStatus` - the status vocabulary

pub mod castling;
mod moves;
mod piece;
mod position;
mod status;

pub use castling::CastlingSide;
pub use moves::{Captured, Move, MoveKind, MoveRequest};
pub use piece::{Color, Piece, PieceKind};
pub use position::{Position, BOARD_SIZE};
pub use status::GameStatus;
