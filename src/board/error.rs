//! Error types for board and game operations.

use std::fmt;

use super::types::{CastlingSide, GameStatus, PieceKind, Position};

/// Error type for coordinate construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Column or row outside 0-7
    InvalidCoordinate { col: i32, row: i32 },
    /// Malformed algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::InvalidCoordinate { col, row } => {
                write!(f, "Coordinate ({col}, {row}) is off the board (must be 0-7)")
            }
            PositionError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Which castling precondition failed, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingBlock {
    KingMissingOrMoved,
    KingInCheck,
    RookMissingOrMoved,
    PathObstructed,
    PathAttacked,
}

impl fmt::Display for CastlingBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            CastlingBlock::KingMissingOrMoved => "king is missing or has moved",
            CastlingBlock::KingInCheck => "king is in check",
            CastlingBlock::RookMissingOrMoved => "rook is missing or has moved",
            CastlingBlock::PathObstructed => "squares between king and rook are occupied",
            CastlingBlock::PathAttacked => "king would pass through or land on an attacked square",
        };
        f.write_str(reason)
    }
}

/// Error type for rejected move requests and game commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A square given as text or raw coordinates was invalid
    InvalidPosition(PositionError),
    /// No piece stands on the source square
    NoPieceAtSource { square: Position },
    /// The piece on the source square belongs to the other side
    WrongTurnOwnership { square: Position },
    /// Source and destination are the same square
    NoOpMove { square: Position },
    /// The piece cannot move that way
    IllegalGeometry { from: Position, to: Position },
    /// Destination holds a piece of the mover's own color
    SelfCapture { square: Position },
    /// The move would leave the mover's king attacked
    SelfCheckExposure { from: Position, to: Position },
    /// Castling precondition unmet
    CastlingBlocked {
        side: CastlingSide,
        reason: CastlingBlock,
    },
    /// Pawn reaches the last rank but no promotion piece was given
    PromotionPieceRequired { square: Position },
    /// Requested promotion piece is a pawn or a king
    InvalidPromotionPiece { kind: PieceKind },
    /// The game has already ended
    GameAlreadyOver { status: GameStatus },
    NothingToUndo,
    NothingToRedo,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidPosition(err) => write!(f, "{err}"),
            MoveError::NoPieceAtSource { square } => {
                write!(f, "No piece at {square}")
            }
            MoveError::WrongTurnOwnership { square } => {
                write!(f, "Piece at {square} belongs to the opponent")
            }
            MoveError::NoOpMove { square } => {
                write!(f, "Source and destination are both {square}")
            }
            MoveError::IllegalGeometry { from, to } => {
                write!(f, "Piece at {from} cannot move to {to}")
            }
            MoveError::SelfCapture { square } => {
                write!(f, "Cannot capture own piece at {square}")
            }
            MoveError::SelfCheckExposure { from, to } => {
                write!(f, "Move {from}{to} would leave the king in check")
            }
            MoveError::CastlingBlocked { side, reason } => {
                write!(f, "Cannot castle {side}: {reason}")
            }
            MoveError::PromotionPieceRequired { square } => {
                write!(f, "Pawn reaching {square} needs a promotion piece")
            }
            MoveError::InvalidPromotionPiece { kind } => {
                write!(f, "Cannot promote to a {kind}")
            }
            MoveError::GameAlreadyOver { status } => {
                write!(f, "Game is over ({status})")
            }
            MoveError::NothingToUndo => write!(f, "No move to undo"),
            MoveError::NothingToRedo => write!(f, "No move to redo"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InvalidPosition(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PositionError> for MoveError {
    fn from(err: PositionError) -> Self {
        MoveError::InvalidPosition(err)
    }
}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has the wrong number of fields
    WrongFieldCount { found: usize },
    /// Placement field does not have 8 ranks
    WrongRankCount { found: usize },
    /// A rank does not describe exactly 8 files
    BadRankWidth { rank: usize, files: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Half-move clock or full-move number is not a valid number
    InvalidClock { found: String },
    /// A color has no king
    MissingKing { color: super::types::Color },
    /// A color has more than one king
    DuplicateKing { color: super::types::Color },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 1, 4 or 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::BadRankWidth { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidClock { found } => {
                write!(f, "Invalid move counter '{found}'")
            }
            FenError::MissingKing { color } => write!(f, "{color} has no king"),
            FenError::DuplicateKing { color } => {
                write!(f, "{color} has more than one king")
            }
        }
    }
}

impl std::error::Error for FenError {}
