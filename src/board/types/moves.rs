//! Completed-move records and move requests.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;

use super::castling::CastlingSide;
use super::piece::{Color, PieceKind};
use super::position::Position;

/// Shape of a completed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum MoveKind {
    /// Ordinary move or capture.
    Standard,
    /// King and rook moved together; the king's transition is the move's from/to.
    Castling {
        side: CastlingSide,
        rook_from: Position,
        rook_to: Position,
    },
    /// Pawn captured a double-stepped pawn beside it.
    EnPassant,
    /// Pawn reached the last rank and became `piece`.
    Promotion { piece: PieceKind },
}

/// A piece removed from the board by a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Captured {
    pub kind: PieceKind,
    pub color: Color,
}

/// Immutable record of one completed ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Position,
    to: Position,
    piece: PieceKind,
    color: Color,
    captured: Option<Captured>,
    kind: MoveKind,
}

impl Move {
    /// Quiet move.
    #[must_use]
    pub const fn standard(from: Position, to: Position, piece: PieceKind, color: Color) -> Self {
        Move {
            from,
            to,
            piece,
            color,
            captured: None,
            kind: MoveKind::Standard,
        }
    }

    /// Ordinary capture of the piece standing on `to`.
    #[must_use]
    pub const fn capture(
        from: Position,
        to: Position,
        piece: PieceKind,
        color: Color,
        captured: Captured,
    ) -> Self {
        Move {
            from,
            to,
            piece,
            color,
            captured: Some(captured),
            kind: MoveKind::Standard,
        }
    }

    #[must_use]
    pub const fn castling(
        king_from: Position,
        king_to: Position,
        rook_from: Position,
        rook_to: Position,
        side: CastlingSide,
        color: Color,
    ) -> Self {
        Move {
            from: king_from,
            to: king_to,
            piece: PieceKind::King,
            color,
            captured: None,
            kind: MoveKind::Castling {
                side,
                rook_from,
                rook_to,
            },
        }
    }

    #[must_use]
    pub const fn en_passant(from: Position, to: Position, color: Color) -> Self {
        Move {
            from,
            to,
            piece: PieceKind::Pawn,
            color,
            captured: Some(Captured {
                kind: PieceKind::Pawn,
                color: color.opponent(),
            }),
            kind: MoveKind::EnPassant,
        }
    }

    #[must_use]
    pub const fn promotion(
        from: Position,
        to: Position,
        color: Color,
        piece: PieceKind,
        captured: Option<Captured>,
    ) -> Self {
        Move {
            from,
            to,
            piece: PieceKind::Pawn,
            color,
            captured,
            kind: MoveKind::Promotion { piece },
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Position {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Position {
        self.to
    }

    /// Kind of the piece that moved (a pawn for promotions).
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> PieceKind {
        self.piece
    }

    /// Color of the side that made the move.
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Option<Captured> {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn captured_kind(&self) -> Option<PieceKind> {
        match self.captured {
            Some(c) => Some(c.kind),
            None => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn captured_color(&self) -> Option<Color> {
        match self.captured {
            Some(c) => Some(c.color),
            None => None,
        }
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        matches!(self.kind, MoveKind::Castling { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        matches!(self.kind, MoveKind::Promotion { .. })
    }

    /// The piece a pawn promoted to, if this is a promotion
    #[inline]
    #[must_use]
    pub const fn promotion_piece(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion { piece } => Some(piece),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn castling_side(&self) -> Option<CastlingSide> {
        match self.kind {
            MoveKind::Castling { side, .. } => Some(side),
            _ => None,
        }
    }

    /// The rook's auxiliary transition for castling moves.
    #[inline]
    #[must_use]
    pub const fn rook_move(&self) -> Option<(Position, Position)> {
        match self.kind {
            MoveKind::Castling {
                rook_from, rook_to, ..
            } => Some((rook_from, rook_to)),
            _ => None,
        }
    }

    /// Resets the fifty-move counter: pawn moves and captures.
    #[inline]
    #[must_use]
    pub const fn is_irreversible(&self) -> bool {
        matches!(self.piece, PieceKind::Pawn) || self.captured.is_some()
    }

    /// Short algebraic notation without disambiguation or check marks
    /// (`e4`, `Nf3`, `exd5`, `O-O`, `e8=Q`, `exd6 e.p.`).
    #[must_use]
    pub fn to_algebraic(&self) -> String {
        if let MoveKind::Castling { side, .. } = self.kind {
            return side.notation().to_string();
        }

        let mut san = String::new();
        if self.piece != PieceKind::Pawn {
            san.push(self.piece.to_char().to_ascii_uppercase());
        } else if self.is_capture() {
            san.push(self.from.file_char());
        }
        if self.is_capture() {
            san.push('x');
        }
        san.push_str(&self.to.to_string());
        if let Some(piece) = self.promotion_piece() {
            san.push('=');
            san.push(piece.to_char().to_ascii_uppercase());
        }
        if self.is_en_passant() {
            san.push_str(" e.p.");
        }
        san
    }

    /// Long algebraic notation (`e2e4`, `e7e8q`, `e1g1`).
    #[must_use]
    pub fn to_uci(&self) -> String {
        let mut uci = format!("{}{}", self.from, self.to);
        if let Some(piece) = self.promotion_piece() {
            uci.push(piece.to_char());
        }
        uci
    }

    /// The request that reproduces this move.
    #[must_use]
    pub const fn request(&self) -> MoveRequest {
        MoveRequest {
            from: self.from,
            to: self.to,
            promotion: self.promotion_piece(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())
    }
}

/// A move as asked for by a caller: from-square, to-square, optional promotion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRequest {
    pub from: Position,
    pub to: Position,
    pub promotion: Option<PieceKind>,
}

impl MoveRequest {
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        MoveRequest {
            from,
            to,
            promotion: None,
        }
    }

    #[must_use]
    pub const fn with_promotion(mut self, piece: PieceKind) -> Self {
        self.promotion = Some(piece);
        self
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}

/// Parses long algebraic notation: `e2e4`, `e7e8q`.
impl FromStr for MoveRequest {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PositionError::InvalidNotation {
            notation: s.to_string(),
        };
        if !s.is_ascii() || !matches!(s.len(), 4 | 5) {
            return Err(invalid());
        }
        let from = Position::from_notation(&s[0..2])?;
        let to = Position::from_notation(&s[2..4])?;
        let request = MoveRequest::new(from, to);
        match s[4..].chars().next() {
            None => Ok(request),
            Some(c) => PieceKind::from_char(c)
                .map(|kind| request.with_promotion(kind))
                .ok_or_else(invalid),
        }
    }
}
