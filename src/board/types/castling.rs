//! Castling sides and the fixed king/rook squares involved.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::position::Position;

const KING_HOME_COL: u8 = 4;

/// Which rook the king castles with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

impl CastlingSide {
    pub const BOTH: [CastlingSide; 2] = [CastlingSide::Kingside, CastlingSide::Queenside];

    /// Notation used in move lists (`O-O` / `O-O-O`).
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            CastlingSide::Kingside => "O-O",
            CastlingSide::Queenside => "O-O-O",
        }
    }

    /// File of the rook before castling.
    #[inline]
    const fn rook_col(self) -> u8 {
        match self {
            CastlingSide::Kingside => 7,
            CastlingSide::Queenside => 0,
        }
    }
}

impl fmt::Display for CastlingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastlingSide::Kingside => write!(f, "kingside"),
            CastlingSide::Queenside => write!(f, "queenside"),
        }
    }
}

/// A king moving exactly two files along its rank.
#[inline]
#[must_use]
pub fn is_castling_move(from: Position, to: Position) -> bool {
    from.file_distance(to) == 2 && from.is_same_row(to)
}

/// Side implied by the king's direction of travel.
#[inline]
#[must_use]
pub fn castling_side(from: Position, to: Position) -> CastlingSide {
    if to.col() > from.col() {
        CastlingSide::Kingside
    } else {
        CastlingSide::Queenside
    }
}

/// The king's square before castling (e1 / e8).
#[inline]
#[must_use]
pub const fn king_origin(color: Color) -> Position {
    Position::at(KING_HOME_COL, color.back_rank())
}

/// g-file for kingside, c-file for queenside, on the home rank.
#[inline]
#[must_use]
pub const fn king_destination(color: Color, side: CastlingSide) -> Position {
    let col = match side {
        CastlingSide::Kingside => 6,
        CastlingSide::Queenside => 2,
    };
    Position::at(col, color.back_rank())
}

/// Corner square of the castling rook.
#[inline]
#[must_use]
pub const fn rook_origin(color: Color, side: CastlingSide) -> Position {
    Position::at(side.rook_col(), color.back_rank())
}

/// f-file for kingside, d-file for queenside, on the home rank.
#[inline]
#[must_use]
pub const fn rook_destination(color: Color, side: CastlingSide) -> Position {
    let col = match side {
        CastlingSide::Kingside => 5,
        CastlingSide::Queenside => 3,
    };
    Position::at(col, color.back_rank())
}

/// Squares the king stands on or crosses: start, middle, end.
#[must_use]
pub(crate) const fn king_path(color: Color, side: CastlingSide) -> [Position; 3] {
    let row = color.back_rank();
    match side {
        CastlingSide::Kingside => [
            Position::at(KING_HOME_COL, row),
            Position::at(KING_HOME_COL + 1, row),
            Position::at(KING_HOME_COL + 2, row),
        ],
        CastlingSide::Queenside => [
            Position::at(KING_HOME_COL, row),
            Position::at(KING_HOME_COL - 1, row),
            Position::at(KING_HOME_COL - 2, row),
        ],
    }
}

/// Squares strictly between the king and the rook.
pub(crate) fn squares_between(color: Color, side: CastlingSide) -> impl Iterator<Item = Position> {
    let row = color.back_rank();
    let (lo, hi) = match side {
        CastlingSide::Kingside => (KING_HOME_COL + 1, side.rook_col()),
        CastlingSide::Queenside => (side.rook_col() + 1, KING_HOME_COL),
    };
    (lo..hi).map(move |col| Position::at(col, row))
}
