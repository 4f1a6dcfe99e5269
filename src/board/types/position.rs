//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;

/// Number of files and ranks on the board.
pub const BOARD_SIZE: u8 = 8;

/// A square on the board as (file, rank), both in `0..8`.
///
/// `col` 0 is the a-file, `row` 0 is White's first rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Position {
    col: u8,
    row: u8,
}

impl Position {
    /// Create a position, rejecting coordinates outside the board.
    pub fn new(col: i32, row: i32) -> Result<Self, PositionError> {
        if (0..BOARD_SIZE as i32).contains(&col) && (0..BOARD_SIZE as i32).contains(&row) {
            Ok(Position {
                col: col as u8,
                row: row as u8,
            })
        } else {
            Err(PositionError::InvalidCoordinate { col, row })
        }
    }

    /// Const constructor for coordinates known to be on the board.
    ///
    /// Out-of-range input is clamped into the last file/rank; only use with
    /// literal coordinates.
    #[inline]
    #[must_use]
    pub(crate) const fn at(col: u8, row: u8) -> Self {
        let col = if col < BOARD_SIZE { col } else { BOARD_SIZE - 1 };
        let row = if row < BOARD_SIZE { row } else { BOARD_SIZE - 1 };
        Position { col, row }
    }

    /// Parse two-character algebraic notation such as `"e4"`.
    pub fn from_notation(notation: &str) -> Result<Self, PositionError> {
        let invalid = || PositionError::InvalidNotation {
            notation: notation.to_string(),
        };
        let bytes = notation.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let col = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'1',
            _ => return Err(invalid()),
        };
        Ok(Position { col, row })
    }

    /// Algebraic notation, e.g. `"e4"`.
    #[must_use]
    pub fn to_notation(self) -> String {
        self.to_string()
    }

    /// File index (0 = a).
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Rank index (0 = rank 1).
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// File letter, `'a'..='h'`.
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// The square `(dc, dr)` away, if it is still on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dc: i8, dr: i8) -> Option<Position> {
        let col = self.col as i8 + dc;
        let row = self.row as i8 + dr;
        if (0..BOARD_SIZE as i8).contains(&col) && (0..BOARD_SIZE as i8).contains(&row) {
            Some(Position {
                col: col as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_same_row(self, other: Position) -> bool {
        self.row == other.row
    }

    #[inline]
    #[must_use]
    pub const fn is_same_col(self, other: Position) -> bool {
        self.col == other.col
    }

    #[inline]
    #[must_use]
    pub const fn is_diagonal_to(self, other: Position) -> bool {
        self.col.abs_diff(other.col) == self.row.abs_diff(other.row)
    }

    /// True for the eight neighbouring squares.
    #[inline]
    #[must_use]
    pub const fn is_adjacent_to(self, other: Position) -> bool {
        let dc = self.col.abs_diff(other.col);
        let dr = self.row.abs_diff(other.row);
        dc <= 1 && dr <= 1 && (dc + dr) > 0
    }

    /// Absolute file distance.
    #[inline]
    #[must_use]
    pub const fn file_distance(self, other: Position) -> u8 {
        self.col.abs_diff(other.col)
    }

    /// Absolute rank distance.
    #[inline]
    #[must_use]
    pub const fn rank_distance(self, other: Position) -> u8 {
        self.row.abs_diff(other.row)
    }

    /// Square colour parity: 0 for dark squares (a1), 1 for light squares.
    #[inline]
    #[must_use]
    pub const fn color_parity(self) -> u8 {
        (self.row + self.col) % 2
    }

    /// Index into a 64-element table (a1 = 0, h8 = 63).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// All 64 squares, a1 first, rank by rank.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { col, row }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.row + 1)
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_notation(s)
    }
}

impl TryFrom<(i32, i32)> for Position {
    type Error = PositionError;

    fn try_from((col, row): (i32, i32)) -> Result<Self, Self::Error> {
        Position::new(col, row)
    }
}

impl TryFrom<String> for Position {
    type Error = PositionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Position::from_notation(&value)
    }
}

impl From<Position> for String {
    fn from(pos: Position) -> Self {
        pos.to_string()
    }
}
