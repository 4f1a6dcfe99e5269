use std::fmt;

use super::types::{Color, Piece, PieceKind, Position, BOARD_SIZE};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8×8 grid owning every piece, plus a cached king square per color.
///
/// The board is a mechanism: it relocates pieces on request and answers
/// attack/legality queries, but holds no turn or clock state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    pub(crate) kings: [Option<Position>; 2],
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            for color in Color::BOTH {
                board.place_piece(Piece::new(*kind, color, Position::at(col, color.back_rank())));
                board.place_piece(Piece::new(
                    PieceKind::Pawn,
                    color,
                    Position::at(col, color.pawn_start_rank()),
                ));
            }
        }
        board
    }

    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            kings: [None; 2],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.squares[pos.row() as usize][pos.col() as usize].as_ref()
    }

    #[inline]
    pub(crate) fn piece_at_mut(&mut self, pos: Position) -> Option<&mut Piece> {
        self.squares[pos.row() as usize][pos.col() as usize].as_mut()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// Returns true if a piece of the other color stands on `pos`.
    #[inline]
    #[must_use]
    pub fn is_opponent_piece(&self, pos: Position, color: Color) -> bool {
        self.piece_at(pos).is_some_and(|p| p.color() != color)
    }

    /// Put `piece` on its own square, returning whatever stood there.
    pub fn place_piece(&mut self, piece: Piece) -> Option<Piece> {
        let pos = piece.position();
        let replaced = self.take(pos);
        if piece.kind() == PieceKind::King {
            self.kings[piece.color().index()] = Some(pos);
        }
        self.squares[pos.row() as usize][pos.col() as usize] = Some(piece);
        replaced
    }

    /// Take the piece off `pos`.
    pub fn remove_piece(&mut self, pos: Position) -> Option<Piece> {
        self.take(pos)
    }

    /// Relocate whatever stands on `from` to `to`, returning the piece that
    /// previously occupied `to`. Does nothing if `from` is empty.
    ///
    /// No legality checks: this is the raw mechanism used by move execution
    /// and by the simulate-then-check legality test.
    pub fn move_piece(&mut self, from: Position, to: Position) -> Option<Piece> {
        if from == to {
            return None;
        }
        let mut piece = self.take(from)?;
        let captured = self.take(to);
        piece.set_position(to);
        if piece.kind() == PieceKind::King {
            self.kings[piece.color().index()] = Some(to);
        }
        self.squares[to.row() as usize][to.col() as usize] = Some(piece);
        captured
    }

    /// Empty a square, keeping the king cache in step.
    fn take(&mut self, pos: Position) -> Option<Piece> {
        let taken = self.squares[pos.row() as usize][pos.col() as usize].take();
        if let Some(piece) = taken {
            let slot = &mut self.kings[piece.color().index()];
            if piece.kind() == PieceKind::King && *slot == Some(pos) {
                *slot = None;
            }
        }
        taken
    }

    /// Cached king square; `None` only on boards set up without that king.
    #[inline]
    #[must_use]
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.kings[color.index()]
    }

    /// Scan the grid for the king rather than reading the cache.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces(color)
            .find(|p| p.kind() == PieceKind::King)
            .map(|p| p.position())
    }

    /// All pieces of one color, a1 first.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.all_pieces().filter(move |p| p.color() == color)
    }

    /// Every piece on the board, a1 first.
    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.iter().flatten().flatten()
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.all_pieces().count()
    }

    #[must_use]
    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.pieces(color).filter(|p| p.kind() == kind).count()
    }

    /// The pawn, if any, that may currently be captured en passant.
    #[must_use]
    pub fn double_stepped_pawn(&self) -> Option<&Piece> {
        self.all_pieces()
            .find(|p| p.kind() == PieceKind::Pawn && p.just_moved_two_squares())
    }

    /// End the en-passant window for every pawn.
    pub(crate) fn clear_double_steps(&mut self) {
        for piece in self.squares.iter_mut().flatten().flatten() {
            piece.clear_double_step();
        }
    }

    /// Returns true when `from -> to` is a pawn capturing en passant here.
    #[must_use]
    pub fn is_en_passant_capture(&self, from: Position, to: Position) -> bool {
        let Some(pawn) = self.piece_at(from) else {
            return false;
        };
        if pawn.kind() != PieceKind::Pawn
            || from.file_distance(to) != 1
            || to.row() as i8 - from.row() as i8 != pawn.color().pawn_direction()
            || !self.is_empty(to)
        {
            return false;
        }
        let beside = Position::at(to.col(), from.row());
        self.piece_at(beside).is_some_and(|victim| {
            victim.kind() == PieceKind::Pawn
                && victim.color() != pawn.color()
                && victim.just_moved_two_squares()
        })
    }

    /// Apply `from -> to` on a copy, removing an en-passant victim as well.
    #[must_use]
    pub(crate) fn simulate(&self, from: Position, to: Position) -> Board {
        let mut clone = self.clone();
        if self.is_en_passant_capture(from, to) {
            clone.remove_piece(Position::at(to.col(), from.row()));
        }
        clone.move_piece(from, to);
        clone
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..BOARD_SIZE {
                match self.piece_at(Position::at(col, row)) {
                    Some(piece) => write!(f, "{} ", piece.to_fen_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "{}", row + 1)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
