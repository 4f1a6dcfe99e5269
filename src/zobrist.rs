//! Zobrist keys for positions.
//!
//! A key covers piece placement, side to move, castling availability and a
//! live en-passant file, which is exactly what decides whether two positions
//! repeat.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, CastlingSide, Color, PieceKind, Position};

pub(crate) struct ZobristKeys {
    // piece_keys[kind][color][square_index]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 6],
    pub(crate) black_to_move_key: u64,
    // castling_keys[color][side] : 0=White, 1=Black; 0=Kingside, 1=Queenside
    pub(crate) castling_keys: [[u64; 2]; 2],
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // fixed seed, keys stable across runs
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut castling_keys = [[0; 2]; 2];
        let mut en_passant_keys = [0; 8];

        for kind in &mut piece_keys {
            for color in kind.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

const fn side_index(side: CastlingSide) -> usize {
    match side {
        CastlingSide::Kingside => 0,
        CastlingSide::Queenside => 1,
    }
}

/// Key of `board` with `to_move` to play.
#[must_use]
pub fn position_key(board: &Board, to_move: Color) -> u64 {
    let keys = &*ZOBRIST;
    let mut hash = 0u64;

    for piece in board.all_pieces() {
        hash ^= keys.piece_keys[piece.kind().index()][piece.color().index()]
            [piece.position().index()];
    }

    if to_move == Color::Black {
        hash ^= keys.black_to_move_key;
    }

    for color in Color::BOTH {
        for side in CastlingSide::BOTH {
            if board.has_castling_right(color, side) {
                hash ^= keys.castling_keys[color.index()][side_index(side)];
            }
        }
    }

    if let Some(file) = en_passant_file(board, to_move) {
        hash ^= keys.en_passant_keys[file as usize];
    }

    hash
}

/// File of a double-stepped pawn that a `to_move` pawn stands beside.
///
/// A double step nobody can answer does not change the position.
fn en_passant_file(board: &Board, to_move: Color) -> Option<u8> {
    let pawn = board.double_stepped_pawn()?;
    if pawn.color() == to_move {
        return None;
    }
    let pos = pawn.position();
    let capturer_beside = [-1i8, 1].into_iter().any(|dc| {
        pos.offset(dc, 0)
            .and_then(|p: Position| board.piece_at(p))
            .is_some_and(|p| p.is(PieceKind::Pawn, to_move))
    });
    capturer_beside.then_some(pos.col())
}
