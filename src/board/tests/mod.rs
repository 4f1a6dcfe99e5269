//! Board and game scenario tests.
//!
//! Tests are organized into separate files by category:
//! - `draw.rs` - Draw detection (50-move, repetition, insufficient material, stalemate)
//! - `undo_redo.rs` - Undo/redo correctness
//! - `edge_cases.rs` - Special moves, pins and other edge cases
//! - `proptest.rs` - Property-based tests over random playouts

mod proptest;
mod undo_redo;

use crate::board::Position;
use crate::game::Game;

fn sq(s: &str) -> Position {
    s.parse().unwrap()
}

fn play_uci(game: &mut Game, moves: &str) {
    for uci in moves.split_whitespace() {
        let request = uci.parse().unwrap();
        game.make_request(request)
            .unwrap_or_else(|e| panic!("{uci} rejected: {e}"));
    }
}
