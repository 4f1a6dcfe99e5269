//! Move-tree counting through the public game commands.
//!
//! Every node is reached with [`Game::make_request`] and left with
//! [`Game::undo_move`], so the counts exercise validation, execution and
//! undo together. Use [`GameOptions::rules_only`](crate::GameOptions::rules_only)
//! to keep draw rules from cutting the tree short.
//!
//! Any undo limit on the game is lifted while counting and put back before
//! returning.

use crate::board::{MoveError, MoveRequest};
use crate::game::Game;

/// Number of leaf nodes `depth` plies below the current position.
///
/// The game is left as it was found. An error means an undo failed and the
/// game may be left partway down the tree.
pub fn perft(game: &mut Game, depth: usize) -> Result<u64, MoveError> {
    let limit = game.replace_history_limit(None);
    let nodes = count(game, depth);
    game.replace_history_limit(limit);
    nodes
}

/// Leaf counts split by root move, sorted by long algebraic notation.
pub fn divide(game: &mut Game, depth: usize) -> Result<Vec<(MoveRequest, u64)>, MoveError> {
    let limit = game.replace_history_limit(None);
    let counts = split(game, depth);
    game.replace_history_limit(limit);
    counts
}

fn count(game: &mut Game, depth: usize) -> Result<u64, MoveError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = game.all_legal_moves();
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0;
    for request in moves {
        if game.make_request(request).is_ok() {
            nodes += count(game, depth - 1)?;
            game.undo_move()?;
        }
    }
    Ok(nodes)
}

fn split(game: &mut Game, depth: usize) -> Result<Vec<(MoveRequest, u64)>, MoveError> {
    let mut counts = Vec::new();
    if depth == 0 {
        return Ok(counts);
    }
    for request in game.all_legal_moves() {
        if game.make_request(request).is_ok() {
            counts.push((request, count(game, depth - 1)?));
            game.undo_move()?;
        }
    }
    counts.sort_by_key(|(request, _)| request.to_string());
    Ok(counts)
}
