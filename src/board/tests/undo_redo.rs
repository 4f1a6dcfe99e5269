//! Undo/redo correctness tests.

use super::{play_uci, sq};
use crate::board::{Color, GameStatus, MoveError, PieceKind};
use crate::game::Game;

#[test]
fn test_undo_restores_full_state() {
    let mut game = Game::new();
    play_uci(&mut game, "e2e4 e7e5 g1f3");
    let fen = game.to_fen();
    play_uci(&mut game, "b8c6");
    game.undo_move().unwrap();
    assert_eq!(game.to_fen(), fen);
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.history().len(), 3);
}

#[test]
fn test_undo_all_returns_to_start() {
    let mut game = Game::new();
    play_uci(&mut game, "d2d4 d7d5 c2c4 d5c4 e2e3 b7b5");
    while game.can_undo() {
        game.undo_move().unwrap();
    }
    assert_eq!(game.board(), Game::new().board());
    assert_eq!(game.full_move_number(), 1);
    assert_eq!(game.half_move_clock(), 0);
    assert!(game.history().is_empty());
}

#[test]
fn test_undo_castling_restores_rights() {
    let mut game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    play_uci(&mut game, "e1g1");
    assert!(game.to_fen().contains(" kq "));
    game.undo_move().unwrap();
    assert!(game.piece_at(sq("h1")).unwrap().is(PieceKind::Rook, Color::White));
    assert!(game.piece_at(sq("f1")).is_none());
    assert_eq!(game.to_fen(), "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
}

#[test]
fn test_undo_en_passant_restores_victim_and_window() {
    let mut game = Game::new();
    play_uci(&mut game, "e2e4 a7a6 e4e5 d7d5 e5d6");
    assert!(game.piece_at(sq("d5")).is_none());
    game.undo_move().unwrap();
    assert!(game.piece_at(sq("d5")).unwrap().is(PieceKind::Pawn, Color::Black));
    assert!(game.legal_moves(sq("e5")).contains(&sq("d6")));
}

#[test]
fn test_undo_promotion() {
    let mut game = Game::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    game.play("b7", "b8", Some(PieceKind::Queen)).unwrap();
    game.undo_move().unwrap();
    assert!(game.piece_at(sq("b7")).unwrap().is(PieceKind::Pawn, Color::White));
    assert!(game.piece_at(sq("b8")).is_none());
}

#[test]
fn test_undo_checkmate_reopens_game() {
    let mut game = Game::new();
    play_uci(&mut game, "f2f3 e7e5 g2g4 d8h4");
    assert_eq!(game.status(), GameStatus::Checkmate);
    game.undo_move().unwrap();
    assert_eq!(game.status(), GameStatus::Playing);
    assert!(!game.all_legal_moves().is_empty());
    game.redo_move().unwrap();
    assert_eq!(game.status(), GameStatus::Checkmate);
}

#[test]
fn test_redo_chain() {
    let mut game = Game::new();
    play_uci(&mut game, "e2e4 e7e5 g1f3 b8c6");
    let fen = game.to_fen();
    for _ in 0..4 {
        game.undo_move().unwrap();
    }
    for _ in 0..4 {
        game.redo_move().unwrap();
    }
    assert_eq!(game.to_fen(), fen);
    assert_eq!(game.redo_move(), Err(MoveError::NothingToRedo));
    assert_eq!(game.movetext(), "1. e4 e5 2. Nf3 Nc6");
}

#[test]
fn test_undo_after_resignation_takes_back_last_ply() {
    let mut game = Game::new();
    play_uci(&mut game, "e2e4");
    game.resign().unwrap();
    game.undo_move().unwrap();
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.turn(), Color::White);
}
