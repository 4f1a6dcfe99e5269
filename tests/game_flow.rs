use chess_rules::{
    Color, Game, GameOptions, GameRecord, GameStatus, MoveError, PieceKind, Position, SharedGame,
};

fn sq(s: &str) -> Position {
    s.parse().unwrap()
}

fn play(game: &mut Game, moves: &str) {
    for uci in moves.split_whitespace() {
        let request = uci.parse().unwrap();
        game.make_request(request)
            .unwrap_or_else(|e| panic!("{uci} rejected: {e}"));
    }
}

#[test]
fn opening_has_twenty_moves_for_each_side() {
    let mut game = Game::new();
    assert_eq!(game.all_legal_moves().len(), 20);
    play(&mut game, "e2e4");
    assert_eq!(game.all_legal_moves().len(), 20);
    assert_eq!(game.legal_moves_at("g8").unwrap().len(), 2);
    assert!(matches!(
        game.legal_moves_at("z9"),
        Err(MoveError::InvalidPosition(_))
    ));
}

#[test]
fn scholars_mate() {
    let mut game = Game::new();
    play(&mut game, "e2e4 e7e5 d1h5 b8c6 f1c4 g8f6 h5f7");
    assert_eq!(game.status(), GameStatus::Checkmate);
    assert_eq!(game.winner(), Some(Color::White));
    assert_eq!(game.movetext(), "1. e4 e5 2. Qh5 Nc6 3. Bc4 Nf6 4. Qxf7");
    assert_eq!(
        game.status().description(Some(game.turn())),
        "Checkmate! Game over."
    );
    assert!(matches!(
        game.play("e8", "f7", None),
        Err(MoveError::GameAlreadyOver {
            status: GameStatus::Checkmate
        })
    ));
}

#[test]
fn castling_both_sides() {
    let mut game = Game::new();
    play(
        &mut game,
        "e2e4 d7d5 g1f3 d8d6 f1e2 c8e6 e1g1 b8c6 d2d3 e8c8",
    );
    assert!(game.piece_at(sq("g1")).unwrap().is(PieceKind::King, Color::White));
    assert!(game.piece_at(sq("f1")).unwrap().is(PieceKind::Rook, Color::White));
    assert!(game.piece_at(sq("c8")).unwrap().is(PieceKind::King, Color::Black));
    assert!(game.piece_at(sq("d8")).unwrap().is(PieceKind::Rook, Color::Black));
    let notation = game.history_algebraic();
    assert_eq!(notation[6], "O-O");
    assert_eq!(notation[9], "O-O-O");
    assert!(game.to_fen().contains(" w - - "));
}

#[test]
fn en_passant_window_closes_after_one_ply() {
    let mut game = Game::new();
    play(&mut game, "e2e4 g8f6 e4e5 d7d5");
    assert!(game.to_fen().contains(" d6 "));
    assert!(game.legal_moves(sq("e5")).contains(&sq("d6")));

    play(&mut game, "b1c3 b8c6");
    assert!(game.to_fen().contains(" - 2 4"));
    assert!(!game.legal_moves(sq("e5")).contains(&sq("d6")));
}

#[test]
fn promotion_flow() {
    let mut game = Game::from_fen("8/4P1k1/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let before = game.to_fen();
    assert_eq!(
        game.play("e7", "e8", None),
        Err(MoveError::PromotionPieceRequired { square: sq("e8") })
    );
    assert_eq!(game.to_fen(), before);
    let mv = game.play("e7", "e8", Some(PieceKind::Rook)).unwrap();
    assert_eq!(mv.to_uci(), "e7e8r");
    assert!(game.piece_at(sq("e8")).unwrap().is(PieceKind::Rook, Color::White));
}

#[test]
fn undo_redo_through_a_game() {
    let mut game = Game::new();
    play(&mut game, "e2e4 e7e5 g1f3 b8c6 f1b5");
    let fen = game.to_fen();
    game.undo_move().unwrap();
    game.undo_move().unwrap();
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.turn(), Color::Black);
    game.redo_move().unwrap();
    game.redo_move().unwrap();
    assert_eq!(game.to_fen(), fen);
    assert!(!game.can_redo());
}

#[cfg(feature = "serde")]
#[test]
fn record_survives_json() {
    let mut game = Game::new();
    play(&mut game, "e2e4 c7c5 g1f3 d7d6 d2d4 c5d4 f3d4");
    let json = serde_json::to_string_pretty(&game.export_record()).unwrap();
    let record: GameRecord = serde_json::from_str(&json).unwrap();
    let mut restored = Game::from_record(&record).unwrap();

    assert_eq!(restored.to_fen(), game.to_fen());
    assert_eq!(restored.captured_pieces(Color::White), vec![PieceKind::Pawn]);
    assert_eq!(restored.captured_pieces(Color::Black), vec![PieceKind::Pawn]);
    assert_eq!(restored.undo_move(), Err(MoveError::NothingToUndo));

    play(&mut restored, "g8f6");
    play(&mut game, "g8f6");
    assert_eq!(restored.to_fen(), game.to_fen());
}

#[test]
fn options_change_draw_rules() {
    let options = GameOptions::default()
        .fifty_move_limit(10)
        .repetition_limit(None);
    let mut game = Game::with_options(options);
    for _ in 0..2 {
        play(&mut game, "g1f3 g8f6 f3g1 f6g8");
    }
    assert_eq!(game.status(), GameStatus::Playing);
    play(&mut game, "b1c3 b8c6");
    assert_eq!(game.status(), GameStatus::DrawByFiftyMoveRule);
    game.reset();
    assert_eq!(game.options().fifty_move_limit, 10);
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn shared_game_serializes_commands() {
    let shared = SharedGame::new();
    shared.with_mut(|game| play(game, "d2d4 d7d5"));
    let fen = shared.with(Game::to_fen);
    assert!(fen.starts_with("rnbqkbnr/ppp1pppp/8/3p4/3P4/"));
}
