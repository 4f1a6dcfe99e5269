//! Property-based tests using proptest.

use crate::board::{Color, PieceKind};
use crate::game::{Game, GameOptions, GameRecord};
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `plies` random legal moves, stopping early when the game ends.
fn random_game(seed: u64, plies: usize) -> Game {
    let mut game = Game::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..plies {
        let moves = game.all_legal_moves();
        let Some(&request) = moves.choose(&mut rng) else {
            break;
        };
        game.make_request(request).unwrap();
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: the cached king squares always match a scan of the grid
    #[test]
    fn prop_king_cache_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let game = random_game(seed, num_moves);
        for color in Color::BOTH {
            prop_assert_eq!(game.board().king_position(color), game.board().find_king(color));
            prop_assert_eq!(game.board().count(PieceKind::King, color), 1);
        }
    }

    /// Property: no accepted ply leaves the mover's own king attacked
    #[test]
    fn prop_no_self_check(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let game = random_game(seed, num_moves);
        if let Some(last) = game.last_move() {
            prop_assert!(!game.board().is_king_in_check(last.color()));
        }
    }

    /// Property: undo followed by redo is the identity, and undoing
    /// everything returns to the starting position
    #[test]
    fn prop_undo_redo_inverse(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = random_game(seed, num_moves);
        let fen = game.to_fen();
        let status = game.status();
        let plies = game.history().len();

        for _ in 0..plies {
            game.undo_move().unwrap();
        }
        let fresh = Game::new();
        prop_assert_eq!(game.board(), fresh.board());
        prop_assert_eq!(game.turn(), Color::White);

        for _ in 0..plies {
            game.redo_move().unwrap();
        }
        prop_assert_eq!(game.to_fen(), fen);
        prop_assert_eq!(game.status(), status);
        prop_assert_eq!(game.history().len(), plies);
    }

    /// Property: querying legal moves never changes the game
    #[test]
    fn prop_legal_moves_idempotent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let game = random_game(seed, num_moves);
        let before = game.board().clone();
        let first = game.all_legal_moves();
        let second = game.all_legal_moves();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(game.board(), &before);
    }

    /// Property: every generated move is accepted by the game
    #[test]
    fn prop_legal_moves_are_accepted(seed in seed_strategy(), num_moves in 0..30usize) {
        let game = random_game(seed, num_moves);
        for request in game.all_legal_moves() {
            let mut copy = game.clone();
            prop_assert!(copy.make_request(request).is_ok(), "{} rejected", request);
        }
    }

    /// Property: a persisted record restores the same position and history
    #[cfg(feature = "serde")]
    #[test]
    fn prop_record_round_trip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let game = random_game(seed, num_moves);
        let json = serde_json::to_string(&game.export_record()).unwrap();
        let record: GameRecord = serde_json::from_str(&json).unwrap();
        let restored = Game::from_record(&record).unwrap();
        prop_assert_eq!(restored.to_fen(), game.to_fen());
        prop_assert_eq!(restored.status(), game.status());
        prop_assert_eq!(restored.history(), game.history());
        prop_assert_eq!(restored.all_legal_moves(), game.all_legal_moves());
    }

    /// Property: full FEN export/import reproduces the position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let game = random_game(seed, num_moves);
        let fen = game.to_fen();
        let parsed = Game::from_fen_with_options(&fen, GameOptions::rules_only()).unwrap();
        prop_assert_eq!(parsed.to_fen(), fen);
    }
}
