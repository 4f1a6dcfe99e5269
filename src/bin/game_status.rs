use std::env;
use std::process::ExitCode;

use chess_rules::{Game, MoveRequest};

fn main() -> ExitCode {
    let mut game = Game::new();
    for arg in env::args().skip(1) {
        let request: MoveRequest = match arg.parse() {
            Ok(request) => request,
            Err(err) => {
                eprintln!("{arg}: {err}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(err) = game.make_request(request) {
            eprintln!("{arg}: {err}");
            return ExitCode::FAILURE;
        }
    }

    let legal_moves = game.all_legal_moves();
    println!("side_to_move: {}", game.turn());
    println!("status: {}", game.status());
    println!("{}", game.status().description(Some(game.turn())));
    println!("fen: {}", game.to_fen());
    println!("moves: {}", game.movetext());
    println!("legal_moves: {}", legal_moves.len());
    for request in &legal_moves {
        println!("{request}");
    }
    ExitCode::SUCCESS
}
