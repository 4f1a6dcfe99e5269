//! The game aggregate: board, turn, status, clocks, history and undo/redo.
//!
//! # Example
//! ```
//! use chess_rules::{Game, GameStatus, Color};
//!
//! let mut game = Game::new();
//! for (from, to) in [("e2", "e4"), ("e7", "e5"), ("d1", "h5"), ("b8", "c6"),
//!                    ("f1", "c4"), ("g8", "f6"), ("h5", "f7")] {
//!     game.play(from, to, None).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Checkmate);
//! assert_eq!(game.turn(), Color::Black);
//! assert_eq!(game.winner(), Some(Color::White));
//! ```

mod fen;
mod notation;
mod options;
mod record;
mod snapshot;

use std::collections::VecDeque;

use crate::board::{
    castling_side, is_castling_move, king_destination, rook_destination, rook_origin, Board,
    Captured, CastlingSide, Color, GameStatus, Move, MoveError, MoveRequest, Piece, PieceKind,
    Position,
};
use crate::logging::{debug, trace};
use crate::zobrist::position_key;

pub use options::{GameOptions, DEFAULT_FIFTY_MOVE_LIMIT, DEFAULT_REPETITION_LIMIT};
pub use record::GameRecord;
use snapshot::Snapshot;

/// A game in progress: the only way to change a board under the rules.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    status: GameStatus,
    history: Vec<Move>,
    half_move_clock: u32,
    full_move_number: u32,
    undo_stack: VecDeque<Snapshot>,
    redo_stack: Vec<Snapshot>,
    /// Key of every position reached, the current one last.
    position_keys: Vec<u64>,
    /// Side to move and move number before the first recorded ply.
    origin: (Color, u32),
    options: GameOptions,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(GameOptions::default())
    }

    /// A fresh game with custom draw rules.
    #[must_use]
    pub fn with_options(options: GameOptions) -> Self {
        Self::from_parts(Board::new(), Color::White, 0, 1, options)
    }

    /// Start playing from an arbitrary board with `turn` to move.
    ///
    /// Status is derived from the position.
    #[must_use]
    pub fn from_position(board: Board, turn: Color) -> Self {
        Self::from_parts(board, turn, 0, 1, GameOptions::default())
    }

    pub(crate) fn from_parts(
        board: Board,
        turn: Color,
        half_move_clock: u32,
        full_move_number: u32,
        options: GameOptions,
    ) -> Self {
        let mut game = Game {
            position_keys: vec![position_key(&board, turn)],
            board,
            turn,
            status: GameStatus::Playing,
            history: Vec::new(),
            half_move_clock,
            full_move_number,
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            origin: (turn, full_move_number),
            options,
        };
        game.update_status();
        game
    }

    /// Back to the starting position, keeping the options.
    pub fn reset(&mut self) {
        *self = Self::with_options(self.options);
        debug!("game reset");
    }

    /// Alias of [`Game::reset`].
    pub fn start_new_game(&mut self) {
        self.reset();
    }

    // ---- queries ----

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Completed plies, oldest first.
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    #[inline]
    #[must_use]
    pub fn half_move_clock(&self) -> u32 {
        self.half_move_clock
    }

    #[inline]
    #[must_use]
    pub fn full_move_number(&self) -> u32 {
        self.full_move_number
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.board.piece_at(pos)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// The side that won, if the game ended decisively.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self.status {
            // The side to move is the one that got mated or resigned.
            GameStatus::Checkmate | GameStatus::Resigned => Some(self.turn.opponent()),
            _ => None,
        }
    }

    /// How many times the current position has occurred.
    #[must_use]
    pub fn repetition_count(&self) -> usize {
        match self.position_keys.last() {
            Some(current) => self.position_keys.iter().filter(|&k| k == current).count(),
            None => 0,
        }
    }

    /// Kinds of `color`'s pieces that have been captured, in capture order.
    #[must_use]
    pub fn captured_pieces(&self, color: Color) -> Vec<PieceKind> {
        self.history
            .iter()
            .filter_map(Move::captured)
            .filter(|c| c.color == color)
            .map(|c| c.kind)
            .collect()
    }

    /// Legal destinations for the piece on `pos`, castling destinations
    /// included. Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self, pos: Position) -> Vec<Position> {
        if self.is_game_over() {
            return Vec::new();
        }
        let Some(piece) = self.board.piece_at(pos) else {
            return Vec::new();
        };
        let mut moves = self.board.legal_moves(pos);
        if piece.kind() == PieceKind::King {
            for side in self.board.castling_options(piece.color()) {
                moves.push(king_destination(piece.color(), side));
            }
        }
        moves
    }

    /// [`Game::legal_moves`] for a square given in algebraic notation.
    pub fn legal_moves_at(&self, square: &str) -> Result<Vec<Position>, MoveError> {
        let pos = Position::from_notation(square)?;
        Ok(self.legal_moves(pos))
    }

    /// Every legal move for the side to move, each promotion expanded into
    /// one request per promotion piece.
    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<MoveRequest> {
        if self.is_game_over() {
            return Vec::new();
        }
        let mut requests = Vec::new();
        for piece in self.board.pieces(self.turn) {
            let from = piece.position();
            for to in self.legal_moves(from) {
                if piece.kind() == PieceKind::Pawn && to.row() == self.turn.pawn_promotion_rank() {
                    requests.extend(
                        PieceKind::PROMOTIONS
                            .iter()
                            .map(|&kind| MoveRequest::new(from, to).with_promotion(kind)),
                    );
                } else {
                    requests.push(MoveRequest::new(from, to));
                }
            }
        }
        requests
    }

    // ---- commands ----

    /// Play a move given as algebraic squares.
    pub fn play(
        &mut self,
        from: &str,
        to: &str,
        promotion: Option<PieceKind>,
    ) -> Result<Move, MoveError> {
        let from = Position::from_notation(from)?;
        let to = Position::from_notation(to)?;
        self.make_move(from, to, promotion)
    }

    /// Play `from -> to`; `promotion` is required when a pawn reaches the last
    /// rank and ignored otherwise.
    ///
    /// On failure nothing changes.
    pub fn make_move(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> Result<Move, MoveError> {
        let result = self.try_move(from, to, promotion);
        match &result {
            Ok(mv) => debug!("{} played {} ({})", mv.color(), mv, mv.to_uci()),
            Err(err) => debug!("rejected {}{}: {}", from, to, err),
        }
        result
    }

    /// Play a [`MoveRequest`].
    pub fn make_request(&mut self, request: MoveRequest) -> Result<Move, MoveError> {
        self.make_move(request.from, request.to, request.promotion)
    }

    fn try_move(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> Result<Move, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameAlreadyOver {
                status: self.status,
            });
        }
        let piece = *self
            .board
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtSource { square: from })?;
        if piece.color() != self.turn {
            return Err(MoveError::WrongTurnOwnership { square: from });
        }

        if piece.kind() == PieceKind::King && is_castling_move(from, to) {
            return self.execute_castling(from, to);
        }

        self.board.validate_move(from, to, self.turn)?;

        let promotes = piece.kind() == PieceKind::Pawn && to.row() == self.turn.pawn_promotion_rank();
        let promotion = if promotes {
            let kind = promotion.ok_or(MoveError::PromotionPieceRequired { square: to })?;
            if !kind.is_promotion_target() {
                return Err(MoveError::InvalidPromotionPiece { kind });
            }
            Some(kind)
        } else {
            None
        };

        let en_passant = self.board.is_en_passant_capture(from, to);
        let snapshot = self.snapshot(Move::standard(from, to, piece.kind(), piece.color()));

        self.board.clear_double_steps();
        let captured = if en_passant {
            self.board.remove_piece(Position::at(to.col(), from.row()))
        } else {
            None
        };
        let captured = self.board.move_piece(from, to).or(captured).map(|p| Captured {
            kind: p.kind(),
            color: p.color(),
        });

        let mv = if let Some(kind) = promotion {
            if let Some(pawn) = self.board.remove_piece(to) {
                self.board.place_piece(pawn.promoted(kind));
            }
            Move::promotion(from, to, piece.color(), kind, captured)
        } else if en_passant {
            Move::en_passant(from, to, piece.color())
        } else if let Some(captured) = captured {
            Move::capture(from, to, piece.kind(), piece.color(), captured)
        } else {
            Move::standard(from, to, piece.kind(), piece.color())
        };

        self.finish_ply(Snapshot { mv, ..snapshot });
        Ok(mv)
    }

    /// King and rook move together as one ply.
    fn execute_castling(&mut self, king_from: Position, king_to: Position) -> Result<Move, MoveError> {
        let color = self.turn;
        let side: CastlingSide = castling_side(king_from, king_to);
        self.board.check_castle(color, side)?;

        let rook_from = rook_origin(color, side);
        let rook_to = rook_destination(color, side);
        let mv = Move::castling(king_from, king_to, rook_from, rook_to, side, color);
        let snapshot = self.snapshot(mv);

        self.board.clear_double_steps();
        self.board.move_piece(king_from, king_to);
        self.board.move_piece(rook_from, rook_to);

        self.finish_ply(snapshot);
        Ok(mv)
    }

    /// Bookkeeping shared by every executed ply. `snapshot` holds the state
    /// from before the move and the move itself.
    fn finish_ply(&mut self, snapshot: Snapshot) {
        let mv = snapshot.mv;
        self.push_undo(snapshot);
        self.redo_stack.clear();
        self.history.push(mv);

        if mv.is_irreversible() {
            self.half_move_clock = 0;
        } else {
            self.half_move_clock = self.half_move_clock.saturating_add(1);
        }
        if mv.color() == Color::Black {
            self.full_move_number = self.full_move_number.saturating_add(1);
        }
        self.turn = self.turn.opponent();
        self.position_keys.push(position_key(&self.board, self.turn));
        self.update_status();
    }

    /// Recompute status after a ply: fifty-move rule, then dead position,
    /// then repetition, then check/mate/stalemate.
    fn update_status(&mut self) {
        let previous = self.status;
        self.status = if self.half_move_clock >= self.options.fifty_move_limit {
            GameStatus::DrawByFiftyMoveRule
        } else if self.options.insufficient_material && self.board.is_insufficient_material() {
            GameStatus::DrawByInsufficientMaterial
        } else if self
            .options
            .repetition_limit
            .is_some_and(|limit| self.repetition_count() >= limit as usize)
        {
            GameStatus::DrawByRepetition
        } else {
            self.board.detect_game_status(self.turn)
        };
        if self.status != previous {
            trace!("status {} -> {}", previous, self.status);
        }
    }

    /// Take back the last ply.
    pub fn undo_move(&mut self) -> Result<(), MoveError> {
        let snapshot = self.undo_stack.pop_back().ok_or(MoveError::NothingToUndo)?;
        let redo = self.snapshot(snapshot.mv);
        self.redo_stack.push(redo);
        let mv = self.restore(snapshot);
        self.history.pop();
        self.position_keys.pop();
        debug!("undid {}", mv);
        Ok(())
    }

    /// Replay the last undone ply.
    pub fn redo_move(&mut self) -> Result<(), MoveError> {
        let snapshot = self.redo_stack.pop().ok_or(MoveError::NothingToRedo)?;
        let undo = self.snapshot(snapshot.mv);
        self.push_undo(undo);
        let mv = self.restore(snapshot);
        self.history.push(mv);
        self.position_keys.push(position_key(&self.board, self.turn));
        debug!("redid {}", mv);
        Ok(())
    }

    /// The side to move resigns.
    pub fn resign(&mut self) -> Result<(), MoveError> {
        self.end_by(GameStatus::Resigned)
    }

    /// Both sides agree to a draw.
    pub fn offer_draw(&mut self) -> Result<(), MoveError> {
        self.end_by(GameStatus::DrawByAgreement)
    }

    fn end_by(&mut self, status: GameStatus) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameAlreadyOver {
                status: self.status,
            });
        }
        debug!("{} ends the game: {}", self.turn, status);
        self.status = status;
        Ok(())
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Game Status: {}", self.status)?;
        writeln!(f, "Current Turn: {}", self.turn)?;
        writeln!(f, "Full Move: {}", self.full_move_number)?;
        writeln!(f, "Half Move Clock: {}", self.half_move_clock)?;
        writeln!(f, "Total Moves: {}", self.history.len())?;
        writeln!(f)?;
        write!(f, "{}", self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn play_all(game: &mut Game, moves: &[(&str, &str)]) {
        for (from, to) in moves {
            game.play(from, to, None)
                .unwrap_or_else(|e| panic!("{from}{to} rejected: {e}"));
        }
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.half_move_clock(), 0);
        assert_eq!(game.full_move_number(), 1);
        assert_eq!(game.all_legal_moves().len(), 20);
        assert!(!game.can_undo());
        assert!(!game.can_redo());
    }

    #[test]
    fn test_counters_and_turn() {
        let mut game = Game::new();
        play_all(&mut game, &[("g1", "f3")]);
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.half_move_clock(), 1);
        assert_eq!(game.full_move_number(), 1);
        play_all(&mut game, &[("e7", "e5")]);
        assert_eq!(game.half_move_clock(), 0);
        assert_eq!(game.full_move_number(), 2);
    }

    #[test]
    fn test_rejections_do_not_mutate() {
        let mut game = Game::new();
        let before = game.board().clone();
        assert_eq!(
            game.play("e7", "e5", None),
            Err(MoveError::WrongTurnOwnership { square: sq("e7") })
        );
        assert_eq!(
            game.play("e3", "e4", None),
            Err(MoveError::NoPieceAtSource { square: sq("e3") })
        );
        assert!(matches!(
            game.play("e2", "e9", None),
            Err(MoveError::InvalidPosition(_))
        ));
        assert_eq!(game.board(), &before);
        assert!(game.history().is_empty());
        assert!(!game.can_undo());
    }

    #[test]
    fn test_capture_recorded() {
        let mut game = Game::new();
        play_all(&mut game, &[("e2", "e4"), ("d7", "d5")]);
        let mv = game.play("e4", "d5", None).unwrap();
        assert_eq!(mv.to_algebraic(), "exd5");
        assert_eq!(game.captured_pieces(Color::Black), vec![PieceKind::Pawn]);
        assert!(game.captured_pieces(Color::White).is_empty());
    }

    #[test]
    fn test_castling_execution() {
        let mut game = Game::new();
        play_all(
            &mut game,
            &[("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6"), ("f1", "c4"), ("g8", "f6")],
        );
        assert!(game.legal_moves(sq("e1")).contains(&sq("g1")));
        let mv = game.play("e1", "g1", None).unwrap();
        assert!(mv.is_castling());
        assert_eq!(mv.to_algebraic(), "O-O");
        assert!(game.piece_at(sq("g1")).unwrap().is(PieceKind::King, Color::White));
        assert!(game.piece_at(sq("f1")).unwrap().is(PieceKind::Rook, Color::White));
        assert!(game.piece_at(sq("h1")).is_none());
        assert_eq!(game.board().king_position(Color::White), Some(sq("g1")));
        assert_eq!(game.half_move_clock(), 5);
    }

    #[test]
    fn test_castling_blocked_reports_reason() {
        let mut game = Game::new();
        assert_eq!(
            game.play("e1", "g1", None),
            Err(MoveError::CastlingBlocked {
                side: CastlingSide::Kingside,
                reason: crate::board::CastlingBlock::PathObstructed,
            })
        );
    }

    #[test]
    fn test_promotion_requires_piece() {
        let board = Board::from_fen("8/P6k/8/8/8/8/8/4K3").unwrap();
        let mut game = Game::from_position(board, Color::White);
        let before = game.board().clone();
        assert_eq!(
            game.play("a7", "a8", None),
            Err(MoveError::PromotionPieceRequired { square: sq("a8") })
        );
        assert_eq!(
            game.play("a7", "a8", Some(PieceKind::King)),
            Err(MoveError::InvalidPromotionPiece {
                kind: PieceKind::King
            })
        );
        assert_eq!(game.board(), &before);

        let mv = game.play("a7", "a8", Some(PieceKind::Queen)).unwrap();
        assert_eq!(mv.to_algebraic(), "a8=Q");
        assert!(game.piece_at(sq("a8")).unwrap().is(PieceKind::Queen, Color::White));
        assert_eq!(game.half_move_clock(), 0);
    }

    #[test]
    fn test_undo_redo() {
        let mut game = Game::new();
        assert_eq!(game.undo_move(), Err(MoveError::NothingToUndo));
        assert_eq!(game.redo_move(), Err(MoveError::NothingToRedo));

        play_all(&mut game, &[("e2", "e4")]);
        let after = game.board().clone();
        game.undo_move().unwrap();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.turn(), Color::White);
        assert!(game.history().is_empty());
        game.redo_move().unwrap();
        assert_eq!(game.board(), &after);
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_new_move_clears_redo() {
        let mut game = Game::new();
        play_all(&mut game, &[("e2", "e4")]);
        game.undo_move().unwrap();
        assert!(game.can_redo());
        play_all(&mut game, &[("d2", "d4")]);
        assert!(!game.can_redo());
    }

    #[test]
    fn test_history_limit_caps_undo() {
        let mut game = Game::with_options(GameOptions::default().history_limit(Some(2)));
        play_all(&mut game, &[("e2", "e4"), ("e7", "e5"), ("g1", "f3")]);
        assert!(game.undo_move().is_ok());
        assert!(game.undo_move().is_ok());
        assert_eq!(game.undo_move(), Err(MoveError::NothingToUndo));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_move_counters_saturate() {
        let mut game = Game::from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 4294967295").unwrap();
        game.play("e8", "d7", None).unwrap();
        assert_eq!(game.full_move_number(), u32::MAX);
        assert_eq!(game.half_move_clock(), 1);
        game.play("a1", "a2", None).unwrap();
        assert_eq!(game.full_move_number(), u32::MAX);
        game.undo_move().unwrap();
        game.undo_move().unwrap();
        assert_eq!(game.to_fen(), "4k3/8/8/8/8/8/8/R3K3 b - - 0 4294967295");
    }

    #[test]
    fn test_resign_and_draw() {
        let mut game = Game::new();
        game.resign().unwrap();
        assert_eq!(game.status(), GameStatus::Resigned);
        assert_eq!(game.winner(), Some(Color::Black));
        assert!(matches!(
            game.offer_draw(),
            Err(MoveError::GameAlreadyOver { .. })
        ));
        assert!(matches!(
            game.play("e2", "e4", None),
            Err(MoveError::GameAlreadyOver {
                status: GameStatus::Resigned
            })
        ));

        game.reset();
        game.offer_draw().unwrap();
        assert_eq!(game.status(), GameStatus::DrawByAgreement);
        assert_eq!(game.winner(), None);
        assert!(game.legal_moves(sq("e2")).is_empty());
    }

    #[test]
    fn test_repetition_draw() {
        let mut game = Game::new();
        let shuffle = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];
        play_all(&mut game, &shuffle);
        assert_eq!(game.repetition_count(), 2);
        assert_eq!(game.status(), GameStatus::Playing);
        play_all(&mut game, &shuffle);
        assert_eq!(game.repetition_count(), 3);
        assert_eq!(game.status(), GameStatus::DrawByRepetition);
    }

    #[test]
    fn test_repetition_disabled() {
        let mut game = Game::with_options(GameOptions::default().repetition_limit(None));
        let shuffle = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];
        play_all(&mut game, &shuffle);
        play_all(&mut game, &shuffle);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn test_fifty_move_rule() {
        let options = GameOptions::default()
            .fifty_move_limit(4)
            .repetition_limit(None);
        let mut game = Game::with_options(options);
        play_all(&mut game, &[("g1", "f3"), ("g8", "f6"), ("f3", "g1")]);
        assert_eq!(game.status(), GameStatus::Playing);
        play_all(&mut game, &[("f6", "g8")]);
        assert_eq!(game.status(), GameStatus::DrawByFiftyMoveRule);
    }

    #[test]
    fn test_display_summary() {
        let text = Game::new().to_string();
        assert!(text.starts_with("Game Status: playing"));
        assert!(text.contains("Current Turn: White"));
    }
}
