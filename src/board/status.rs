//! Check, mate, stalemate and dead-position detection.

use super::types::{Color, GameStatus, PieceKind};
use super::Board;

impl Board {
    /// Status for the side to move, from check and mobility alone.
    ///
    /// Only ever returns `Playing`, `Check`, `Checkmate` or `Stalemate`;
    /// clock and material draws are layered on by the game.
    #[must_use]
    pub fn detect_game_status(&self, to_move: Color) -> GameStatus {
        let in_check = self.is_king_in_check(to_move);
        let can_move = self.has_legal_moves(to_move);
        match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Playing,
        }
    }

    /// Returns true for material that can never mate: bare kings, king and
    /// one minor piece against a king, or only same-colored bishops besides
    /// the two kings.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let pieces: Vec<_> = self.all_pieces().collect();
        match pieces.len() {
            2 => true,
            3 => pieces.iter().all(|p| {
                matches!(
                    p.kind(),
                    PieceKind::King | PieceKind::Bishop | PieceKind::Knight
                )
            }),
            4 => {
                let bishops: Vec<_> = pieces
                    .iter()
                    .filter(|p| p.kind() == PieceKind::Bishop)
                    .collect();
                let kings = pieces.iter().filter(|p| p.kind() == PieceKind::King).count();
                kings == 2
                    && bishops.len() == 2
                    && bishops[0].position().color_parity() == bishops[1].position().color_parity()
            }
            _ => false,
        }
    }
}
