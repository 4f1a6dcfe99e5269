//! Whole-state snapshots backing undo and redo.

use crate::board::{Board, Color, GameStatus, Move};

/// Everything needed to put a game back at one side of a ply.
#[derive(Clone, Debug)]
pub(crate) struct Snapshot {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    pub(crate) status: GameStatus,
    pub(crate) half_move_clock: u32,
    pub(crate) full_move_number: u32,
    /// The ply that leads away from (undo stack) or back to (redo stack) this state.
    pub(crate) mv: Move,
}

impl super::Game {
    pub(crate) fn snapshot(&self, mv: Move) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            turn: self.turn,
            status: self.status,
            half_move_clock: self.half_move_clock,
            full_move_number: self.full_move_number,
            mv,
        }
    }

    pub(crate) fn restore(&mut self, snapshot: Snapshot) -> Move {
        self.board = snapshot.board;
        self.turn = snapshot.turn;
        self.status = snapshot.status;
        self.half_move_clock = snapshot.half_move_clock;
        self.full_move_number = snapshot.full_move_number;
        snapshot.mv
    }

    /// Save the pre-move state, dropping the oldest entry past the history limit.
    pub(crate) fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo_stack.push_back(snapshot);
        if let Some(limit) = self.options.history_limit {
            while self.undo_stack.len() > limit {
                self.undo_stack.pop_front();
            }
        }
    }

    /// Swap in a new undo limit, returning the old one. Existing entries are kept.
    pub(crate) fn replace_history_limit(&mut self, limit: Option<usize>) -> Option<usize> {
        std::mem::replace(&mut self.options.history_limit, limit)
    }
}
