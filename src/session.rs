//! Shared game handle for hosts that serve several callers.
//!
//! [`Game`] itself is single-threaded. A host that receives commands from
//! more than one thread wraps it in a [`SharedGame`] so that every command
//! runs to completion before the next one starts.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::game::Game;

/// A cloneable, lock-protected [`Game`].
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<Game>>);

impl SharedGame {
    /// Share a fresh game from the starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a read-only query under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        f(&self.0.lock())
    }

    /// Run a command under the lock.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut self.0.lock())
    }

    /// Copy of the current game state.
    #[must_use]
    pub fn snapshot(&self) -> Game {
        self.with(Game::clone)
    }

    /// Number of handles sharing this game.
    #[inline]
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use crate::game::GameOptions;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let shared = SharedGame::new();
        let other = shared.clone();
        assert_eq!(shared.handle_count(), 2);
        other.with_mut(|game| game.play("e2", "e4", None)).unwrap();
        assert_eq!(shared.with(Game::turn), Color::Black);
        assert_eq!(shared.snapshot().history().len(), 1);
    }

    #[test]
    fn test_commands_from_threads_are_serialized() {
        let game = Game::with_options(GameOptions::default().repetition_limit(None));
        let shared = SharedGame::from(game);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared.with_mut(|game| {
                        for (from, to) in [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")] {
                            game.play(from, to, None).unwrap();
                        }
                    });
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        let game = shared.snapshot();
        assert_eq!(game.history().len(), 16);
        assert_eq!(game.board_fen(), Game::new().board_fen());
        assert_eq!(game.turn(), Color::White);
    }
}
