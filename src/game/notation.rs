//! Move-list text for notation adapters.

use std::fmt::Write as _;

use crate::board::Color;

use super::Game;

impl Game {
    /// Algebraic notation of every ply, oldest first.
    #[must_use]
    pub fn history_algebraic(&self) -> Vec<String> {
        self.history().iter().map(|mv| mv.to_algebraic()).collect()
    }

    /// Numbered move list: `1. e4 e5 2. Nf3`. A game set up with Black to
    /// move starts with `N...`.
    #[must_use]
    pub fn movetext(&self) -> String {
        let (mut color, mut number) = self.origin;
        let mut text = String::new();
        for mv in self.history() {
            if !text.is_empty() {
                text.push(' ');
            }
            match color {
                Color::White => {
                    let _ = write!(text, "{number}. ");
                }
                Color::Black if text.is_empty() => {
                    let _ = write!(text, "{number}... ");
                }
                Color::Black => {}
            }
            text.push_str(&mv.to_algebraic());
            if color == Color::Black {
                number += 1;
            }
            color = color.opponent();
        }
        text
    }
}
