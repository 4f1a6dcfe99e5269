//! Attack queries over a board: who attacks a square, is a king in check.

use super::types::{Color, Piece, Position};
use super::Board;

impl Board {
    /// Returns true if `color`'s king is attacked. A board without that king is
    /// never in check.
    #[must_use]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        self.king_position(color)
            .is_some_and(|king| self.is_position_under_attack(king, color.opponent()))
    }

    /// Returns true if any piece of `attacker` attacks `pos`.
    #[must_use]
    pub fn is_position_under_attack(&self, pos: Position, attacker: Color) -> bool {
        self.pieces(attacker)
            .any(|piece| self.piece_attacks(piece).contains(&pos))
    }

    /// Every square attacked by `attacker`, without duplicates, a1 first.
    #[must_use]
    pub fn attacked_positions(&self, attacker: Color) -> Vec<Position> {
        let mut attacked = [false; 64];
        for piece in self.pieces(attacker) {
            for pos in self.piece_attacks(piece) {
                attacked[pos.index()] = true;
            }
        }
        Position::all().filter(|p| attacked[p.index()]).collect()
    }

    /// The pieces of `attacker` attacking `pos`.
    #[must_use]
    pub fn attackers_of(&self, pos: Position, attacker: Color) -> Vec<Piece> {
        self.pieces(attacker)
            .filter(|piece| self.piece_attacks(piece).contains(&pos))
            .copied()
            .collect()
    }

    #[must_use]
    pub fn attack_count(&self, pos: Position, attacker: Color) -> usize {
        self.attackers_of(pos, attacker).len()
    }

    /// Play `from -> to` on a copy and report whether `color`'s king is then
    /// attacked. Leaves `self` untouched.
    #[must_use]
    pub fn would_expose_king_to_check(&self, from: Position, to: Position, color: Color) -> bool {
        self.simulate(from, to).is_king_in_check(color)
    }
}
