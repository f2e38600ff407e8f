//! Per-player legal move flags.

use crate::bitboard::Bitboard;
use crate::{rules, Board, Location, LocationList, Player};

/// One legal-move flag per cell for each player, valid for the board it was
/// last recomputed against.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct LegalMoveCache {
    black: Bitboard,
    white: Bitboard,
}

impl LegalMoveCache {
    /// Build a cache with both players computed against `board`.
    pub fn for_board(board: &Board) -> Self {
        let mut cache = Self::default();
        cache.recompute_all(board);
        cache
    }

    /// Overwrite `player`'s flags from scratch.
    pub fn recompute(&mut self, board: &Board, player: Player) {
        *self.flags_mut(player) = rules::legal_moves(board, player);
    }

    pub fn recompute_all(&mut self, board: &Board) {
        for player in Player::BOTH {
            self.recompute(board, player);
        }
    }

    /// Whether `player` has at least one legal move.
    #[inline]
    pub fn has_any(&self, player: Player) -> bool {
        !self.flags(player).is_empty()
    }

    /// All of `player`'s legal moves, in ascending index order.
    #[inline]
    pub fn legal_moves(&self, player: Player) -> LocationList {
        LocationList::from(self.flags(player))
    }

    /// Whether `loc` is flagged legal for `player`.
    #[inline]
    pub fn is_legal(&self, player: Player, loc: Location) -> bool {
        self.flags(player).contains(loc)
    }

    /// Raw flags for `player`.
    #[inline]
    pub fn flags(&self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    fn flags_mut(&mut self, player: Player) -> &mut Bitboard {
        match player {
            Player::Black => &mut self.black,
            Player::White => &mut self.white,
        }
    }
}
