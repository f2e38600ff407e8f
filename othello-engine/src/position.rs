//! A board together with up-to-date legal moves for both players.
//!
//! For correctness, this higher-level interface is preferred: the cache can
//! only be changed alongside the board, so a stale legal-move list is never
//! observable. For raw access, [`Board`] and [`crate::rules`] work directly.

use crate::rules::{self, FlipList};
use crate::{Board, Cell, LegalMoveCache, Location, LocationList, Outcome, Player};
use std::fmt;

/// The complete rules state of an Othello game, minus whose turn it is.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Position {
    board: Board,
    cache: LegalMoveCache,
}

impl Default for Position {
    /// Gets the opening position.
    fn default() -> Self {
        Self::starting()
    }
}

impl Position {
    /// The opening position: four center stones, caches computed.
    pub fn starting() -> Self {
        Self::from_board(Board::starting())
    }

    /// Wrap an arbitrary board, computing both players' legal moves.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            cache: LegalMoveCache::for_board(&board),
        }
    }

    /// Return to the opening position.
    pub fn reset(&mut self) {
        self.board.reset();
        self.board.seed();
        self.refresh();
    }

    /// Recompute both players' legal moves against the current board.
    pub fn refresh(&mut self) {
        self.cache.recompute_all(&self.board);
    }

    /// Play a move for `player`, then recompute both caches.
    /// Returns the number of stones flipped; an illegal move changes nothing
    /// and returns 0. Move-applied observers are notified by the match
    /// orchestrator after this returns, not from here.
    pub fn play(&mut self, player: Player, loc: Location) -> usize {
        let flipped = self.board.apply_move(player, loc);
        if flipped > 0 {
            self.refresh();
        }
        flipped
    }

    /// The underlying board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cached legal moves.
    #[inline]
    pub fn cache(&self) -> &LegalMoveCache {
        &self.cache
    }

    /// The cell at a raw index, or None off the board.
    #[inline]
    pub fn value_at(&self, index: usize) -> Option<Cell> {
        self.board.value_at(index)
    }

    #[inline]
    pub fn has_any_legal_move(&self, player: Player) -> bool {
        self.cache.has_any(player)
    }

    /// `player`'s legal moves in ascending index order.
    #[inline]
    pub fn legal_moves(&self, player: Player) -> LocationList {
        self.cache.legal_moves(player)
    }

    /// Whether a raw index is a cached legal move. Off-board indices are never legal.
    #[inline]
    pub fn is_legal_cached(&self, player: Player, index: usize) -> bool {
        Location::from_index(index).map_or(false, |loc| self.cache.is_legal(player, loc))
    }

    /// Stones `player` would flip at `loc`.
    #[inline]
    pub fn flips(&self, player: Player, loc: Location) -> FlipList {
        rules::evaluate(&self.board, player, loc)
    }

    /// Stone counts as (black, white).
    #[inline]
    pub fn count_pieces(&self) -> (usize, usize) {
        self.board.count_pieces()
    }

    /// The game is over when neither player can move.
    pub fn is_finished(&self) -> bool {
        !self.cache.has_any(Player::Black) && !self.cache.has_any(Player::White)
    }

    /// The result if the game were scored now.
    pub fn outcome(&self) -> Outcome {
        let (black, white) = self.count_pieces();
        Outcome::from_counts(black, white)
    }
}

impl From<Board> for Position {
    fn from(board: Board) -> Self {
        Self::from_board(board)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        let (black, white) = self.count_pieces();
        write!(f, "X: {}  O: {}", black, white)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(index: usize) -> Location {
        Location::from_index(index).unwrap()
    }

    #[test]
    fn starting_caches_ready() {
        let position = Position::starting();
        assert!(position.has_any_legal_move(Player::Black));
        assert!(position.has_any_legal_move(Player::White));
        assert!(position.is_legal_cached(Player::Black, 20));
        assert!(!position.is_legal_cached(Player::Black, 19));
        assert!(!position.is_legal_cached(Player::Black, 64));
        assert!(!position.is_finished());
    }

    #[test]
    fn play_refreshes_both_caches() {
        let mut position = Position::starting();
        assert_eq!(position.play(Player::Black, loc(20)), 1);

        let fresh = LegalMoveCache::for_board(position.board());
        assert_eq!(position.cache(), &fresh);

        let white: Vec<usize> = position
            .legal_moves(Player::White)
            .map(Location::index)
            .collect();
        assert_eq!(white, vec![19, 21, 37]);
    }

    #[test]
    fn illegal_play_changes_nothing() {
        let mut position = Position::starting();
        let before = position;
        assert_eq!(position.play(Player::White, loc(20)), 0);
        assert_eq!(position, before);
    }

    #[test]
    fn reset_restores_opening() {
        let mut position = Position::starting();
        position.play(Player::Black, loc(20));
        position.reset();
        assert_eq!(position, Position::starting());
    }

    #[test]
    fn finished_when_nobody_moves() {
        let mut board = Board::new();
        board.place(Player::Black, loc(0));
        board.place(Player::Black, loc(1));
        board.place(Player::White, loc(63));
        let position = Position::from_board(board);
        assert!(position.is_finished());
        assert_eq!(position.outcome(), Outcome::Winner(Player::Black));
    }
}
