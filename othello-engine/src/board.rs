//! The 8x8 grid of cells and its raw mutators.
//!
//! By convention, index 0 is the upper-left cell (A1) and indices run in
//! row-major order, so row = index / 8 and column = index % 8.

use crate::bitboard::Bitboard;
use crate::{rules, utils, Location, Player, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// The contents of one cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl Cell {
    /// The conventional cell number: 0 empty, 1 black, 2 white.
    pub fn number(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(player) => player.number(),
        }
    }

    fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::Black) => 'X',
            Cell::Occupied(Player::White) => 'O',
        }
    }
}

/// Cell occupancy for the whole board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    cells: [Cell; NUM_SPACES],
}

impl Default for Board {
    /// Gets an empty board.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The four center stones of the opening position.
    pub const STARTING_STONES: [(Player, usize); 4] = [
        (Player::Black, 27),
        (Player::White, 28),
        (Player::White, 35),
        (Player::Black, 36),
    ];

    /// Create an empty board.
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; NUM_SPACES],
        }
    }

    /// Create a board holding the opening position.
    pub fn starting() -> Self {
        let mut board = Self::new();
        board.seed();
        board
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; NUM_SPACES];
    }

    /// Place the four opening stones, leaving other cells untouched.
    pub fn seed(&mut self) {
        for (player, index) in Self::STARTING_STONES {
            self.cells[index] = Cell::Occupied(player);
        }
    }

    /// Put `player`'s stone at `loc`, overwriting whatever is there.
    /// Legality is the caller's responsibility.
    #[inline]
    pub fn place(&mut self, player: Player, loc: Location) {
        self.cells[loc.index()] = Cell::Occupied(player);
    }

    /// The cell at `loc`.
    #[inline]
    pub fn at(&self, loc: Location) -> Cell {
        self.cells[loc.index()]
    }

    /// The cell at a raw index, or None if the index is off the board.
    #[inline]
    pub fn value_at(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Count stones as (black, white).
    pub fn count_pieces(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(black, white), cell| match cell {
                Cell::Occupied(Player::Black) => (black + 1, white),
                Cell::Occupied(Player::White) => (black, white + 1),
                Cell::Empty => (black, white),
            })
    }

    /// Number of occupied cells.
    pub fn count_occupied(&self) -> usize {
        let (black, white) = self.count_pieces();
        black + white
    }

    /// The set of cells holding `player`'s stones.
    pub fn stones(&self, player: Player) -> Bitboard {
        let mut stones = Bitboard::EMPTY;
        for loc in Location::ALL {
            if self.at(loc) == Cell::Occupied(player) {
                stones.insert(loc);
            }
        }
        stones
    }

    /// Place `player`'s stone at `loc` and flip every captured stone.
    /// Returns the number of stones flipped. An illegal move leaves the board
    /// untouched and returns 0, so callers that need to tell "illegal" apart
    /// must check with [`rules::evaluate`] first.
    pub fn apply_move(&mut self, player: Player, loc: Location) -> usize {
        let flips = rules::evaluate(self, player, loc);
        if flips.is_empty() {
            return 0;
        }

        self.place(player, loc);
        for &flipped in flips.iter() {
            self.place(player, flipped);
        }

        flips.len()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells.iter().map(|cell| cell.glyph()), f)
    }
}

#[derive(Debug, Display, Error, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "unexpected character {:?} in board string", _0)]
    InvalidCell(#[error(not(source))] char),
    #[display(fmt = "board string has {} cells, expected 64", _0)]
    WrongLength(#[error(not(source))] usize),
}

/// Parse 64 cells in index order: `X` black, `O` white, `.` or `-` empty.
/// Whitespace is ignored so boards can be written as an 8x8 block.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut count = 0;

        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match c {
                'X' | 'x' | '#' => Cell::Occupied(Player::Black),
                'O' | 'o' => Cell::Occupied(Player::White),
                '.' | '-' => Cell::Empty,
                other => return Err(ParseBoardError::InvalidCell(other)),
            };
            if count < NUM_SPACES {
                board.cells[count] = cell;
            }
            count += 1;
        }

        if count != NUM_SPACES {
            return Err(ParseBoardError::WrongLength(count));
        }
        Ok(board)
    }
}
