//! Cell addressing: indices, coordinates, notation and corner/edge geometry.

use crate::bitboard::Bitboard;
use crate::utils::COLUMN_NAMES;
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

/// A cell on the board, stored as its row-major index (0 is A1, 63 is H8).
/// Only valid indices can be represented.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Location(u8);

/// A set of locations on the Othello board, which iterates in ascending index order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, From, Into)]
pub struct LocationList(Bitboard);

impl Location {
    pub const ALL: [Location; NUM_SPACES] = {
        let mut all = [Location(0); NUM_SPACES];
        let mut index = 0;
        while index < NUM_SPACES {
            all[index] = Location(index as u8);
            index += 1;
        }
        all
    };

    /// Convert from a row-major index. Returns None outside 0..64.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < NUM_SPACES {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Convert into a row-major index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Convert from row and column coordinates. Returns None off the board.
    #[inline]
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < EDGE_LENGTH && col < EDGE_LENGTH {
            Some(Self((row * EDGE_LENGTH + col) as u8))
        } else {
            None
        }
    }

    /// Get the (row, column) coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        index_to_row_col(self.index())
    }

    /// Step `(row_step, col_step)` away from this location, if still on the board.
    #[inline]
    pub fn offset(self, row_step: isize, col_step: isize) -> Option<Self> {
        let (row, col) = self.to_coords();
        let row = row.checked_add_signed(row_step)?;
        let col = col.checked_add_signed(col_step)?;
        Self::from_coords(row, col)
    }

    pub fn is_corner(self) -> bool {
        let (row, col) = self.to_coords();
        is_corner(row, col)
    }

    pub fn is_edge(self) -> bool {
        let (row, col) = self.to_coords();
        is_edge(row, col)
    }
}

/// Split a row-major index into (row, column).
#[inline]
pub fn index_to_row_col(index: usize) -> (usize, usize) {
    (index / EDGE_LENGTH, index % EDGE_LENGTH)
}

/// Whether (row, col) is one of the four corners.
#[inline]
pub fn is_corner(row: usize, col: usize) -> bool {
    const LAST: usize = EDGE_LENGTH - 1;
    (row == 0 || row == LAST) && (col == 0 || col == LAST)
}

/// Whether (row, col) lies on the outer ring but is not a corner.
#[inline]
pub fn is_edge(row: usize, col: usize) -> bool {
    const LAST: usize = EDGE_LENGTH - 1;
    (row == 0 || row == LAST || col == 0 || col == LAST) && !is_corner(row, col)
}

/// Convert this [`Location`] into string notation ("A4").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_coords();
        let col_str = COLUMN_NAMES.chars().nth(col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        write!(f, "{}", row + 1)
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("A4").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = COLUMN_NAMES.find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::from_coords(row - 1, col).ok_or(ParseLocationError)
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list.
    pub fn contains(self, loc: Location) -> bool {
        self.0.contains(loc)
    }

    /// Returns whether the list has no locations.
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

impl ExactSizeIterator for LocationList {
    fn len(&self) -> usize {
        self.0.count_occupied() as usize
    }
}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.0.is_empty() {
            return None;
        }

        let bitboard: u64 = self.0.into();
        let next = Location(bitboard.trailing_zeros() as u8);
        self.0 ^= Bitboard::from(next);

        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, loc) in (*self).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", loc)?;
        }
        f.write_char(']')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_from_index() {
        assert_eq!(Location::from_index(0), Some(Location(0)));
        assert_eq!(Location::from_index(63), Some(Location(63)));
        assert_eq!(Location::from_index(64), None);
    }

    #[test]
    fn index_coords_bijection() {
        for index in 0..NUM_SPACES {
            let loc = Location::from_index(index).unwrap();
            let (row, col) = loc.to_coords();
            assert_eq!(row, index / 8);
            assert_eq!(col, index % 8);
            assert_eq!(Location::from_coords(row, col), Some(loc));
        }
    }

    #[test]
    fn location_from_coords_fail() {
        assert_eq!(Location::from_coords(0, 8), None);
        assert_eq!(Location::from_coords(8, 0), None);
    }

    #[test]
    fn offset_stays_on_board() {
        let corner = Location::from_index(0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Location::from_index(9));

        let right_edge = Location::from_index(15).unwrap();
        assert_eq!(right_edge.offset(0, 1), None);
    }

    #[test]
    fn corners_and_edges() {
        let corners: Vec<usize> = Location::ALL
            .iter()
            .filter(|loc| loc.is_corner())
            .map(|loc| loc.index())
            .collect();
        assert_eq!(corners, vec![0, 7, 56, 63]);

        let edges = Location::ALL.iter().filter(|loc| loc.is_edge()).count();
        assert_eq!(edges, 24);
        assert!(is_edge(0, 3));
        assert!(!is_edge(0, 0));
        assert!(!is_edge(3, 3));
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(Location::from_str("A1"), Ok(Location(0)));
        assert_eq!(Location::from_str("h8"), Ok(Location(63)));
        assert_eq!(Location::from_str("D7"), Location::from_coords(6, 3).ok_or(ParseLocationError));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("A12"), Err(ParseLocationError));
        assert_eq!(Location::from_str("AA"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A9"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("I5"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location(0).to_string(), "A1");
        assert_eq!(Location(63).to_string(), "H8");
        assert_eq!(Location(20).to_string(), "E3");
        assert_eq!(Location::from_str("F6").unwrap().to_string(), "F6");
    }

    #[test]
    fn list_iterates_ascending() {
        let mut bitboard = Bitboard::EMPTY;
        for index in [44, 19, 37, 26] {
            bitboard.insert(Location(index));
        }
        let list = LocationList::from(bitboard);
        assert_eq!(list.len(), 4);
        let indices: Vec<usize> = list.map(Location::index).collect();
        assert_eq!(indices, vec![19, 26, 37, 44]);
        assert_eq!(list.to_string(), "[D3, C4, F5, E6]");
    }
}
