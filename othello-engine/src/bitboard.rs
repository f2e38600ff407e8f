//! Sets of board locations packed into a single word.
//!
//! Bit `i` corresponds to the cell with row-major index `i`, so the
//! upper-left cell is the LSB and iteration yields ascending indices.

use crate::{utils, Location, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for cheap set operations, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.bits().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

impl From<Location> for Bitboard {
    #[inline]
    fn from(loc: Location) -> Self {
        Self(1 << loc.index())
    }
}

impl Bitboard {
    /// The set with no locations.
    pub const EMPTY: Self = Self(0);

    /// Count the number of locations in the set.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of locations not in the set.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns whether `loc` is in the set.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        !(self & Bitboard::from(loc)).is_empty()
    }

    /// Add `loc` to the set.
    #[inline]
    pub fn insert(&mut self, loc: Location) {
        *self |= Bitboard::from(loc);
    }

    /// Iterate over every cell in index order, yielding membership.
    pub fn bits(self) -> impl Iterator<Item = bool> {
        (0..NUM_SPACES).map(move |index| self.0 & (1u64 << index) != 0)
    }

    /// Split the bits in this bitboard into an array indexed by location.
    pub fn unpack(self) -> [bool; NUM_SPACES] {
        let mut unpacked = [false; NUM_SPACES];
        for (slot, bit) in unpacked.iter_mut().zip(self.bits()) {
            *slot = bit;
        }
        unpacked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut bitboard = Bitboard::EMPTY;
        let loc = Location::from_index(27).unwrap();
        assert!(!bitboard.contains(loc));

        bitboard.insert(loc);
        assert!(bitboard.contains(loc));
        assert_eq!(bitboard.count_occupied(), 1);
        assert_eq!(bitboard.count_empty(), 63);
        assert_eq!(u64::from(bitboard), 1 << 27);
    }

    #[test]
    fn unpack_matches_indices() {
        let bitboard = Bitboard::from(0b101u64);
        let unpacked = bitboard.unpack();
        assert!(unpacked[0]);
        assert!(!unpacked[1]);
        assert!(unpacked[2]);
        assert_eq!(unpacked.iter().filter(|bit| **bit).count(), 2);
    }

    #[test]
    fn display_grid() {
        let bitboard = Bitboard::from(Location::from_index(0).unwrap());
        let rendered = bitboard.to_string();
        assert!(rendered.starts_with("   A B C D E F G H\n 1 # . "));
    }
}
