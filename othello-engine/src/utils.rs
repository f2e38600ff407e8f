//! Text rendering shared by the board types.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};

/// Column labels, in index order.
pub(crate) const COLUMN_NAMES: &str = "ABCDEFGH";

/// Write 64 cell glyphs as a labelled grid, one board row per line.
/// `cells` must yield exactly 64 items in index order.
pub(crate) fn format_grid<T: Iterator<Item = char>>(mut cells: T, f: &mut Formatter) -> fmt::Result {
    write!(f, "  ")?;
    for name in COLUMN_NAMES.chars() {
        write!(f, " {}", name)?;
    }

    for row in 0..EDGE_LENGTH {
        write!(f, "\n {}", row + 1)?;
        for _ in 0..EDGE_LENGTH {
            write!(f, " {}", cells.next().ok_or(fmt::Error)?)?;
        }
    }

    match cells.next() {
        None => Ok(()),
        Some(_) => Err(fmt::Error),
    }
}
