//! Miscellaneous project utilities.

use itertools::Itertools;
use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format row-major cell symbols into a labelled grid, `columns` to a row.
/// `columns` must be between 1 and 25.
pub fn format_grid<T: Iterator<Item = char>>(
    piece_iter: T,
    columns: usize,
    f: &mut Formatter,
) -> fmt::Result {
    format_column_labels(columns, f)?;
    format_row_separator(columns, f)?;

    for (row, pieces) in piece_iter.chunks(columns).into_iter().enumerate() {
        write!(f, "{:2}|", row + 1)?;
        for piece in pieces {
            write!(f, "{}|", piece)?;
        }
        writeln!(f, "{:<2}", row + 1)?;
        format_row_separator(columns, f)?;
    }

    format_column_labels(columns, f)
}

fn format_column_labels(columns: usize, f: &mut Formatter) -> fmt::Result {
    f.write_str("   ")?;
    for label in (b'a'..).take(columns) {
        write!(f, "{} ", label as char)?;
    }
    f.write_str("  \n")
}

fn format_row_separator(columns: usize, f: &mut Formatter) -> fmt::Result {
    write!(f, "  +{}\n", "-+".repeat(columns))
}
