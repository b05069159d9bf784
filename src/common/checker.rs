//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of rows

use crate::error::{Id3Error, Result};


/// The smallest legal layout: one attribute and the class column.
const MIN_COLUMNS: usize = 2;


/// Check whether the training rows are valid or not.
/// Returns the number of columns (attributes + class) on success.
///
/// The header row decides the layout,
/// every other row must have the same length.
pub(crate) fn check_training_rows<S>(rows: &[Vec<S>]) -> Result<usize>
    where S: AsRef<str>
{
    let header = rows.first().ok_or(Id3Error::EmptyInput)?;
    let n_column = header.len();
    if n_column < MIN_COLUMNS {
        return Err(Id3Error::TooFewColumns(n_column));
    }

    for (row, values) in rows.iter().enumerate().skip(1) {
        check_row_length(row, values.len(), n_column)?;
    }

    Ok(n_column)
}


/// Check whether the length of a row matches the trained layout.
#[inline(always)]
pub(crate) fn check_row_length(row: usize, found: usize, expected: usize)
    -> Result<()>
{
    if found != expected {
        return Err(Id3Error::RowLength { row, expected, found });
    }
    Ok(())
}
