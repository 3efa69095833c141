//! Binary matrix input handling.
//!
//! The solver accepts any slice of rows, where a row is anything that can be
//! viewed as a slice of [`Bit`] values. This covers `Vec<Vec<bool>>`,
//! `Vec<[u8; N]>`, `&[&[i32]]` and friends without copying.

use crate::error::{DlxError, Malformation, Result};

/// A single matrix entry that is either 0 or 1.
pub trait Bit: Copy {
    /// Returns the entry as a boolean, or `None` if it is not 0 or 1.
    fn to_bit(self) -> Option<bool>;
}

impl Bit for bool {
    fn to_bit(self) -> Option<bool> {
        Some(self)
    }
}

macro_rules! impl_bit_for_int {
    ($($t:ty),*) => {
        $(
            impl Bit for $t {
                fn to_bit(self) -> Option<bool> {
                    match self {
                        0 => Some(false),
                        1 => Some(true),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_bit_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

/// Checks that `matrix` is non-empty, rectangular and strictly binary.
///
/// Returns `(rows, columns)` on success.
pub fn dimensions<R, T>(matrix: &[R]) -> Result<(usize, usize)>
where
    R: AsRef<[T]>,
    T: Bit,
{
    let first = matrix.first().ok_or(Malformation::NoRows)?;
    let cols = first.as_ref().len();
    if cols == 0 {
        return Err(Malformation::NoColumns.into());
    }

    for (r, row) in matrix.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != cols {
            return Err(DlxError::ragged_row(r, cols, row.len()));
        }
        if let Some(c) = row.iter().position(|v| v.to_bit().is_none()) {
            return Err(DlxError::invalid_entry(r, c));
        }
    }

    Ok((matrix.len(), cols))
}

/// Returns `true` if the given rows of `matrix` cover every column exactly once.
///
/// Rows out of range, repeated rows, all-zero rows and non-binary entries all
/// make the answer `false`. All-zero rows are rejected because they cover
/// nothing: the solver never selects them, so a selection containing one is
/// never a solution it reports.
///
/// # Example
/// ```
/// use dancing_cover::is_exact_cover;
///
/// let matrix = [[1, 0, 0], [0, 1, 1], [1, 1, 0], [0, 0, 1]];
/// assert!(is_exact_cover(&matrix, &[0, 1]));
/// assert!(!is_exact_cover(&matrix, &[0, 2]));
/// ```
pub fn is_exact_cover<R, T>(matrix: &[R], rows: &[usize]) -> bool
where
    R: AsRef<[T]>,
    T: Bit,
{
    let Ok((num_rows, cols)) = dimensions(matrix) else {
        return false;
    };

    let mut covered = vec![false; cols];
    for &r in rows {
        if r >= num_rows {
            return false;
        }
        let mut empty = true;
        for (c, v) in matrix[r].as_ref().iter().enumerate() {
            if v.to_bit() == Some(true) {
                if covered[c] {
                    return false;
                }
                covered[c] = true;
                empty = false;
            }
        }
        if empty {
            return false;
        }
    }
    covered.iter().all(|&x| x)
}

/// Picks the rows named by a solution out of `matrix`, in solution order.
///
/// # Panics
///
/// Panics if a row index is out of range.
pub fn select_rows<'m, R>(matrix: &'m [R], rows: &[usize]) -> Vec<&'m R> {
    rows.iter().map(|&r| &matrix[r]).collect()
}
