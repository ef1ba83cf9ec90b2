/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Gauss-Jordan elimination built entirely out of elementary row operations.

use crate::matrix::Matrix;
use log::{debug, trace};

/// Result of row reduction, with some extra tidbits.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    /// The reduced matrix.
    pub matrix: Matrix,

    /// The (1-based) column of the pivot placed in each row, top to bottom.
    ///
    /// Rows past the end of this list hold no pivot.
    pub pivot_columns: Vec<usize>,

    /// Whether the forward phase ran out of columns while looking for a pivot.
    ///
    /// When this happens the matrix is returned exactly as the forward phase left it;
    /// the entries above the pivots are **not** cleared.
    pub terminated_early: bool,
}

impl Reduction {
    /// The number of pivots that were placed.
    pub fn rank(&self) -> usize { self.pivot_columns.len() }
}

/// Provides conversion into reduced row echelon form.
pub trait RowReduce {
    /// Row-reduce a copy of self.
    ///
    /// Every pivot is scaled to exactly `1.0` and the rest of its column is cleared
    /// by subtracting multiples of the pivot row.  Zero pivots are handled by first
    /// swapping in a lower row with a nonzero entry, and failing that, by moving on
    /// to the next column.  Applying this to its own output changes nothing.
    fn row_reduced(&self) -> Matrix
    { self.row_reduce_decomp().matrix }

    /// Row-reduce a copy of self and report where the pivots ended up.
    fn row_reduce_decomp(&self) -> Reduction;
}

impl RowReduce for Matrix {
    fn row_reduce_decomp(&self) -> Reduction { row_reduce(self) }
}

pub fn row_reduce(input: &Matrix) -> Reduction {
    let (rows, cols) = (input.num_rows(), input.num_cols());
    let mut a = input.clone();
    let mut pivot_columns = Vec::with_capacity(rows);

    // Forward phase: produce ones on the pivots and zeros beneath them.
    //
    // The pivot for row `p` is searched for in column `p + col_offset`.
    // (0-based here; logged indices are 1-based)
    let mut col_offset = 0;
    let mut p = 0;
    while p < rows && p + col_offset < cols {
        let divisor = loop {
            let col = p + col_offset;
            let value = a.at(p, col);
            if value != 0.0 {
                break value;
            }

            match (p + 1..rows).find(|&r| a.at(r, col) != 0.0) {
                Some(r) => {
                    trace!("swap rows {} and {}", p + 1, r + 1);
                    a = a.swap_rows_unchecked(p, r);
                },
                None => {
                    debug!("no pivot for row {} in column {}", p + 1, col + 1);
                    col_offset += 1;
                    if p + col_offset >= cols {
                        debug!("ran out of columns after {} pivots", pivot_columns.len());
                        return Reduction { matrix: a, pivot_columns, terminated_early: true };
                    }
                },
            }
        };
        let col = p + col_offset;

        trace!("row {} /= {}", p + 1, divisor);
        a = a.divide_row_unchecked(p, divisor);

        for r in p + 1..rows {
            let head = a.at(r, col);
            trace!("row {} += {} * row {}", r + 1, -head, p + 1);
            a = a.add_scaled_row_unchecked(p, -1.0 * head, r);
        }
        pivot_columns.push(col + 1);
        p += 1;
    }

    // Backward phase: clear the entries above each pivot, bottom row first.
    //
    // A pivot is recognized as the leftmost entry exactly equal to one;
    // everything to its left was zeroed by the forward phase.
    for src in (0..rows).rev() {
        let col = match (0..cols).find(|&c| a.at(src, c) == 1.0) {
            Some(col) => col,
            None => continue, // no pivot in this row
        };
        for target in (0..src).rev() {
            let scalar = -1.0 * a.at(target, col);
            trace!("row {} += {} * row {}", target + 1, scalar, src + 1);
            a = a.add_scaled_row_unchecked(src, scalar, target);
        }
    }

    Reduction { matrix: a, pivot_columns, terminated_early: false }
}
