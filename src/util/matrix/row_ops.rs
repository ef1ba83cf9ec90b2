/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Elementary row operations.
//!
//! Each operation copies the matrix.  The 0-based `*_unchecked` forms exist
//! for the reduction engine, which only ever produces valid row indices.

use crate::errors::{check_index, Axis, Result};
use crate::matrix::Matrix;
use log::trace;

impl Matrix {
    /// `row[target] += scalar * row[src]` (1-based rows).
    pub fn add_scaled_row(&self, src: usize, scalar: f64, target: usize) -> Result<Matrix> {
        let src = check_index(Axis::Row, src, self.rows)?;
        let target = check_index(Axis::Row, target, self.rows)?;
        trace!("row {} += {} * row {}", target + 1, scalar, src + 1);
        Ok(self.add_scaled_row_unchecked(src, scalar, target))
    }

    /// `row[target] /= scalar` (1-based row).
    ///
    /// Dividing by zero is not an error; it fills the row with infinities and NaNs.
    pub fn divide_row(&self, target: usize, scalar: f64) -> Result<Matrix> {
        let target = check_index(Axis::Row, target, self.rows)?;
        trace!("row {} /= {}", target + 1, scalar);
        Ok(self.divide_row_unchecked(target, scalar))
    }

    /// Exchange two rows (1-based).
    pub fn swap_rows(&self, i1: usize, i2: usize) -> Result<Matrix> {
        let i1 = check_index(Axis::Row, i1, self.rows)?;
        let i2 = check_index(Axis::Row, i2, self.rows)?;
        trace!("swap rows {} and {}", i1 + 1, i2 + 1);
        Ok(self.swap_rows_unchecked(i1, i2))
    }

    pub(crate) fn add_scaled_row_unchecked(&self, src: usize, scalar: f64, target: usize) -> Matrix {
        let cols = self.cols;
        let mut out = self.clone();
        let src_row = &self.data[src * cols..(src + 1) * cols];
        for (dest, &x) in out.data[target * cols..(target + 1) * cols].iter_mut().zip(src_row) {
            *dest += x * scalar;
        }
        out
    }

    pub(crate) fn divide_row_unchecked(&self, target: usize, scalar: f64) -> Matrix {
        let cols = self.cols;
        let mut out = self.clone();
        for x in &mut out.data[target * cols..(target + 1) * cols] {
            *x /= scalar;
        }
        out
    }

    pub(crate) fn swap_rows_unchecked(&self, i1: usize, i2: usize) -> Matrix {
        let cols = self.cols;
        let mut out = self.clone();
        for c in 0..cols {
            out.data.swap(i1 * cols + c, i2 * cols + c);
        }
        out
    }
}
