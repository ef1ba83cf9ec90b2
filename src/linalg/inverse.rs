/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use dmat_matrix::{Matrix, MatrixError, Result, RowReduce};
use log::debug;

/// Invert a square matrix by row-reducing `[m | I]`.
///
/// Fails with `Singular` unless every column of `m` receives a pivot.  Exactness
/// is not guaranteed; entries of `m * inverse(m)` may be off from the identity by
/// rounding error.
pub fn inverse(m: &Matrix) -> Result<Matrix> {
    if !m.is_square() {
        return Err(MatrixError::NotSquare { op: "invert", dims: m.dims() });
    }
    let n = m.num_rows();

    let augmented = Matrix::join_columns(m, &Matrix::identity(n)?)?;
    let reduction = augmented.row_reduce_decomp();
    if !reduction.pivot_columns.iter().cloned().eq(1..=n) {
        debug!("{} is singular; pivots at {:?}", m.dims(), reduction.pivot_columns);
        return Err(MatrixError::Singular);
    }
    reduction.matrix.slice_columns(n + 1, 2 * n)
}
