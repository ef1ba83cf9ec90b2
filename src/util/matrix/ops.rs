/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Arithmetic on whole matrices.

use crate::errors::{MatrixError, Result};
use crate::matrix::Matrix;
use itertools::Itertools;
use std::ops::Mul;

pub fn is_matmul_compatible(a: &Matrix, b: &Matrix) -> bool
{ a.num_cols() == b.num_rows() }

/// Multiply every element by `s`.
pub fn scale(s: f64, m: &Matrix) -> Matrix {
    let data = m.data.iter().map(|&x| s * x).collect();
    Matrix { data, rows: m.rows, cols: m.cols }
}

/// Elementwise sum of two matrices of the same type.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.dims() != b.dims() {
        return Err(MatrixError::TypeMismatch { left: a.dims(), right: b.dims() });
    }
    let data = a.data.iter().zip_eq(&b.data).map(|(x, y)| x + y).collect();
    Ok(Matrix { data, rows: a.rows, cols: a.cols })
}

/// Matrix product; an `m x n` times an `n x p` gives an `m x p`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if !is_matmul_compatible(a, b) {
        return Err(MatrixError::ShapeMismatch { op: "multiply", left: a.dims(), right: b.dims() });
    }

    // columns of b, made contiguous
    let b_t = b.transpose();
    let mut data = Vec::with_capacity(a.rows * b.cols);
    for a_row in a.rows() {
        for b_col in b_t.rows() {
            let dot = a_row.iter().zip_eq(b_col).fold(0.0, |acc, (x, y)| acc + x * y);
            data.push(dot);
        }
    }
    Ok(Matrix { data, rows: a.rows, cols: b.cols })
}

impl<'a> Mul<&'a Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &'a Matrix) -> Matrix
    { scale(self, rhs) }
}
