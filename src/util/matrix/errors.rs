/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use thiserror::Error;

pub type Result<T, E = MatrixError> = std::result::Result<T, E>;

/// The shape of a matrix.
///
/// Displays as `Matrix RxC`, which is how matrices identify their "type"
/// in error messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix {}x{}", self.rows, self.cols)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis { Row, Column }

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Row => "row",
            Axis::Column => "column",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("number of elements ({len}) does not match the given type ({dims})")]
    DimensionMismatch { dims: Dims, len: usize },

    #[error("matrix dimensions must be positive (got {rows}x{cols})")]
    ZeroDimension { rows: usize, cols: usize },

    #[error("type mismatch: {left} vs {right}")]
    TypeMismatch { left: Dims, right: Dims },

    #[error("type error: unable to {op} {left} and {right}")]
    ShapeMismatch { op: &'static str, left: Dims, right: Dims },

    #[error("{op} requires a square matrix (got {dims})")]
    NotSquare { op: &'static str, dims: Dims },

    #[error("{axis} index {index} is out of range 1..={bound}")]
    IndexOutOfRange { axis: Axis, index: usize, bound: usize },

    #[error("column range {from}..={to} is empty")]
    EmptyColumnRange { from: usize, to: usize },

    #[error("matrix is singular")]
    Singular,

    #[error("refusing to expand a {dim}x{dim} determinant (limit is {max}x{max})")]
    TooLarge { dim: usize, max: usize },
}

/// Validate a 1-based index against an inclusive upper bound, producing the 0-based index.
pub(crate) fn check_index(axis: Axis, index: usize, bound: usize) -> Result<usize> {
    match index {
        i if 1 <= i && i <= bound => Ok(i - 1),
        _ => Err(MatrixError::IndexOutOfRange { axis, index, bound }),
    }
}

pub(crate) fn check_nonzero(rows: usize, cols: usize) -> Result<()> {
    match rows == 0 || cols == 0 {
        true => Err(MatrixError::ZeroDimension { rows, cols }),
        false => Ok(()),
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn index_bounds() {
        assert_eq!(check_index(Axis::Row, 1, 3), Ok(0));
        assert_eq!(check_index(Axis::Row, 3, 3), Ok(2));
        assert_eq!(
            check_index(Axis::Column, 0, 3),
            Err(MatrixError::IndexOutOfRange { axis: Axis::Column, index: 0, bound: 3 }),
        );
        assert_eq!(
            check_index(Axis::Row, 4, 3),
            Err(MatrixError::IndexOutOfRange { axis: Axis::Row, index: 4, bound: 3 }),
        );
    }

    #[test]
    fn messages() {
        let dims = Dims { rows: 2, cols: 3 };
        assert_eq!(dims.to_string(), "Matrix 2x3");

        let err = MatrixError::ShapeMismatch { op: "multiply", left: dims, right: dims };
        assert_eq!(err.to_string(), "type error: unable to multiply Matrix 2x3 and Matrix 2x3");

        let err = MatrixError::IndexOutOfRange { axis: Axis::Column, index: 0, bound: 3 };
        assert_eq!(err.to_string(), "column index 0 is out of range 1..=3");
    }
}
