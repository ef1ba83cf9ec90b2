/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::errors::{check_index, check_nonzero, Axis, Dims, MatrixError, Result};
use dmat_assert_close::{CheckClose, CheckCloseError, Tolerances};
use slice_of_array::prelude::*;
use slice_of_array::IsSliceomorphic;

/// Owned dense matrix of `f64` with C layout.
///
/// `Matrix` is a value: operations like [`Matrix::transpose`] or
/// [`Matrix::swap_rows`] produce a new matrix and leave the receiver alone.
/// To write individual elements, go through a [`MatrixBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    // c-contiguous, row-contiguous data
    pub(crate) data: Vec<f64>,
    // invariant: rows * cols == data.len()
    // invariant: rows > 0 && cols > 0
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

pub type ContiguousRows<'a> = std::slice::Chunks<'a, f64>;

/// Constructors
impl Matrix {
    /// Create a matrix from row-major data.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Matrix> {
        check_nonzero(rows, cols)?;
        if rows.checked_mul(cols) != Some(data.len()) {
            let dims = Dims { rows, cols };
            return Err(MatrixError::DimensionMismatch { dims, len: data.len() });
        }
        Ok(Matrix { data, rows, cols })
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Matrix> {
        MatrixBuilder::zeros(rows, cols).map(MatrixBuilder::build)
    }

    pub fn identity(n: usize) -> Result<Matrix> {
        MatrixBuilder::identity(n).map(MatrixBuilder::build)
    }

    /// Create a matrix from a list of column vectors.
    ///
    /// `columns[j]` holds column `j + 1` from top to bottom.
    pub fn from_column_vectors(rows: usize, cols: usize, columns: &[Vec<f64>]) -> Result<Matrix> {
        check_nonzero(rows, cols)?;
        let len = columns.iter().map(|col| col.len()).sum();
        let is_rectangular = columns.len() == cols && columns.iter().all(|col| col.len() == rows);
        if !is_rectangular {
            let dims = Dims { rows, cols };
            return Err(MatrixError::DimensionMismatch { dims, len });
        }

        let data = (0..rows)
            .flat_map(|r| columns.iter().map(move |col| col[r]))
            .collect();
        Ok(Matrix { data, rows, cols })
    }

    /// Create a matrix from fixed-size rows.  Handy for literals.
    ///
    /// ```
    /// # use dmat_matrix::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    /// assert_eq!(m.get(3, 1), Ok(5.0));
    /// ```
    pub fn from_rows<V>(rows: &[V]) -> Result<Matrix>
    where V: IsSliceomorphic<Element = f64>,
    { Matrix::new(rows.len(), V::LEN, rows.flat().to_vec()) }

    /// Reclaim an owned matrix for in-place construction.
    pub fn into_builder(self) -> MatrixBuilder
    { MatrixBuilder { matrix: self } }
}

/// Element access
impl Matrix {
    pub fn dims(&self) -> Dims { Dims { rows: self.rows, cols: self.cols } }
    pub fn num_rows(&self) -> usize { self.rows }
    pub fn num_cols(&self) -> usize { self.cols }
    pub fn is_square(&self) -> bool { self.rows == self.cols }
    pub fn row_major_data(&self) -> &[f64] { &self.data }
    pub fn rows(&self) -> ContiguousRows<'_> { self.data.chunks(self.cols) }

    /// Get the element at row `i` and column `j` (1-based).
    pub fn get(&self, i: usize, j: usize) -> Result<f64>
    { Ok(self.data[self.offset(i, j)?]) }

    /// Get row `i` (1-based).
    pub fn row(&self, i: usize) -> Result<&[f64]> {
        let r = check_index(Axis::Row, i, self.rows)?;
        Ok(&self.data[r * self.cols..(r + 1) * self.cols])
    }

    /// Compare two matrices of the same type element by element.
    ///
    /// There is no tolerance; use `dmat_assert_close` for approximate comparisons.
    pub fn equals(&self, other: &Matrix) -> Result<bool> {
        if self.dims() != other.dims() {
            return Err(MatrixError::TypeMismatch { left: self.dims(), right: other.dims() });
        }
        Ok(self.data.iter().zip(&other.data).all(|(a, b)| a == b))
    }

    fn offset(&self, i: usize, j: usize) -> Result<usize> {
        let r = check_index(Axis::Row, i, self.rows)?;
        let c = check_index(Axis::Column, j, self.cols)?;
        Ok(r * self.cols + c)
    }

    // 0-based, for algorithms whose indices are correct by construction
    #[inline(always)]
    pub(crate) fn at(&self, r: usize, c: usize) -> f64
    { self.data[r * self.cols + c] }
}

/// Structural transforms
impl Matrix {
    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            data.extend((0..self.rows).map(|r| self.at(r, c)));
        }
        Matrix { data, rows: self.cols, cols: self.rows }
    }

    /// Copy out the columns `from..=to` (1-based, inclusive).
    pub fn slice_columns(&self, from: usize, to: usize) -> Result<Matrix> {
        let start = check_index(Axis::Column, from, self.cols)?;
        let end = check_index(Axis::Column, to, self.cols)? + 1;
        if start >= end {
            return Err(MatrixError::EmptyColumnRange { from, to });
        }

        let data = self.rows().flat_map(|row| row[start..end].iter().cloned()).collect();
        Ok(Matrix { data, rows: self.rows, cols: end - start })
    }

    /// Place two matrices side by side, forming e.g. an augmented matrix `[a | b]`.
    pub fn join_columns(a: &Matrix, b: &Matrix) -> Result<Matrix> {
        if a.rows != b.rows {
            return Err(MatrixError::ShapeMismatch { op: "join", left: a.dims(), right: b.dims() });
        }

        let mut data = Vec::with_capacity(a.data.len() + b.data.len());
        for (a_row, b_row) in a.rows().zip(b.rows()) {
            data.extend_from_slice(a_row);
            data.extend_from_slice(b_row);
        }
        Ok(Matrix { data, rows: a.rows, cols: a.cols + b.cols })
    }
}

impl CheckClose for Matrix {
    fn check_close(&self, other: &Matrix, tol: Tolerances) -> std::result::Result<(), CheckCloseError> {
        if self.dims() != other.dims() {
            return Err(CheckCloseError::Shape {
                left: self.dims().to_string(),
                right: other.dims().to_string(),
            });
        }
        for (k, (a, b)) in self.data.iter().zip(&other.data).enumerate() {
            a.check_close(b, tol).map_err(|e| {
                e.at(format!("({}, {})", k / self.cols + 1, k % self.cols + 1))
            })?;
        }
        Ok(())
    }
}

/// The mutable construction stage of a [`Matrix`].
///
/// This is the only place where elements can be overwritten.  Since a builder
/// is always uniquely owned, writes through it can never be observed by
/// anyone holding a `Matrix`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixBuilder {
    matrix: Matrix,
}

impl MatrixBuilder {
    pub fn zeros(rows: usize, cols: usize) -> Result<MatrixBuilder> {
        check_nonzero(rows, cols)?;
        let matrix = Matrix { data: vec![0.0; rows * cols], rows, cols };
        Ok(MatrixBuilder { matrix })
    }

    pub fn identity(n: usize) -> Result<MatrixBuilder> {
        let mut builder = MatrixBuilder::zeros(n, n)?;
        for ij in 1..=n {
            builder.set(ij, ij, 1.0)?;
        }
        Ok(builder)
    }

    pub fn dims(&self) -> Dims { self.matrix.dims() }

    pub fn get(&self, i: usize, j: usize) -> Result<f64> { self.matrix.get(i, j) }

    /// Overwrite the element at row `i` and column `j` (1-based).
    ///
    /// The previous value is lost.
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<&mut Self> {
        let offset = self.matrix.offset(i, j)?;
        self.matrix.data[offset] = value;
        Ok(self)
    }

    pub fn build(self) -> Matrix { self.matrix }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    fn a32() -> Matrix {
        Matrix::new(3, 2, vec![
            1.0, 2.0,
            3.0, 4.0,
            5.0, 6.0,
        ]).unwrap()
    }

    #[test]
    fn construction() {
        let a = a32();
        assert_eq!(a.dims(), Dims { rows: 3, cols: 2 });
        assert_eq!(a.get(1, 2), Ok(2.0));
        assert_eq!(a.get(3, 1), Ok(5.0));
        assert_eq!(a.row(2), Ok(&[3.0, 4.0][..]));

        assert_eq!(
            Matrix::new(2, 2, vec![1.0, 2.0, 3.0]),
            Err(MatrixError::DimensionMismatch { dims: Dims { rows: 2, cols: 2 }, len: 3 }),
        );
        assert_eq!(Matrix::new(0, 2, vec![]), Err(MatrixError::ZeroDimension { rows: 0, cols: 2 }));
        assert_eq!(Matrix::zeros(2, 0), Err(MatrixError::ZeroDimension { rows: 2, cols: 0 }));
        assert_eq!(Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]), Ok(a));
    }

    #[test]
    fn identity_and_zeros() {
        let eye = Matrix::identity(3).unwrap();
        assert_eq!(eye.row_major_data(), &[
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ]);
        let zero = Matrix::zeros(3, 2).unwrap();
        assert!(zero.row_major_data().iter().all(|&x| x == 0.0));
        assert_eq!(zero.dims(), Dims { rows: 3, cols: 2 });
    }

    #[test]
    fn column_vectors() {
        let b = Matrix::from_column_vectors(3, 2, &[vec![1.0, 1.0, 2.0], vec![2.0, 3.0, 3.0]]).unwrap();
        assert_eq!(b, Matrix::from_rows(&[[1.0, 2.0], [1.0, 3.0], [2.0, 3.0]]).unwrap());

        let c = Matrix::from_column_vectors(2, 3, &[vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]).unwrap();
        assert_eq!(c.get(2, 3), Ok(6.0));

        // total count disagrees
        assert!(Matrix::from_column_vectors(2, 2, &[vec![1.0, 2.0]]).is_err());
        // total count agrees, but the columns are ragged
        assert_eq!(
            Matrix::from_column_vectors(2, 2, &[vec![1.0, 2.0, 3.0], vec![4.0]]),
            Err(MatrixError::DimensionMismatch { dims: Dims { rows: 2, cols: 2 }, len: 4 }),
        );
    }

    #[test]
    fn index_checks() {
        let a = a32();
        let row_err = |index| Err(MatrixError::IndexOutOfRange { axis: Axis::Row, index, bound: 3 });
        let col_err = |index| Err(MatrixError::IndexOutOfRange { axis: Axis::Column, index, bound: 2 });
        assert_eq!(a.get(4, 1), row_err(4));
        assert_eq!(a.get(0, 1), row_err(0));
        assert_eq!(a.get(1, 3), col_err(3));
        assert_eq!(a.get(1, 0), col_err(0));
        assert!(a.row(0).is_err());
    }

    #[test]
    fn builder_is_the_only_writer() {
        let mut builder = a32().into_builder();
        builder.set(1, 1, 10.0).unwrap().set(3, 2, -6.0).unwrap();
        assert_eq!(builder.get(1, 1), Ok(10.0));
        assert!(builder.set(4, 1, 0.0).is_err());

        let m = builder.build();
        assert_eq!(m.row_major_data(), &[10.0, 2.0, 3.0, 4.0, 5.0, -6.0]);
    }

    #[test]
    fn equality() {
        let a = a32();
        assert_eq!(a.equals(&a.clone()), Ok(true));

        let mut b = a.clone().into_builder();
        b.set(2, 2, 4.0 + 1e-15).unwrap();
        assert_eq!(a.equals(&b.build()), Ok(false));

        assert_eq!(
            a.equals(&a.transpose()),
            Err(MatrixError::TypeMismatch { left: a.dims(), right: a.transpose().dims() }),
        );
        // the derived impl has no such restriction
        assert_ne!(a, a.transpose());
    }

    #[test]
    fn clone_is_deep() {
        let a = a32();
        let mut b = a.clone().into_builder();
        b.set(1, 1, 100.0).unwrap();
        assert_eq!(a.get(1, 1), Ok(1.0));
    }

    #[test]
    fn transpose() {
        let a = a32();
        let t = a.transpose();
        assert_eq!(t, Matrix::from_rows(&[[1.0, 3.0, 5.0], [2.0, 4.0, 6.0]]).unwrap());
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn slice_columns() {
        let m = Matrix::from_rows(&[
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
        ]).unwrap();
        assert_eq!(
            m.slice_columns(2, 4).unwrap(),
            Matrix::from_rows(&[[2.0, 3.0, 4.0], [6.0, 7.0, 8.0], [10.0, 11.0, 12.0]]).unwrap(),
        );
        assert_eq!(
            m.slice_columns(3, 3).unwrap(),
            Matrix::from_rows(&[[3.0], [7.0], [11.0]]).unwrap(),
        );
        assert!(m.slice_columns(0, 2).is_err());
        assert!(m.slice_columns(2, 5).is_err());
        assert_eq!(m.slice_columns(3, 2), Err(MatrixError::EmptyColumnRange { from: 3, to: 2 }));
    }

    #[test]
    fn join_columns() {
        let a = a32();
        let eye = Matrix::identity(3).unwrap();
        let joined = Matrix::join_columns(&a, &eye).unwrap();
        assert_eq!(joined.dims(), Dims { rows: 3, cols: 5 });
        assert_eq!(joined.row(2), Ok(&[3.0, 4.0, 0.0, 1.0, 0.0][..]));
        assert_eq!(joined.slice_columns(1, 2).unwrap(), a);
        assert_eq!(joined.slice_columns(3, 5).unwrap(), eye);

        match Matrix::join_columns(&a, &Matrix::identity(2).unwrap()) {
            Err(MatrixError::ShapeMismatch { op: "join", .. }) => {},
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn check_close() {
        let tol = Tolerances { rel: 1e-9, abs: 0.0 };
        let a = a32();
        let nudged = crate::ops::scale(1.0 + 1e-12, &a);
        assert!(a.check_close(&nudged, tol).is_ok());

        let err = a.check_close(&crate::ops::scale(2.0, &a), tol).unwrap_err();
        assert!(err.to_string().starts_with("at (1, 1):"), "{}", err);

        match a.check_close(&a.transpose(), tol) {
            Err(CheckCloseError::Shape { .. }) => {},
            other => panic!("unexpected {:?}", other),
        }
    }
}
