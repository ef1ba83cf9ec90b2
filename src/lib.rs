/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Dense row-major `f64` matrices with 1-based element access.
//!
//! The pieces live in separate crates of this workspace; this crate gathers them
//! under one roof and hosts the demo binary.

pub use dmat_matrix::{Axis, Dims, Matrix, MatrixBuilder, MatrixError, Result};
pub use dmat_matrix::{ops, is_matmul_compatible};
pub use dmat_matrix::{row_reduce, Reduction, RowReduce};
pub use dmat_linalg::{determinant, determinant_with_limit, inverse, leibniz_expansion};
pub use dmat_linalg::DEFAULT_MAX_LEIBNIZ_DIM;
pub use dmat_perm::{permutations, permutations_of, Parity, Perm, Permute, SignedPerm};

pub type FailResult<T> = std::result::Result<T, failure::Error>;

pub mod entry_points;
