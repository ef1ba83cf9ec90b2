/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Dense real matrices with value semantics.
//!
//! Every transforming operation returns a new `Matrix`.  The only way to
//! write to an element in place is through a [`MatrixBuilder`], which is
//! obtained either fresh or by consuming an owned `Matrix`.
//!
//! Element indices in this crate's public API are **1-based**, matching
//! the usual mathematical notation `a_ij`.

pub use crate::errors::{Axis, Dims, MatrixError, Result};
mod errors;

pub use crate::matrix::{ContiguousRows, Matrix, MatrixBuilder};
mod matrix;

pub mod ops;
pub use crate::ops::is_matmul_compatible;

mod row_ops;

pub use crate::reduce::{row_reduce, Reduction, RowReduce};
mod reduce;

mod display;
