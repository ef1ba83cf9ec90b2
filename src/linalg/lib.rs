/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

pub use dmat_matrix::{row_reduce, Reduction, RowReduce};
pub use dmat_matrix::{Matrix, MatrixError, Result};

pub use crate::det::{determinant, determinant_with_limit, leibniz_expansion};
pub use crate::det::DEFAULT_MAX_LEIBNIZ_DIM;
mod det;

pub use crate::inverse::inverse;
mod inverse;
