/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Determinants by direct expansion over the permutation group.
//!
//! This takes `n! * n` multiplications, so the size of matrix accepted is capped.

use dmat_matrix::{Matrix, MatrixError, Result};
use dmat_perm::{permutations, SignedPerm};
use itertools::Itertools;
use log::debug;

/// Largest dimension accepted by [`determinant`] (about 36 million terms).
///
/// [`determinant`]: fn.determinant.html
pub const DEFAULT_MAX_LEIBNIZ_DIM: usize = 10;

/// `Σ_σ sgn(σ) Π_i A[i, σ(i)]`, for a square matrix of dimension up to
/// `DEFAULT_MAX_LEIBNIZ_DIM`.
pub fn determinant(m: &Matrix) -> Result<f64>
{ determinant_with_limit(m, DEFAULT_MAX_LEIBNIZ_DIM) }

/// `determinant` with a caller-chosen size cap.
pub fn determinant_with_limit(m: &Matrix, max_dim: usize) -> Result<f64> {
    if !m.is_square() {
        return Err(MatrixError::NotSquare { op: "determinant", dims: m.dims() });
    }
    let n = m.num_rows();
    check_limit(n, max_dim)?;

    let rows = m.rows().collect::<Vec<_>>();
    let det: f64 = permutations(n).map(|signed| {
        let product: f64 = {
            rows.iter().enumerate()
                .map(|(i, row)| row[signed.perm.image(i)])
                .product()
        };
        signed.signum() * product
    }).sum();

    debug!("determinant of {} = {}", m.dims(), det);
    Ok(det)
}

/// The symbolic expansion of an `n x n` determinant.
///
/// One signed term per permutation, in the order they are summed, e.g.
/// `+A11A22-A12A21` for `n = 2`.  Element names are `A{row}{column}` with 1-based
/// indices and no separator.
pub fn leibniz_expansion(n: usize) -> Result<String> {
    if n == 0 {
        return Err(MatrixError::ZeroDimension { rows: n, cols: n });
    }
    check_limit(n, DEFAULT_MAX_LEIBNIZ_DIM)?;
    Ok(permutations(n).map(|signed| expansion_term(&signed)).join(""))
}

fn expansion_term(signed: &SignedPerm) -> String {
    let factors = (0..signed.perm.len()).map(|i| format!("A{}{}", i + 1, signed.perm.image(i) + 1));
    format!("{}{}", signed.parity().sign_char(), factors.format(""))
}

fn check_limit(dim: usize, max: usize) -> Result<()> {
    match dim > max {
        true => {
            debug!("refusing Leibniz expansion of dimension {} (limit {})", dim, max);
            Err(MatrixError::TooLarge { dim, max })
        },
        false => Ok(()),
    }
}
