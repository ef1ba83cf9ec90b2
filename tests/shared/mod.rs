/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Helpers shared between the integration tests.
#![allow(dead_code)]

use dmat::Matrix;
use rand::Rng;

pub fn mat(rows: usize, cols: usize, data: &[f64]) -> Matrix {
    Matrix::new(rows, cols, data.to_vec()).unwrap()
}

/// Entries drawn uniformly from `[-lim, lim)`.
pub fn random_matrix(rows: usize, cols: usize, lim: f64) -> Matrix {
    let mut rng = rand::thread_rng();
    let data = (0..rows * cols).map(|_| rng.gen_range(-lim, lim)).collect();
    Matrix::new(rows, cols, data).unwrap()
}

/// Small integers, so that sums and products stay exact.
pub fn random_integer_matrix(rows: usize, cols: usize) -> Matrix {
    let mut rng = rand::thread_rng();
    let data = (0..rows * cols).map(|_| rng.gen_range(-9, 10) as f64).collect();
    Matrix::new(rows, cols, data).unwrap()
}

/// Strictly diagonally dominant, hence invertible.
pub fn random_invertible(n: usize) -> Matrix {
    let mut b = random_matrix(n, n, 1.0).into_builder();
    for i in 1..=n {
        let x = b.get(i, i).unwrap();
        b.set(i, i, x + 2.0 * n as f64).unwrap();
    }
    b.build()
}

pub fn random_dims() -> (usize, usize) {
    let mut rng = rand::thread_rng();
    (rng.gen_range(1, 6), rng.gen_range(1, 6))
}
