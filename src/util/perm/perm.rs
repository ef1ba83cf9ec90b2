/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use thiserror::Error;

/// A reordering of `n` items, stored as the list of source indices.
///
/// See the [`Permute`] trait for how it is applied to data.
///
/// [`Permute`]: trait.Permute.html
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Perm {
    // `pull[k]` is the index of the input element that lands at index `k`
    pull: Vec<usize>,
}

impl fmt::Debug for Perm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.pull, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{vec:?} is not a permutation of 0..{len}", len = .vec.len())]
pub struct InvalidPermutationError { pub vec: Vec<usize> }

/// The sign of a permutation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Parity { Even, Odd }

impl Parity {
    /// Parity of a permutation that was reached from the identity by `count` swaps.
    pub fn from_transpositions(count: usize) -> Parity {
        match count % 2 {
            0 => Parity::Even,
            _ => Parity::Odd,
        }
    }

    /// `+1.0` or `-1.0`.
    pub fn signum(self) -> f64 {
        match self {
            Parity::Even => 1.0,
            Parity::Odd => -1.0,
        }
    }

    pub fn sign_char(self) -> char {
        match self {
            Parity::Even => '+',
            Parity::Odd => '-',
        }
    }

    #[must_use = "not an in-place operation"]
    pub fn flipped(self) -> Parity {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }
}

impl Perm {
    pub fn eye(n: usize) -> Perm
    { Perm { pull: (0..n).collect() } }

    pub fn len(&self) -> usize
    { self.pull.len() }

    pub fn is_empty(&self) -> bool
    { self.pull.is_empty() }

    /// Construct a perm.
    ///
    /// The representation accepted by this is comparable to indexing with an
    /// integer array in numpy.  If the `k`th element of the permutation vector
    /// is `value`, then applying the permutation will *pull* the data at index
    /// `value` into index `k`.
    ///
    /// This performs O(n log n) validation.
    pub fn from_vec(vec: Vec<usize>) -> Result<Perm, InvalidPermutationError> {
        if !validate_data(&vec) {
            return Err(InvalidPermutationError { vec });
        }
        Ok(Perm { pull: vec })
    }

    /// No-op constructor for vectors already known to be valid.
    /// Still performs checking in debug builds.
    pub(crate) fn from_vec_unchecked(vec: Vec<usize>) -> Perm {
        debug_assert!(validate_data(&vec));
        Perm { pull: vec }
    }

    pub fn random(n: usize) -> Perm {
        use rand::Rng;

        let mut pull: Vec<_> = (0..n).collect();
        rand::thread_rng().shuffle(&mut pull);
        Perm { pull }
    }

    pub fn into_vec(self) -> Vec<usize>
    { self.pull }

    pub fn as_slice(&self) -> &[usize]
    { &self.pull }

    /// The source index of the element that this perm moves into index `k`.
    ///
    /// Reading a perm as a function `σ`, this is `σ(k)`.
    pub fn image(&self, k: usize) -> usize
    { self.pull[k] }

    #[must_use = "not an in-place operation"]
    pub fn inverted(&self) -> Perm {
        let mut inv = vec![std::usize::MAX; self.len()];
        for (k, &src) in self.pull.iter().enumerate() {
            inv[src] = k;
        }
        Perm::from_vec_unchecked(inv)
    }

    /// Parity from the cycle decomposition: a cycle of length `L` is `L - 1` swaps.
    pub fn parity(&self) -> Parity {
        let mut seen = vec![false; self.len()];
        let mut num_cycles = 0;
        for start in 0..self.len() {
            if seen[start] {
                continue;
            }
            num_cycles += 1;
            let mut k = start;
            while !seen[k] {
                seen[k] = true;
                k = self.pull[k];
            }
        }
        Parity::from_transpositions(self.len() - num_cycles)
    }

    /// Flipped group operator.
    ///
    /// `a.then(b) == b.of(a)`, and
    /// `x.permuted_by(a).permuted_by(b) == x.permuted_by(&a.then(b))`.
    pub fn then(&self, other: &Perm) -> Perm
    { Perm { pull: self.pull.clone().permuted_by(other) } }

    /// Conventional group operator.
    pub fn of(&self, other: &Perm) -> Perm
    { other.then(self) }
}

#[must_use = "doesn't assert"]
fn validate_data(xs: &[usize]) -> bool {
    let mut vec = xs.to_vec();
    vec.sort();
    vec.into_iter().eq(0..xs.len())
}

/// Trait for applying a permutation operation.
///
/// # Laws
///
/// * **Identity:**
///   ```text
///   data.permuted_by(Perm::eye(data.len())) == data
///   ```
/// * **Compatibility:**
///   ```text
///   data.permuted_by(a).permuted_by(b) == data.permuted_by(a.permuted_by(b))
///   ```
pub trait Permute: Sized {
    fn permuted_by(self, perm: &Perm) -> Self;
}

impl<T> Permute for Vec<T> {
    fn permuted_by(self, perm: &Perm) -> Vec<T> {
        assert_eq!(self.len(), perm.len(), "Incorrect permutation length");

        let mut slots: Vec<Option<T>> = self.into_iter().map(Some).collect();
        perm.pull.iter()
            .map(|&src| slots[src].take().expect("(BUG) perm visited an index twice"))
            .collect()
    }
}

// `Permute` doubles as the group operator.
impl Permute for Perm {
    fn permuted_by(self, other: &Perm) -> Perm
    { self.then(other) }
}

impl<A: Permute> Permute for Option<A> {
    fn permuted_by(self, perm: &Perm) -> Option<A>
    { self.map(|x| x.permuted_by(perm)) }
}
