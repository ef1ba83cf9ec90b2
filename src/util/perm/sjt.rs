/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Enumeration of all permutations of `0..n` in Steinhaus-Johnson-Trotter order.
//!
//! Consecutive permutations differ by a single swap of adjacent elements, so the
//! number of steps taken from the identity has the same parity as the permutation.

use crate::perm::{Parity, Perm};

/// A permutation along with the number of swaps used to reach it from the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPerm {
    pub perm: Perm,
    pub transpositions: usize,
}

impl SignedPerm {
    pub fn parity(&self) -> Parity
    { Parity::from_transpositions(self.transpositions) }

    pub fn signum(&self) -> f64
    { self.parity().signum() }

    /// Arrange `labels` in this order.
    pub fn apply<T: Clone>(&self, labels: &[T]) -> Vec<T> {
        assert_eq!(labels.len(), self.perm.len(), "Incorrect permutation length");
        self.perm.as_slice().iter().map(|&i| labels[i].clone()).collect()
    }
}

/// All `n!` permutations of `0..n`, starting from the identity.
///
/// `n = 0` produces a single empty permutation.
pub fn permutations(n: usize) -> Permutations {
    Permutations {
        arrangement: (0..n).collect(),
        moving_left: vec![true; n],
        transpositions: 0,
        state: State::Fresh,
    }
}

/// All arrangements of `labels`, each with its swap count.
pub fn permutations_of<T: Clone>(labels: &[T]) -> impl Iterator<Item=(Vec<T>, usize)> + '_ {
    permutations(labels.len()).map(move |signed| (signed.apply(labels), signed.transpositions))
}

#[derive(Debug, Clone)]
pub struct Permutations {
    arrangement: Vec<usize>,
    // indexed by value, not position
    moving_left: Vec<bool>,
    transpositions: usize,
    state: State,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum State { Fresh, Running, Done }

impl Permutations {
    /// Where `value` at `pos` would move to, if it is mobile.
    fn target(&self, pos: usize) -> Option<usize> {
        let value = self.arrangement[pos];
        let dest = match self.moving_left[value] {
            true => pos.checked_sub(1),
            false => Some(pos + 1).filter(|&p| p < self.arrangement.len()),
        };
        dest.filter(|&dest| self.arrangement[dest] < value)
    }

    /// Swap the largest mobile value with its neighbor.  False once none are left.
    fn step(&mut self) -> bool {
        let mut best: Option<(usize, usize)> = None;
        for pos in 0..self.arrangement.len() {
            if let Some(dest) = self.target(pos) {
                let beats_best = best.map_or(true, |(p, _)| self.arrangement[p] < self.arrangement[pos]);
                if beats_best {
                    best = Some((pos, dest));
                }
            }
        }

        let (pos, dest) = match best {
            Some(x) => x,
            None => return false,
        };
        let value = self.arrangement[pos];
        self.arrangement.swap(pos, dest);
        self.transpositions += 1;
        for larger in value + 1..self.arrangement.len() {
            self.moving_left[larger] = !self.moving_left[larger];
        }
        true
    }
}

impl Iterator for Permutations {
    type Item = SignedPerm;

    fn next(&mut self) -> Option<SignedPerm> {
        match self.state {
            State::Done => return None,
            State::Fresh => self.state = State::Running,
            State::Running => if !self.step() {
                self.state = State::Done;
                return None;
            },
        }
        Some(SignedPerm {
            perm: Perm::from_vec_unchecked(self.arrangement.clone()),
            transpositions: self.transpositions,
        })
    }
}

impl std::iter::FusedIterator for Permutations {}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn factorial(n: usize) -> usize { (1..=n).product() }

    #[test]
    fn order_for_three() {
        let seq: Vec<_> = permutations(3).map(|s| (s.perm.into_vec(), s.transpositions)).collect();
        assert_eq!(seq, vec![
            (vec![0, 1, 2], 0),
            (vec![0, 2, 1], 1),
            (vec![2, 0, 1], 2),
            (vec![2, 1, 0], 3),
            (vec![1, 2, 0], 4),
            (vec![1, 0, 2], 5),
        ]);
    }

    #[test]
    fn empty() {
        let all: Vec<_> = permutations(0).collect();
        assert_eq!(all.len(), 1);
        assert!(all[0].perm.is_empty());
        assert_eq!(all[0].transpositions, 0);

        let mut iter = permutations(1);
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn all_distinct() {
        for n in 0..=6 {
            let count = permutations(n).count();
            let distinct = permutations(n).map(|s| s.perm).unique().count();
            assert_eq!(count, factorial(n), "n = {}", n);
            assert_eq!(distinct, factorial(n), "n = {}", n);
        }
    }

    #[test]
    fn swap_count_gives_parity() {
        for n in 0..=6 {
            for signed in permutations(n) {
                assert_eq!(
                    Parity::from_transpositions(signed.transpositions),
                    signed.perm.parity(),
                    "{:?}", signed,
                );
            }
        }
    }

    #[test]
    fn consecutive_differ_by_adjacent_swap() {
        let all = permutations(5).map(|s| s.perm.into_vec()).collect::<Vec<_>>();
        for (a, b) in all.iter().tuple_windows() {
            let diffs = (0..5).filter(|&i| a[i] != b[i]).collect::<Vec<_>>();
            assert_eq!(diffs.len(), 2, "{:?} -> {:?}", a, b);
            assert_eq!(diffs[0] + 1, diffs[1], "{:?} -> {:?}", a, b);
        }
    }

    #[test]
    fn labels() {
        let words: Vec<_> = permutations_of(&['a', 'b', 'c'])
            .map(|(chars, count)| (chars.into_iter().collect::<String>(), count % 2))
            .collect();
        assert_eq!(words, vec![
            ("abc".to_string(), 0),
            ("acb".to_string(), 1),
            ("cab".to_string(), 0),
            ("cba".to_string(), 1),
            ("bca".to_string(), 0),
            ("bac".to_string(), 1),
        ]);

        let signed = permutations(2).last().unwrap();
        assert_eq!(signed.signum(), -1.0);
        assert_eq!(signed.apply(&[10, 20]), vec![20, 10]);
    }
}
