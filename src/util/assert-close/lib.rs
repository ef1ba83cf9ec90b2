/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Approximate equality for floats and containers of floats.
//!
//! The `assert_close!` macro accepts optional `rel=` and `abs=` tolerances
//! before its two operands, and an optional format message after them:
//!
//! ```
//! # #[macro_use] extern crate dmat_assert_close;
//! # fn main() {
//! assert_close!(1.0, 1.0 + 1e-12);
//! assert_close!(abs=1e-8, 0.0, 1e-10);
//! assert_close!(rel=1e-3, abs=1e-8, vec![1.0, 2.0], vec![1.0001, 2.0], "step {}", 3);
//! # }
//! ```

use thiserror::Error;

/// Relative tolerance used when `rel=` is not given.
pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

#[macro_export]
macro_rules! assert_close {
    (rel=$rel:expr, abs=$abs:expr, $($rest:tt)+) => {
        $crate::__assert_close_impl!{[$rel, $abs] $($rest)+}
    };
    (abs=$abs:expr, rel=$rel:expr, $($rest:tt)+) => {
        $crate::__assert_close_impl!{[$rel, $abs] $($rest)+}
    };
    (rel=$rel:expr, $($rest:tt)+) => {
        $crate::__assert_close_impl!{[$rel, 0.0] $($rest)+}
    };
    (abs=$abs:expr, $($rest:tt)+) => {
        $crate::__assert_close_impl!{[$crate::DEFAULT_NONZERO_TOL, $abs] $($rest)+}
    };
    ($($rest:tt)+) => {
        $crate::__assert_close_impl!{[$crate::DEFAULT_NONZERO_TOL, 0.0] $($rest)+}
    };
}

#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_close_impl {
    ([$rel:expr, $abs:expr] $a:expr, $b:expr $(,)?) => {
        $crate::__assert_close_impl!{[$rel, $abs] $a, $b, "not nearly equal!"}
    };
    ([$rel:expr, $abs:expr] $a:expr, $b:expr, $($fmt:tt)+) => {{
        let (left, right) = (&$a, &$b);
        let tol = $crate::Tolerances { rel: $rel, abs: $abs };
        if let Err(e) = $crate::CheckClose::check_close(left, right, tol) {
            panic!(
                "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                format!($($fmt)+), tol.rel, tol.abs, left, right, e,
            );
        }
    }};
}

/// Python's `math.isclose`, which is symmetric in `a` and `b`.
pub fn is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    // equal infinities
    if a == b { return true; }

    // an infinite relative tolerance would accept anything
    if a.is_infinite() || b.is_infinite() { return false; }

    // NaN falls through to here and fails the comparison.
    (a - b).abs() <= abs.max(rel * a.abs()).max(rel * b.abs())
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

#[derive(Debug, Error)]
pub enum CheckCloseError {
    #[error("failed at:\n  left: {left:?}\n right: {right:?}\n   tol: {tol:?}")]
    Values { left: f64, right: f64, tol: Tolerances },

    #[error("shapes differ: {left} vs {right}")]
    Shape { left: String, right: String },

    #[error("at {location}: {inner}")]
    At { location: String, inner: Box<CheckCloseError> },
}

impl CheckCloseError {
    /// Attach a position (e.g. an index) to an error from an inner element.
    pub fn at(self, location: impl Into<String>) -> Self {
        CheckCloseError::At { location: location.into(), inner: Box::new(self) }
    }
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError>;
}

impl CheckClose for f64 {
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), CheckCloseError> {
        match is_close(*self, *other, tol) {
            true => Ok(()),
            false => Err(CheckCloseError::Values { left: *self, right: *other, tol }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
        (**self).check_close(*other, tol)
    }
}

impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError> {
        if self.len() != other.len() {
            return Err(CheckCloseError::Shape {
                left: format!("length {}", self.len()),
                right: format!("length {}", other.len()),
            });
        }
        for (i, (a, b)) in self.iter().zip(other).enumerate() {
            a.check_close(b, tol).map_err(|e| e.at(format!("index {}", i)))?;
        }
        Ok(())
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Vec<T>, tol: Tolerances) -> Result<(), CheckCloseError> {
        self[..].check_close(&other[..], tol)
    }
}

impl<T: CheckClose> CheckClose<[T]> for Vec<T> {
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError> {
        self[..].check_close(other, tol)
    }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    fn check_close(&self, other: &[T; N], tol: Tolerances) -> Result<(), CheckCloseError> {
        self[..].check_close(&other[..], tol)
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn macro_output_can_compile() {
        assert_close!(1.0, 1.0);
        assert_close!(abs=1e-8, 1.0, 1.0);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0);
        assert_close!(abs=1e-8, rel=1e-8, 1.0, 1.0);
        assert_close!(1.0, 1.0,);
        assert_close!(rel=1e-8, 1.0, 1.0,);
        assert_close!(abs=1e-8, 1.0, 1.0, "{}", "hello");
        assert_close!(abs=1e-8, 1.0, 1.0, "{}", "hello",);
    }

    #[test]
    fn containers() {
        assert_close!(vec![1.0, 2.0], vec![1.0, 2.0 + 1e-12]);
        assert_close!([1.0, 2.0, 3.0], [1.0, 2.0, 3.0]);
        assert_close!(abs=1e-10, &[0.0, 1e-12][..], &[1e-12, 0.0][..]);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let tol = Tolerances { abs: 1.0, rel: 1.0 };
        match vec![1.0].check_close(&vec![1.0, 1.0], tol) {
            Err(CheckCloseError::Shape { .. }) => {},
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn error_reports_location() {
        let tol = Tolerances { abs: 0.0, rel: 0.0 };
        let err = vec![1.0, 2.0].check_close(&vec![1.0, 3.0], tol).unwrap_err();
        assert!(err.to_string().starts_with("at index 1:"), "{}", err);
    }

    #[test]
    fn special_values() {
        let tol = Tolerances { abs: 1e-3, rel: 1e-3 };
        assert!(is_close(f64::INFINITY, f64::INFINITY, tol));
        assert!(!is_close(f64::INFINITY, f64::NEG_INFINITY, tol));
        assert!(!is_close(f64::INFINITY, 1e300, tol));
        assert!(!is_close(f64::NAN, f64::NAN, tol));
    }

    #[test]
    #[should_panic(expected = "not nearly equal")]
    fn not_close() {
        assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }

    #[test]
    #[should_panic(expected = "custom message 7")]
    fn custom_message() {
        assert_close!(abs=0.0, rel=0.0, 1.0, 1.1, "custom message {}", 7);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic)]
    fn debug_not_close() {
        debug_assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }
}
