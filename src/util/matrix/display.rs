/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Human-readable rendering.
//!
//! One line per row, each shaped like `  ( 1.5 -2   0 )`.  This is for display
//! only and is not meant to be parsed back.

use crate::matrix::Matrix;
use std::fmt;

const DELIM_OPEN: &str = "(";
const DELIM_CLOSE: &str = ")";
const SIGNIFICANT_DIGITS: usize = 10;
const MIN_WIDTH: usize = 3;

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            write!(f, "  {}", DELIM_OPEN)?;
            for &x in row {
                write!(f, "{:>width$} ", format_element(x)?, width = MIN_WIDTH)?;
            }
            writeln!(f, "{}", DELIM_CLOSE)?;
        }
        Ok(())
    }
}

impl Matrix {
    pub fn render(&self) -> String { self.to_string() }
}

/// A number with a leading space or minus sign, in the style of C's `"% .10g"`.
fn format_element(x: f64) -> Result<String, fmt::Error> {
    // (-0.0 == 0.0, so this also turns negative zero positive)
    let x = if x == 0.0 { 0.0 } else { x };
    let sign = match x.is_sign_negative() && !x.is_nan() {
        true => '-',
        false => ' ',
    };
    Ok(format!("{}{}", sign, format_general(x.abs(), SIGNIFICANT_DIGITS)?))
}

/// `%g` for a nonnegative value: fixed notation unless the exponent is small or large,
/// with trailing zeros removed.
fn format_general(x: f64, precision: usize) -> Result<String, fmt::Error> {
    if x.is_nan() { return Ok("NaN".into()); }
    if x.is_infinite() { return Ok("Inf".into()); }
    if x == 0.0 { return Ok("0".into()); }

    // Round first; rounding can carry into the exponent (9.9999999999 -> 1.000000000e1).
    let sci = format!("{:.*e}", precision - 1, x);
    let e_pos = sci.find('e').ok_or(fmt::Error)?;
    let (mantissa, exp) = (&sci[..e_pos], &sci[e_pos + 1..]);
    let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;

    if exp < -4 || exp >= precision as i32 {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        Ok(format!("{}e{}{:02}", trim_fraction(mantissa), exp_sign, exp.abs()))
    } else {
        let decimals = (precision as i32 - 1 - exp) as usize;
        Ok(trim_fraction(&format!("{:.*}", decimals, x)).to_owned())
    }
}

fn trim_fraction(s: &str) -> &str {
    match s.contains('.') {
        true => s.trim_end_matches('0').trim_end_matches('.'),
        false => s,
    }
}
