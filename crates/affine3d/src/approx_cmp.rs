//! Approximate comparison functions that automatically use [`EPSILON`].
//!
//! Unlike [`approx::abs_diff_eq!`], these are strict: values separated by
//! exactly `EPSILON` are _not_ equal.

use crate::{EPSILON, Float};

/// Returns whether `x` has an absolute value strictly less than `EPSILON`.
pub fn is_negligible(x: Float) -> bool {
    x.abs() < EPSILON
}

/// Compares two numbers, but considers them equal if they are separated by less
/// than `EPSILON`.
///
/// Handles infinity specially.
pub fn approx_eq(a: Float, b: Float) -> bool {
    // use native float equality to handle infinities
    a == b || is_negligible(a - b)
}
