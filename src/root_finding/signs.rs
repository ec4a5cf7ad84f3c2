//! Sign utilities for root separation and bisection.
//! - `opposite_sign` : `true` if `x * y < 0`  
//! - `same_sign`     : `true` if `x * y > 0`
//!
//! Signs are compared directly, so products of tiny values cannot underflow 
//! into a false zero. Zero and NaN are neither.

/// Returns `true` if `x` and `y` are nonzero with opposite signs.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    (x < 0.0 && y > 0.0) || (x > 0.0 && y < 0.0)
}


/// Returns `true` if `x` and `y` are nonzero with the same sign.
#[inline]
pub(crate) fn same_sign(x: f64, y: f64) -> bool {
    (x < 0.0 && y < 0.0) || (x > 0.0 && y > 0.0)
}
