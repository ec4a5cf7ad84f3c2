//! Tolerance utilities for the refiners.
//!
//! - `bisection_theoretical_iter` : halvings needed to shrink a width below `eps`
//! - `below_floor`                : newton derivative guard (inclusive)
//! - `under_floor`                : secant slope guard (strict)


/// Extra halvings allowed past the theoretical bound when no explicit
/// cap is set.
pub(crate) const BISECTION_ROUNDING_SLACK: usize = 2;


/// Compute the bisection iteration upper bound for a target width tolerance.
///
/// `ceil(log2(width / eps))`, or `0` if the width already meets `eps`.
/// A non-finite ratio (overflow for huge widths over tiny tolerances)
/// saturates to `usize::MAX`; callers cap it.
pub(crate) fn bisection_theoretical_iter(width: f64, eps: f64) -> usize {
    if width <= eps {
        return 0;
    }

    let bound = (width / eps).log2().ceil();
    if bound.is_finite() { bound as usize } else { usize::MAX }
}


/// Returns `true` if `|v|` does not exceed `floor`.
///
/// A value exactly at the floor counts as too small.
#[inline]
pub(crate) fn below_floor(v: f64, floor: f64) -> bool {
    v.abs() <= floor
}


/// Returns `true` if `|v|` is strictly less than `floor`.
#[inline]
pub(crate) fn under_floor(v: f64, floor: f64) -> bool {
    v.abs() < floor
}
