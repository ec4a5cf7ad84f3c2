//! Root separation on a uniform grid.

use super::errors::SeparationError;
use super::function::Differentiable;
use super::interval::Interval;
use super::signs::opposite_sign;
use tracing::{debug, warn};


/// Isolates brackets of sign changes of `function` on `interval`.
///
/// Splits `[A, B]` into `n` sub-intervals of width `h = (B - A) / n` and
/// scans them left to right. For each sub-interval `[start, end]`:
///
/// ┌ `f(start) * f(end) < 0`                 → bracket `[start, end]`
/// ├ else `f(end) == 0`                      → degenerate `[end, end]`
/// └ else first sub-interval, `f(start) == 0` → degenerate `[start, start]`
///
/// Grid point `i` is `A + i * h` and the last one is `B` exactly, so the grid
/// for `2n` contains every point of the grid for `n`. Each grid point is
/// evaluated once (`n + 1` evaluations).
///
/// # Errors
/// - [`SeparationError::InvalidPartitionCount`] : `n < 2`
///
/// # Notes
/// - No bracket found is not an error: the result is empty.
/// - Non-finite values at a grid point never form a bracket.
/// - A zero-width `interval` yields at most one degenerate bracket.
///
/// # Warning
/// Two sign changes inside one sub-interval cancel out and are missed
/// entirely; a larger `n` narrows but never closes that gap.
pub fn separate_roots<D>(
    function: &D,
    interval: Interval,
    n: usize,
) -> Result<Vec<Interval>, SeparationError>
where D: Differentiable + ?Sized {

    if n < 2 {
        return Err(SeparationError::InvalidPartitionCount { got: n });
    }

    let a = interval.low();
    let b = interval.high();
    let h = (b - a) / n as f64;

    let grid = |i: usize| if i == n { b } else { a + h * i as f64 };

    let eval = |x: f64| -> f64 {
        let fx = function.value(x);
        if !fx.is_finite() {
            warn!(x, fx, "non-finite function value on separation grid");
        }
        fx
    };

    let mut brackets = Vec::new();
    let mut start    = a;
    let mut f_start  = eval(start);
    for i in 1..=n {
        let end   = grid(i);
        let f_end = eval(end);

        if opposite_sign(f_start, f_end) {
            brackets.push(Interval::between(start, end));
        } else if f_end == 0.0 {
            // coincident grid points (zero-width segment) hit the same zero
            if brackets.last() != Some(&Interval::point(end)) {
                brackets.push(Interval::point(end));
            }
        } else if i == 1 && f_start == 0.0 {
            brackets.push(Interval::point(start));
        }

        start   = end;
        f_start = f_end;
    }

    debug!(n, h, found = brackets.len(), "root separation finished");
    Ok(brackets)
}
