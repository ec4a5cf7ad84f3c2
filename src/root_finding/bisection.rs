use super::algorithms::Algorithm;
use super::config::ConvergenceParams;
use super::errors::RefinementFailure;
use super::function::Differentiable;
use super::interval::{midpoint, Interval};
use super::report::{RefinementOutcome, RootEstimate};
use super::signs::{opposite_sign, same_sign};
use tracing::{debug, trace};

const ALGORITHM: Algorithm = Algorithm::Bisection;


/// Evaluates `f(x)`, turning NaN/inf into a [`RefinementFailure`].
#[inline]
fn eval_checked<D>(function: &D, x: f64) -> Result<f64, RefinementFailure>
where D: Differentiable + ?Sized {
    let fx = function.value(x);
    if !fx.is_finite() {
        return Err(RefinementFailure::NonFiniteEvaluation { x, value: fx });
    }
    Ok(fx)
}


/// Refines a root inside `bracket` with the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// # Arguments
///
/// ┌ `function` - The function whose root is to be found. Only `f` is used.
/// ├ `bracket`  - `[A, B]`, normally with a strict sign change. May be degenerate.
/// └ `params`   - [`ConvergenceParams`]; uses `tolerance`. Unless
///                `max_iterations` is set, the cap is only a safety net
///                a couple of steps past `ceil(log2((B - A) / eps))`.
///
/// # Returns
///
/// ┌ [`RefinementOutcome::Converged`]            - final width <= `eps`, or a zero hit exactly
/// ├ [`RefinementOutcome::MaxIterationsReached`] - cap exhausted with width > `eps`
/// └ [`RefinementOutcome::Failed`]
///     ├ [`RefinementFailure::EvenMultiplicityDetected`] - both halves show a sign
///     │   change, or neither does with all three values nonzero
///     └ [`RefinementFailure::NonFiniteEvaluation`]      - `f` produced NaN/inf
///
/// The estimate holds the last midpoint `x_m`, the iteration count, the final
/// bracket width and `|f(x_m)|`.
///
/// # Notes
/// ├ A bracket already narrower than `eps` (including a degenerate one) converges
/// │   at zero iterations with `x_m = A`.
/// └ On an exact zero at an endpoint the endpoint itself is reported.
pub fn bisection<D>(
    function: &D,
    bracket: Interval,
    params: &ConvergenceParams,
) -> RefinementOutcome
where D: Differentiable + ?Sized {
    let outcome = match bisection_loop(function, bracket, params) {
        Ok(outcome) => outcome,
        Err(reason) => RefinementOutcome::Failed(reason),
    };
    debug!(algorithm = %ALGORITHM, %bracket, outcome = outcome.kind(), "refinement finished");
    outcome
}


fn bisection_loop<D>(
    function: &D,
    bracket: Interval,
    params: &ConvergenceParams,
) -> Result<RefinementOutcome, RefinementFailure>
where D: Differentiable + ?Sized {

    let eps      = params.tolerance();
    let num_iter = params.max_iterations_for(ALGORITHM, bracket);

    let mut start = bracket.low();
    let mut end   = bracket.high();
    let mut x     = start;
    let mut iter  = 0;

    while end - start > eps {
        if iter == num_iter {
            let residual = eval_checked(function, x)?.abs();
            return Ok(RefinementOutcome::MaxIterationsReached(RootEstimate {
                value      : x,
                iterations : iter,
                last_step  : end - start,
                residual,
            }));
        }
        iter += 1;
        x = midpoint(start, end);

        let f_start = eval_checked(function, start)?;
        let fx      = eval_checked(function, x)?;
        let f_end   = eval_checked(function, end)?;
        trace!(iter, start, end, x, fx, "bisection step");

        let left  = (opposite_sign(f_start, fx), same_sign(f_start, fx));
        let right = (opposite_sign(fx, f_end),   same_sign(fx, f_end));
        if (left.0 && right.0) || (left.1 && right.1) {
            return Err(RefinementFailure::EvenMultiplicityDetected { start, end, iteration: iter });
        }

        // shrink interval
        if left.0 {
            end = x;
        } else if right.0 {
            start = x;
        } else {
            // exact zero at x or at an endpoint
            if fx != 0.0 {
                x = if f_start == 0.0 { start } else { end };
            }
            break;
        }
    }

    let residual = eval_checked(function, x)?.abs();
    Ok(RefinementOutcome::Converged(RootEstimate {
        value      : x,
        iterations : iter,
        last_step  : end - start,
        residual,
    }))
}
