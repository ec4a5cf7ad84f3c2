//! Newton-Raphson method and its multiplicity-adjusted variant

use super::algorithms::Algorithm;
use super::config::ConvergenceParams;
use super::errors::RefinementFailure;
use super::function::Differentiable;
use super::interval::Interval;
use super::report::{RefinementOutcome, RootEstimate};
use super::tolerances::below_floor;
use tracing::{debug, trace};


/// Helpers
/// - `eval_fx_checked`  : evaluates `f(x)` with finite-check
/// - `eval_dfx_checked` : evaluates `f'(x)` with finite-check
#[inline]
fn eval_fx_checked<D>(function: &D, x: f64) -> Result<f64, RefinementFailure>
where D: Differentiable + ?Sized {
    let fx = function.value(x);
    if !fx.is_finite() {
        return Err(RefinementFailure::NonFiniteEvaluation { x, value: fx });
    }
    Ok(fx)
}
#[inline]
fn eval_dfx_checked<D>(function: &D, x: f64) -> Result<f64, RefinementFailure>
where D: Differentiable + ?Sized {
    let dfx = function.derivative(x);
    if !dfx.is_finite() {
        return Err(RefinementFailure::NonFiniteEvaluation { x, value: dfx });
    }
    Ok(dfx)
}


/// Shared iteration for both variants: `x_{k+1} = x_k - m * f(x_k) / f'(x_k)`.
///
/// Runs at least once, then while `|x_k - x_{k-1}| > eps` and budget remains.
fn newton_loop<D>(
    function: &D,
    bracket: Interval,
    params: &ConvergenceParams,
    algorithm: Algorithm,
    multiplicity: f64,
) -> Result<RefinementOutcome, RefinementFailure>
where D: Differentiable + ?Sized {

    let eps      = params.tolerance();
    let floor    = params.derivative_floor();
    let num_iter = params.max_iterations_for(algorithm, bracket);

    let mut x      = bracket.midpoint();
    let mut prev_x = x;
    let mut iter   = 0;

    while (iter == 0 || (x - prev_x).abs() > eps) && iter < num_iter {
        iter  += 1;
        prev_x = x;

        let dfx = eval_dfx_checked(function, prev_x)?;
        if below_floor(dfx, floor) {
            return Err(RefinementFailure::DerivativeTooSmall { x: prev_x, dfx, iteration: iter });
        }
        let fx = eval_fx_checked(function, prev_x)?;

        x = prev_x - multiplicity * fx / dfx;
        if !x.is_finite() {
            return Err(RefinementFailure::NonFiniteEvaluation { x: prev_x, value: x });
        }
        trace!(%algorithm, iter, x, step = (x - prev_x).abs(), "newton step");
    }

    let estimate = RootEstimate {
        value      : x,
        iterations : iter,
        last_step  : (x - prev_x).abs(),
        residual   : eval_fx_checked(function, x)?.abs(),
    };

    if estimate.last_step > eps {
        Ok(RefinementOutcome::MaxIterationsReached(estimate))
    } else {
        Ok(RefinementOutcome::Converged(estimate))
    }
}


fn run<D>(
    function: &D,
    bracket: Interval,
    params: &ConvergenceParams,
    algorithm: Algorithm,
    multiplicity: u32,
) -> RefinementOutcome
where D: Differentiable + ?Sized {
    let outcome = match newton_loop(function, bracket, params, algorithm, f64::from(multiplicity)) {
        Ok(outcome) => outcome,
        Err(reason) => RefinementOutcome::Failed(reason),
    };
    debug!(%algorithm, %bracket, outcome = outcome.kind(), "refinement finished");
    outcome
}


/// Refines a root seeded from `bracket` with the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method)
/// using the analytic derivative of `function`.
///
/// # Arguments
/// - `function` : function and exact derivative
/// - `bracket`  : only its midpoint is used, as `x_0`
/// - `params`   : [`ConvergenceParams`] (`tolerance`, `derivative_floor`,
///                optional `max_iterations`, default 200)
///
/// # Returns
/// - [`RefinementOutcome::Converged`]            : `|x_m - x_(m-1)| <= eps`
/// - [`RefinementOutcome::MaxIterationsReached`] : cap hit with the last step still above `eps`
/// - [`RefinementOutcome::Failed`]
///     - [`RefinementFailure::DerivativeTooSmall`]  : `|f'(x_k)| <= derivative_floor`
///     - [`RefinementFailure::NonFiniteEvaluation`] : `f`, `f'` or the iterate is NaN/inf
///
/// # Behavior
/// - At least one step is always taken, even if `x_0` is already a root.
/// - The derivative guard is checked before every step; a derivative exactly
///   at the floor counts as too small.
///
/// # Notes
/// - Convergence is *local only*. Near a root of multiplicity `m > 1` it
///   degrades to linear; see [`modified_newton`].
pub fn newton<D>(
    function: &D,
    bracket: Interval,
    params: &ConvergenceParams,
) -> RefinementOutcome
where D: Differentiable + ?Sized {
    run(function, bracket, params, Algorithm::Newton, 1)
}


/// Newton with the step scaled by the root multiplicity `m`:
/// `x_{k+1} = x_k - m * f(x_k) / f'(x_k)`.
///
/// `m` comes from [`ConvergenceParams::multiplicity`] and is never inferred.
/// With the right `m` quadratic convergence is restored at multiple roots.
/// Control flow, stopping rules and failures are those of [`newton`].
pub fn modified_newton<D>(
    function: &D,
    bracket: Interval,
    params: &ConvergenceParams,
) -> RefinementOutcome
where D: Differentiable + ?Sized {
    run(function, bracket, params, Algorithm::ModifiedNewton, params.multiplicity())
}
