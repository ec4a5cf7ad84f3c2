use super::algorithms::Algorithm;
use super::config::ConvergenceParams;
use super::errors::RefinementFailure;
use super::function::Differentiable;
use super::interval::Interval;
use super::report::{RefinementOutcome, RootEstimate};
use super::tolerances::under_floor;
use tracing::{debug, trace};

const ALGORITHM: Algorithm = Algorithm::Secant;


#[inline]
fn eval_checked<D>(function: &D, x: f64) -> Result<f64, RefinementFailure>
where D: Differentiable + ?Sized {
    let fx = function.value(x);
    if !fx.is_finite() {
        return Err(RefinementFailure::NonFiniteEvaluation { x, value: fx });
    }
    Ok(fx)
}


/// Calculates the secant x-intercept for the line
/// connecting `(x0, fx0)` and `(x1, fx1)`.
///
/// # Returns
/// - `Ok(x2)` : `x1 - fx1 * (x1 - x0) / (fx1 - fx0)`
/// - `Err(DegenerateSecantStep)` : `|fx1 - fx0| < floor`
#[inline]
fn secant_x_intercept(
    (x0, fx0): (f64, f64),
    (x1, fx1): (f64, f64),
    floor: f64,
    iteration: usize,
) -> Result<f64, RefinementFailure> {
    let delta = fx1 - fx0;
    if under_floor(delta, floor) {
        return Err(RefinementFailure::DegenerateSecantStep { x0, x1, delta, iteration });
    }

    Ok(x1 - fx1 * (x1 - x0) / delta)
}


/// Refines a root with the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method), seeded
/// with both endpoints of `bracket`.
///
/// # Arguments
/// - `function` : the function whose root is to be found. Only `f` is used.
/// - `bracket`  : `x_0 = A`, `x_1 = B`; no sign change is required
/// - `params`   : [`ConvergenceParams`] (`tolerance`, `derivative_floor` as the
///                slope guard, optional `max_iterations`, default 300)
///
/// # Returns
/// - [`RefinementOutcome::Converged`]            : `|x_{k+1} - x_k| < eps`
/// - [`RefinementOutcome::MaxIterationsReached`] : cap hit; carries the last
///   iterate and the magnitude of the last step taken
/// - [`RefinementOutcome::Failed`]
///     - [`RefinementFailure::DegenerateSecantStep`] : `|f(x_k) - f(x_{k-1})| < derivative_floor`
///     - [`RefinementFailure::NonFiniteEvaluation`]  : `f` or an iterate is NaN/inf
///
/// # Behavior
/// - Update: `x_{k+1} = x_k - f(x_k) * (x_k - x_{k-1}) / (f(x_k) - f(x_{k-1}))`
/// - A degenerate bracket gives `f(x_1) == f(x_0)` and fails on the first step.
///
/// # Notes
/// - Convergence is superlinear (~1.618) near simple roots.
///
/// # Warning
/// - Poor seeds may diverge. Bisection keeps the root bracketed at the cost
///   of linear convergence.
pub fn secant<D>(
    function: &D,
    bracket: Interval,
    params: &ConvergenceParams,
) -> RefinementOutcome
where D: Differentiable + ?Sized {
    let outcome = match secant_loop(function, bracket, params) {
        Ok(outcome) => outcome,
        Err(reason) => RefinementOutcome::Failed(reason),
    };
    debug!(algorithm = %ALGORITHM, %bracket, outcome = outcome.kind(), "refinement finished");
    outcome
}


fn secant_loop<D>(
    function: &D,
    bracket: Interval,
    params: &ConvergenceParams,
) -> Result<RefinementOutcome, RefinementFailure>
where D: Differentiable + ?Sized {

    let eps      = params.tolerance();
    let floor    = params.derivative_floor();
    let num_iter = params.max_iterations_for(ALGORITHM, bracket);

    let mut x_prev = bracket.low();
    let mut x_curr = bracket.high();
    let mut f_prev = eval_checked(function, x_prev)?;
    let mut f_curr = eval_checked(function, x_curr)?;
    let mut last_step = (x_curr - x_prev).abs();

    for iter in 1..=num_iter {
        let x_next = secant_x_intercept((x_prev, f_prev), (x_curr, f_curr), floor, iter)?;
        if !x_next.is_finite() {
            return Err(RefinementFailure::NonFiniteEvaluation { x: x_curr, value: x_next });
        }
        let f_next = eval_checked(function, x_next)?;
        last_step  = (x_next - x_curr).abs();
        trace!(iter, x = x_next, step = last_step, "secant step");

        if last_step < eps {
            return Ok(RefinementOutcome::Converged(RootEstimate {
                value      : x_next,
                iterations : iter,
                last_step,
                residual   : f_next.abs(),
            }));
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f_next;
    }

    Ok(RefinementOutcome::MaxIterationsReached(RootEstimate {
        value      : x_curr,
        iterations : num_iter,
        last_step,
        residual   : f_curr.abs(),
    }))
}
