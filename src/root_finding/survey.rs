//! Runs every refiner over every bracket.
//!
//! Refiners share no state, so brackets are independent. With the `parallel`
//! feature brackets are refined on the rayon pool; results are collected in
//! bracket order either way, methods in [`Algorithm::ALL`] order.

use super::algorithms::Algorithm;
use super::bisection::bisection;
use super::config::ConvergenceParams;
use super::function::Differentiable;
use super::interval::Interval;
use super::newton::{modified_newton, newton};
use super::report::{BracketReport, MethodReport, RefinementOutcome};
use super::secant::secant;


/// Runs `algorithm` on `bracket`.
pub fn refine<D>(
    function: &D,
    bracket: Interval,
    params: &ConvergenceParams,
    algorithm: Algorithm,
) -> RefinementOutcome
where D: Differentiable + ?Sized {
    match algorithm {
        Algorithm::Bisection      => bisection(function, bracket, params),
        Algorithm::Newton         => newton(function, bracket, params),
        Algorithm::ModifiedNewton => modified_newton(function, bracket, params),
        Algorithm::Secant         => secant(function, bracket, params),
    }
}


/// Runs all four refiners on `bracket`.
pub fn refine_bracket<D>(
    function: &D,
    bracket: Interval,
    params: &ConvergenceParams,
) -> BracketReport
where D: Differentiable + ?Sized {
    let methods = Algorithm::ALL
        .iter()
        .map(|&algorithm| MethodReport {
            algorithm,
            outcome: refine(function, bracket, params, algorithm),
        })
        .collect();

    BracketReport { bracket, methods }
}


/// Runs all four refiners on each bracket, in bracket order.
#[cfg(not(feature = "parallel"))]
pub fn refine_brackets<D>(
    function: &D,
    brackets: &[Interval],
    params: &ConvergenceParams,
) -> Vec<BracketReport>
where D: Differentiable + ?Sized {
    brackets
        .iter()
        .map(|&bracket| refine_bracket(function, bracket, params))
        .collect()
}


/// Runs all four refiners on each bracket, in bracket order.
#[cfg(feature = "parallel")]
pub fn refine_brackets<D>(
    function: &D,
    brackets: &[Interval],
    params: &ConvergenceParams,
) -> Vec<BracketReport>
where D: Differentiable + Sync + ?Sized {
    use rayon::prelude::*;

    brackets
        .par_iter()
        .map(|&bracket| refine_bracket(function, bracket, params))
        .collect()
}
