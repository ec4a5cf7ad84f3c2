//! tests for the bisection refiner
use approx::assert_abs_diff_eq;
use rootscan::root_finding::bisection::bisection;
use rootscan::root_finding::config::ConvergenceParams;
use rootscan::root_finding::errors::{ConfigError, RefinementFailure};
use rootscan::root_finding::function::{CosineDrift, Differentiable, Objective};
use rootscan::root_finding::interval::Interval;
use rootscan::root_finding::report::RefinementOutcome;

use super::common::{cosine_brackets, COSINE_MAX_DERIVATIVE};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn values_only<F: Fn(f64) -> f64>(f: F) -> Objective<F, fn(f64) -> f64> {
    Objective::new(f, |_x: f64| 0.0)
}

#[test]
fn converges_on_every_cosine_drift_bracket() {
    let eps      = 1e-5;
    let params   = ConvergenceParams::new();
    let brackets = cosine_brackets();
    assert!(brackets.len() > 1);

    for bracket in brackets {
        let res = bisection(&CosineDrift, bracket, &params);
        let RefinementOutcome::Converged(est) = res else {
            panic!("bisection did not converge on {bracket}: {res:?}");
        };

        let bound = (bracket.width() / eps).log2().ceil() as usize;
        assert!(est.iterations <= bound);
        assert!(est.last_step <= eps);
        assert!(bracket.contains(est.value));
        assert!(est.residual < 2.0 * eps * COSINE_MAX_DERIVATIVE);
        assert_eq!(est.residual, CosineDrift.value(est.value).abs());
    }
}

#[test]
fn finds_sqrt_2() -> TestResult {
    let f      = values_only(|x: f64| x * x - 2.0);
    let params = ConvergenceParams::new().set_tolerance(1e-10)?;

    let res = bisection(&f, Interval::new(0.0, 2.0)?, &params);
    let est = res.estimate().copied().ok_or("no estimate")?;

    assert!(res.is_converged());
    assert_abs_diff_eq!(est.value, 2.0_f64.sqrt(), epsilon = 1e-10);
    assert!(est.iterations > 0);
    Ok(())
}

#[test]
fn width_halves_every_iteration() -> TestResult {
    let f       = values_only(|x: f64| x * x - 2.0);
    let bracket = Interval::new(0.0, 2.0)?;

    for k in 1..=10 {
        let params = ConvergenceParams::new().set_max_iterations(k)?;
        let res    = bisection(&f, bracket, &params);
        let est    = res.estimate().copied().ok_or("no estimate")?;

        assert!(matches!(res, RefinementOutcome::MaxIterationsReached(_)));
        assert_eq!(est.iterations, k);
        assert_eq!(est.last_step, 2.0 / 2.0_f64.powi(k as i32));
    }
    Ok(())
}

#[test]
fn rounding_past_theoretical_bound_still_converges() -> TestResult {
    // width is just under eps * 2^17; rounded midpoints leave it a hair
    // above eps after 17 halvings
    let root    = 71.2875515189357;
    let f       = values_only(move |x: f64| x - root);
    let bracket = Interval::new(70.65759008307134, 71.96831008255576)?;

    let res = bisection(&f, bracket, &ConvergenceParams::new());
    let RefinementOutcome::Converged(est) = res else {
        panic!("bisection did not converge on {bracket}: {res:?}");
    };

    assert_eq!(est.iterations, 18);
    assert!(est.last_step <= 1e-5);
    assert_abs_diff_eq!(est.value, root, epsilon = 1e-5);
    Ok(())
}

#[test]
fn interior_double_crossing_is_even_multiplicity() -> TestResult {
    // f(-1) > 0, f(0) < 0, f(1) > 0: sign changes on both halves
    let f   = values_only(|x: f64| x * x - 0.25);
    let res = bisection(&f, Interval::new(-1.0, 1.0)?, &ConvergenceParams::new());

    assert_eq!(
        res,
        RefinementOutcome::Failed(RefinementFailure::EvenMultiplicityDetected {
            start: -1.0, end: 1.0, iteration: 1
        })
    );
    Ok(())
}

#[test]
fn touching_root_is_even_multiplicity() -> TestResult {
    let f   = values_only(|x: f64| x * x);
    let res = bisection(&f, Interval::new(-1.0, 0.5)?, &ConvergenceParams::new());

    assert!(matches!(
        res.failure(),
        Some(RefinementFailure::EvenMultiplicityDetected { iteration: 1, .. })
    ));
    Ok(())
}

#[test]
fn degenerate_bracket_converges_without_iterating() -> TestResult {
    let f   = values_only(|x: f64| x - 1.0);
    let res = bisection(&f, Interval::new(1.0, 1.0)?, &ConvergenceParams::new());
    let est = res.estimate().copied().ok_or("no estimate")?;

    assert!(res.is_converged());
    assert_eq!(est.iterations, 0);
    assert_eq!(est.value, 1.0);
    assert_eq!(est.last_step, 0.0);
    assert_eq!(est.residual, 0.0);
    Ok(())
}

#[test]
fn exact_zero_at_midpoint_stops() -> TestResult {
    let f   = values_only(|x: f64| x);
    let res = bisection(&f, Interval::new(-1.0, 1.0)?, &ConvergenceParams::new());
    let est = res.estimate().copied().ok_or("no estimate")?;

    assert!(res.is_converged());
    assert_eq!(est.iterations, 1);
    assert_eq!(est.value, 0.0);
    assert_eq!(est.residual, 0.0);
    Ok(())
}

#[test]
fn exact_zero_at_endpoint_reports_endpoint() -> TestResult {
    let f   = values_only(|x: f64| x);
    let res = bisection(&f, Interval::new(0.0, 1.0)?, &ConvergenceParams::new());
    let est = res.estimate().copied().ok_or("no estimate")?;

    assert!(res.is_converged());
    assert_eq!(est.iterations, 1);
    assert_eq!(est.value, 0.0);
    assert_eq!(est.residual, 0.0);
    Ok(())
}

#[test]
fn non_finite_eval() -> TestResult {
    let f   = values_only(|x: f64| x.sqrt() - 1.0);
    let res = bisection(&f, Interval::new(-1.0, 4.0)?, &ConvergenceParams::new());

    assert!(matches!(
        res,
        RefinementOutcome::Failed(RefinementFailure::NonFiniteEvaluation { x, value })
        if x == -1.0 && value.is_nan()
    ));
    Ok(())
}

#[test]
fn invalid_tolerance_rejected_by_setter() {
    let err = ConvergenceParams::new().set_tolerance(0.0).unwrap_err();
    assert_eq!(err, ConfigError::InvalidTolerance { got: 0.0 });

    let err = ConvergenceParams::new().set_tolerance(f64::NAN).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTolerance { got } if got.is_nan()));
}

#[test]
fn invalid_max_iterations_rejected_by_setter() {
    let err = ConvergenceParams::new().set_max_iterations(0).unwrap_err();
    assert_eq!(err, ConfigError::InvalidMaxIter { got: 0 });
}
