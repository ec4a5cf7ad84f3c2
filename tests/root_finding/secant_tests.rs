//! tests for the secant refiner
use approx::assert_abs_diff_eq;
use rootscan::root_finding::config::ConvergenceParams;
use rootscan::root_finding::errors::RefinementFailure;
use rootscan::root_finding::function::{CosineDrift, Objective};
use rootscan::root_finding::interval::Interval;
use rootscan::root_finding::report::RefinementOutcome;
use rootscan::root_finding::secant::secant;

use super::common::cosine_brackets;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn values_only<F: Fn(f64) -> f64>(f: F) -> Objective<F, fn(f64) -> f64> {
    Objective::new(f, |_x: f64| 0.0)
}

#[test]
fn converges_on_every_cosine_drift_bracket() {
    let params = ConvergenceParams::new();

    for bracket in cosine_brackets() {
        let res = secant(&CosineDrift, bracket, &params);
        let RefinementOutcome::Converged(est) = res else {
            panic!("secant did not converge on {bracket}: {res:?}");
        };

        assert!(est.iterations <= 6);
        assert!(est.last_step < 1e-5);
        assert!(bracket.contains(est.value));
        assert!(est.residual < 1e-7);
    }
}

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = values_only(|x: f64| x * x - 2.0);
    let res = secant(&f, Interval::new(1.0, 2.0)?, &ConvergenceParams::new());
    let est = res.estimate().copied().ok_or("no estimate")?;

    assert!(res.is_converged());
    assert_abs_diff_eq!(est.value, 2.0_f64.sqrt(), epsilon = 1e-8);
    Ok(())
}

#[test]
fn seeds_need_no_sign_change() -> TestResult {
    let f   = values_only(|x: f64| x * x - 2.0);
    let res = secant(&f, Interval::new(2.0, 3.0)?, &ConvergenceParams::new());
    let est = res.estimate().copied().ok_or("no estimate")?;

    assert!(res.is_converged());
    assert_abs_diff_eq!(est.value, 2.0_f64.sqrt(), epsilon = 1e-8);
    Ok(())
}

#[test]
fn converges_superlinearly() -> TestResult {
    let f       = values_only(|x: f64| x * x - 2.0);
    let bracket = Interval::new(1.0, 2.0)?;
    let root    = 2.0_f64.sqrt();
    let phi     = (1.0 + 5.0_f64.sqrt()) / 2.0;

    // errors of x_2 .. x_6; x_7 is already at round-off
    let errors = (1..=5)
        .map(|k| -> Result<f64, Box<dyn std::error::Error>> {
            let params = ConvergenceParams::new()
                .set_tolerance(1e-14)?
                .set_max_iterations(k)?;
            let res = secant(&f, bracket, &params);
            assert!(matches!(res, RefinementOutcome::MaxIterationsReached(_)));
            Ok((res.estimate().ok_or("no estimate")?.value - root).abs())
        })
        .collect::<Result<Vec<_>, _>>()?;

    for pair in errors.windows(2) {
        assert!(pair[1] < 2.0 * pair[0].powf(phi), "{errors:?}");
    }
    Ok(())
}

#[test]
fn degenerate_bracket_is_degenerate_step() -> TestResult {
    let f   = values_only(|x: f64| x - 0.5);
    let res = secant(&f, Interval::new(0.5, 0.5)?, &ConvergenceParams::new());

    assert_eq!(
        res,
        RefinementOutcome::Failed(RefinementFailure::DegenerateSecantStep {
            x0: 0.5, x1: 0.5, delta: 0.0, iteration: 1
        })
    );
    Ok(())
}

#[test]
fn slope_exactly_at_floor_still_steps() -> TestResult {
    // f(0.5) - f(0) = 0.5 equals the floor; x_2 lands on the root
    let f      = values_only(|x: f64| x);
    let params = ConvergenceParams::new().set_derivative_floor(0.5)?;

    let res = secant(&f, Interval::new(0.0, 0.5)?, &params);
    let RefinementOutcome::Converged(est) = res else {
        panic!("expected convergence, got {res:?}");
    };

    assert_eq!(est.value, 0.0);
    assert_eq!(est.iterations, 2);
    assert_eq!(est.residual, 0.0);
    Ok(())
}

#[test]
fn flat_function_is_degenerate_step() -> TestResult {
    let f   = values_only(|_x: f64| 1.0);
    let res = secant(&f, Interval::new(0.0, 1.0)?, &ConvergenceParams::new());

    assert!(matches!(
        res.failure(),
        Some(RefinementFailure::DegenerateSecantStep { iteration: 1, .. })
    ));
    Ok(())
}

#[test]
fn uses_max_iter_hits_limit() -> TestResult {
    let f      = values_only(|x: f64| x * x + 1.0);
    let params = ConvergenceParams::new().set_max_iterations(3)?;

    let res = secant(&f, Interval::new(0.5, 1.5)?, &params);
    let RefinementOutcome::MaxIterationsReached(est) = res else {
        panic!("expected iteration limit, got {res:?}");
    };

    assert_eq!(est.iterations, 3);
    assert!(est.last_step > 1e-5);
    assert_abs_diff_eq!(est.residual, est.value * est.value + 1.0);
    Ok(())
}

#[test]
fn non_finite_eval() -> TestResult {
    // x_2 = 4 - ln 4 / (ln 4 - ln 3) < 0
    let f   = values_only(|x: f64| x.ln());
    let res = secant(&f, Interval::new(3.0, 4.0)?, &ConvergenceParams::new());

    assert!(matches!(
        res.failure(),
        Some(RefinementFailure::NonFiniteEvaluation { x, value }) if *x < 0.0 && value.is_nan()
    ));
    Ok(())
}
