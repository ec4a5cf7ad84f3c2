//! Defines the [`RefinementOutcome`] returned by all refiners and the
//! per-bracket reports collected by a survey.

use super::algorithms::Algorithm;
use super::errors::RefinementFailure;
use super::interval::Interval;


/// Final estimate produced by a refiner.
///
/// [`RootEstimate`]
/// - `value`      : approximate root x_m
/// - `iterations` : steps performed
/// - `last_step`  : final bracket width (bisection) or |x_m - x_(m-1)| (open methods)
/// - `residual`   : |f(value)|
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootEstimate {
    pub value      : f64,
    pub iterations : usize,
    pub last_step  : f64,
    pub residual   : f64,
}


/// Tagged result of one refiner on one bracket.
///
/// ┌ [`RefinementOutcome::Converged`]            : stopping tolerance met
/// ├ [`RefinementOutcome::MaxIterationsReached`] : iteration cap hit first;
/// │                                               still a reportable estimate
/// └ [`RefinementOutcome::Failed`]               : method could not proceed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RefinementOutcome {
    Converged(RootEstimate),
    MaxIterationsReached(RootEstimate),
    Failed(RefinementFailure),
}

impl RefinementOutcome {
    /// Estimate for both success variants, `None` on failure.
    pub fn estimate(&self) -> Option<&RootEstimate> {
        match self {
            RefinementOutcome::Converged(e)
            | RefinementOutcome::MaxIterationsReached(e) => Some(e),
            RefinementOutcome::Failed(_)                 => None,
        }
    }

    pub fn failure(&self) -> Option<&RefinementFailure> {
        match self {
            RefinementOutcome::Failed(reason) => Some(reason),
            _                                 => None,
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, RefinementOutcome::Converged(_))
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RefinementOutcome::Converged(_)            => "converged",
            RefinementOutcome::MaxIterationsReached(_) => "max_iterations_reached",
            RefinementOutcome::Failed(_)               => "failed",
        }
    }
}


/// Outcome of a single method on a bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodReport {
    pub algorithm : Algorithm,
    pub outcome   : RefinementOutcome,
}


/// All method outcomes for one bracket, in [`Algorithm::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct BracketReport {
    pub bracket : Interval,
    pub methods : Vec<MethodReport>,
}

impl BracketReport {
    pub fn outcome(&self, algorithm: Algorithm) -> Option<&RefinementOutcome> {
        self.methods
            .iter()
            .find(|m| m.algorithm == algorithm)
            .map(|m| &m.outcome)
    }
}
