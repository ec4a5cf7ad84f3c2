//! Root-finding error types.  
//! 
//! ┌ [`ConfigError`]       : invalid [`ConvergenceParams`] values  
//! │
//! ├ [`SeparationError`]   : invalid separator input  
//! │   ├ partition count below 2  
//! │   └ reversed or non-finite interval bounds  
//! │
//! └ [`RefinementFailure`] : why a single refiner gave up on a bracket  
//!     ├ even-multiplicity root (bisection)  
//!     ├ vanishing derivative (newton family)  
//!     ├ vanishing secant slope (secant)  
//!     └ non-finite function, derivative or iterate  
//!
//! Only the first two are ever returned as `Err`. A [`RefinementFailure`] is 
//! data carried by [`RefinementOutcome::Failed`] so one bad bracket never 
//! aborts a survey.
//!
//! [`ConvergenceParams`]: super::config::ConvergenceParams
//! [`RefinementOutcome::Failed`]: super::report::RefinementOutcome::Failed


use thiserror::Error; 


/// Configuration errors raised by the [`ConvergenceParams`] setters.  
///
/// [`ConvergenceParams`]: super::config::ConvergenceParams
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError { 
    #[error("invalid `tolerance`: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid `max_iterations`: must be >= 1. got {got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid `derivative_floor`: must be finite and > 0. got {got}")]
    InvalidDerivativeFloor { got: f64 },

    #[error("invalid `multiplicity`: must be >= 1. got {got}")]
    InvalidMultiplicity { got: u32 },
}


/// Root separation input errors. 
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SeparationError { 
    #[error("invalid partition count: N must be >= 2. got N={got}")]
    InvalidPartitionCount { got: usize },

    #[error("invalid interval: bounds must be finite with low <= high. got [{low}, {high}]")]
    InvalidInterval { low: f64, high: f64 },
}


/// Reasons a refiner stops without a usable estimate. 
///
/// `iteration` is the 1-based step on which the condition was detected.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RefinementFailure { 
    #[error("root of even multiplicity on [{start}, {end}] at step {iteration}")]
    EvenMultiplicityDetected { start: f64, end: f64, iteration: usize },

    #[error("derivative too small |df(x_0)| = {:.2e} at x={x} on step {iteration}", .dfx.abs())]
    DerivativeTooSmall { x: f64, dfx: f64, iteration: usize },

    #[error("|f(x_1) - f(x_0)| too small = {:.2e} on step {iteration}", .delta.abs())]
    DegenerateSecantStep { x0: f64, x1: f64, delta: f64, iteration: usize },

    #[error("non-finite value {value} produced at x={x}")]
    NonFiniteEvaluation { x: f64, value: f64 },
}
