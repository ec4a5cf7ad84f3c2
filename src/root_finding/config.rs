//! Shared configuration for the refiners.
//!
//! [`ConvergenceParams`] : universal fields
//! ├ `tolerance`        : step/width tolerance `eps`
//! ├ `max_iterations`   : iteration cap (optional, method default when unset)
//! ├ `derivative_floor` : smallest admissible |f'(x)| or |f(x_k) - f(x_{k-1})|
//! └ `multiplicity`     : root multiplicity `m` for modified newton
//!
//! [`ConvergenceParams::new`] initializes configuration with default values.
//! Setters validate and hand back `Result<Self, ConfigError>` so a params
//! value that exists is always valid.


use super::algorithms::{Algorithm, GLOBAL_MAX_ITER_FALLBACK};
use super::errors::ConfigError;
use super::interval::Interval;
use super::tolerances::{bisection_theoretical_iter, BISECTION_ROUNDING_SLACK};


pub const DEFAULT_TOLERANCE        : f64 = 1e-5;
pub const DEFAULT_DERIVATIVE_FLOOR : f64 = 1e-15;
pub const DEFAULT_MULTIPLICITY     : u32 = 1;


/// Convergence configuration shared by all refiners.
///
/// # Defaults
///
/// ┌ `tolerance`        = 1e-5
/// ├ `derivative_floor` = 1e-15
/// ├ `multiplicity`     = 1
/// └ `max_iterations`   = unset, resolved per method by
///   [`ConvergenceParams::max_iterations_for`]
///
/// # Validation
///
/// ┌ `tolerance`        > 0 and finite
/// ├ `derivative_floor` > 0 and finite
/// ├ `multiplicity`     >= 1
/// └ `max_iterations`   >= 1
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ConvergenceParams {
    tolerance:        f64,
    max_iterations:   Option<usize>,
    derivative_floor: f64,
    multiplicity:     u32,
}

impl ConvergenceParams {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tolerance        : DEFAULT_TOLERANCE,
            max_iterations   : None,
            derivative_floor : DEFAULT_DERIVATIVE_FLOOR,
            multiplicity     : DEFAULT_MULTIPLICITY,
        }
    }

    // getters
    #[inline] #[must_use] pub fn tolerance(&self)        -> f64           { self.tolerance }
    #[inline] #[must_use] pub fn max_iterations(&self)   -> Option<usize> { self.max_iterations }
    #[inline] #[must_use] pub fn derivative_floor(&self) -> f64           { self.derivative_floor }
    #[inline] #[must_use] pub fn multiplicity(&self)     -> u32           { self.multiplicity }

    // setters
    pub fn set_tolerance(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidTolerance { got: v });
        }
        self.tolerance = v;
        Ok(self)
    }

    pub fn set_max_iterations(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidMaxIter { got: v });
        }
        self.max_iterations = Some(v);
        Ok(self)
    }

    pub fn set_derivative_floor(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidDerivativeFloor { got: v });
        }
        self.derivative_floor = v;
        Ok(self)
    }

    pub fn set_multiplicity(mut self, v: u32) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidMultiplicity { got: v });
        }
        self.multiplicity = v;
        Ok(self)
    }

    /// Iteration cap for `algorithm` on `bracket`.
    ///
    /// An explicit `max_iterations` always wins. Otherwise newton variants
    /// and secant use [`Algorithm::default_max_iter`]. Bisection gets
    /// `ceil(log2(width / tolerance))` plus a small slack, since rounded
    /// midpoints can leave the width a hair above `tolerance` after exactly
    /// that many halvings; capped at [`GLOBAL_MAX_ITER_FALLBACK`].
    #[must_use]
    pub fn max_iterations_for(&self, algorithm: Algorithm, bracket: Interval) -> usize {
        if let Some(v) = self.max_iterations {
            return v;
        }

        match algorithm.default_max_iter() {
            Some(v) => v,
            None    => bisection_theoretical_iter(bracket.width(), self.tolerance)
                .saturating_add(BISECTION_ROUNDING_SLACK)
                .min(GLOBAL_MAX_ITER_FALLBACK),
        }
    }
}

impl Default for ConvergenceParams {
    fn default() -> Self { Self::new() }
}
