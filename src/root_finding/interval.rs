//! Closed interval `[low, high]` used for search ranges and root brackets.


use super::errors::SeparationError;


/// Closed interval with finite `low <= high`.
///
/// A degenerate interval (`low == high`) is an exact root found at a grid
/// point by [`separate_roots`].
///
/// [`separate_roots`]: super::separation::separate_roots
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    low:  f64,
    high: f64,
}

impl Interval {
    pub fn new(low: f64, high: f64) -> Result<Self, SeparationError> {
        if !(low.is_finite() && high.is_finite()) || low > high {
            return Err(SeparationError::InvalidInterval { low, high });
        }
        Ok(Self { low, high })
    }

    /// Single-point interval `[x, x]`. Caller guarantees `x` is finite.
    pub(crate) fn point(x: f64) -> Self {
        Self { low: x, high: x }
    }

    /// Caller guarantees finite `low <= high`.
    pub(crate) fn between(low: f64, high: f64) -> Self {
        debug_assert!(low <= high);
        Self { low, high }
    }

    #[inline] #[must_use] pub fn low(&self)  -> f64 { self.low }
    #[inline] #[must_use] pub fn high(&self) -> f64 { self.high }

    #[inline] #[must_use]
    pub fn width(&self) -> f64 { self.high - self.low }

    #[inline] #[must_use]
    pub fn midpoint(&self) -> f64 { midpoint(self.low, self.high) }

    #[inline] #[must_use]
    pub fn is_degenerate(&self) -> bool { self.low == self.high }

    #[inline] #[must_use]
    pub fn contains(&self, x: f64) -> bool { self.low <= x && x <= self.high }

    /// `true` if `other` lies within `self`.
    #[inline] #[must_use]
    pub fn encloses(&self, other: &Interval) -> bool {
        self.low <= other.low && other.high <= self.high
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "[{:.*}; {:.*}]", p, self.low, p, self.high),
            None    => write!(f, "[{}; {}]", self.low, self.high),
        }
    }
}


/// Midpoint of `[a, b]`.
#[inline]
pub(crate) fn midpoint(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}
