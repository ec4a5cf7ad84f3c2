//! Target functions for root finding.
//!
//! The refiners only see a [`Differentiable`]: a pure scalar function paired
//! with its exact derivative. Both are called an unbounded number of times and
//! must return identical results for identical inputs.


/// A scalar function with an exact, independently supplied derivative.
pub trait Differentiable {
    /// `f(x)`
    fn value(&self, x: f64) -> f64;

    /// `f'(x)`
    fn derivative(&self, x: f64) -> f64;
}

impl<D: Differentiable + ?Sized> Differentiable for &D {
    fn value(&self, x: f64) -> f64 { (**self).value(x) }
    fn derivative(&self, x: f64) -> f64 { (**self).derivative(x) }
}


/// Pairs two closures into a [`Differentiable`].
///
/// ```
/// use rootscan::root_finding::function::{Differentiable, Objective};
///
/// let f = Objective::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
/// assert_eq!(f.value(2.0), 2.0);
/// assert_eq!(f.derivative(2.0), 4.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Objective<F, G> {
    f:  F,
    df: G,
}

impl<F, G> Objective<F, G>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    pub fn new(f: F, df: G) -> Self {
        Self { f, df }
    }
}

impl<F, G> Differentiable for Objective<F, G>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    #[inline]
    fn value(&self, x: f64) -> f64 { (self.f)(x) }

    #[inline]
    fn derivative(&self, x: f64) -> f64 { (self.df)(x) }
}


/// `f(x) = 4cos(x) + 0.3x`, the sample function on `[-15, 5]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineDrift;

impl CosineDrift {
    pub const FORMULA: &'static str = "4cos(x) + 0.3x";
    pub const LOW:     f64 = -15.0;
    pub const HIGH:    f64 = 5.0;
}

impl Differentiable for CosineDrift {
    #[inline]
    fn value(&self, x: f64) -> f64 { 4.0 * x.cos() + 0.3 * x }

    #[inline]
    fn derivative(&self, x: f64) -> f64 { -4.0 * x.sin() + 0.3 }
}
