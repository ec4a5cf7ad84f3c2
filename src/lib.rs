//! Root separation and refinement for a scalar function on a bounded interval.
//!
//! [`root_finding::separation`] isolates sign changes on a uniform grid, and
//! each bracket is then refined by bisection, Newton, modified Newton and the
//! secant method so their convergence can be compared.

pub mod root_finding;
