//! Hyperplane term: one linear equality constraint and its ADMM state.
//!
//! A hyperplane term stores the characterization of a constraint as
//! `coefficients . x = constant` and computes, on demand, the Euclidean
//! projection of a perturbed consensus point onto that hyperplane. The
//! projection is the closed-form primal update solved at every ADMM
//! iteration for every such term, so it sits on the hot path of the
//! surrounding driver loop.
//!
//! # Projection branches
//!
//! The closed form depends only on the constraint arity n:
//! - n = 1: the constraint alone fixes the variable
//! - n = 2: eliminate one variable via the constraint, solve the remaining
//!   stationarity equation, back-substitute from the constraint exactly
//! - n >= 3: orthogonal point-to-hyperplane projection along a unit normal
//!   cached at construction
//!
//! # Module Structure
//!
//! - `types`: Core [`HyperplaneTerm`] struct and its geometry variant
//! - `constructors`: Validated construction and unit-normal precompute
//! - `operations`: Projection, dual ascent, residual, accessors
//! - `validation`: Invariant checks (`is_satisfied`, `validate`)

mod constructors;
mod operations;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export the main type
pub use types::HyperplaneTerm;
