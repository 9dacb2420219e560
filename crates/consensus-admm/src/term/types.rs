//! Core type definitions for hyperplane terms.
//!
//! This module contains the [`HyperplaneTerm`] struct and the arity-selected
//! geometry variant it dispatches on.

use serde::{Deserialize, Serialize};

/// Projection geometry, selected once at construction by constraint arity.
///
/// There is no fallback or blending between variants: the branch taken by
/// `project` is a pure function of `n = coefficients.len()`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) enum Geometry {
    /// n = 1: the feasible set is a single point, so the quadratic
    /// objective is irrelevant.
    Point,
    /// n = 2: the feasible set is a line; solved by elimination in
    /// closed form.
    Line,
    /// n >= 3: the feasible set is a hyperplane; projected along the
    /// cached unit normal `coefficients / ||coefficients||`.
    Hyperplane { unit_normal: Vec<f64> },
}

/// One linear equality constraint `coefficients . x = constant` plus its
/// local ADMM state.
///
/// # Ownership
///
/// The term exclusively owns its primal vector x (`local`) and dual vector y
/// (`duals`). The shared consensus vector z is external state addressed
/// through `consensus_indices`; `project` only reads it.
///
/// # Invariants
///
/// - `coefficients`, `local`, `duals`, `consensus_indices` all have the same
///   length n >= 1
/// - every coefficient is finite and non-zero
/// - `geometry` matches n, and for n >= 3 carries a unit-length normal
///
/// All invariants are established by [`HyperplaneTerm::new`] and never
/// broken by the operations on this type.
///
/// # Example
///
/// ```
/// use consensus_admm::config::AdmmConfig;
/// use consensus_admm::consensus::ConsensusState;
/// use consensus_admm::term::HyperplaneTerm;
///
/// let config = AdmmConfig::default();
/// let consensus = ConsensusState::new(1, &config).unwrap();
/// let mut term = HyperplaneTerm::new(vec![2.0], 10.0, vec![0], &config).unwrap();
///
/// term.project(&consensus);
/// assert_eq!(term.local_variables(), &[5.0]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HyperplaneTerm {
    /// Constraint coefficients. Never zero (enforced at construction).
    pub(crate) coefficients: Vec<f64>,
    /// Right-hand side of the constraint.
    pub(crate) constant: f64,
    /// Cached projection geometry derived from the coefficients.
    pub(crate) geometry: Geometry,
    /// Local primal vector x. Written only by `project`.
    pub(crate) local: Vec<f64>,
    /// Dual vector y. Written only by `update_duals`.
    pub(crate) duals: Vec<f64>,
    /// Map from local slot i to the global consensus variable it tracks.
    pub(crate) consensus_indices: Vec<usize>,
}

// Terms must be movable across worker threads for parallel projection
static_assertions::assert_impl_all!(HyperplaneTerm: Send, Sync);
