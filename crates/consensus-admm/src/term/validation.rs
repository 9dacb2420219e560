//! Validation methods for HyperplaneTerm.
//!
//! `project` itself is check-free; these methods exist for the driver's
//! sanity checks and for re-validating deserialized terms.

use crate::config::AdmmConfig;
use crate::error::{SolverError, SolverResult};

use super::types::{Geometry, HyperplaneTerm};

impl HyperplaneTerm {
    /// Check whether the local vector currently satisfies the constraint.
    ///
    /// # Returns
    ///
    /// `true` if `|coefficients . x - constant| <= tolerance`. False for a
    /// non-finite residual, which is how a degenerate projection shows up.
    ///
    /// # Example
    ///
    /// ```
    /// use consensus_admm::config::AdmmConfig;
    /// use consensus_admm::consensus::ConsensusState;
    /// use consensus_admm::term::HyperplaneTerm;
    ///
    /// let config = AdmmConfig::default();
    /// let consensus = ConsensusState::new(3, &config).unwrap();
    /// let mut term =
    ///     HyperplaneTerm::new(vec![1.0, 1.0, 1.0], 3.0, vec![0, 1, 2], &config).unwrap();
    /// assert!(!term.is_satisfied(1e-9)); // x starts at zero
    ///
    /// term.project(&consensus);
    /// assert!(term.is_satisfied(1e-9));
    /// ```
    #[inline]
    pub fn is_satisfied(&self, tolerance: f64) -> bool {
        self.residual().abs() <= tolerance
    }

    /// Re-check every term invariant and return a detailed error.
    ///
    /// Construction already enforces these; this exists for terms that came
    /// in through deserialization and for drivers that want to detect
    /// numerical corruption (non-finite primal/dual values) between
    /// iterations.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - All invariants hold
    /// * `Err(SolverError)` - Specific validation failure
    pub fn validate(&self, config: &AdmmConfig) -> SolverResult<()> {
        let n = self.coefficients.len();
        if n == 0 {
            return Err(SolverError::EmptyConstraint);
        }
        for (name, len) in [
            ("consensus_indices", self.consensus_indices.len()),
            ("local", self.local.len()),
            ("duals", self.duals.len()),
        ] {
            if len != n {
                tracing::error!(vector = name, expected = n, actual = len, "Term length drift");
                return Err(SolverError::DimensionMismatch {
                    expected: n,
                    actual: len,
                });
            }
        }

        if !self.constant.is_finite() {
            return Err(SolverError::NonFiniteInput(format!(
                "constant is {}",
                self.constant
            )));
        }
        for (index, &value) in self.coefficients.iter().enumerate() {
            if !value.is_finite() {
                return Err(SolverError::NonFiniteInput(format!(
                    "coefficient {index} is {value}"
                )));
            }
            if value.abs() < config.coefficient_eps {
                return Err(SolverError::ZeroCoefficient { index, value });
            }
        }

        // Numerical corruption surfaced by a degenerate projection
        for (index, &value) in self.local.iter().enumerate() {
            if !value.is_finite() {
                return Err(SolverError::NonFiniteInput(format!(
                    "local variable {index} is {value}"
                )));
            }
        }
        for (index, &value) in self.duals.iter().enumerate() {
            if !value.is_finite() {
                return Err(SolverError::NonFiniteInput(format!(
                    "dual variable {index} is {value}"
                )));
            }
        }

        // Geometry must agree with arity (deserialized terms can lie)
        match (&self.geometry, n) {
            (Geometry::Point, 1) | (Geometry::Line, 2) => Ok(()),
            (Geometry::Hyperplane { unit_normal }, n) if n >= 3 => {
                if unit_normal.len() != n {
                    return Err(SolverError::DimensionMismatch {
                        expected: n,
                        actual: unit_normal.len(),
                    });
                }
                Ok(())
            }
            _ => Err(SolverError::InvalidGeometry(format!(
                "geometry variant does not match arity {n}"
            ))),
        }
    }
}
