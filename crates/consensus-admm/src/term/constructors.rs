//! Constructor and geometry precompute for HyperplaneTerm.

use crate::config::AdmmConfig;
use crate::error::{SolverError, SolverResult};

use super::types::{Geometry, HyperplaneTerm};

impl Geometry {
    /// Derive the projection geometry for a coefficient vector.
    ///
    /// For n >= 3 this computes the unit normal once; the n <= 2 branches
    /// use closed-form solutions and need no derived state.
    pub(crate) fn for_coefficients(coefficients: &[f64]) -> Self {
        match coefficients.len() {
            1 => Geometry::Point,
            2 => Geometry::Line,
            _ => {
                // Euclidean norm of the coefficient vector; non-zero because
                // every coefficient is non-zero.
                let length = coefficients.iter().map(|c| c * c).sum::<f64>().sqrt();
                Geometry::Hyperplane {
                    unit_normal: coefficients.iter().map(|c| c / length).collect(),
                }
            }
        }
    }
}

impl HyperplaneTerm {
    /// Create a hyperplane term for the constraint `coefficients . x = constant`.
    ///
    /// The local primal and dual vectors start at zero. For n >= 3 the unit
    /// normal is computed here, once, and reused by every projection.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - n finite, non-zero reals, n >= 1
    /// * `constant` - finite right-hand side
    /// * `consensus_indices` - n global consensus slots, one per local slot
    /// * `config` - supplies the zero-coefficient threshold
    ///
    /// # Errors
    ///
    /// * `SolverError::EmptyConstraint` - n = 0
    /// * `SolverError::DimensionMismatch` - index map length differs from n
    /// * `SolverError::NonFiniteInput` - NaN or infinite coefficient/constant
    /// * `SolverError::ZeroCoefficient` - any `|coefficient| < coefficient_eps`
    ///
    /// # Example
    ///
    /// ```
    /// use consensus_admm::config::AdmmConfig;
    /// use consensus_admm::term::HyperplaneTerm;
    ///
    /// let config = AdmmConfig::default();
    /// let term = HyperplaneTerm::new(vec![1.0, -2.0], 3.0, vec![0, 4], &config).unwrap();
    /// assert_eq!(term.arity(), 2);
    ///
    /// // Zero coefficients are rejected here, not silently divided by later.
    /// assert!(HyperplaneTerm::new(vec![1.0, 0.0], 3.0, vec![0, 1], &config).is_err());
    /// ```
    pub fn new(
        coefficients: Vec<f64>,
        constant: f64,
        consensus_indices: Vec<usize>,
        config: &AdmmConfig,
    ) -> SolverResult<Self> {
        // FAIL FAST: empty constraints have no feasible-set geometry
        if coefficients.is_empty() {
            tracing::error!("Rejecting constraint with no coefficients");
            return Err(SolverError::EmptyConstraint);
        }

        // FAIL FAST: every local slot needs a consensus slot
        if consensus_indices.len() != coefficients.len() {
            tracing::error!(
                coefficients = coefficients.len(),
                indices = consensus_indices.len(),
                "Coefficient and consensus-index lengths disagree"
            );
            return Err(SolverError::DimensionMismatch {
                expected: coefficients.len(),
                actual: consensus_indices.len(),
            });
        }

        if !constant.is_finite() {
            tracing::error!(constant, "Rejecting non-finite constraint constant");
            return Err(SolverError::NonFiniteInput(format!(
                "constant is {constant}"
            )));
        }

        for (index, &value) in coefficients.iter().enumerate() {
            if !value.is_finite() {
                tracing::error!(index, value, "Rejecting non-finite coefficient");
                return Err(SolverError::NonFiniteInput(format!(
                    "coefficient {index} is {value}"
                )));
            }
            // Two projection branches divide by coefficients; a zero here
            // would surface later as NaN/Infinity in the primal vector.
            if value.abs() < config.coefficient_eps {
                tracing::error!(index, value, "Rejecting numerically zero coefficient");
                return Err(SolverError::ZeroCoefficient { index, value });
            }
        }

        let n = coefficients.len();
        let geometry = Geometry::for_coefficients(&coefficients);

        Ok(Self {
            coefficients,
            constant,
            geometry,
            local: vec![0.0; n],
            duals: vec![0.0; n],
            consensus_indices,
        })
    }
}
