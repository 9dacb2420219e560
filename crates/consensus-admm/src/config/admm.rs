//! ADMM solver configuration.

use serde::{Deserialize, Serialize};

use crate::error::SolverError;

/// ADMM solver configuration.
///
/// Configures the penalty weight and numerical thresholds used when
/// constructing and projecting hyperplane terms.
///
/// # Mathematics
/// - Each term solves `argmin (rho/2) * ||x - z + y/rho||^2` subject to
///   `coeffs . x = constant`
/// - `step_size` is rho, the penalty weight; must be strictly positive
/// - `coefficient_eps` bounds how close to zero a coefficient may be before
///   construction rejects it as degenerate (two projection branches divide
///   by coefficients)
///
/// # Example
/// ```
/// use consensus_admm::config::AdmmConfig;
///
/// let config = AdmmConfig::default();
/// assert_eq!(config.step_size, 1.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdmmConfig {
    /// Penalty weight rho controlling the proximal term's strength.
    /// Must be strictly positive and finite. Default: 1.0
    pub step_size: f64,

    /// Threshold below which a coefficient magnitude is treated as zero
    /// and rejected at construction. Must be positive. Default: 1e-12
    pub coefficient_eps: f64,
}

impl Default for AdmmConfig {
    fn default() -> Self {
        Self {
            step_size: 1.0,
            coefficient_eps: 1e-12,
        }
    }
}

impl AdmmConfig {
    /// Create config with custom step size.
    ///
    /// # Arguments
    /// * `step_size` - Must be positive and finite. Use validate() to check.
    ///
    /// # Example
    /// ```
    /// use consensus_admm::config::AdmmConfig;
    /// let config = AdmmConfig::with_step_size(0.5);
    /// assert_eq!(config.step_size, 0.5);
    /// assert_eq!(config.coefficient_eps, 1e-12); // other fields use defaults
    /// ```
    pub fn with_step_size(step_size: f64) -> Self {
        Self {
            step_size,
            ..Default::default()
        }
    }

    /// Validate that all configuration parameters are usable by the solver.
    ///
    /// # Validation Rules
    /// - `step_size` > 0 and finite: the proximal objective is undefined
    ///   for rho <= 0, and the n = 2 branch divides by rho
    /// - `coefficient_eps` > 0 and finite
    ///
    /// # Errors
    /// Returns `SolverError::InvalidConfig` with a descriptive message.
    /// Returns the FIRST error encountered (fail-fast).
    ///
    /// # Example
    /// ```
    /// use consensus_admm::config::AdmmConfig;
    ///
    /// let valid = AdmmConfig::default();
    /// assert!(valid.validate().is_ok());
    ///
    /// let mut invalid = AdmmConfig::default();
    /// invalid.step_size = 0.0;
    /// assert!(invalid.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), SolverError> {
        // Check for NaN step size
        if self.step_size.is_nan() {
            return Err(SolverError::InvalidConfig(
                "step_size cannot be NaN".to_string(),
            ));
        }

        // Check step size - must be strictly positive and finite
        if self.step_size <= 0.0 || !self.step_size.is_finite() {
            return Err(SolverError::InvalidConfig(format!(
                "step_size must be positive and finite (got {})",
                self.step_size
            )));
        }

        // Check for NaN eps
        if self.coefficient_eps.is_nan() {
            return Err(SolverError::InvalidConfig(
                "coefficient_eps cannot be NaN".to_string(),
            ));
        }

        // Check eps - must be positive and finite
        if self.coefficient_eps <= 0.0 || !self.coefficient_eps.is_finite() {
            return Err(SolverError::InvalidConfig(format!(
                "coefficient_eps must be positive and finite (got {})",
                self.coefficient_eps
            )));
        }

        Ok(())
    }

    /// Create a validated config with custom step size.
    ///
    /// Returns error if the step size is invalid (<= 0, NaN, or infinite).
    ///
    /// # Example
    /// ```
    /// use consensus_admm::config::AdmmConfig;
    ///
    /// let config = AdmmConfig::try_with_step_size(2.0).unwrap();
    /// assert_eq!(config.step_size, 2.0);
    ///
    /// assert!(AdmmConfig::try_with_step_size(-1.0).is_err());
    /// ```
    pub fn try_with_step_size(step_size: f64) -> Result<Self, SolverError> {
        let config = Self {
            step_size,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }
}
