//! ConsensusState: the shared consensus vector and step size.

use serde::{Deserialize, Serialize};

use crate::config::AdmmConfig;
use crate::error::{SolverError, SolverResult};

/// Shared consensus state read by hyperplane terms during projection.
///
/// Holds the global consensus vector z and the penalty weight rho. A term
/// addresses z through its own consensus-index map, so many terms can track
/// overlapping subsets of the same global variables.
///
/// # Concurrency
///
/// Projection is a read-only consumer (`value`), so any number of terms may
/// project in parallel against `&ConsensusState`. The driver's consensus
/// update (`set_value`) takes `&mut self` and therefore cannot overlap the
/// projection phase.
///
/// # Example
///
/// ```
/// use consensus_admm::config::AdmmConfig;
/// use consensus_admm::consensus::ConsensusState;
///
/// let config = AdmmConfig::default();
/// let mut consensus = ConsensusState::new(3, &config).unwrap();
/// assert_eq!(consensus.len(), 3);
/// assert_eq!(consensus.value(1), 0.0);
///
/// consensus.set_value(1, 0.75);
/// assert_eq!(consensus.value(1), 0.75);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsensusState {
    /// Global consensus values, indexed by terms via their index maps.
    values: Vec<f64>,
    /// Penalty weight rho. Invariant: positive and finite.
    step_size: f64,
}

impl ConsensusState {
    /// Create a zero-initialized consensus vector of the given length.
    ///
    /// # Arguments
    ///
    /// * `num_variables` - Number of global consensus variables
    /// * `config` - Validated for step size before use
    ///
    /// # Errors
    ///
    /// Returns `SolverError::InvalidConfig` if the config fails validation.
    pub fn new(num_variables: usize, config: &AdmmConfig) -> SolverResult<Self> {
        config.validate()?;
        Ok(Self {
            values: vec![0.0; num_variables],
            step_size: config.step_size,
        })
    }

    /// Create consensus state from existing values and an explicit step size.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::InvalidStepSize` if the step size is not
    /// strictly positive and finite.
    ///
    /// # Example
    ///
    /// ```
    /// use consensus_admm::consensus::ConsensusState;
    ///
    /// let consensus = ConsensusState::from_values(vec![0.5, -0.25], 2.0).unwrap();
    /// assert_eq!(consensus.step_size(), 2.0);
    /// assert_eq!(consensus.value(0), 0.5);
    ///
    /// assert!(ConsensusState::from_values(vec![0.0], 0.0).is_err());
    /// ```
    pub fn from_values(values: Vec<f64>, step_size: f64) -> SolverResult<Self> {
        if !step_size.is_finite() || step_size <= 0.0 {
            tracing::error!(step_size, "Rejecting non-positive or non-finite step size");
            return Err(SolverError::InvalidStepSize(step_size));
        }
        Ok(Self { values, step_size })
    }

    /// Read the consensus value at a global index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Indices are produced by the same
    /// layer that builds terms and are a caller precondition, not a
    /// runtime-checked error.
    #[inline]
    pub fn value(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// Overwrite the consensus value at a global index (driver side).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn set_value(&mut self, index: usize, value: f64) {
        self.values[index] = value;
    }

    /// Full consensus vector.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Penalty weight rho.
    #[inline]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Number of global consensus variables.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the consensus vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// Compile-time verification for the parallel projection contract
static_assertions::assert_impl_all!(ConsensusState: Send, Sync);
