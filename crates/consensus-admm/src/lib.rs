//! ADMM consensus optimization primitives for linear equality constraints.
//!
//! This crate implements the per-term projection step of an Alternating
//! Direction Method of Multipliers (ADMM) consensus optimizer. Each
//! [`HyperplaneTerm`] owns one constraint `coefficients . x = constant` and
//! computes, in closed form, the Euclidean projection of a perturbed
//! consensus point onto that hyperplane. The outer driver loop (consensus
//! averaging, dual scheduling, convergence) lives outside this crate and
//! consumes these primitives.
//!
//! # Architecture
//!
//! - **config**: ADMM penalty weight and numerical thresholds (AdmmConfig)
//! - **consensus**: Shared consensus vector handle read during projection
//! - **error**: Fail-fast construction errors with SolverError
//! - **term**: Hyperplane terms with the three-branch closed-form projection
//!
//! # Example
//!
//! ```
//! use consensus_admm::{AdmmConfig, ConsensusState, HyperplaneTerm, SolverResult};
//!
//! fn example() -> SolverResult<()> {
//!     let config = AdmmConfig::default();
//!     let consensus = ConsensusState::new(3, &config)?;
//!
//!     // Closest point on x0 + x1 + x2 = 3 to the origin is (1, 1, 1).
//!     let mut term = HyperplaneTerm::new(vec![1.0, 1.0, 1.0], 3.0, vec![0, 1, 2], &config)?;
//!     term.project(&consensus);
//!     assert!(term.is_satisfied(1e-9));
//!     assert!(term
//!         .local_variables()
//!         .iter()
//!         .all(|&x| (x - 1.0).abs() < 1e-9));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod config;
pub mod consensus;
pub mod error;
pub mod term;

// Re-exports for convenience
pub use config::AdmmConfig;
pub use consensus::ConsensusState;
pub use error::{SolverError, SolverResult};
pub use term::HyperplaneTerm;
