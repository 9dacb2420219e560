//! Configuration types for the consensus solver.
//!
//! This module provides configuration for:
//! - ADMM penalty and numerical thresholds (AdmmConfig)

mod admm;

pub use self::admm::AdmmConfig;

#[cfg(test)]
mod tests;
