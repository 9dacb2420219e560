//! Core operations for hyperplane terms.
//!
//! This module contains the projection update, the dual ascent step, the
//! residual helper, and read accessors.

use crate::consensus::ConsensusState;

use super::types::{Geometry, HyperplaneTerm};

impl HyperplaneTerm {
    /// Project onto the constraint hyperplane, storing the result in the
    /// term's local primal vector.
    ///
    /// Solves `argmin (rho/2) * ||x - z + y/rho||^2` subject to
    /// `coefficients . x = constant`, where z is read from `consensus`
    /// through the term's index map and rho is the consensus step size.
    ///
    /// # Algorithm
    ///
    /// Branches by the geometry variant fixed at construction:
    /// - Point (n = 1): `x[0] = constant / coefficients[0]`, independent of
    ///   z, y, and rho
    /// - Line (n = 2): closed-form stationarity solve for x[0], then x[1]
    ///   back-substituted from the constraint itself so the result satisfies
    ///   the constraint exactly regardless of rounding in the x[0] algebra
    /// - Hyperplane (n >= 3): form the unconstrained target `z - y/rho`,
    ///   subtract its signed distance to the plane along the unit normal
    ///
    /// # Concurrency
    ///
    /// Reads `consensus` and the term's duals; writes only the term's own
    /// local vector. Many terms may project in parallel against the same
    /// `&ConsensusState`.
    ///
    /// # Example
    ///
    /// ```
    /// use consensus_admm::config::AdmmConfig;
    /// use consensus_admm::consensus::ConsensusState;
    /// use consensus_admm::term::HyperplaneTerm;
    ///
    /// let config = AdmmConfig::default();
    /// let consensus = ConsensusState::new(2, &config).unwrap();
    /// let mut term = HyperplaneTerm::new(vec![1.0, 1.0], 4.0, vec![0, 1], &config).unwrap();
    ///
    /// // Closest point to the origin on x0 + x1 = 4 is (2, 2).
    /// term.project(&consensus);
    /// assert_eq!(term.local_variables(), &[2.0, 2.0]);
    /// ```
    pub fn project(&mut self, consensus: &ConsensusState) {
        match &self.geometry {
            Geometry::Point => {
                self.local[0] = self.constant / self.coefficients[0];
            }
            Geometry::Line => {
                let rho = consensus.step_size();
                let z0 = consensus.value(self.consensus_indices[0]);
                let z1 = consensus.value(self.consensus_indices[1]);
                let c0 = self.coefficients[0];
                let c1 = self.coefficients[1];

                let mut x0 = rho * z0 - self.duals[0];
                x0 -= rho * c0 / c1 * (-self.constant / c1 + z1 - self.duals[1] / rho);
                x0 /= rho * (1.0 + c0 * c0 / (c1 * c1));

                self.local[0] = x0;
                // Satisfy the constraint: c0 * x0 + c1 * x1 = constant.
                // Derived from the constraint, not the proximal formula, so
                // the result lies on the line exactly.
                self.local[1] = (self.constant - c0 * x0) / c1;
            }
            Geometry::Hyperplane { unit_normal } => {
                let rho = consensus.step_size();

                // Unconstrained minimizer of the proximal objective.
                let point: Vec<f64> = self
                    .consensus_indices
                    .iter()
                    .zip(&self.duals)
                    .map(|(&zi, &y)| consensus.value(zi) - y / rho)
                    .collect();

                // Signed distance from the target to the plane, measured
                // against the point (constant / coefficients[0], 0, ...)
                // which lies on the plane.
                let mut distance = -self.constant / self.coefficients[0] * unit_normal[0];
                for (p, u) in point.iter().zip(unit_normal) {
                    distance += p * u;
                }

                for ((x, p), u) in self.local.iter_mut().zip(&point).zip(unit_normal) {
                    *x = p - distance * u;
                }
            }
        }
    }

    /// Dual ascent accumulation: `y[i] += rho * (x[i] - z[i])`.
    ///
    /// Run by the driver between iterations, strictly after the consensus
    /// update phase; never called from `project`.
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
    /// term.update_duals(&consensus);
    /// // y[0] += 1.0 * (5.0 - 0.0)
    /// assert_eq!(term.dual_variables(), &[5.0]);
    /// ```
    pub fn update_duals(&mut self, consensus: &ConsensusState) {
        let rho = consensus.step_size();
        for ((y, x), &zi) in self
            .duals
            .iter_mut()
            .zip(&self.local)
            .zip(&self.consensus_indices)
        {
            *y += rho * (x - consensus.value(zi));
        }
    }

    /// Signed constraint violation: `coefficients . x - constant`.
    ///
    /// Zero (up to floating point) after a successful projection. Non-finite
    /// output here is how numerical degeneracy surfaces to the driver's
    /// sanity checks.
    #[inline]
    pub fn residual(&self) -> f64 {
        self.coefficients
            .iter()
            .zip(&self.local)
            .map(|(c, x)| c * x)
            .sum::<f64>()
            - self.constant
    }

    /// Constraint arity n.
    #[inline]
    pub fn arity(&self) -> usize {
        self.coefficients.len()
    }

    /// Constraint coefficients.
    #[inline]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Constraint right-hand side.
    #[inline]
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Local primal vector x.
    #[inline]
    pub fn local_variables(&self) -> &[f64] {
        &self.local
    }

    /// Dual vector y.
    #[inline]
    pub fn dual_variables(&self) -> &[f64] {
        &self.duals
    }

    /// Global consensus slot tracked by each local slot.
    #[inline]
    pub fn consensus_indices(&self) -> &[usize] {
        &self.consensus_indices
    }
}
