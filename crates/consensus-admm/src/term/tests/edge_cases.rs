//! Edge case tests for HyperplaneTerm.

use crate::config::AdmmConfig;
use crate::consensus::ConsensusState;
use crate::error::SolverError;
use crate::term::HyperplaneTerm;

#[test]
fn test_edge_case_tiny_coefficient_above_threshold() {
    let config = AdmmConfig::default();
    let mut consensus = ConsensusState::new(2, &config).unwrap();
    consensus.set_value(0, 0.5);
    consensus.set_value(1, 0.5);

    let mut term = HyperplaneTerm::new(vec![1e-6, 1.0], 2.0, vec![0, 1], &config).unwrap();
    term.project(&consensus);

    assert!(term.local_variables().iter().all(|x| x.is_finite()));
    assert!(term.residual().abs() < 1e-9);
}

#[test]
fn test_edge_case_large_magnitudes() {
    let config = AdmmConfig::default();
    let consensus = ConsensusState::new(2, &config).unwrap();

    let mut term = HyperplaneTerm::new(vec![1e8, -1e8], 1e8, vec![0, 1], &config).unwrap();
    term.project(&consensus);

    assert!(term.local_variables().iter().all(|x| x.is_finite()));
    // Residual scales with the coefficients; check relative to them
    assert!(term.residual().abs() / 1e8 < 1e-9);
}

#[test]
fn test_edge_case_all_negative_coefficients() {
    // -x0 - x1 - x2 = -3 is the same plane as x0 + x1 + x2 = 3
    let config = AdmmConfig::default();
    let consensus = ConsensusState::new(3, &config).unwrap();

    let mut term =
        HyperplaneTerm::new(vec![-1.0, -1.0, -1.0], -3.0, vec![0, 1, 2], &config).unwrap();
    term.project(&consensus);

    for &x in term.local_variables() {
        assert!((x - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_edge_case_permuted_index_map() {
    // Local slot order is independent of global slot order
    let config = AdmmConfig::default();
    let mut consensus = ConsensusState::new(3, &config).unwrap();
    consensus.set_value(2, 9.0);
    consensus.set_value(0, 1.0);

    let mut term = HyperplaneTerm::new(vec![1.0, 1.0], 4.0, vec![2, 0], &config).unwrap();
    term.project(&consensus);

    // projection of (9, 1) onto x0 + x1 = 4 is (6, -2)
    assert_eq!(term.local_variables(), &[6.0, -2.0]);
}

#[test]
fn test_edge_case_arity_one_ignores_consensus() {
    let config = AdmmConfig::default();
    let mut consensus = ConsensusState::new(1, &config).unwrap();
    consensus.set_value(0, f64::MAX);

    let mut term = HyperplaneTerm::new(vec![-4.0], 2.0, vec![0], &config).unwrap();
    term.project(&consensus);

    assert_eq!(term.local_variables(), &[-0.5]);
}

#[test]
fn test_edge_case_validate_detects_corrupted_local() {
    // Driver-side sanity check: non-finite primal values are reported
    let config = AdmmConfig::default();
    let mut term = HyperplaneTerm::new(vec![1.0, 1.0], 4.0, vec![0, 1], &config).unwrap();
    term.local[0] = f64::NAN;

    assert!(matches!(
        term.validate(&config),
        Err(SolverError::NonFiniteInput(_))
    ));
    assert!(!term.is_satisfied(1e-9)); // NaN residual never satisfies
}

#[test]
fn test_edge_case_validate_detects_geometry_drift() {
    // A deserialized term whose normal length disagrees with its arity
    let config = AdmmConfig::default();
    let term = HyperplaneTerm::new(vec![1.0, 1.0, 1.0], 3.0, vec![0, 1, 2], &config).unwrap();

    let mut json = serde_json::to_value(&term).unwrap();
    json["geometry"]["Hyperplane"]["unit_normal"] = serde_json::json!([1.0, 0.0]);
    let corrupted: HyperplaneTerm = serde_json::from_value(json).unwrap();

    assert!(matches!(
        corrupted.validate(&config),
        Err(SolverError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_edge_case_residual_sign() {
    let config = AdmmConfig::default();
    let mut term = HyperplaneTerm::new(vec![2.0], 10.0, vec![0], &config).unwrap();

    term.local[0] = 6.0; // overshoot: 12 - 10 = +2
    assert_eq!(term.residual(), 2.0);

    term.local[0] = 4.0; // undershoot: 8 - 10 = -2
    assert_eq!(term.residual(), -2.0);
}
