use kira_dpcrqc::error::AnalysisError;
use kira_dpcrqc::math::copy_number::estimate;
use kira_dpcrqc::math::{aggregate, estimate_copy_number, estimate_from_result};
use kira_dpcrqc::plate::Plate;

fn rel_close(a: f64, b: f64, tol: f64) -> bool {
    ((a - b) / b).abs() < tol
}

#[test]
fn reference_estimate() {
    let copies = estimate_copy_number(3, 15, 2e-15).unwrap();
    assert!(rel_close(copies, 1.1157177565710487e20, 1e-9));
    assert!(rel_close(copies, 1.1157e20, 1e-4));
}

#[test]
fn lambda_from_fraction() {
    let e = estimate(3, 15, 2e-15).unwrap();
    assert!((e.lambda - 0.2231435513142097).abs() < 1e-12);
}

#[test]
fn zero_positive_is_zero() {
    let copies = estimate_copy_number(0, 10, 2e-15).unwrap();
    assert_eq!(copies, 0.0);
}

#[test]
fn zero_total_is_domain_error() {
    let err = estimate_copy_number(0, 0, 2e-15).unwrap_err();
    assert!(matches!(err, AnalysisError::Domain { .. }));
}

#[test]
fn positive_over_total_is_domain_error() {
    let err = estimate_copy_number(6, 5, 2e-15).unwrap_err();
    assert!(matches!(err, AnalysisError::Domain { .. }));
}

#[test]
fn saturated_is_domain_error() {
    for v in [2e-15, 1.0, 1e-9] {
        let err = estimate_copy_number(5, 5, v).unwrap_err();
        assert!(matches!(err, AnalysisError::Domain { .. }));
    }
}

#[test]
fn bad_volume_is_domain_error() {
    for v in [0.0, -2e-15, f64::NAN, f64::INFINITY] {
        let err = estimate_copy_number(3, 15, v).unwrap_err();
        assert!(matches!(err, AnalysisError::Domain { .. }));
    }
}

#[test]
fn estimate_from_demo_aggregate() {
    let result = aggregate(&Plate::demo(), 20.0).unwrap();
    let e = estimate_from_result(&result, 2e-15).unwrap();
    let expected = -(1.0f64 - 4.0 / 15.0).ln() / (2e-15 * 1e-6);
    assert!(rel_close(e.copies_per_ul, expected, 1e-12));
}
