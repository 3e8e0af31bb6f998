// =========================================================================
// FALSIFY-VE: Vector primitives contract (eliminar primitives)
//
// References:
//   - Cauchy-Schwarz inequality: |dot(u,v)| <= norm(u) * norm(v)
// =========================================================================

use super::*;

/// FALSIFY-VE-001: Dot product is commutative: dot(u,v) = dot(v,u)
#[test]
fn falsify_ve_001_dot_commutative() {
    let u = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let v = Vector::from_slice(&[4.0, 5.0, 6.0]);

    let uv = u.dot(&v).expect("equal lengths");
    let vu = v.dot(&u).expect("equal lengths");

    assert!(
        (uv - vu).abs() < 1e-12,
        "FALSIFIED VE-001: dot(u,v)={uv} != dot(v,u)={vu}"
    );
}

/// FALSIFY-VE-002: Norm is non-negative
#[test]
fn falsify_ve_002_norm_nonneg() {
    let v = Vector::from_slice(&[-3.0, 4.0]);
    let n = v.norm();

    assert!(n >= 0.0, "FALSIFIED VE-002: norm={n}, expected >= 0.0");
    assert!(
        (n - 5.0).abs() < 1e-12,
        "FALSIFIED VE-002: norm of [-3,4]={n}, expected 5.0"
    );
}

/// FALSIFY-VE-003: Cauchy-Schwarz: |dot(u,v)| <= norm(u) * norm(v)
#[test]
fn falsify_ve_003_cauchy_schwarz() {
    let u = Vector::from_slice(&[1.0, -2.0, 3.0, 0.5]);
    let v = Vector::from_slice(&[4.0, 0.0, -1.0, 2.0]);

    let dot = u.dot(&v).expect("equal lengths").abs();
    let bound = u.norm() * v.norm();

    assert!(
        dot <= bound + 1e-12,
        "FALSIFIED VE-003: |dot|={dot} > norm(u)*norm(v)={bound}"
    );
}

/// FALSIFY-VE-004: Single-term add is the identity: add([v]) == v
#[test]
fn falsify_ve_004_single_term_add_identity() {
    let v = Vector::from_slice(&[2.0, -4.0, 6.0]);
    let sum = Vector::add(std::slice::from_ref(&v)).expect("single term");

    assert_eq!(sum, v, "FALSIFIED VE-004: add([v]) != v");
}

/// FALSIFY-VE-005: axpy matches its definition: axpy(a,x,y) = a*x + y
#[test]
fn falsify_ve_005_axpy_definition() {
    let x = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let y = Vector::from_slice(&[-1.0, 0.5, 4.0]);
    let a = 2.5;

    let r = Vector::axpy(a, &x, &y).expect("equal lengths");
    for i in 0..3 {
        let expected = a * x[i] + y[i];
        assert!(
            (r[i] - expected).abs() < 1e-12,
            "FALSIFIED VE-005: component {i}={}, expected {expected}",
            r[i]
        );
    }
}
