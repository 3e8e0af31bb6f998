// =========================================================================
// FALSIFY-GJ: Gauss-Jordan elimination contract (eliminar solve)
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations", §3.1 (Gaussian
//     elimination), §3.4 (pivoting)
// =========================================================================

use super::*;

/// FALSIFY-GJ-001: For an invertible lhs, the reduced lhs is the identity
/// within floating-point tolerance
#[test]
fn falsify_gj_001_reduced_lhs_is_identity() {
    let lhs = Matrix::from_columns(vec![
        vec![2.0, 1.0, 0.0],
        vec![-1.0, 3.0, 1.0],
        vec![0.5, -1.0, 2.0],
    ])
    .expect("valid");
    let rhs = Vector::from_slice(&[1.0, 2.0, 3.0]);

    let solved = LinearSystem::from_vector(lhs, &rhs)
        .expect("valid")
        .gauss_jordan()
        .expect("invertible");

    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!(
                (solved.lhs().get(i, j) - expected).abs() < 1e-9,
                "FALSIFIED GJ-001: reduced lhs[{i},{j}]={}",
                solved.lhs().get(i, j)
            );
        }
    }
}

/// FALSIFY-GJ-002: The solution reconstructs the right-hand side:
/// lhs * x ≈ rhs
#[test]
fn falsify_gj_002_solution_reconstructs_rhs() {
    let lhs = Matrix::from_columns(vec![
        vec![4.0, 1.0, 2.0],
        vec![1.0, 5.0, 0.0],
        vec![2.0, 0.0, 6.0],
    ])
    .expect("valid");
    let rhs = Vector::from_slice(&[7.0, -3.0, 2.0]);

    let solved = LinearSystem::from_vector(lhs.clone(), &rhs)
        .expect("valid")
        .gauss_jordan()
        .expect("invertible");

    let reconstructed = lhs.matmul(solved.rhs()).expect("conformant").column(0);
    for i in 0..3 {
        assert!(
            (reconstructed[i] - rhs[i]).abs() < 1e-9,
            "FALSIFIED GJ-002: (lhs*x)[{i}]={}, rhs[{i}]={}",
            reconstructed[i],
            rhs[i]
        );
    }
}

/// FALSIFY-GJ-003: Pivot record invariant: length equals system size and
/// every entry is a non-negative row offset
#[test]
fn falsify_gj_003_pivot_record_invariant() {
    // Rows read [0 2 1; 1 0 0; 0 1 3]: step 0 needs a swap.
    let lhs = Matrix::from_columns(vec![
        vec![0.0, 1.0, 0.0],
        vec![2.0, 0.0, 1.0],
        vec![1.0, 0.0, 3.0],
    ])
    .expect("valid");
    let rhs = Vector::from_slice(&[1.0, 1.0, 1.0]);

    let solved = LinearSystem::from_vector(lhs, &rhs)
        .expect("valid")
        .gauss_jordan()
        .expect("pivotable");

    let pivot = solved.pivot();
    assert_eq!(
        pivot.len(),
        solved.size(),
        "FALSIFIED GJ-003: pivot length != size"
    );
    for i in 0..pivot.len() {
        assert!(
            pivot[i] >= 0.0,
            "FALSIFIED GJ-003: negative pivot offset at {i}"
        );
    }
    assert!(
        pivot[0] > 0.0,
        "FALSIFIED GJ-003: step 0 swap not recorded"
    );
}

/// FALSIFY-GJ-004: A singular pivot column yields no result, not a partial
/// solution
#[test]
fn falsify_gj_004_singular_yields_no_result() {
    // Second column is a multiple of the first.
    let lhs = Matrix::from_columns(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).expect("valid");
    let rhs = Vector::from_slice(&[1.0, 1.0]);

    let result = LinearSystem::from_vector(lhs, &rhs)
        .expect("valid")
        .gauss_jordan();

    assert!(
        matches!(result, Err(EliminarError::Singular { .. })),
        "FALSIFIED GJ-004: singular system produced {result:?}"
    );
}

mod system_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// Diagonally dominant square matrix: invertible by construction, so
    /// elimination must succeed without ever pivoting.
    fn dominant_matrix(n: usize, seed: u32) -> Matrix {
        let columns: Vec<Vec<f64>> = (0..n)
            .map(|c| {
                (0..n)
                    .map(|r| {
                        let noise = (((c * n + r) as f64 + f64::from(seed)) * 0.37).sin();
                        if r == c {
                            n as f64 + 1.0 + noise
                        } else {
                            noise
                        }
                    })
                    .collect()
            })
            .collect();
        Matrix::from_columns(columns).expect("valid")
    }

    /// FALSIFY-GJ-002-prop: Reconstruction lhs * x ≈ rhs for random
    /// diagonally dominant systems
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(25))]

        #[test]
        fn falsify_gj_002_prop_reconstruction(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let lhs = dominant_matrix(n, seed);
            let rhs_data: Vec<f64> = (0..n)
                .map(|i| ((i as f64 - f64::from(seed)) * 0.73).cos() * 5.0)
                .collect();
            let rhs = Vector::from_vec(rhs_data);

            let solved = LinearSystem::from_vector(lhs.clone(), &rhs)
                .expect("valid")
                .gauss_jordan()
                .expect("diagonally dominant systems are invertible");

            // No pivoting was needed anywhere.
            prop_assert!(
                solved.pivot().as_slice().iter().all(|&p| p == 0.0),
                "FALSIFIED GJ-002-prop: unexpected row swap"
            );

            let reconstructed = lhs.matmul(solved.rhs()).expect("conformant").column(0);
            for i in 0..n {
                prop_assert!(
                    (reconstructed[i] - rhs[i]).abs() < 1e-6,
                    "FALSIFIED GJ-002-prop: (lhs*x)[{}]={}, rhs[{}]={}",
                    i, reconstructed[i], i, rhs[i]
                );
            }
        }
    }

    /// FALSIFY-GJ-005-prop: The Gaussian companion leaves an upper-triangular
    /// lhs for random diagonally dominant systems
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(25))]

        #[test]
        fn falsify_gj_005_prop_gaussian_upper_triangular(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let lhs = dominant_matrix(n, seed);
            let rhs = Matrix::zeros(n, 1);

            let reduced = LinearSystem::new(lhs, rhs)
                .expect("valid")
                .gaussian()
                .expect("conformant");

            for c in 0..n {
                for r in (c + 1)..n {
                    prop_assert!(
                        reduced.lhs().get(r, c).abs() < 1e-9,
                        "FALSIFIED GJ-005-prop: lhs[{},{}]={} below diagonal",
                        r, c, reduced.lhs().get(r, c)
                    );
                }
            }
        }
    }
}
