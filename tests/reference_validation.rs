//! Validate multiplication against sprs and dense ndarray products

use ndarray::Array2;
use sparse_matrix::{from_sprs, to_dense, to_sprs_csr, SparseMatrix};

/// Create a simple test matrix
fn create_test_matrix() -> SparseMatrix<i64> {
    // Create a 4x4 matrix:
    // [1 2 0 0]
    // [0 3 4 0]
    // [0 0 5 6]
    // [7 0 0 8]
    SparseMatrix::from_triplets(
        4,
        4,
        vec![
            (0, 0, 1),
            (0, 1, 2),
            (1, 1, 3),
            (1, 2, 4),
            (2, 2, 5),
            (2, 3, 6),
            (3, 0, 7),
            (3, 3, 8),
        ],
    )
    .unwrap()
}

/// Creates a tridiagonal matrix
fn create_tridiagonal(n: usize) -> SparseMatrix<i64> {
    let mut matrix = SparseMatrix::new(n, n);
    for i in 0..n {
        if i > 0 {
            matrix.set_element(i, i - 1, 1).unwrap();
        }
        matrix.set_element(i, i, 2).unwrap();
        if i < n - 1 {
            matrix.set_element(i, i + 1, 1).unwrap();
        }
    }
    matrix
}

#[test]
fn test_multiply_vs_sprs() {
    let a = create_test_matrix();
    let b = create_test_matrix().transpose();

    let result = a.multiply(&b).unwrap();

    let a_sprs = to_sprs_csr(&a);
    let b_sprs = to_sprs_csr(&b);
    let result_sprs = &a_sprs * &b_sprs;

    assert_eq!(result, from_sprs(result_sprs));
}

#[test]
fn test_add_vs_sprs() {
    let a = create_test_matrix();
    let b = create_tridiagonal(4);

    let sum = a.add(&b).unwrap();
    let sum_sprs = &to_sprs_csr(&a) + &to_sprs_csr(&b);

    assert_eq!(sum, from_sprs(sum_sprs));
}

#[test]
fn test_multiply_vs_dense() {
    let a = create_test_matrix();
    let b = create_tridiagonal(4);

    let dense_a: Array2<i64> = to_dense(&a);
    let dense_b: Array2<i64> = to_dense(&b);

    assert_eq!(to_dense(&a.multiply(&b).unwrap()), dense_a.dot(&dense_b));
    assert_eq!(to_dense(&b.multiply(&a).unwrap()), dense_b.dot(&dense_a));
}

#[test]
fn test_tridiagonal_square_is_pentadiagonal() {
    let n = 10;
    let a = create_tridiagonal(n);
    let result = a.multiply(&a).unwrap();

    assert_eq!(result.shape(), (n, n));
    for (row, col, _) in result.iter() {
        assert!(row.abs_diff(col) <= 2);
    }
    // 3 + 4 + 5*(n-4) + 4 + 3
    assert_eq!(result.nnz(), 5 * n - 6);
    assert_eq!(result, from_sprs(&to_sprs_csr(&a) * &to_sprs_csr(&a)));
}
