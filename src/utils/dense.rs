//! Dense views for checking sparse results against ndarray baselines

use ndarray::Array2;
use num_traits::Num;

use crate::matrix::SparseMatrix;

/// Expands a sparse matrix into a dense array, zeros filled in
pub fn to_dense<T>(matrix: &SparseMatrix<T>) -> Array2<T>
where
    T: Copy + Num,
{
    let mut dense = Array2::zeros(matrix.shape());
    for (row, col, value) in matrix.iter() {
        dense[[row, col]] = value;
    }
    dense
}

/// Collects the non-zero cells of a dense array
pub fn from_dense<T>(dense: &Array2<T>) -> SparseMatrix<T>
where
    T: Copy + Num,
{
    let (n_rows, n_cols) = dense.dim();
    let mut matrix = SparseMatrix::new(n_rows, n_cols);
    for ((row, col), &value) in dense.indexed_iter() {
        matrix.store(row, col, value);
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_dense_roundtrip() {
        let dense = array![[1i64, 0, 2], [0, 0, 0], [0, -3, 0]];
        let sparse = from_dense(&dense);

        assert_eq!(sparse.shape(), (3, 3));
        assert_eq!(sparse.triplets(), vec![(0, 0, 1), (0, 2, 2), (2, 1, -3)]);
        assert_eq!(to_dense(&sparse), dense);
    }

    #[test]
    fn test_product_matches_dense_dot() {
        let a = array![[1i64, 2, 0], [0, 3, 4]];
        let b = array![[5i64, 0], [0, 6], [7, 0]];

        let product = from_dense(&a).multiply(&from_dense(&b)).unwrap();
        assert_eq!(to_dense(&product), a.dot(&b));
    }
}
