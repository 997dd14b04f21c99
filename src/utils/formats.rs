//! Conversions between coordinate-keyed matrices and sprs

use num_traits::Num;
use sprs::CsMat;

use crate::matrix::{SparseMatrix, SparseMatrixCSR};

/// Converts a coordinate-keyed matrix to sprs CsMat in CSR storage
///
/// sprs keeps one row pointer per declared row, so this allocates
/// `n_rows + 1` words and costs `O(n_rows + nnz)`. Matrices whose declared
/// row count does not fit in memory cannot be converted; the arithmetic in
/// this crate never goes through here.
pub fn to_sprs_csr<T>(matrix: &SparseMatrix<T>) -> CsMat<T>
where
    T: Copy + Num + Default,
{
    let csr = SparseMatrixCSR::from_sparse(matrix);
    let row_ptr = csr.full_row_ptr();
    CsMat::new((csr.n_rows, csr.n_cols), row_ptr, csr.col_idx, csr.values)
}

/// Converts an sprs matrix in either storage back to coordinate-keyed form
///
/// Explicitly stored zeros are dropped.
pub fn from_sprs<T>(matrix: CsMat<T>) -> SparseMatrix<T>
where
    T: Copy + Num + Default,
{
    // Ensure matrix is in CSR format
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let shape = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    SparseMatrixCSR::from_full_row_ptr(shape.0, shape.1, &indptr, indices, data).to_sparse()
}
