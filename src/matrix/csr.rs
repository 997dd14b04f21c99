//! Compressed Sparse Row (CSR) index over a coordinate-keyed matrix

use std::fmt;
use std::iter::{Copied, Zip};
use std::slice::Iter;

use num_traits::Num;

use crate::matrix::SparseMatrix;
use crate::utils::exclusive_scan;

/// `(col, value)` pairs of one stored row
pub type RowEntries<'a, T> = Zip<Copied<Iter<'a, usize>>, Iter<'a, T>>;

/// A read-only sparse matrix in Compressed Sparse Row (CSR) format,
/// compressed over its non-empty rows
///
/// The index stores a sparse matrix using four arrays:
/// - row_ids: Ascending indices of the rows holding at least one entry
/// - row_ptr: Array of size row_ids.len() + 1 containing indices into col_idx and values arrays
/// - col_idx: Array of size nnz containing column indices of non-zero elements
/// - values: Array of size nnz containing the non-zero values
///
/// Only stored rows take space, so building the index costs
/// `O(nnz log nnz)` however many rows the matrix declares. Multiplication
/// builds one over each operand so that the entries of a row can be walked
/// directly instead of probed column by column.
#[derive(Clone)]
pub struct SparseMatrixCSR<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Non-empty rows, strictly ascending
    pub row_ids: Vec<usize>,

    /// Row pointers (size: row_ids.len() + 1)
    /// row_ptr[k] is the index in col_idx and values where row row_ids[k] starts
    /// row_ptr[row_ids.len()] is equal to nnz
    pub row_ptr: Vec<usize>,

    /// Column indices (size: nnz), ascending within each row
    pub col_idx: Vec<usize>,

    /// Non-zero values (size: nnz)
    pub values: Vec<T>,
}

impl<T> SparseMatrixCSR<T>
where
    T: Copy + Num,
{
    /// Creates a new CSR index with the given dimensions and data
    ///
    /// # Panics
    ///
    /// Panics if the input arrays are inconsistent:
    /// - row_ptr.len() must be row_ids.len() + 1
    /// - col_idx.len() must equal values.len()
    /// - row_ptr[row_ids.len()] must equal col_idx.len()
    /// - row_ids must be strictly ascending and below n_rows
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        row_ids: Vec<usize>,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(
            row_ptr.len(),
            row_ids.len() + 1,
            "row_ptr.len() must be row_ids.len() + 1"
        );
        assert_eq!(col_idx.len(), values.len(), "col_idx.len() must equal values.len()");
        assert_eq!(
            row_ptr[row_ids.len()], col_idx.len(),
            "row_ptr[row_ids.len()] must equal col_idx.len()"
        );
        assert!(
            row_ids.windows(2).all(|w| w[0] < w[1]),
            "row_ids must be strictly ascending"
        );
        if let Some(&last) = row_ids.last() {
            assert!(last < n_rows, "Row index {} out of bounds (n_rows = {})", last, n_rows);
        }

        for &col in &col_idx {
            assert!(col < n_cols, "Column index {} out of bounds (n_cols = {})", col, n_cols);
        }

        Self {
            n_rows,
            n_cols,
            row_ids,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Builds the row index of a coordinate-keyed matrix
    pub fn from_sparse(matrix: &SparseMatrix<T>) -> Self {
        let triplets = matrix.triplets();

        let mut row_ids = Vec::new();
        let mut row_ptr = vec![0];
        for (pos, &(row, _, _)) in triplets.iter().enumerate() {
            if row_ids.last() != Some(&row) {
                if !row_ids.is_empty() {
                    row_ptr.push(pos);
                }
                row_ids.push(row);
            }
        }
        if !row_ids.is_empty() {
            row_ptr.push(triplets.len());
        }

        let (col_idx, values): (Vec<usize>, Vec<T>) = triplets
            .into_iter()
            .map(|(_, col, value)| (col, value))
            .unzip();

        Self::new(matrix.n_rows(), matrix.n_cols(), row_ids, row_ptr, col_idx, values)
    }

    /// Builds the index from full-length CSR arrays, one pointer per declared
    /// row as sprs stores them; empty rows are dropped
    pub fn from_full_row_ptr(
        n_rows: usize,
        n_cols: usize,
        full_row_ptr: &[usize],
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(full_row_ptr.len(), n_rows + 1, "row_ptr.len() must be n_rows + 1");

        let mut row_ids = Vec::new();
        let mut row_ptr = vec![0];
        for (i, w) in full_row_ptr.windows(2).enumerate() {
            if w[1] > w[0] {
                row_ids.push(i);
                row_ptr.push(w[1] - full_row_ptr[0]);
            }
        }

        let start = full_row_ptr[0];
        let end = full_row_ptr[n_rows];
        let col_idx = col_idx[start..end].to_vec();
        let values = values[start..end].to_vec();

        Self::new(n_rows, n_cols, row_ids, row_ptr, col_idx, values)
    }

    /// Expands the row pointers to one per declared row plus one
    ///
    /// Allocates `n_rows + 1` entries, so this is only for consumers such as
    /// sprs that require uncompressed CSR storage.
    pub fn full_row_ptr(&self) -> Vec<usize> {
        let mut row_counts = vec![0; self.n_rows];
        for (k, &row) in self.row_ids.iter().enumerate() {
            row_counts[row] = self.row_ptr[k + 1] - self.row_ptr[k];
        }
        exclusive_scan(&row_counts)
    }

    /// Converts back to coordinate-keyed storage, dropping explicit zeros
    pub fn to_sparse(&self) -> SparseMatrix<T> {
        let mut matrix = SparseMatrix::new(self.n_rows, self.n_cols);
        for (i, row) in self.rows() {
            for (j, &val) in row {
                matrix.store(i, j, val);
            }
        }
        matrix
    }

    /// Returns the number of non-zero elements in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Number of stored entries in row i
    pub fn row_nnz(&self, i: usize) -> usize {
        let (start, end) = self.row_range(i);
        end - start
    }

    /// Returns an iterator over the non-zero elements in row i
    ///
    /// Each item is a tuple (col_idx, value) representing a non-zero element.
    /// Rows without entries yield nothing.
    pub fn row_iter(&self, i: usize) -> RowEntries<'_, T> {
        assert!(i < self.n_rows, "Row index out of bounds");

        let (start, end) = self.row_range(i);
        self.entries(start, end)
    }

    /// Iterates the non-empty rows in ascending order, each with its entries
    pub fn rows(&self) -> impl Iterator<Item = (usize, RowEntries<'_, T>)> + '_ {
        self.row_ids
            .iter()
            .enumerate()
            .map(move |(k, &i)| (i, self.entries(self.row_ptr[k], self.row_ptr[k + 1])))
    }

    /// Indices of the rows holding at least one entry
    pub fn active_rows(&self) -> &[usize] {
        &self.row_ids
    }

    fn row_range(&self, i: usize) -> (usize, usize) {
        match self.row_ids.binary_search(&i) {
            Ok(k) => (self.row_ptr[k], self.row_ptr[k + 1]),
            Err(_) => (0, 0),
        }
    }

    fn entries(&self, start: usize, end: usize) -> RowEntries<'_, T> {
        self.col_idx[start..end].iter().copied().zip(&self.values[start..end])
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for SparseMatrixCSR<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixCSR {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        for (i, row) in self.rows().take(5) {
            write!(f, "    row {}: ", i)?;
            for (j, val) in row.take(5) {
                write!(f, "({}, {:?}) ", j, val)?;
            }
            if self.row_nnz(i) > 5 {
                write!(f, "... ({} more)", self.row_nnz(i) - 5)?;
            }
            writeln!(f)?;
        }
        if self.row_ids.len() > 5 {
            writeln!(f, "    ... ({} more rows)", self.row_ids.len() - 5)?;
        }

        write!(f, "}}")
    }
}
