//! Coordinate-keyed sparse matrix storage

use std::collections::HashMap;

use num_traits::Num;

use crate::error::{MatrixError, Result};

/// A sparse matrix storing only its non-zero entries, keyed by `(row, col)`
///
/// Dimensions are fixed at construction. The entry map never holds a zero
/// value and never holds a coordinate outside `[0, n_rows) x [0, n_cols)`;
/// both invariants are enforced by [`SparseMatrix::set_element`].
///
/// Two matrices compare equal when they have the same dimensions and the
/// same set of non-zero entries, regardless of insertion history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparseMatrix<T> {
    n_rows: usize,
    n_cols: usize,
    elements: HashMap<(usize, usize), T>,
}

impl<T> SparseMatrix<T>
where
    T: Copy + Num,
{
    /// Creates an empty matrix with the given dimensions
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            elements: HashMap::new(),
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        for i in 0..n {
            matrix.store(i, i, T::one());
        }
        matrix
    }

    /// Builds a matrix from `(row, col, value)` triplets
    ///
    /// Later triplets overwrite earlier ones at the same coordinate and zero
    /// values erase, exactly as repeated calls to `set_element` would.
    pub fn from_triplets<I>(n_rows: usize, n_cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(n_rows, n_cols);
        for (row, col, value) in triplets {
            matrix.set_element(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Dimensions as `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Returns the number of non-zero elements in the matrix
    pub fn nnz(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether `(row, col)` lies inside the declared dimensions
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.n_rows && col < self.n_cols
    }

    /// Writes `value` at `(row, col)`
    ///
    /// A zero value removes whatever is stored there. Coordinates outside the
    /// declared dimensions are rejected with [`MatrixError::OutOfBounds`] and
    /// leave the matrix untouched.
    pub fn set_element(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if !self.in_bounds(row, col) {
            return Err(MatrixError::OutOfBounds {
                row: row as i128,
                col: col as i128,
                n_rows: self.n_rows,
                n_cols: self.n_cols,
            });
        }
        self.store(row, col, value);
        Ok(())
    }

    /// Reads the value at `(row, col)`, zero when nothing is stored
    ///
    /// Reads outside the declared dimensions also return zero.
    pub fn get_element(&self, row: usize, col: usize) -> T {
        self.elements
            .get(&(row, col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// Iterates over the stored `(row, col, value)` entries in no
    /// particular order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.elements
            .iter()
            .map(|(&(row, col), &value)| (row, col, value))
    }

    /// Stored entries sorted by `(row, col)`
    pub fn triplets(&self) -> Vec<(usize, usize, T)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|&(row, col, _)| (row, col));
        entries
    }

    /// Returns the transpose as a new matrix
    pub fn transpose(&self) -> Self {
        let mut result = Self::new(self.n_cols, self.n_rows);
        for (row, col, value) in self.iter() {
            result.store(col, row, value);
        }
        result
    }

    /// Insert-or-erase without the bounds check, for callers that derive
    /// coordinates from an already valid matrix of the same shape
    pub(crate) fn store(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(self.in_bounds(row, col));
        if value.is_zero() {
            self.elements.remove(&(row, col));
        } else {
            self.elements.insert((row, col), value);
        }
    }

    pub(crate) fn contains(&self, row: usize, col: usize) -> bool {
        self.elements.contains_key(&(row, col))
    }
}
