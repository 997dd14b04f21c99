//! Addition, subtraction and multiplication of coordinate-keyed matrices
//!
//! Every operation reads its operands without mutating them and returns a
//! freshly owned result. Work is proportional to the stored entries of the
//! operands, never to `rows * cols`.

use std::collections::HashMap;

use log::debug;
use num_traits::Num;

use crate::error::{MatrixError, Result};
use crate::matrix::config::{MultiplyConfig, MultiplyStrategy};
use crate::matrix::{SparseMatrix, SparseMatrixCSR};
use crate::parallel::multiply_parallel;

impl<T> SparseMatrix<T>
where
    T: Copy + Num,
{
    /// Element-wise sum of two matrices of identical shape
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "addition")?;

        let mut result = Self::new(self.n_rows(), self.n_cols());
        for (row, col, value) in self.iter() {
            result.store(row, col, value + other.get_element(row, col));
        }
        for (row, col, value) in other.iter() {
            if !self.contains(row, col) {
                result.store(row, col, value);
            }
        }
        Ok(result)
    }

    /// Element-wise difference `self - other` of two matrices of identical shape
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "subtraction")?;

        let mut result = Self::new(self.n_rows(), self.n_cols());
        for (row, col, value) in self.iter() {
            result.store(row, col, value - other.get_element(row, col));
        }
        for (row, col, value) in other.iter() {
            if !self.contains(row, col) {
                result.store(row, col, T::zero() - value);
            }
        }
        Ok(result)
    }

    /// Matrix product `self * other` using the row-indexed strategy
    ///
    /// Requires `self.n_cols() == other.n_rows()`; the result is
    /// `self.n_rows() x other.n_cols()`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        self.check_inner_dimension(other)?;
        let rhs = RightOperand::new(other, MultiplyStrategy::RowIndexed);
        Ok(multiply_serial(self, &rhs))
    }

    fn check_same_shape(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                operation,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    pub(crate) fn check_inner_dimension(&self, other: &Self) -> Result<()> {
        if self.n_cols() != other.n_rows() {
            return Err(MatrixError::DimensionMismatch {
                operation: "multiplication",
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }
}

impl<T> SparseMatrix<T>
where
    T: Copy + Num + Send + Sync,
{
    /// Matrix product with an explicit strategy and parallelism setting
    pub fn multiply_with(&self, other: &Self, config: &MultiplyConfig) -> Result<Self> {
        self.check_inner_dimension(other)?;

        if config.parallel {
            return multiply_parallel(self, other, config);
        }

        debug!(
            "multiplying {:?} x {:?} with {} lookup",
            self.shape(),
            other.shape(),
            config.strategy.name()
        );
        let rhs = RightOperand::new(other, config.strategy);
        Ok(multiply_serial(self, &rhs))
    }
}

/// The right-hand operand of a product, prepared for row lookups
pub(crate) enum RightOperand<'a, T> {
    Indexed(SparseMatrixCSR<T>),
    Scanned(&'a SparseMatrix<T>),
}

impl<'a, T> RightOperand<'a, T>
where
    T: Copy + Num,
{
    pub(crate) fn new(matrix: &'a SparseMatrix<T>, strategy: MultiplyStrategy) -> Self {
        match strategy {
            MultiplyStrategy::RowIndexed => RightOperand::Indexed(SparseMatrixCSR::from_sparse(matrix)),
            MultiplyStrategy::ColumnScan => RightOperand::Scanned(matrix),
        }
    }

    /// Calls `f(col, value)` for every non-zero in row `k`
    ///
    /// `k` always comes from a stored left entry, so it is below the
    /// operand's row count.
    fn for_each_in_row<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(usize, T),
    {
        match self {
            RightOperand::Indexed(csr) => {
                for (col, &value) in csr.row_iter(k) {
                    f(col, value);
                }
            }
            RightOperand::Scanned(matrix) => {
                for col in 0..matrix.n_cols() {
                    let value = matrix.get_element(k, col);
                    if !value.is_zero() {
                        f(col, value);
                    }
                }
            }
        }
    }
}

/// Computes one result row from the non-zeros `(k, value)` of a left row
///
/// Returns `(col, value)` pairs sorted by column with cancelled sums dropped.
pub(crate) fn multiply_row<'r, T, I>(left_row: I, rhs: &RightOperand<'_, T>) -> Vec<(usize, T)>
where
    T: Copy + Num + 'r,
    I: IntoIterator<Item = (usize, &'r T)>,
{
    let mut accum: HashMap<usize, T> = HashMap::new();

    for (k, &a_val) in left_row {
        rhs.for_each_in_row(k, |col, b_val| {
            let slot = accum.entry(col).or_insert_with(T::zero);
            *slot = *slot + a_val * b_val;
        });
    }

    let mut row: Vec<_> = accum.into_iter().filter(|(_, v)| !v.is_zero()).collect();
    row.sort_unstable_by_key(|&(col, _)| col);
    row
}

pub(crate) fn multiply_serial<T>(a: &SparseMatrix<T>, rhs: &RightOperand<'_, T>) -> SparseMatrix<T>
where
    T: Copy + Num,
{
    let lhs = SparseMatrixCSR::from_sparse(a);
    let n_cols = match rhs {
        RightOperand::Indexed(csr) => csr.n_cols,
        RightOperand::Scanned(matrix) => matrix.n_cols(),
    };

    let mut result = SparseMatrix::new(a.n_rows(), n_cols);
    for (i, row) in lhs.rows() {
        for (j, val) in multiply_row(row, rhs) {
            result.store(i, j, val);
        }
    }
    result
}
