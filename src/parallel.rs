//! # Parallel row-block multiplication
//!
//! Splits the non-empty rows of the left operand into disjoint blocks and
//! computes each block on the Rayon pool. Every block owns its own result
//! rows, so no two workers ever write the same coordinate; both operands are
//! shared read-only.

use log::debug;
use num_traits::Num;
use rayon::prelude::*;

use crate::error::Result;
use crate::matrix::config::MultiplyConfig;
use crate::matrix::ops::{multiply_row, multiply_serial, RightOperand};
use crate::matrix::{SparseMatrix, SparseMatrixCSR};

/// Computes `a * b` by distributing row blocks of `a` across threads
///
/// Blocks are cut from the stored rows of `a` only, so the declared row
/// count never drives the amount of work.
///
/// Falls back to the serial kernel when the configuration or the number of
/// non-empty rows does not justify parallel execution. The result is the
/// same either way.
///
/// # Examples
///
/// ```
/// use sparse_matrix::{multiply_parallel, MultiplyConfig, SparseMatrix};
///
/// let a = SparseMatrix::<i64>::identity(2);
/// let b = SparseMatrix::from_triplets(2, 2, vec![(0, 1, 3), (1, 0, 4)]).unwrap();
///
/// let config = MultiplyConfig::default().with_parallel(true);
/// let c = multiply_parallel(&a, &b, &config).unwrap();
///
/// assert_eq!(c, b);
/// ```
pub fn multiply_parallel<T>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    config: &MultiplyConfig,
) -> Result<SparseMatrix<T>>
where
    T: Copy + Num + Send + Sync,
{
    a.check_inner_dimension(b)?;

    let lhs = SparseMatrixCSR::from_sparse(a);
    let rhs = RightOperand::new(b, config.strategy);
    let rows = lhs.active_rows();

    if !config.use_parallel(rows.len()) {
        debug!(
            "{} active rows below parallel threshold, multiplying serially",
            rows.len()
        );
        return Ok(multiply_serial(a, &rhs));
    }

    let n_blocks = config.system_params.n_threads;
    let block_size = rows.len().div_ceil(n_blocks).max(1);
    debug!(
        "multiplying {} active rows in {} blocks of up to {} rows ({} lookup)",
        rows.len(),
        n_blocks,
        block_size,
        config.strategy.name()
    );

    let block_results: Vec<Vec<(usize, Vec<(usize, T)>)>> = rows
        .par_chunks(block_size)
        .map(|block| {
            block
                .iter()
                .map(|&i| (i, multiply_row(lhs.row_iter(i), &rhs)))
                .collect()
        })
        .collect();

    let mut result = SparseMatrix::new(a.n_rows(), b.n_cols());
    for (i, row) in block_results.into_iter().flatten() {
        for (j, val) in row {
            result.store(i, j, val);
        }
    }
    Ok(result)
}
