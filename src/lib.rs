//! # sparse_matrix: coordinate-keyed sparse integer matrices
//!
//! Stores only the non-zero entries of a matrix, keyed by `(row, col)`, and
//! provides the three standard binary operations on them together with a
//! small plain-text file format.
//!
//! ## Overview
//!
//! - [`SparseMatrix`] owns fixed dimensions and a map of non-zero entries.
//!   Writing zero erases an entry; writing outside the dimensions fails.
//! - [`SparseMatrix::add`], [`SparseMatrix::subtract`] and
//!   [`SparseMatrix::multiply`] return fresh matrices and cost time
//!   proportional to the stored entries, not to `rows * cols`.
//! - [`format`] reads and writes the `rows=` / `cols=` / `(r,c,v)` text
//!   format, always emitting entries sorted by coordinate.
//! - [`multiply_parallel`] splits a product into disjoint row blocks on the
//!   Rayon pool.
//!
//! ## Usage
//!
//! ```
//! use sparse_matrix::{format, SparseMatrix};
//!
//! let a: SparseMatrix<i64> = "rows=2\ncols=2\n(0,0,1)\n(1,1,2)\n".parse().unwrap();
//! let b: SparseMatrix<i64> = "rows=2\ncols=2\n(0,0,3)\n(0,1,4)\n".parse().unwrap();
//!
//! let sum = a.add(&b).unwrap();
//! assert_eq!(
//!     format::serialize(&sum),
//!     "rows=2\ncols=2\n(0,0,4)\n(0,1,4)\n(1,1,2)\n"
//! );
//!
//! let product = a.multiply(&b).unwrap();
//! assert_eq!(product.triplets(), vec![(0, 0, 3), (0, 1, 4)]);
//! ```

pub mod error;
pub mod format;
pub mod matrix;
pub mod operation;
pub mod parallel;
pub mod utils;

// Re-export primary components
pub use error::{MatrixError, Result};
pub use format::{parse, parse_with, read_matrix, read_matrix_with, serialize, write_matrix};
pub use matrix::{BoundsPolicy, MultiplyConfig, MultiplyStrategy, ParseOptions, SystemParameters};
pub use matrix::{SparseMatrix, SparseMatrixCSR};
pub use operation::Operation;
pub use parallel::multiply_parallel;
pub use utils::{from_dense, from_sprs, to_dense, to_sprs_csr};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
