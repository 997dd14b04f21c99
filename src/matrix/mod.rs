// Matrix storage, row index and arithmetic

pub mod config;
pub mod csr;
pub mod ops;
pub mod sparse;

pub use config::{BoundsPolicy, MultiplyConfig, MultiplyStrategy, ParseOptions, SystemParameters};
pub use csr::SparseMatrixCSR;
pub use sparse::SparseMatrix;
