//! Error types for sparse matrix loading, storage and arithmetic

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the matrix core.
///
/// Parsing and arithmetic failures are never recovered inside the crate;
/// they are handed back to the caller, which decides whether to abort or
/// report and continue.
#[derive(Error, Debug)]
pub enum MatrixError {
    /// One of the two `rows=` / `cols=` header lines is missing or unreadable
    #[error("malformed header at line {line} ({content:?}): {reason}")]
    MalformedHeader {
        line: usize,
        content: String,
        reason: String,
    },

    /// An entry line does not match `(<row>,<col>,<value>)`
    #[error("malformed entry at line {line}: {content:?}")]
    MalformedInput { line: usize, content: String },

    /// A write targeted a coordinate outside the declared dimensions
    ///
    /// Coordinates are signed so that negative indices read from text are
    /// reported as written.
    #[error("index ({row}, {col}) out of bounds for {n_rows} x {n_cols} matrix")]
    OutOfBounds {
        row: i128,
        col: i128,
        n_rows: usize,
        n_cols: usize,
    },

    /// Operand shapes are incompatible for the requested operation
    #[error("dimension mismatch for {operation}: {left:?} and {right:?}")]
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Reading or writing a matrix file failed
    #[error("I/O failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The operation selection did not name add, subtract or multiply
    #[error("unknown operation {0:?}")]
    UnknownOperation(String),
}

impl MatrixError {
    /// True for the one failure a loader may choose to log and skip.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, MatrixError::OutOfBounds { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MatrixError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;
