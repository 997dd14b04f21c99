//! Plain-text matrix format
//!
//! ```text
//! rows=<n>
//! cols=<n>
//! (<row>,<col>,<value>)
//! ...
//! ```
//!
//! The two header lines come first, in that order. Every later non-blank
//! line is one entry with no whitespace inside the parentheses. Entries may
//! appear in any order on read and are always written sorted by
//! `(row, col)`, so identical matrices serialize to identical text.
//!
//! Numbers are strict base-10 literals. Header counts are plain digits with
//! nothing between `=` and the first digit. Entry fields are digits with an
//! optional leading `-`. A leading `+` or embedded whitespace makes the
//! line malformed, as does a value outside the element type's range.
//! Surrounding whitespace on a line is ignored.
//!
//! An entry whose fields are well-formed integers but whose coordinate lies
//! outside the declared dimensions, including a negative coordinate or one
//! too large for `usize`, is an out-of-bounds entry rather than a malformed
//! one, so [`BoundsPolicy::Skip`] drops it like any other.

use std::fmt::{self, Display};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{debug, info, warn};
use num_traits::Num;

use crate::error::{MatrixError, Result};
use crate::matrix::config::{BoundsPolicy, ParseOptions};
use crate::matrix::SparseMatrix;

const ROWS_KEY: &str = "rows";
const COLS_KEY: &str = "cols";

/// Parses matrix text, rejecting entries outside the declared dimensions
pub fn parse<T>(text: &str) -> Result<SparseMatrix<T>>
where
    T: Copy + Num + FromStr,
{
    parse_with(text, &ParseOptions::default())
}

/// Parses matrix text with an explicit out-of-bounds policy
///
/// Parsing halts at the first malformed line; no partial matrix is returned.
pub fn parse_with<T>(text: &str, options: &ParseOptions) -> Result<SparseMatrix<T>>
where
    T: Copy + Num + FromStr,
{
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line.trim()));

    let n_rows = parse_header(lines.next(), 1, ROWS_KEY)?;
    let n_cols = parse_header(lines.next(), 2, COLS_KEY)?;
    let mut matrix = SparseMatrix::new(n_rows, n_cols);

    let mut skipped = 0usize;
    for (line_no, line) in lines {
        if line.is_empty() {
            continue;
        }

        let (row, col, value) = parse_entry::<T>(line).ok_or_else(|| MatrixError::MalformedInput {
            line: line_no,
            content: line.to_string(),
        })?;

        let stored = match (usize::try_from(row), usize::try_from(col)) {
            (Ok(row), Ok(col)) => matrix.set_element(row, col, value),
            _ => Err(MatrixError::OutOfBounds {
                row,
                col,
                n_rows,
                n_cols,
            }),
        };

        match stored {
            Ok(()) => {}
            Err(err) if err.is_out_of_bounds() && options.on_out_of_bounds == BoundsPolicy::Skip => {
                warn!("line {}: {}, entry skipped", line_no, err);
                skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    debug!(
        "parsed {}x{} matrix with {} non-zeros ({} skipped)",
        n_rows,
        n_cols,
        matrix.nnz(),
        skipped
    );
    Ok(matrix)
}

fn parse_header(line: Option<(usize, &str)>, line_no: usize, key: &str) -> Result<usize> {
    let malformed = |content: &str, reason: String| MatrixError::MalformedHeader {
        line: line_no,
        content: content.to_string(),
        reason,
    };

    let (_, content) = line.ok_or_else(|| malformed("", format!("missing `{key}=` line")))?;

    let value = content
        .strip_prefix(key)
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or_else(|| malformed(content, format!("expected `{key}=<integer>`")))?;

    if !is_digits(value) {
        return Err(malformed(content, format!("{key} count must be plain decimal digits")));
    }
    value
        .parse::<usize>()
        .map_err(|e| malformed(content, format!("invalid {key} count: {e}")))
}

/// Splits `(<row>,<col>,<value>)` into its three integers
///
/// Coordinates come back signed and unchecked; values that overflow `i128`
/// saturate, which still lands them outside every matrix.
fn parse_entry<T: FromStr>(line: &str) -> Option<(i128, i128, T)> {
    let inner = line.strip_prefix('(')?.strip_suffix(')')?;

    let mut parts = inner.split(',');
    let row = parse_coordinate(parts.next()?)?;
    let col = parse_coordinate(parts.next()?)?;
    let value = parts.next().filter(|v| is_integer(v))?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col, value))
}

fn parse_coordinate(text: &str) -> Option<i128> {
    if !is_integer(text) {
        return None;
    }
    Some(text.parse().unwrap_or(if text.starts_with('-') {
        i128::MIN
    } else {
        i128::MAX
    }))
}

/// Digits with an optional leading `-`
fn is_integer(text: &str) -> bool {
    is_digits(text.strip_prefix('-').unwrap_or(text))
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Renders a matrix in the text format, entries sorted by `(row, col)`
pub fn serialize<T>(matrix: &SparseMatrix<T>) -> String
where
    T: Copy + Num + Display,
{
    matrix.to_string()
}

impl<T> Display for SparseMatrix<T>
where
    T: Copy + Num + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}={}", ROWS_KEY, self.n_rows())?;
        writeln!(f, "{}={}", COLS_KEY, self.n_cols())?;
        for (row, col, value) in self.triplets() {
            writeln!(f, "({},{},{})", row, col, value)?;
        }
        Ok(())
    }
}

impl<T> FromStr for SparseMatrix<T>
where
    T: Copy + Num + FromStr,
{
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

/// Reads and parses a matrix file
pub fn read_matrix<T, P>(path: P) -> Result<SparseMatrix<T>>
where
    T: Copy + Num + FromStr,
    P: AsRef<Path>,
{
    read_matrix_with(path, &ParseOptions::default())
}

/// Reads and parses a matrix file with an explicit out-of-bounds policy
pub fn read_matrix_with<T, P>(path: P, options: &ParseOptions) -> Result<SparseMatrix<T>>
where
    T: Copy + Num + FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| MatrixError::io(path, e))?;
    let matrix = parse_with(&text, options)?;
    info!(
        "loaded {}x{} matrix ({} non-zeros) from {}",
        matrix.n_rows(),
        matrix.n_cols(),
        matrix.nnz(),
        path.display()
    );
    Ok(matrix)
}

/// Serializes a matrix and writes it to `path`, replacing any existing file
pub fn write_matrix<T, P>(path: P, matrix: &SparseMatrix<T>) -> Result<()>
where
    T: Copy + Num + Display,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    fs::write(path, serialize(matrix)).map_err(|e| MatrixError::io(path, e))?;
    info!("wrote {} non-zeros to {}", matrix.nnz(), path.display());
    Ok(())
}
