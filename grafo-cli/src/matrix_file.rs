//! Reader for the grafo matrix file format.
//!
//! A file holds one or more adjacency matrices. Each line is a row of
//! whitespace-separated non-negative integers; one or more blank lines end
//! the current matrix. Blank lines before the first or after the last matrix
//! are ignored. Squareness and symmetry are left to
//! [`grafo_core::Graph::from_matrix`].

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, instrument};

/// Errors raised while reading a matrix file.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum MatrixFileError {
    /// The file could not be opened or read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A token is not a non-negative integer that fits in `u32`.
    #[error("line {line}: `{token}` is not a non-negative integer weight")]
    InvalidWeight {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A row's length differs from the first row of the same matrix.
    #[error("line {line}: row has {actual} entries but the matrix's first row has {expected}")]
    RaggedRow {
        /// 1-based line number.
        line: usize,
        /// Entries in the matrix's first row.
        expected: usize,
        /// Entries in the offending row.
        actual: usize,
    },
}

impl MatrixFileError {
    /// Returns a stable machine-readable code for the error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "MATRIX_FILE_IO",
            Self::InvalidWeight { .. } => "MATRIX_FILE_INVALID_WEIGHT",
            Self::RaggedRow { .. } => "MATRIX_FILE_RAGGED_ROW",
        }
    }
}

/// A matrix read from a file, with the line it started on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatrixBlock {
    /// 1-based line number of the matrix's first row.
    pub first_line: usize,
    /// Matrix rows in file order.
    pub rows: Vec<Vec<u32>>,
}

/// Reads every matrix in the file at `path`.
///
/// # Errors
/// Returns [`MatrixFileError::Io`] when the file cannot be read, otherwise
/// the first parse error in file order.
#[instrument(name = "cli.read_matrix_file", err, skip(path), fields(path = %path.display()))]
pub fn read_matrix_file(path: &Path) -> Result<Vec<MatrixBlock>, MatrixFileError> {
    let io_error = |source| MatrixFileError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    let blocks = parse_matrices(BufReader::new(file)).map_err(|err| match err {
        MatrixFileError::Io { source, .. } => io_error(source),
        other => other,
    })?;
    debug!(matrices = blocks.len(), "matrix file read");
    Ok(blocks)
}

/// Parses every matrix from `reader`.
///
/// # Errors
/// Returns the first [`MatrixFileError`] in input order. I/O failures are
/// reported with an empty path.
///
/// # Examples
/// ```
/// use grafo_cli::matrix_file::parse_matrices;
///
/// let blocks = parse_matrices("0 1\n1 0\n\n\n0\n".as_bytes())?;
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[1].first_line, 5);
/// assert_eq!(blocks[1].rows, vec![vec![0]]);
/// # Ok::<(), grafo_cli::matrix_file::MatrixFileError>(())
/// ```
pub fn parse_matrices(reader: impl BufRead) -> Result<Vec<MatrixBlock>, MatrixFileError> {
    let mut blocks = Vec::new();
    let mut current: Option<MatrixBlock> = None;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let text = line.map_err(|source| MatrixFileError::Io {
            path: PathBuf::new(),
            source,
        })?;
        if text.trim().is_empty() {
            blocks.extend(current.take());
            continue;
        }

        let row = parse_row(&text, line_number)?;
        match current.as_mut() {
            Some(block) => {
                let expected = block.rows.first().map_or(row.len(), Vec::len);
                if row.len() != expected {
                    return Err(MatrixFileError::RaggedRow {
                        line: line_number,
                        expected,
                        actual: row.len(),
                    });
                }
                block.rows.push(row);
            }
            None => {
                current = Some(MatrixBlock {
                    first_line: line_number,
                    rows: vec![row],
                });
            }
        }
    }

    blocks.extend(current);
    Ok(blocks)
}

fn parse_row(text: &str, line: usize) -> Result<Vec<u32>, MatrixFileError> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<u32>().map_err(|_| MatrixFileError::InvalidWeight {
                line,
                token: token.to_owned(),
            })
        })
        .collect()
}
