//! Support library for the grafo CLI binary.
//!
//! Exposes the matrix-file reader, the command pipeline and logging setup so
//! doctests and integration tests can exercise them without forking a
//! subprocess.

pub mod cli;
pub mod logging;
pub mod matrix_file;
