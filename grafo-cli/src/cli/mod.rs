//! Command-line interface orchestration for grafo.
//!
//! Every command reads the matrix file, selects one matrix (except
//! `matrices`, which summarises them all), runs a single analysis and
//! returns an [`ExecutionSummary`] for [`render_summary`] to print.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, KruskalArgs, MatrixSummary, Report, StartArgs,
    UnionStep, render_summary, run_cli, run_command,
};
