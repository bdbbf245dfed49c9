//! Command implementations and argument parsing for the grafo CLI.
//!
//! Vertices are 1-based on the command line and in rendered output; the
//! kernel is zero-based, so every boundary crossing shifts by one.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use grafo_core::{
    Bipartition, Components, Edge, Graph, GraphError, MinimumSpanningForest, PartitionView,
    Traversal, bipartition, breadth_first, connected_components, kruskal_with_observer, prim,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use crate::matrix_file::{MatrixBlock, MatrixFileError, read_matrix_file};

const DEFAULT_MATRIX_FILE: &str = "grafo.txt";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "grafo", about = "Analyse weighted undirected graphs read from a matrix file.")]
pub struct Cli {
    /// File holding one or more blank-line-separated adjacency matrices.
    #[arg(long, global = true, default_value = DEFAULT_MATRIX_FILE)]
    pub file: PathBuf,

    /// Which matrix in the file to analyse, counting from 1.
    #[arg(
        long,
        global = true,
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    pub matrix: u64,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// List the matrices in the file with their sizes.
    Matrices,
    /// Minimum spanning forest with Kruskal's algorithm.
    Kruskal(KruskalArgs),
    /// Minimum spanning tree of one component with Prim's algorithm.
    Prim(StartArgs),
    /// Breadth-first traversal order and discovery tree.
    Bfs(StartArgs),
    /// Connected components and whether the graph is connected.
    Components,
    /// Two-colouring, or an odd cycle proving none exists.
    Bipartite,
}

/// Options accepted by the `kruskal` command.
#[derive(Debug, Args, Clone, Default)]
pub struct KruskalArgs {
    /// Print the vertex partition after every union.
    #[arg(long)]
    pub show_sets: bool,
}

/// Options accepted by commands that start from a vertex.
#[derive(Debug, Args, Clone)]
pub struct StartArgs {
    /// Start vertex, counting from 1.
    #[arg(
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    pub start: u64,
}

/// Errors surfaced while executing CLI commands.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CliError {
    /// The matrix file could not be read or parsed.
    #[error(transparent)]
    MatrixFile(#[from] MatrixFileError),
    /// The file holds no matrices at all.
    #[error("`{path}` contains no matrices")]
    NoMatrices {
        /// File that was read.
        path: PathBuf,
    },
    /// The requested matrix index exceeds the number of matrices.
    #[error("matrix {requested} requested but `{path}` holds {available}")]
    MatrixNotFound {
        /// File that was read.
        path: PathBuf,
        /// 1-based index requested.
        requested: u64,
        /// Number of matrices in the file.
        available: usize,
    },
    /// The start vertex is not in the selected graph.
    #[error("start vertex {start} is outside 1..={vertex_count}")]
    StartOutOfRange {
        /// 1-based start vertex.
        start: u64,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The selected matrix does not describe a valid graph.
    #[error("matrix {matrix} (line {line}): {source}")]
    Graph {
        /// 1-based matrix index.
        matrix: usize,
        /// Line of the matrix's first row.
        line: usize,
        /// Kernel validation failure.
        #[source]
        source: GraphError,
    },
    /// An analysis rejected its input.
    #[error(transparent)]
    Analysis(#[from] GraphError),
    /// The command lists the file and does not analyse a single graph.
    #[error("`{command}` does not analyse a single graph")]
    NotAnAnalysis {
        /// Name of the offending command.
        command: &'static str,
    },
}

impl CliError {
    /// Returns a stable machine-readable code for the error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MatrixFile(err) => err.code(),
            Self::NoMatrices { .. } => "CLI_NO_MATRICES",
            Self::MatrixNotFound { .. } => "CLI_MATRIX_NOT_FOUND",
            Self::StartOutOfRange { .. } => "CLI_START_OUT_OF_RANGE",
            Self::NotAnAnalysis { .. } => "CLI_NOT_AN_ANALYSIS",
            Self::Graph { source, .. } | Self::Analysis(source) => source.code().as_str(),
        }
    }
}

/// Size of one matrix in the file, or why it is not a valid graph.
#[derive(Debug, Clone)]
pub struct MatrixSummary {
    /// Line of the matrix's first row.
    pub first_line: usize,
    /// Vertex and edge counts, or the validation failure.
    pub graph: Result<(usize, usize), GraphError>,
}

/// One union reported by Kruskal: the accepted edge and the partition after
/// it.
pub type UnionStep = (Edge, Vec<Vec<usize>>);

/// Result of the executed command.
#[derive(Debug, Clone)]
pub enum Report {
    /// Every matrix in the file.
    Matrices(Vec<MatrixSummary>),
    /// Kruskal's forest, with per-union partitions when requested.
    Kruskal {
        /// The spanning forest.
        forest: MinimumSpanningForest,
        /// Partition after each union; empty unless `--show-sets` was given.
        steps: Vec<UnionStep>,
    },
    /// Prim's tree from a zero-based start vertex.
    Prim {
        /// Zero-based start vertex.
        start: usize,
        /// The tree over the start vertex's component.
        tree: MinimumSpanningForest,
    },
    /// A breadth-first traversal.
    Bfs(Traversal),
    /// Connected components.
    Components(Components),
    /// Bipartiteness outcome.
    Bipartite(Bipartition),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// File that was read.
    pub file: PathBuf,
    /// 1-based index of the analysed matrix; `None` for `matrices`.
    pub matrix: Option<usize>,
    /// Vertex count of the analysed graph; `0` for `matrices`.
    pub vertex_count: usize,
    /// What the command produced.
    pub report: Report,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the file cannot be read, the requested matrix
/// is missing or invalid, or a start vertex is out of range.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use grafo_cli::cli::{Cli, Command, Report, StartArgs, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0 1 3\n1 0 2\n3 2 0\n")?;
/// let cli = Cli {
///     file: file.path().to_path_buf(),
///     matrix: 1,
///     command: Command::Prim(StartArgs { start: 1 }),
/// };
/// let summary = run_cli(cli)?;
/// let Report::Prim { tree, .. } = summary.report else { unreachable!() };
/// assert_eq!(tree.total_weight(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty, file = %cli.file.display(), matrix = cli.matrix),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let Cli {
        file,
        matrix,
        command,
    } = cli;
    let span = Span::current();
    span.record("command", field::display(command_name(&command)));

    let blocks = read_matrix_file(&file)?;
    if blocks.is_empty() {
        return Err(CliError::NoMatrices { path: file });
    }

    if matches!(command, Command::Matrices) {
        let summaries = blocks.iter().map(summarise).collect();
        info!(matrices = blocks.len(), "command completed");
        return Ok(ExecutionSummary {
            file,
            matrix: None,
            vertex_count: 0,
            report: Report::Matrices(summaries),
        });
    }

    let (index, graph) = select_graph(&file, &blocks, matrix)?;
    let report = run_command(&graph, command)?;
    info!(
        matrix = index,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "command completed"
    );
    Ok(ExecutionSummary {
        file,
        matrix: Some(index),
        vertex_count: graph.vertex_count(),
        report,
    })
}

/// Runs an analysis command against an already-built graph.
///
/// # Errors
/// Returns [`CliError::StartOutOfRange`] when a 1-based start vertex is not
/// in `graph`, [`CliError::Analysis`] if the kernel still rejects it, and
/// [`CliError::NotAnAnalysis`] for `matrices`, which needs the whole file.
pub fn run_command(graph: &Graph, command: Command) -> Result<Report, CliError> {
    let report = match command {
        Command::Matrices => {
            return Err(CliError::NotAnAnalysis {
                command: command_name(&command),
            });
        }
        Command::Kruskal(args) => {
            let mut steps = Vec::new();
            let forest = kruskal_with_observer(graph, |edge: &Edge, view: &PartitionView<'_>| {
                if args.show_sets {
                    steps.push((*edge, view.sets()));
                }
            });
            Report::Kruskal { forest, steps }
        }
        Command::Prim(args) => {
            let start = zero_based_start(graph, args.start)?;
            let tree = prim(graph, start)?;
            Report::Prim { start, tree }
        }
        Command::Bfs(args) => {
            let start = zero_based_start(graph, args.start)?;
            Report::Bfs(breadth_first(graph, start)?)
        }
        Command::Components => Report::Components(connected_components(graph)),
        Command::Bipartite => Report::Bipartite(bipartition(graph)),
    };
    Ok(report)
}

const fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Matrices => "matrices",
        Command::Kruskal(_) => "kruskal",
        Command::Prim(_) => "prim",
        Command::Bfs(_) => "bfs",
        Command::Components => "components",
        Command::Bipartite => "bipartite",
    }
}

fn summarise(block: &MatrixBlock) -> MatrixSummary {
    MatrixSummary {
        first_line: block.first_line,
        graph: Graph::from_matrix(&block.rows)
            .map(|graph| (graph.vertex_count(), graph.edge_count())),
    }
}

#[instrument(name = "cli.select_graph", err, skip(path, blocks), fields(available = blocks.len()))]
pub(super) fn select_graph(
    path: &std::path::Path,
    blocks: &[MatrixBlock],
    requested: u64,
) -> Result<(usize, Graph), CliError> {
    let (index, block) = usize::try_from(requested)
        .ok()
        .and_then(|index| Some((index, blocks.get(index.checked_sub(1)?)?)))
        .ok_or_else(|| CliError::MatrixNotFound {
            path: path.to_path_buf(),
            requested,
            available: blocks.len(),
        })?;
    let graph = Graph::from_matrix(&block.rows).map_err(|source| CliError::Graph {
        matrix: index,
        line: block.first_line,
        source,
    })?;
    Ok((index, graph))
}

fn zero_based_start(graph: &Graph, start: u64) -> Result<usize, CliError> {
    usize::try_from(start)
        .ok()
        .and_then(|start| start.checked_sub(1))
        .filter(|&vertex| vertex < graph.vertex_count())
        .ok_or(CliError::StartOutOfRange {
            start,
            vertex_count: graph.vertex_count(),
        })
}

/// Renders `summary` to `writer` as plain text with 1-based vertices.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use grafo_cli::cli::{Command, ExecutionSummary, render_summary, run_command};
/// # use grafo_core::Graph;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = Graph::from_edges(3, [(0, 1, 1), (1, 2, 1)])?;
/// let summary = ExecutionSummary {
///     file: "demo.txt".into(),
///     matrix: Some(1),
///     vertex_count: 3,
///     report: run_command(&graph, Command::Components)?,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.contains("{1, 2, 3}"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    if let Some(matrix) = summary.matrix {
        writeln!(
            writer,
            "matrix {matrix} of {} ({} vertices)",
            summary.file.display(),
            summary.vertex_count
        )?;
    }

    match &summary.report {
        Report::Matrices(matrices) => render_matrices(&summary.file, matrices, &mut writer),
        Report::Kruskal { forest, steps } => {
            for (edge, sets) in steps {
                writeln!(
                    writer,
                    "union {} - {}: {}",
                    edge.source() + 1,
                    edge.target() + 1,
                    format_sets(sets)
                )?;
            }
            writeln!(writer, "kruskal minimum spanning forest")?;
            render_forest(forest, summary.vertex_count, &mut writer)
        }
        Report::Prim { start, tree } => {
            writeln!(writer, "prim minimum spanning tree from {}", start + 1)?;
            render_forest(tree, summary.vertex_count, &mut writer)?;
            writeln!(
                writer,
                "reached: {} of {} vertices",
                tree.len() + 1,
                summary.vertex_count
            )
        }
        Report::Bfs(traversal) => render_traversal(traversal, summary.vertex_count, &mut writer),
        Report::Components(components) => {
            writeln!(writer, "components: {}", components.count())?;
            for (index, members) in components.components().iter().enumerate() {
                writeln!(writer, "{}: {}", index + 1, format_set(members))?;
            }
            writeln!(writer, "connected: {}", yes_no(components.is_connected()))
        }
        Report::Bipartite(outcome) => render_bipartition(outcome, &mut writer),
    }
}

fn render_matrices(
    file: &std::path::Path,
    matrices: &[MatrixSummary],
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer, "{}: {} matrices", file.display(), matrices.len())?;
    for (index, matrix) in matrices.iter().enumerate() {
        match &matrix.graph {
            Ok((vertices, edges)) => writeln!(
                writer,
                "{}: {vertices} vertices, {edges} edges (line {})",
                index + 1,
                matrix.first_line
            )?,
            Err(err) => writeln!(
                writer,
                "{}: invalid [{}] {err} (line {})",
                index + 1,
                err.code(),
                matrix.first_line
            )?,
        }
    }
    Ok(())
}

fn render_forest(
    forest: &MinimumSpanningForest,
    vertex_count: usize,
    writer: &mut impl Write,
) -> io::Result<()> {
    for edge in forest.edges() {
        writeln!(
            writer,
            "{} - {}\t{}",
            edge.source() + 1,
            edge.target() + 1,
            edge.weight()
        )?;
    }
    writeln!(writer, "total weight: {}", forest.total_weight())?;
    writeln!(writer, "spanning: {}", yes_no(forest.spans(vertex_count)))
}

fn render_traversal(
    traversal: &Traversal,
    vertex_count: usize,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(
        writer,
        "breadth-first order from {}: {}",
        traversal.root() + 1,
        format_list(traversal.order())
    )?;
    for edge in traversal.tree_edges() {
        writeln!(writer, "{} <- {}", edge.target() + 1, edge.source() + 1)?;
    }
    let unreached: Vec<usize> = (0..vertex_count)
        .filter(|&vertex| !traversal.is_visited(vertex))
        .collect();
    if !unreached.is_empty() {
        writeln!(writer, "unreached: {}", format_list(&unreached))?;
    }
    Ok(())
}

fn render_bipartition(outcome: &Bipartition, writer: &mut impl Write) -> io::Result<()> {
    match outcome {
        Bipartition::Bipartite(colouring) => {
            writeln!(writer, "bipartite: yes")?;
            writeln!(writer, "left: {}", format_set(&colouring.left()))?;
            writeln!(writer, "right: {}", format_set(&colouring.right()))
        }
        Bipartition::OddCycle(cycle) => {
            let (u, v) = cycle.conflict();
            writeln!(writer, "bipartite: no")?;
            writeln!(
                writer,
                "odd cycle: {} {}",
                format_list(cycle.vertices()),
                cycle.vertices()[0] + 1
            )?;
            writeln!(writer, "conflicting edge: {} - {}", u + 1, v + 1)
        }
    }
}

fn format_list(vertices: &[usize]) -> String {
    vertices
        .iter()
        .map(|vertex| (vertex + 1).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_set(vertices: &[usize]) -> String {
    let members: Vec<String> = vertices.iter().map(|vertex| (vertex + 1).to_string()).collect();
    format!("{{{}}}", members.join(", "))
}

fn format_sets(sets: &[Vec<usize>]) -> String {
    sets.iter()
        .map(|set| format_set(set))
        .collect::<Vec<_>>()
        .join(" ")
}

const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
