//! Argument parsing and command execution for the `msf` binary.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use msf_core::{ForestError, ForestReport, kruskal};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::input::{InputError, read_graph};

/// Path value meaning "read from stdin".
const STDIN_PATH: &str = "-";

/// Value printed for the maximum weight when no edge was accepted.
pub const NO_WEIGHT_SENTINEL: i64 = -1;

/// Value printed for the maximum-weight position when no edge was accepted.
pub const NO_POSITION_SENTINEL: usize = 0;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone, Default)]
#[command(
    name = "msf",
    about = "Compute the minimum spanning forest of a weighted undirected graph.",
    long_about = "Reads `n m` followed by `m` lines of `u v w`, then prints the forest \
                  weight, the heaviest accepted edge weight, that edge's 1-indexed \
                  position in sorted order, and the union-find depth of vertex n/2."
)]
pub struct Cli {
    /// Graph file to read; omit or pass `-` for stdin.
    pub input: Option<PathBuf>,
}

/// Errors surfaced while executing the command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph description was malformed.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The forest computation rejected the graph.
    #[error(transparent)]
    Forest(#[from] ForestError),
}

/// Executes the command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be opened or parsed, or when
/// the graph is rejected by the core.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use msf_cli::cli::{Cli, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3 2\n0 1 4\n1 2 6\n")?;
/// let report = run_cli(Cli {
///     input: Some(file.path().to_path_buf()),
/// })?;
/// assert_eq!(report.total_weight(), 10);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(input = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ForestReport, CliError> {
    let span = Span::current();
    match cli.input.as_deref() {
        Some(path) if path != Path::new(STDIN_PATH) => {
            span.record("input", field::display(path.display()));
            run_reader(open_input(path)?)
        }
        _ => {
            span.record("input", field::display("<stdin>"));
            run_reader(io::stdin().lock())
        }
    }
}

/// Reads a graph from `reader` and computes its spanning forest.
///
/// # Errors
/// Returns [`CliError`] when parsing fails or the graph is rejected.
#[instrument(name = "cli.execute", err, skip(reader), fields(vertices = field::Empty))]
pub fn run_reader<R: BufRead>(reader: R) -> Result<ForestReport, CliError> {
    let graph = read_graph(reader)?;
    Span::current().record("vertices", graph.vertex_count);
    let report = kruskal(graph.vertex_count, &graph.edges)?;
    info!(
        vertices = report.vertex_count(),
        accepted = report.accepted_edges(),
        probe_vertex = report.probe_vertex(),
        "command completed"
    );
    Ok(report)
}

pub(super) fn open_input(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Renders `report` to `writer` as four lines.
///
/// The lines are the total weight, the maximum accepted weight
/// ([`NO_WEIGHT_SENTINEL`] if none), its one-based sorted position
/// ([`NO_POSITION_SENTINEL`] if none), and the probe vertex depth.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use msf_cli::cli::render_report;
/// # use msf_core::kruskal;
/// #
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = kruskal(1, &[])?;
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "0\n-1\n0\n0\n");
/// # Ok(())
/// # }
/// ```
pub fn render_report(report: &ForestReport, mut writer: impl Write) -> io::Result<()> {
    let max_weight = report
        .max_weight()
        .map_or(NO_WEIGHT_SENTINEL, i64::from);
    let position = report
        .max_weight_position()
        .unwrap_or(NO_POSITION_SENTINEL);
    writeln!(writer, "{}", report.total_weight())?;
    writeln!(writer, "{max_weight}")?;
    writeln!(writer, "{position}")?;
    writeln!(writer, "{}", report.probe_depth())?;
    Ok(())
}
