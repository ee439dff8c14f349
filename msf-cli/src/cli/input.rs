//! Line-oriented graph reader.
//!
//! The first non-blank line holds `n m`; each of the next `m` lines holds
//! `u v w`. Tokens are separated by ASCII whitespace. Reading stops after
//! the `m`th edge or at the first blank line, whichever comes first, and
//! anything after that point is left unread.

use std::io::{self, BufRead};

use msf_core::Edge;
use thiserror::Error;
use tracing::{Span, debug, field, instrument};

/// Upper bound on edges preallocated from an untrusted header.
const PREALLOC_EDGE_LIMIT: usize = 1 << 16;

/// Errors raised while reading a graph description.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InputError {
    /// The underlying reader failed.
    #[error("failed to read input: {source}")]
    Io {
        /// Error reported by the reader.
        #[source]
        source: io::Error,
    },
    /// The input ended before a header line was found.
    #[error("input is empty; expected a `<vertices> <edges>` header")]
    MissingHeader,
    /// The header did not contain exactly two fields.
    #[error("line {line}: expected `<vertices> <edges>`, found {found} field(s)")]
    MalformedHeader {
        /// One-based line number.
        line: usize,
        /// Number of whitespace-separated fields present.
        found: usize,
    },
    /// An edge line did not contain exactly three fields.
    #[error("line {line}: expected `<from> <to> <weight>`, found {found} field(s)")]
    MalformedEdge {
        /// One-based line number.
        line: usize,
        /// Number of whitespace-separated fields present.
        found: usize,
    },
    /// A field could not be parsed as the expected integer type.
    #[error("line {line}: `{token}` is not a valid {expected}")]
    InvalidInteger {
        /// One-based line number.
        line: usize,
        /// The offending token.
        token: String,
        /// Description of the expected value.
        expected: &'static str,
    },
    /// Fewer edge lines were present than the header announced.
    #[error("header announced {expected} edge(s) but only {found} were present")]
    MissingEdges {
        /// Edge count from the header.
        expected: usize,
        /// Edge lines actually read.
        found: usize,
    },
}

impl From<io::Error> for InputError {
    fn from(source: io::Error) -> Self {
        Self::Io { source }
    }
}

/// A parsed graph: its vertex count and edges in input order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphInput {
    /// Number of vertices, `n`.
    pub vertex_count: usize,
    /// Edges in the order they were read.
    pub edges: Vec<Edge>,
}

/// Reads a graph description from `reader`.
///
/// Vertex ids are not checked against `n` here; the core rejects
/// out-of-range endpoints.
///
/// # Errors
/// Returns [`InputError`] when the reader fails, the header or an edge line
/// is malformed, or fewer than `m` edges precede the first blank line.
///
/// # Examples
/// ```
/// use msf_cli::cli::read_graph;
///
/// let graph = read_graph("3 2\n0 1 5\n1 2 -4\n".as_bytes())?;
/// assert_eq!(graph.vertex_count, 3);
/// assert_eq!(graph.edges[1].weight(), -4);
/// # Ok::<(), msf_cli::cli::InputError>(())
/// ```
#[instrument(
    name = "cli.read_graph",
    err,
    skip(reader),
    fields(vertices = field::Empty, edges = field::Empty),
)]
pub fn read_graph<R: BufRead>(reader: R) -> Result<GraphInput, InputError> {
    let mut lines = reader.lines().enumerate();

    let (vertex_count, edge_count) = loop {
        let Some((index, line)) = lines.next() else {
            return Err(InputError::MissingHeader);
        };
        let line = line?;
        if !line.trim().is_empty() {
            break parse_header(index + 1, &line)?;
        }
    };
    let span = Span::current();
    span.record("vertices", vertex_count);
    span.record("edges", edge_count);

    let mut edges = Vec::with_capacity(edge_count.min(PREALLOC_EDGE_LIMIT));
    while edges.len() < edge_count {
        let Some((index, line)) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            debug!(line = index + 1, "blank line ends edge list");
            break;
        }
        edges.push(parse_edge(index + 1, &line)?);
    }

    if edges.len() < edge_count {
        return Err(InputError::MissingEdges {
            expected: edge_count,
            found: edges.len(),
        });
    }
    Ok(GraphInput {
        vertex_count,
        edges,
    })
}

fn parse_header(line: usize, text: &str) -> Result<(usize, usize), InputError> {
    match text.split_ascii_whitespace().collect::<Vec<_>>().as_slice() {
        [vertices, edges] => Ok((
            parse_field(line, vertices, "vertex count")?,
            parse_field(line, edges, "edge count")?,
        )),
        fields => Err(InputError::MalformedHeader {
            line,
            found: fields.len(),
        }),
    }
}

fn parse_edge(line: usize, text: &str) -> Result<Edge, InputError> {
    match text.split_ascii_whitespace().collect::<Vec<_>>().as_slice() {
        [from, to, weight] => Ok(Edge::new(
            parse_field(line, from, "vertex id")?,
            parse_field(line, to, "vertex id")?,
            parse_field(line, weight, "32-bit weight")?,
        )),
        fields => Err(InputError::MalformedEdge {
            line,
            found: fields.len(),
        }),
    }
}

fn parse_field<T: std::str::FromStr>(
    line: usize,
    token: &str,
    expected: &'static str,
) -> Result<T, InputError> {
    token.parse().map_err(|_| InputError::InvalidInteger {
        line,
        token: token.to_owned(),
        expected,
    })
}
