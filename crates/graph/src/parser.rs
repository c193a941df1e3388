//! Edge-list parser.
//!
//! One edge per non-empty line: `u v` or `u v weight`. Malformed lines and
//! non-numeric weights are skipped with a [`ParseWarning`]; a line the graph
//! store refuses aborts the whole parse.

use std::fmt;

use edgeviz_core::{Error, Notice, Result};
use tracing::{info, warn};

use crate::model::{EdgeGraph, EdgeWeightMap};

/// Why a line was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Token count other than 2 or 3.
    Malformed,
    /// Third token does not parse as a float.
    NonNumericWeight,
}

/// A recoverable problem with one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based line number within the trimmed input.
    pub line_number: usize,
    /// The offending line as typed.
    pub line: String,
    pub kind: WarningKind,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WarningKind::Malformed => write!(
                f,
                "Skipping malformed line {}: '{}'.\nExpected format: u v [weight]",
                self.line_number, self.line
            ),
            WarningKind::NonNumericWeight => write!(
                f,
                "Skipping line {} due to non-numeric weight: '{}'.",
                self.line_number, self.line
            ),
        }
    }
}

impl From<&ParseWarning> for Notice {
    fn from(warning: &ParseWarning) -> Self {
        Self::warning("Parsing Warning", warning.to_string())
    }
}

/// What a single line contributes.
#[derive(Debug, Clone, PartialEq)]
enum LineEdge<'a> {
    Unweighted(&'a str, &'a str),
    Weighted(&'a str, &'a str, f64),
}

fn interpret<'a>(tokens: &[&'a str]) -> std::result::Result<LineEdge<'a>, WarningKind> {
    match *tokens {
        [u, v] => Ok(LineEdge::Unweighted(u, v)),
        [u, v, weight] => weight
            .parse::<f64>()
            .map(|w| LineEdge::Weighted(u, v, w))
            .map_err(|_| WarningKind::NonNumericWeight),
        _ => Err(WarningKind::Malformed),
    }
}

/// Rebuild `graph` and `weights` from `text`.
///
/// Both are cleared first. Edges are inserted in the order encountered, so a
/// fatal error leaves the edges from earlier lines in place.
///
/// # Errors
///
/// Returns [`Error::ParseFailed`] naming the line when the graph store
/// refuses a node or edge.
///
/// # Examples
///
/// ```
/// use edgeviz_graph::model::{EdgeGraph, EdgeWeightMap};
/// use edgeviz_graph::parser::parse_into;
///
/// let mut graph = EdgeGraph::new();
/// let mut weights = EdgeWeightMap::new();
/// let warnings = parse_into("A B 1\nB C\nbad\n", &mut graph, &mut weights).unwrap();
///
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(weights.get("A", "B"), Some(1.0));
/// assert_eq!(warnings.len(), 1);
/// ```
pub fn parse_into(
    text: &str,
    graph: &mut EdgeGraph,
    weights: &mut EdgeWeightMap,
) -> Result<Vec<ParseWarning>> {
    graph.clear();
    weights.clear();

    let mut warnings = Vec::new();

    for (index, line) in text.trim().lines().enumerate() {
        let line_number = index.saturating_add(1);
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        let inserted = match interpret(&tokens) {
            Ok(LineEdge::Unweighted(u, v)) => graph.add_edge(u, v, None),
            Ok(LineEdge::Weighted(u, v, w)) => {
                weights.insert(u, v, w);
                graph.add_edge(u, v, Some(w))
            }
            Err(kind) => {
                let warning = ParseWarning {
                    line_number,
                    line: line.to_string(),
                    kind,
                };
                warn!("{warning}");
                warnings.push(warning);
                continue;
            }
        };

        inserted.map_err(|e| Error::parse_failed(line_number, e.to_string()))?;
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Graph parsed"
    );
    Ok(warnings)
}
