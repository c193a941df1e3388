//! Algorithm selection and the petgraph adapter.
//!
//! Each [`Algorithm`] variant maps to one petgraph call. Results come back as
//! label-based [`AlgorithmResult`] values so rendering never sees node indices.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use edgeviz_core::{Error, Result};
use petgraph::algo::{astar, dijkstra, min_spanning_tree, min_spanning_tree_prim};
use petgraph::data::Element;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::{Bfs, DfsEvent, depth_first_search};

use crate::model::{EdgeGraph, NodeLabel};

/// An edge as a pair of labels.
pub type LabelEdge = (NodeLabel, NodeLabel);

/// The five supported algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    Kruskal,
    Prim,
}

impl Algorithm {
    /// Every variant in display order.
    pub const ALL: [Self; 5] = [
        Self::Bfs,
        Self::Dfs,
        Self::Dijkstra,
        Self::Kruskal,
        Self::Prim,
    ];

    /// Display name used in selectors and titles.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Dijkstra => "Dijkstra",
            Self::Kruskal => "Kruskal",
            Self::Prim => "Prim",
        }
    }

    /// Whether a source label must be supplied before running.
    ///
    /// Prim requires one even though the spanning-tree call ignores it.
    #[must_use]
    pub const fn requires_source(self) -> bool {
        matches!(self, Self::Bfs | Self::Dfs | Self::Dijkstra | Self::Prim)
    }

    #[must_use]
    pub const fn requires_target(self) -> bool {
        matches!(self, Self::Dijkstra)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Case-insensitive match on the display name.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnrecognizedAlgorithm(wanted.to_string()))
    }
}

/// Normalized output of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum AlgorithmResult {
    /// Tree edges in visiting order (BFS, DFS).
    EdgeTraversal(Vec<LabelEdge>),
    /// Node sequence from source to target (Dijkstra).
    Path(Vec<NodeLabel>),
    /// Spanning-tree edges, unordered (Kruskal, Prim).
    EdgeSet(Vec<LabelEdge>),
    /// Nothing to highlight.
    None,
}

impl AlgorithmResult {
    /// Consecutive node pairs of a path; empty for the other shapes.
    #[must_use]
    pub fn path_edges(&self) -> Vec<LabelEdge> {
        match self {
            Self::Path(nodes) => nodes
                .windows(2)
                .filter_map(|pair| match pair {
                    [u, v] => Some((u.clone(), v.clone())),
                    _ => None,
                })
                .collect(),
            Self::EdgeTraversal(_) | Self::EdgeSet(_) | Self::None => Vec::new(),
        }
    }
}

/// Run `algorithm` on `graph`.
///
/// Labels are resolved here; a label that no longer names a node yields
/// [`Error::NodeNotFound`]. `source` is ignored by Kruskal and Prim.
///
/// # Errors
///
/// - [`Error::NodeNotFound`] for an unknown source or target label.
/// - [`Error::NoPath`] when Dijkstra finds no route.
/// - [`Error::AlgorithmFailed`] when the edge weights are unusable.
pub fn run(
    graph: &EdgeGraph,
    algorithm: Algorithm,
    source: &str,
    target: &str,
) -> Result<AlgorithmResult> {
    match algorithm {
        Algorithm::Bfs => bfs_edges(graph, resolve(graph, source)?).map(AlgorithmResult::EdgeTraversal),
        Algorithm::Dfs => dfs_edges(graph, resolve(graph, source)?).map(AlgorithmResult::EdgeTraversal),
        Algorithm::Dijkstra => {
            let start = resolve(graph, source)?;
            let goal = resolve(graph, target)?;
            shortest_path(graph, start, goal).map(|(_, path)| AlgorithmResult::Path(path))
        }
        Algorithm::Kruskal => kruskal_edges(graph).map(AlgorithmResult::EdgeSet),
        Algorithm::Prim => Ok(AlgorithmResult::EdgeSet(prim_edges(graph))),
    }
}

/// Total weight of the shortest path between two labels, via petgraph's
/// `dijkstra`.
///
/// # Errors
///
/// Same conditions as a Dijkstra [`run`].
pub fn shortest_path_length(graph: &EdgeGraph, source: &str, target: &str) -> Result<f64> {
    let start = resolve(graph, source)?;
    let goal = resolve(graph, target)?;
    check_dijkstra_weights(graph)?;

    let scores = dijkstra(graph.inner(), start, Some(goal), |edge| edge.weight().cost());
    scores
        .get(&goal)
        .copied()
        .ok_or_else(|| Error::no_path(source, target))
}

fn resolve(graph: &EdgeGraph, label: &str) -> Result<NodeIndex> {
    graph
        .index_of(label)
        .ok_or_else(|| Error::NodeNotFound(label.to_string()))
}

fn label_pair(graph: &EdgeGraph, u: NodeIndex, v: NodeIndex) -> Result<LabelEdge> {
    let from = graph
        .label_of(u)
        .ok_or_else(|| Error::NodeNotFound(format!("#{}", u.index())))?;
    let to = graph
        .label_of(v)
        .ok_or_else(|| Error::NodeNotFound(format!("#{}", v.index())))?;
    Ok((from.clone(), to.clone()))
}

/// BFS tree edges in discovery order.
///
/// petgraph's `Bfs` yields nodes only. The tree parent of each discovered
/// node is its earliest-visited neighbour, so edges are recovered from the
/// visit order.
fn bfs_edges(graph: &EdgeGraph, start: NodeIndex) -> Result<Vec<LabelEdge>> {
    let inner = graph.inner();
    let mut bfs = Bfs::new(inner, start);
    let mut order: Vec<NodeIndex> = Vec::new();
    while let Some(node) = bfs.next(inner) {
        order.push(node);
    }

    let rank: HashMap<NodeIndex, usize> = order
        .iter()
        .enumerate()
        .map(|(position, node)| (*node, position))
        .collect();

    order
        .iter()
        .skip(1)
        .filter_map(|&node| {
            inner
                .neighbors(node)
                .filter(|neighbor| *neighbor != node)
                .min_by_key(|neighbor| rank.get(neighbor).copied().unwrap_or(usize::MAX))
                .map(|parent| (parent, node))
        })
        .map(|(parent, node)| label_pair(graph, parent, node))
        .collect()
}

/// DFS tree edges in visiting order.
fn dfs_edges(graph: &EdgeGraph, start: NodeIndex) -> Result<Vec<LabelEdge>> {
    let mut tree_edges = Vec::new();
    depth_first_search(graph.inner(), Some(start), |event| {
        if let DfsEvent::TreeEdge(u, v) = event {
            tree_edges.push((u, v));
        }
    });

    tree_edges
        .into_iter()
        .map(|(u, v)| label_pair(graph, u, v))
        .collect()
}

fn check_dijkstra_weights(graph: &EdgeGraph) -> Result<()> {
    for (from, to, data) in graph.edges() {
        let cost = data.cost();
        if cost.is_nan() {
            return Err(Error::algorithm_failed(format!(
                "NaN found as an edge weight. Edge ({from}, {to}) has weight NaN."
            )));
        }
        if cost < 0.0 {
            return Err(Error::algorithm_failed(format!(
                "Contradictory paths found: negative weight {cost} on edge ({from}, {to})."
            )));
        }
    }
    Ok(())
}

fn shortest_path(
    graph: &EdgeGraph,
    start: NodeIndex,
    goal: NodeIndex,
) -> Result<(f64, Vec<NodeLabel>)> {
    check_dijkstra_weights(graph)?;

    let (cost, path) = astar(
        graph.inner(),
        start,
        |node| node == goal,
        |edge| edge.weight().cost(),
        |_| 0.0,
    )
    .ok_or_else(|| {
        let from = graph.label_of(start).cloned().unwrap_or_default();
        let to = graph.label_of(goal).cloned().unwrap_or_default();
        Error::no_path(from, to)
    })?;

    let labels = path
        .into_iter()
        .map(|node| {
            graph
                .label_of(node)
                .cloned()
                .ok_or_else(|| Error::NodeNotFound(format!("#{}", node.index())))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((cost, labels))
}

/// Collect the edge elements of a spanning-tree iterator as label pairs.
///
/// Both petgraph MST iterators emit every node first, in index order, so the
/// `source`/`target` positions of edge elements are node indices.
fn spanning_edges<I>(graph: &EdgeGraph, elements: I) -> Vec<LabelEdge>
where
    I: Iterator<Item = Element<NodeLabel, f64>>,
{
    elements
        .filter_map(|element| match element {
            Element::Edge { source, target, .. } => {
                label_pair(graph, NodeIndex::new(source), NodeIndex::new(target)).ok()
            }
            Element::Node { .. } => None,
        })
        .collect()
}

fn cost_graph(graph: &EdgeGraph) -> UnGraph<NodeLabel, f64> {
    graph.inner().map(|_, label| label.clone(), |_, data| data.cost())
}

fn kruskal_edges(graph: &EdgeGraph) -> Result<Vec<LabelEdge>> {
    if let Some((from, to, _)) = graph.edges().find(|(_, _, data)| data.cost().is_nan()) {
        return Err(Error::algorithm_failed(format!(
            "NaN found as an edge weight. Edge ({from}, {to}) has weight NaN."
        )));
    }
    let costs = cost_graph(graph);
    Ok(spanning_edges(graph, min_spanning_tree(&costs)))
}

/// Prim over the component of the first inserted node; NaN-weighted edges
/// are left out.
fn prim_edges(graph: &EdgeGraph) -> Vec<LabelEdge> {
    let costs = graph.inner().filter_map(
        |_, label| Some(label.clone()),
        |_, data| {
            let cost = data.cost();
            (!cost.is_nan()).then_some(cost)
        },
    );
    spanning_edges(graph, min_spanning_tree_prim(&costs))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]

    use super::*;

    fn graph_of(edges: &[(&str, &str, Option<f64>)]) -> EdgeGraph {
        let mut graph = EdgeGraph::new();
        for (u, v, w) in edges {
            graph.add_edge(u, v, *w).unwrap();
        }
        graph
    }

    fn total(graph: &EdgeGraph, edges: &[LabelEdge]) -> f64 {
        edges
            .iter()
            .map(|(u, v)| graph.weight_between(u, v).flatten().unwrap_or(1.0))
            .sum()
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("bfs".parse::<Algorithm>().unwrap(), Algorithm::Bfs);
        assert_eq!("DIJKSTRA".parse::<Algorithm>().unwrap(), Algorithm::Dijkstra);
        assert_eq!(" Prim ".parse::<Algorithm>().unwrap(), Algorithm::Prim);
        assert!(matches!(
            "Floyd".parse::<Algorithm>(),
            Err(Error::UnrecognizedAlgorithm(name)) if name == "Floyd"
        ));
    }

    #[test]
    fn test_requirements() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.requires_source(), algorithm != Algorithm::Kruskal);
            assert_eq!(algorithm.requires_target(), algorithm == Algorithm::Dijkstra);
        }
    }

    #[test]
    fn test_bfs_on_chain() {
        let graph = graph_of(&[("A", "B", None), ("B", "C", None), ("C", "D", None)]);
        let result = run(&graph, Algorithm::Bfs, "A", "").unwrap();
        assert_eq!(
            result,
            AlgorithmResult::EdgeTraversal(vec![
                ("A".into(), "B".into()),
                ("B".into(), "C".into()),
                ("C".into(), "D".into()),
            ])
        );
    }

    #[test]
    fn test_bfs_parents_are_one_level_up() {
        // A is adjacent to B, C, D; E hangs off C.
        let graph = graph_of(&[
            ("A", "B", None),
            ("A", "C", None),
            ("A", "D", None),
            ("C", "E", None),
            ("B", "C", None),
        ]);
        let AlgorithmResult::EdgeTraversal(edges) = run(&graph, Algorithm::Bfs, "A", "").unwrap()
        else {
            panic!("expected traversal");
        };
        assert_eq!(edges.len(), 4);
        for neighbor in ["B", "C", "D"] {
            assert!(edges.contains(&("A".into(), neighbor.into())));
        }
        assert!(edges.contains(&("C".into(), "E".into())));
        assert_eq!(edges.last(), Some(&("C".into(), "E".into())));
    }

    #[test]
    fn test_dfs_covers_component_only() {
        let graph = graph_of(&[
            ("A", "B", None),
            ("B", "C", None),
            ("A", "C", None),
            ("X", "Y", None),
        ]);
        let AlgorithmResult::EdgeTraversal(edges) = run(&graph, Algorithm::Dfs, "A", "").unwrap()
        else {
            panic!("expected traversal");
        };
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].0, "A");
        assert!(edges.iter().all(|(u, v)| u != "X" && v != "Y"));
    }

    #[test]
    fn test_dijkstra_prefers_direct_edge() {
        let graph = graph_of(&[
            ("A", "B", Some(1.0)),
            ("B", "C", Some(2.0)),
            ("A", "C", Some(1.0)),
        ]);
        let result = run(&graph, Algorithm::Dijkstra, "A", "C").unwrap();
        assert_eq!(result, AlgorithmResult::Path(vec!["A".into(), "C".into()]));
        assert_eq!(shortest_path_length(&graph, "A", "C").unwrap(), 1.0);
    }

    #[test]
    fn test_dijkstra_unweighted_counts_hops() {
        let graph = graph_of(&[("A", "B", None), ("B", "C", None), ("C", "D", None)]);
        assert_eq!(shortest_path_length(&graph, "A", "D").unwrap(), 3.0);
    }

    #[test]
    fn test_dijkstra_same_node() {
        let graph = graph_of(&[("A", "B", Some(4.0))]);
        let result = run(&graph, Algorithm::Dijkstra, "A", "A").unwrap();
        assert_eq!(result, AlgorithmResult::Path(vec!["A".into()]));
        assert!(result.path_edges().is_empty());
    }

    #[test]
    fn test_dijkstra_no_path() {
        let graph = graph_of(&[("A", "B", None), ("C", "D", None)]);
        let err = run(&graph, Algorithm::Dijkstra, "A", "D").unwrap_err();
        assert_eq!(err, Error::no_path("A", "D"));
    }

    #[test]
    fn test_dijkstra_rejects_negative_weight() {
        let graph = graph_of(&[("A", "B", Some(-1.0))]);
        let err = run(&graph, Algorithm::Dijkstra, "A", "B").unwrap_err();
        assert!(matches!(err, Error::AlgorithmFailed { .. }));
    }

    #[test]
    fn test_unknown_label_is_node_not_found() {
        let graph = graph_of(&[("A", "B", None)]);
        let err = run(&graph, Algorithm::Bfs, "Z", "").unwrap_err();
        assert_eq!(err, Error::NodeNotFound("Z".into()));
    }

    #[test]
    fn test_kruskal_and_prim_agree_on_weight() {
        let graph = graph_of(&[
            ("A", "B", Some(1.0)),
            ("B", "C", Some(2.0)),
            ("A", "C", Some(5.0)),
        ]);
        for algorithm in [Algorithm::Kruskal, Algorithm::Prim] {
            let AlgorithmResult::EdgeSet(edges) = run(&graph, algorithm, "A", "").unwrap() else {
                panic!("expected edge set");
            };
            assert_eq!(edges.len(), 2);
            assert_eq!(total(&graph, &edges), 3.0);
        }
    }

    #[test]
    fn test_kruskal_spans_every_component() {
        let graph = graph_of(&[("A", "B", Some(1.0)), ("C", "D", Some(2.0))]);
        let AlgorithmResult::EdgeSet(edges) = run(&graph, Algorithm::Kruskal, "", "").unwrap()
        else {
            panic!("expected edge set");
        };
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn test_prim_covers_first_component_only() {
        let graph = graph_of(&[("A", "B", Some(1.0)), ("C", "D", Some(2.0))]);
        let AlgorithmResult::EdgeSet(edges) = run(&graph, Algorithm::Prim, "C", "").unwrap() else {
            panic!("expected edge set");
        };
        assert_eq!(edges.len(), 1);
        let (u, v) = &edges[0];
        assert!((u == "A" && v == "B") || (u == "B" && v == "A"));
    }

    #[test]
    fn test_kruskal_rejects_nan_but_prim_skips_it() {
        let graph = graph_of(&[
            ("A", "B", Some(f64::NAN)),
            ("B", "C", Some(1.0)),
            ("A", "C", Some(2.0)),
        ]);
        assert!(matches!(
            run(&graph, Algorithm::Kruskal, "", ""),
            Err(Error::AlgorithmFailed { .. })
        ));
        let AlgorithmResult::EdgeSet(edges) = run(&graph, Algorithm::Prim, "A", "").unwrap() else {
            panic!("expected edge set");
        };
        assert_eq!(total(&graph, &edges), 3.0);
    }

    #[test]
    fn test_path_edges_pairs_consecutive_nodes() {
        let path = AlgorithmResult::Path(vec!["A".into(), "B".into(), "C".into()]);
        assert_eq!(
            path.path_edges(),
            vec![("A".into(), "B".into()), ("B".into(), "C".into())]
        );
        assert!(AlgorithmResult::None.path_edges().is_empty());
    }
}
