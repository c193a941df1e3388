//! # Edge graph
//!
//! Undirected graph of string-labelled nodes using petgraph, plus the
//! display-only weight map filled by the parser.

use std::collections::HashMap;

use petgraph::graph::{EdgeIndex, GraphError, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

/// Node label as typed by the user.
pub type NodeLabel = String;

/// Edge payload: the weight is optional, unweighted edges count as 1 in
/// weighted algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeData {
    pub weight: Option<f64>,
}

impl EdgeData {
    /// Weight used by shortest-path and spanning-tree algorithms.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_WEIGHT)
    }
}

/// Weight assumed for edges typed without one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Undirected graph wrapping petgraph's `UnGraph`.
///
/// Adding an edge between two labels that are already connected updates the
/// existing edge instead of creating a parallel one.
#[derive(Debug, Clone, Default)]
pub struct EdgeGraph {
    graph: UnGraph<NodeLabel, EdgeData>,
    node_map: HashMap<NodeLabel, NodeIndex>,
}

impl EdgeGraph {
    /// Create a new empty graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgeviz_graph::model::EdgeGraph;
    ///
    /// let graph = EdgeGraph::new();
    /// assert_eq!(graph.node_count(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.node_map.clear();
    }

    /// Add a node if it is not present yet, returning its index.
    ///
    /// # Errors
    ///
    /// Returns the petgraph error when the node index space is exhausted.
    pub fn ensure_node(&mut self, label: &str) -> Result<NodeIndex, GraphError> {
        if let Some(index) = self.node_map.get(label) {
            return Ok(*index);
        }
        let index = self.graph.try_add_node(label.to_string())?;
        self.node_map.insert(label.to_string(), index);
        Ok(index)
    }

    /// Add an edge between two labels, creating missing nodes.
    ///
    /// A weighted re-add overwrites the stored weight; an unweighted re-add
    /// keeps it.
    ///
    /// # Errors
    ///
    /// Returns the petgraph error when node or edge index space is exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgeviz_graph::model::EdgeGraph;
    ///
    /// let mut graph = EdgeGraph::new();
    /// graph.add_edge("A", "B", Some(2.0)).unwrap();
    /// graph.add_edge("B", "A", None).unwrap();
    /// assert_eq!(graph.edge_count(), 1);
    /// assert_eq!(graph.weight_between("A", "B"), Some(Some(2.0)));
    /// ```
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        weight: Option<f64>,
    ) -> Result<EdgeIndex, GraphError> {
        let a = self.ensure_node(from)?;
        let b = self.ensure_node(to)?;

        if let Some(existing) = self.graph.find_edge(a, b) {
            if let (Some(data), Some(w)) = (self.graph.edge_weight_mut(existing), weight) {
                data.weight = Some(w);
            }
            return Ok(existing);
        }

        self.graph.try_add_edge(a, b, EdgeData { weight })
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.node_map.contains_key(label)
    }

    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<NodeIndex> {
        self.node_map.get(label).copied()
    }

    #[must_use]
    pub fn label_of(&self, index: NodeIndex) -> Option<&NodeLabel> {
        self.graph.node_weight(index)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Node labels in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeLabel> {
        self.graph.node_weights()
    }

    /// Edges as `(from, to, data)` in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeLabel, &NodeLabel, &EdgeData)> {
        self.graph.edge_references().filter_map(move |edge| {
            let from = self.graph.node_weight(edge.source())?;
            let to = self.graph.node_weight(edge.target())?;
            Some((from, to, edge.weight()))
        })
    }

    /// Stored weight of the edge between two labels.
    ///
    /// Outer `None`: no such edge. Inner `None`: edge typed without a weight.
    #[must_use]
    pub fn weight_between(&self, from: &str, to: &str) -> Option<Option<f64>> {
        let a = self.index_of(from)?;
        let b = self.index_of(to)?;
        let edge = self.graph.find_edge(a, b)?;
        self.graph.edge_weight(edge).map(|data| data.weight)
    }

    /// Borrow the underlying petgraph graph for algorithm calls.
    #[must_use]
    pub const fn inner(&self) -> &UnGraph<NodeLabel, EdgeData> {
        &self.graph
    }
}

/// Weight labels keyed by the ordered pair exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeWeightMap {
    entries: Vec<((NodeLabel, NodeLabel), f64)>,
}

impl EdgeWeightMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Record a weight, replacing an earlier entry for the same ordered pair.
    pub fn insert(&mut self, from: &str, to: &str, weight: f64) {
        match self
            .entries
            .iter_mut()
            .find(|((u, v), _)| u == from && v == to)
        {
            Some(entry) => entry.1 = weight,
            None => self
                .entries
                .push(((from.to_string(), to.to_string()), weight)),
        }
    }

    #[must_use]
    pub fn get(&self, from: &str, to: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|((u, v), _)| u == from && v == to)
            .map(|(_, w)| *w)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.entries
            .iter()
            .map(|((u, v), w)| (u.as_str(), v.as_str(), *w))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
