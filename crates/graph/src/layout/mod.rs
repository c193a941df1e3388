//! # Layout calculations
//!
//! Node positions for display only. The force-directed layout runs first;
//! if it fails the circular layout is used, then a seeded random one. All
//! three are deterministic for a fixed seed.

pub mod fallback;
pub mod spring;

use std::collections::HashMap;
use std::fmt;

use edgeviz_core::LayoutConfig;
use thiserror::Error;
use tracing::debug;

use crate::model::{EdgeGraph, NodeLabel};

pub use fallback::{circular_layout, random_layout};
pub use spring::spring_layout;

/// A 2D position in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Unit vector toward `other`, given their precomputed `distance`.
    #[must_use]
    pub fn direction_to(self, other: Self, distance: f64) -> (f64, f64) {
        ((other.x - self.x) / distance, (other.y - self.y) / distance)
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Positions keyed by node label.
pub type Positions = HashMap<NodeLabel, Point>;

/// Layout failures; each one triggers the next fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("cannot lay out an empty graph")]
    EmptyGraph,

    #[error("layout produced a non-finite position for node '{node}'")]
    NonFinite { node: NodeLabel },
}

/// Which layout produced the cached positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutStrategy {
    Spring,
    Circular,
    Random,
}

impl fmt::Display for LayoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spring => "spring",
            Self::Circular => "circular",
            Self::Random => "random",
        };
        f.write_str(name)
    }
}

/// Compute positions for every node, falling back on failure.
#[must_use]
pub fn compute(graph: &EdgeGraph, config: &LayoutConfig) -> (Positions, LayoutStrategy) {
    match spring_layout(graph, config) {
        Ok(positions) => return (positions, LayoutStrategy::Spring),
        Err(e) => debug!(error = %e, "spring layout failed, trying circular"),
    }
    match circular_layout(graph) {
        Ok(positions) => (positions, LayoutStrategy::Circular),
        Err(e) => {
            debug!(error = %e, "circular layout failed, using random");
            (random_layout(graph, config.seed), LayoutStrategy::Random)
        }
    }
}

/// Positions from the previous redraw, reused while the node count is
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct LayoutCache {
    positions: Positions,
    strategy: Option<LayoutStrategy>,
}

impl LayoutCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions for `graph`, recomputed only when the node count changed or
    /// a current label has no cached position.
    pub fn positions_for(&mut self, graph: &EdgeGraph, config: &LayoutConfig) -> &Positions {
        let reusable = self.strategy.is_some()
            && self.positions.len() == graph.node_count()
            && graph.nodes().all(|label| self.positions.contains_key(label));

        if !reusable {
            let (positions, strategy) = compute(graph, config);
            debug!(%strategy, nodes = positions.len(), "layout computed");
            self.positions = positions;
            self.strategy = Some(strategy);
        }
        &self.positions
    }
}
