//! Fallback layouts used when the force-directed one fails.

use std::f64::consts::TAU;

use super::spring::seeded_positions;
use super::{LayoutError, Point, Positions};
use crate::model::EdgeGraph;

/// Nodes evenly spaced on a circle inscribed in the unit square, in
/// insertion order starting at angle zero.
///
/// # Errors
///
/// Returns [`LayoutError::EmptyGraph`] when there is nothing to place.
pub fn circular_layout(graph: &EdgeGraph) -> Result<Positions, LayoutError> {
    let count = graph.node_count();
    if count == 0 {
        return Err(LayoutError::EmptyGraph);
    }

    #[allow(clippy::cast_precision_loss)]
    let step = TAU / count as f64;
    Ok(graph
        .nodes()
        .enumerate()
        .map(|(i, label)| {
            #[allow(clippy::cast_precision_loss)]
            let angle = step * i as f64;
            let point = Point::new(0.5 + 0.5 * angle.cos(), 0.5 + 0.5 * angle.sin());
            (label.clone(), point)
        })
        .collect())
}

/// Uniform positions in the unit square from a seeded RNG. Never fails.
#[must_use]
pub fn random_layout(graph: &EdgeGraph, seed: u64) -> Positions {
    seeded_positions(graph, seed).into_iter().collect()
}
