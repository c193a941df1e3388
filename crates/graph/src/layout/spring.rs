//! Force-directed layout.
//!
//! Hooke springs along edges, inverse-square repulsion between every node
//! pair, and a weak pull toward the center. Initial positions come from a
//! seeded RNG so the same graph and seed always give the same picture.

use std::collections::HashMap;

use edgeviz_core::LayoutConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{LayoutError, Point, Positions};
use crate::model::EdgeGraph;

/// Distances below this are treated as coincident and produce no force.
const MIN_DISTANCE: f64 = 1e-9;

/// Largest per-step move in the first iteration; shrinks linearly to zero.
const INITIAL_TEMPERATURE: f64 = 0.1;

/// Force vector in 2D space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Force {
    dx: f64,
    dy: f64,
}

impl Force {
    fn add(&mut self, other: Self) {
        self.dx += other.dx;
        self.dy += other.dy;
    }

    fn negate(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    /// Scale down so the magnitude does not exceed `limit`.
    fn capped(self, limit: f64) -> Self {
        let magnitude = self.dx.hypot(self.dy);
        if magnitude <= limit || magnitude < MIN_DISTANCE {
            return self;
        }
        let scale = limit / magnitude;
        Self {
            dx: self.dx * scale,
            dy: self.dy * scale,
        }
    }
}

/// Spring force on `target` from an edge to `source` (Hooke's law).
///
/// Positive displacement (too far apart) pulls `target` toward `source`.
fn spring_force(source: Point, target: Point, config: &LayoutConfig) -> Force {
    let distance = source.distance(target);
    if distance < MIN_DISTANCE {
        return Force::default();
    }
    let magnitude = config.stiffness * (distance - config.rest_length);
    let (dir_x, dir_y) = source.direction_to(target, distance);
    Force {
        dx: -magnitude * dir_x,
        dy: -magnitude * dir_y,
    }
}

/// Repulsion on `target` away from `source`.
fn repulsion_force(source: Point, target: Point, config: &LayoutConfig) -> Force {
    let distance = source.distance(target);
    if distance < MIN_DISTANCE {
        return Force::default();
    }
    let magnitude = config.repulsion / (distance * distance);
    let (dir_x, dir_y) = source.direction_to(target, distance);
    Force {
        dx: magnitude * dir_x,
        dy: magnitude * dir_y,
    }
}

/// Pull toward `center`, linear in distance.
fn gravity_force(position: Point, center: Point, config: &LayoutConfig) -> Force {
    Force {
        dx: (center.x - position.x) * config.gravity,
        dy: (center.y - position.y) * config.gravity,
    }
}

/// Seeded random start positions in the unit square, in node order.
pub(super) fn seeded_positions(graph: &EdgeGraph, seed: u64) -> Vec<(String, Point)> {
    let mut rng = StdRng::seed_from_u64(seed);
    graph
        .nodes()
        .map(|label| {
            let x = rng.gen_range(0.0..1.0);
            let y = rng.gen_range(0.0..1.0);
            (label.clone(), Point::new(x, y))
        })
        .collect()
}

/// Run the simulation for `config.iterations` steps.
///
/// # Errors
///
/// Returns [`LayoutError::NonFinite`] if any coordinate stops being finite.
pub fn spring_layout(graph: &EdgeGraph, config: &LayoutConfig) -> Result<Positions, LayoutError> {
    if graph.is_empty() {
        return Err(LayoutError::EmptyGraph);
    }

    let mut nodes = seeded_positions(graph, config.seed);
    if let [(label, _)] = nodes.as_slice() {
        return Ok(HashMap::from([(label.clone(), Point::new(0.5, 0.5))]));
    }

    let index: HashMap<&str, usize> = graph
        .nodes()
        .enumerate()
        .map(|(i, label)| (label.as_str(), i))
        .collect();
    let edges: Vec<(usize, usize)> = graph
        .edges()
        .filter_map(|(u, v, _)| Some((*index.get(u.as_str())?, *index.get(v.as_str())?)))
        .filter(|(u, v)| u != v)
        .collect();
    let center = Point::new(0.5, 0.5);

    let steps = config.iterations.max(1);
    for step in 0..steps {
        let mut forces = vec![Force::default(); nodes.len()];

        for (i, (_, a)) in nodes.iter().enumerate() {
            for (j, (_, b)) in nodes.iter().enumerate().skip(i.saturating_add(1)) {
                let push = repulsion_force(*a, *b, config);
                if let Some(force) = forces.get_mut(j) {
                    force.add(push);
                }
                if let Some(force) = forces.get_mut(i) {
                    force.add(push.negate());
                }
            }
        }

        for &(u, v) in &edges {
            let (Some((_, a)), Some((_, b))) = (nodes.get(u), nodes.get(v)) else {
                continue;
            };
            let pull = spring_force(*a, *b, config);
            if let Some(force) = forces.get_mut(v) {
                force.add(pull);
            }
            if let Some(force) = forces.get_mut(u) {
                force.add(pull.negate());
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let temperature = INITIAL_TEMPERATURE * (1.0 - step as f64 / steps as f64);

        for ((label, position), force) in nodes.iter_mut().zip(forces) {
            let mut total = force;
            total.add(gravity_force(*position, center, config));
            let step_force = total.capped(temperature);
            let moved = Point::new(position.x + step_force.dx, position.y + step_force.dy);
            if !moved.is_finite() {
                return Err(LayoutError::NonFinite {
                    node: label.clone(),
                });
            }
            *position = moved;
        }
    }

    Ok(nodes.into_iter().collect())
}
