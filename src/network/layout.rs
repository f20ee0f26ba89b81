// Force-directed layout for the similarity network.
//
// Fruchterman-Reingold style simulation: every node pair repels, every
// edge attracts in proportion to its similarity weight, and a cooling
// temperature caps displacement per step. Positions start from a seeded
// RNG and the forces are deterministic, so a fixed seed reproduces the
// exact layout. Output is normalized to the unit square; the renderer
// scales it to the canvas.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::network::graph::MoodGraph;

/// A node position in unit-square coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Strategy seam for layout. Implementations must be deterministic for a
/// fixed graph and seed, and return one position per node in node order.
pub trait LayoutStrategy {
    fn positions(&self, graph: &MoodGraph, seed: u64) -> Vec<Point>;
}

/// Spring embedding with pairwise repulsion and weighted edge attraction.
pub struct SpringLayout {
    /// Preferred node spacing in unit-square coordinates. Larger values
    /// spread the clusters further apart.
    pub optimal_distance: f64,
    /// Simulation steps. The network is small, so convergence is cheap.
    pub iterations: usize,
}

impl Default for SpringLayout {
    fn default() -> Self {
        Self {
            optimal_distance: 0.6,
            iterations: 200,
        }
    }
}

impl LayoutStrategy for SpringLayout {
    fn positions(&self, graph: &MoodGraph, seed: u64) -> Vec<Point> {
        let node_count = graph.node_count();
        if node_count == 0 {
            return Vec::new();
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut positions: Vec<Point> = (0..node_count)
            .map(|_| Point {
                x: rng.gen::<f64>(),
                y: rng.gen::<f64>(),
            })
            .collect();

        let k = self.optimal_distance;
        let initial_temperature = 0.1;

        for step in 0..self.iterations {
            let temperature =
                initial_temperature * (1.0 - step as f64 / self.iterations as f64);
            let mut displacement = vec![Point { x: 0.0, y: 0.0 }; node_count];

            // Repulsion between every pair of nodes.
            for i in 0..node_count {
                for j in (i + 1)..node_count {
                    let dx = positions[i].x - positions[j].x;
                    let dy = positions[i].y - positions[j].y;
                    let distance = (dx * dx + dy * dy).sqrt().max(1e-9);
                    let force = k * k / distance;
                    let (fx, fy) = (dx / distance * force, dy / distance * force);
                    displacement[i].x += fx;
                    displacement[i].y += fy;
                    displacement[j].x -= fx;
                    displacement[j].y -= fy;
                }
            }

            // Attraction along edges, stronger for more similar brands.
            for edge in graph.edges() {
                let dx = positions[edge.a].x - positions[edge.b].x;
                let dy = positions[edge.a].y - positions[edge.b].y;
                let distance = (dx * dx + dy * dy).sqrt().max(1e-9);
                let force = distance * distance / k * edge.weight;
                let (fx, fy) = (dx / distance * force, dy / distance * force);
                displacement[edge.a].x -= fx;
                displacement[edge.a].y -= fy;
                displacement[edge.b].x += fx;
                displacement[edge.b].y += fy;
            }

            // Move each node, capped by the cooling temperature.
            for (position, shift) in positions.iter_mut().zip(&displacement) {
                let length = (shift.x * shift.x + shift.y * shift.y).sqrt().max(1e-9);
                let capped = length.min(temperature);
                position.x += shift.x / length * capped;
                position.y += shift.y / length * capped;
            }
        }

        normalize_to_unit_square(&mut positions);
        debug!(nodes = node_count, seed, "Computed spring layout");
        positions
    }
}

/// Rescale positions so each axis spans [0, 1]. A degenerate axis (every
/// node at the same coordinate) collapses to the center line.
fn normalize_to_unit_square(positions: &mut [Point]) {
    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for position in positions.iter() {
        min_x = min_x.min(position.x);
        max_x = max_x.max(position.x);
        min_y = min_y.min(position.y);
        max_y = max_y.max(position.y);
    }

    let span_x = max_x - min_x;
    let span_y = max_y - min_y;
    for position in positions.iter_mut() {
        position.x = if span_x < 1e-9 {
            0.5
        } else {
            (position.x - min_x) / span_x
        };
        position.y = if span_y < 1e-9 {
            0.5
        } else {
            (position.y - min_y) / span_y
        };
    }
}
