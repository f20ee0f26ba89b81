// The brand similarity graph: one node per brand, one weighted edge per
// above-threshold pair.

use std::collections::BTreeSet;

use tracing::debug;

use crate::dataset::Dataset;
use crate::moods::similarity::{pairs_above, SimilarityMatrix};

/// A graph node: the brand and the main mood that colors it.
#[derive(Debug, Clone)]
pub struct BrandNode {
    pub name: String,
    pub main_mood: String,
}

/// An undirected edge weighted by cosine similarity. Stored once with
/// `a < b`; the adjacency list carries both directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityEdge {
    pub a: usize,
    pub b: usize,
    pub weight: f64,
}

/// The thresholded similarity network.
///
/// Node ids are dataset record indices, so the graph, the matrix, and the
/// report all speak the same index space. No self-loops, no duplicate
/// edges: only pairs strictly above the cutoff make it in.
#[derive(Debug, Clone)]
pub struct MoodGraph {
    nodes: Vec<BrandNode>,
    edges: Vec<SimilarityEdge>,
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl MoodGraph {
    /// Build the network from a dataset and its similarity matrix.
    pub fn build(dataset: &Dataset, matrix: &SimilarityMatrix, threshold: f64) -> Self {
        let nodes: Vec<BrandNode> = dataset
            .records()
            .iter()
            .map(|record| BrandNode {
                name: record.name.clone(),
                main_mood: record.main_mood.clone(),
            })
            .collect();

        let mut edges = Vec::new();
        let mut adjacency = vec![Vec::new(); nodes.len()];
        for pair in pairs_above(matrix, threshold) {
            edges.push(SimilarityEdge {
                a: pair.a,
                b: pair.b,
                weight: pair.similarity,
            });
            adjacency[pair.a].push((pair.b, pair.similarity));
            adjacency[pair.b].push((pair.a, pair.similarity));
        }

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            threshold,
            "Built similarity graph"
        );
        Self {
            nodes,
            edges,
            adjacency,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> &[BrandNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[SimilarityEdge] {
        &self.edges
    }

    /// Neighbors of a node with the connecting edge weights.
    pub fn neighbors(&self, node: usize) -> &[(usize, f64)] {
        &self.adjacency[node]
    }

    /// Weighted degree: the sum of a node's incident edge weights.
    pub fn strength(&self, node: usize) -> f64 {
        self.adjacency[node].iter().map(|&(_, w)| w).sum()
    }

    /// Sum of all edge weights (each undirected edge counted once).
    pub fn total_edge_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.adjacency[a].iter().any(|&(other, _)| other == b)
    }

    /// Node id for a brand name, if present.
    pub fn find_node(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.name == name)
    }

    /// The distinct main moods carried by the nodes, sorted. This is what
    /// actually appears on the canvas, so the legend filters against it.
    pub fn present_moods(&self) -> BTreeSet<&str> {
        self.nodes.iter().map(|node| node.main_mood.as_str()).collect()
    }
}
