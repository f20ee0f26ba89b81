// Community detection over the similarity network.
//
// Louvain-style greedy modularity optimization: repeated local-move
// sweeps (each node joins the neighbor community with the best gain)
// followed by aggregation of communities into super-nodes, until neither
// pass improves anything. Node visit order is shuffled with a seeded RNG
// and tie-breaks iterate communities in id order, so a fixed seed always
// reproduces the same partition.

use std::collections::{BTreeMap, HashMap};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::network::graph::MoodGraph;

/// An assignment of every node to exactly one community.
///
/// Community ids are compact (0..count) and numbered by first appearance
/// in node order.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub assignments: Vec<usize>,
}

impl Partition {
    /// Every node alone in its own community.
    pub fn singletons(node_count: usize) -> Self {
        Self {
            assignments: (0..node_count).collect(),
        }
    }

    pub fn community_count(&self) -> usize {
        self.assignments.iter().copied().max().map_or(0, |max| max + 1)
    }

    /// Node ids grouped by community, nodes in ascending order within each.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.community_count()];
        for (node, &community) in self.assignments.iter().enumerate() {
            groups[community].push(node);
        }
        groups
    }
}

/// Strategy seam for community detection. Implementations must be
/// deterministic for a fixed graph and seed.
pub trait CommunityStrategy {
    fn detect(&self, graph: &MoodGraph, seed: u64) -> Partition;
}

/// Louvain-style greedy modularity optimization.
pub struct LouvainCommunities {
    /// Minimum gain for a move to count as an improvement. Keeps the
    /// sweep from oscillating on floating-point noise.
    pub min_gain: f64,
}

impl Default for LouvainCommunities {
    fn default() -> Self {
        Self { min_gain: 1e-9 }
    }
}

impl CommunityStrategy for LouvainCommunities {
    fn detect(&self, graph: &MoodGraph, seed: u64) -> Partition {
        let node_count = graph.node_count();
        if node_count == 0 {
            return Partition {
                assignments: Vec::new(),
            };
        }
        let m2 = 2.0 * graph.total_edge_weight();
        if m2 <= 0.0 {
            // No edges means modularity has nothing to optimize.
            return Partition::singletons(node_count);
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut adjacency: Vec<Vec<(usize, f64)>> = (0..node_count)
            .map(|node| graph.neighbors(node).to_vec())
            .collect();
        let mut self_loops = vec![0.0; node_count];
        // Original node -> community, folded through every level so far.
        let mut membership: Vec<usize> = (0..node_count).collect();

        loop {
            let (community, improved) =
                local_moves(&adjacency, &self_loops, m2, self.min_gain, &mut rng);
            let (compacted, count) = compact_labels(&community);
            for slot in membership.iter_mut() {
                *slot = compacted[*slot];
            }
            if !improved || count == adjacency.len() {
                break;
            }
            let (next_adjacency, next_self_loops) =
                aggregate(&adjacency, &self_loops, &compacted, count);
            adjacency = next_adjacency;
            self_loops = next_self_loops;
        }

        let (assignments, count) = compact_labels(&membership);
        debug!(communities = count, "Community detection converged");
        Partition { assignments }
    }
}

/// One level of local moves. Returns the community of each node in the
/// working graph and whether any node moved at all.
fn local_moves(
    adjacency: &[Vec<(usize, f64)>],
    self_loops: &[f64],
    m2: f64,
    min_gain: f64,
    rng: &mut StdRng,
) -> (Vec<usize>, bool) {
    let node_count = adjacency.len();
    // Weighted degree; a self-loop counts twice, as in the modularity sum.
    let strength: Vec<f64> = (0..node_count)
        .map(|node| {
            2.0 * self_loops[node] + adjacency[node].iter().map(|&(_, w)| w).sum::<f64>()
        })
        .collect();

    let mut community: Vec<usize> = (0..node_count).collect();
    let mut sigma_tot = strength.clone();
    let mut order: Vec<usize> = (0..node_count).collect();
    let mut improved = false;

    loop {
        order.shuffle(rng);
        let mut moved = false;

        for &node in &order {
            let current = community[node];

            // Edge weight from this node into each neighboring community.
            // BTreeMap keeps candidate iteration deterministic.
            let mut links: BTreeMap<usize, f64> = BTreeMap::new();
            links.insert(current, 0.0);
            for &(neighbor, weight) in &adjacency[node] {
                *links.entry(community[neighbor]).or_insert(0.0) += weight;
            }

            // Lift the node out of its community before weighing targets.
            sigma_tot[current] -= strength[node];

            let mut best = current;
            let mut best_gain = links[&current] - sigma_tot[current] * strength[node] / m2;
            for (&candidate, &weight_in) in &links {
                if candidate == current {
                    continue;
                }
                let gain = weight_in - sigma_tot[candidate] * strength[node] / m2;
                if gain > best_gain + min_gain {
                    best = candidate;
                    best_gain = gain;
                }
            }

            sigma_tot[best] += strength[node];
            if best != current {
                community[node] = best;
                moved = true;
                improved = true;
            }
        }

        if !moved {
            break;
        }
    }

    (community, improved)
}

/// Renumber arbitrary community labels to 0..count by first appearance.
fn compact_labels(community: &[usize]) -> (Vec<usize>, usize) {
    let mut relabel: HashMap<usize, usize> = HashMap::new();
    let mut compacted = Vec::with_capacity(community.len());
    for &label in community {
        let next = relabel.len();
        compacted.push(*relabel.entry(label).or_insert(next));
    }
    let count = relabel.len();
    (compacted, count)
}

/// Collapse each community into a super-node. Intra-community weight
/// becomes a self-loop; cross-community weights sum into single edges.
fn aggregate(
    adjacency: &[Vec<(usize, f64)>],
    self_loops: &[f64],
    assignment: &[usize],
    community_count: usize,
) -> (Vec<Vec<(usize, f64)>>, Vec<f64>) {
    let mut next_self_loops = vec![0.0; community_count];
    let mut cross: BTreeMap<(usize, usize), f64> = BTreeMap::new();

    for (node, &home) in assignment.iter().enumerate() {
        next_self_loops[home] += self_loops[node];
        for &(other, weight) in &adjacency[node] {
            if other < node {
                continue; // each undirected edge shows up in both lists
            }
            let there = assignment[other];
            if home == there {
                next_self_loops[home] += weight;
            } else {
                let key = (home.min(there), home.max(there));
                *cross.entry(key).or_insert(0.0) += weight;
            }
        }
    }

    let mut next_adjacency = vec![Vec::new(); community_count];
    for (&(a, b), &weight) in &cross {
        next_adjacency[a].push((b, weight));
        next_adjacency[b].push((a, weight));
    }
    (next_adjacency, next_self_loops)
}

/// Weighted modularity of a partition over the graph:
/// Q = sum over communities of (internal weight / m) - (degree / 2m)^2.
pub fn modularity(graph: &MoodGraph, partition: &Partition) -> f64 {
    let m = graph.total_edge_weight();
    if m <= 0.0 {
        return 0.0;
    }
    let count = partition.community_count();
    let mut internal = vec![0.0; count];
    let mut degree = vec![0.0; count];

    for edge in graph.edges() {
        if partition.assignments[edge.a] == partition.assignments[edge.b] {
            internal[partition.assignments[edge.a]] += edge.weight;
        }
    }
    for node in 0..graph.node_count() {
        degree[partition.assignments[node]] += graph.strength(node);
    }

    (0..count)
        .map(|c| internal[c] / m - (degree[c] / (2.0 * m)).powi(2))
        .sum()
}
