// The analysis pipeline: brand records in, similarity network out.
//
// One synchronous pass over the dataset. Vocabulary, vectors, matrix,
// graph, and communities all share the dataset's record order as their
// index space. Rendering and reporting consume the result; nothing in
// here touches the filesystem.

use tracing::info;

use crate::dataset::Dataset;
use crate::moods::similarity::SimilarityMatrix;
use crate::moods::vectorize::vectorize_all;
use crate::moods::vocabulary::Vocabulary;
use crate::network::community::{CommunityStrategy, Partition};
use crate::network::graph::MoodGraph;

/// Tuning knobs for one analysis run.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    /// Similarity cutoff for drawing an edge (strictly greater-than).
    pub threshold: f64,
    /// Seed shared by community detection and layout.
    pub seed: u64,
}

/// Everything downstream consumers need from one run.
pub struct NetworkAnalysis {
    pub vocabulary: Vocabulary,
    pub matrix: SimilarityMatrix,
    pub graph: MoodGraph,
    pub communities: Partition,
}

/// Run the full analysis: vocabulary, weighted vectors, pairwise cosine
/// matrix, thresholded graph, communities. Infallible by construction:
/// unknown moods are skipped during vectorization and an empty dataset
/// flows through as an empty network.
pub fn run(
    dataset: &Dataset,
    options: &AnalysisOptions,
    detector: &dyn CommunityStrategy,
) -> NetworkAnalysis {
    let vocabulary = Vocabulary::from_dataset(dataset);
    info!(
        brands = dataset.len(),
        moods = vocabulary.len(),
        "Extracted mood vocabulary"
    );

    let vectors = vectorize_all(dataset, &vocabulary);
    let matrix = SimilarityMatrix::compute(&vectors);

    let graph = MoodGraph::build(dataset, &matrix, options.threshold);
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        threshold = options.threshold,
        "Built similarity network"
    );

    let communities = detector.detect(&graph, options.seed);
    info!(
        communities = communities.community_count(),
        seed = options.seed,
        "Detected mood communities"
    );

    NetworkAnalysis {
        vocabulary,
        matrix,
        graph,
        communities,
    }
}
