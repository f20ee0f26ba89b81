// Colored terminal output for the similarity report.
//
// This module handles all terminal-specific formatting. The line
// builders are pure functions so the report text is testable; the
// display functions just print them with color.

use colored::Colorize;

use crate::moods::similarity::{pairs_above, SimilarityMatrix};
use crate::network::community::{modularity, Partition};
use crate::network::graph::MoodGraph;

/// One line per above-threshold pair, in row-major order: the first
/// brand by matrix index, then every later partner. Scores print with
/// two decimals.
pub fn pair_lines(names: &[&str], matrix: &SimilarityMatrix, threshold: f64) -> Vec<String> {
    pairs_above(matrix, threshold)
        .iter()
        .map(|pair| format!("{} ↔ {}: {:.2}", names[pair.a], names[pair.b], pair.similarity))
        .collect()
}

/// One line per community: its member brands in node order.
pub fn community_lines(graph: &MoodGraph, partition: &Partition) -> Vec<String> {
    partition
        .groups()
        .iter()
        .enumerate()
        .map(|(i, members)| {
            let brands: Vec<&str> = members
                .iter()
                .map(|&node| graph.nodes()[node].name.as_str())
                .collect();
            format!("{}. {}", i + 1, brands.join(", "))
        })
        .collect()
}

/// Print every brand pair above the similarity threshold.
pub fn display_similarity_report(names: &[&str], matrix: &SimilarityMatrix, threshold: f64) {
    let lines = pair_lines(names, matrix, threshold);

    println!(
        "\n{}",
        format!("=== 유사도 {threshold} 이상 브랜드 쌍 ({}) ===", lines.len()).bold()
    );
    println!();

    if lines.is_empty() {
        println!("  No pairs above the threshold. Try a lower --threshold.");
        return;
    }
    for line in lines {
        println!("  {line}");
    }
}

/// Print the node/edge counts of the thresholded network.
pub fn display_network_summary(graph: &MoodGraph, threshold: f64) {
    println!();
    println!(
        "  {} {} brands, {} connections above {}",
        "Network:".dimmed(),
        graph.node_count(),
        graph.edge_count(),
        threshold
    );
}

/// Print the detected communities with their member brands.
pub fn display_communities(graph: &MoodGraph, partition: &Partition) {
    println!(
        "\n{}",
        format!("=== 무드 커뮤니티 ({}) ===", partition.community_count()).bold()
    );
    println!();

    if graph.node_count() == 0 {
        println!("  No brands to group.");
        return;
    }
    for line in community_lines(graph, partition) {
        println!("  {line}");
    }
    println!();
    println!(
        "  {} {:.3}",
        "Modularity:".dimmed(),
        modularity(graph, partition)
    );
}
