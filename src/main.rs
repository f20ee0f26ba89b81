use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::info;

use moodboard::config::Config;
use moodboard::dataset::Dataset;
use moodboard::network::community::LouvainCommunities;
use moodboard::network::layout::{LayoutStrategy, SpringLayout};
use moodboard::output::terminal;
use moodboard::pipeline::{self, AnalysisOptions};
use moodboard::render::palette::MoodPalette;
use moodboard::render::svg::{write_network, RenderStyle};

/// Moodboard: mood-tag similarity network for fashion brands.
///
/// Encodes each brand's curated mood tags as a weighted vector, connects
/// brands whose cosine similarity clears a threshold, groups the result
/// into communities, renders the network as an SVG, and prints every
/// above-threshold pair.
#[derive(Parser)]
#[command(name = "moodboard", version, about)]
struct Cli {
    /// Similarity cutoff for drawing an edge (strictly greater-than)
    #[arg(long)]
    threshold: Option<f64>,

    /// Seed for the layout and community detection RNG
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the rendered network image
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON brand file to analyze instead of the built-in catalog
    #[arg(long)]
    data: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("moodboard=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    // CLI flags win over environment configuration.
    let threshold = cli.threshold.unwrap_or(config.threshold);
    let seed = cli.seed.unwrap_or(config.seed);
    let output = cli.output.unwrap_or(config.output);
    let data = cli.data.or(config.data);

    let dataset = match &data {
        Some(path) => {
            info!(path = %path.display(), "Loading brand records");
            Dataset::from_path(path)?
        }
        None => Dataset::builtin(),
    };

    println!(
        "Analyzing {} brands (threshold > {threshold}, seed {seed})...",
        dataset.len()
    );

    let options = AnalysisOptions { threshold, seed };
    let analysis = pipeline::run(&dataset, &options, &LouvainCommunities::default());

    let names = dataset.names();
    terminal::display_similarity_report(&names, &analysis.matrix, threshold);
    terminal::display_network_summary(&analysis.graph, threshold);
    terminal::display_communities(&analysis.graph, &analysis.communities);

    let positions = SpringLayout::default().positions(&analysis.graph, seed);
    write_network(
        &output,
        &analysis.graph,
        &positions,
        &MoodPalette::default(),
        &RenderStyle::default(),
    )?;

    println!(
        "\n{}",
        format!("Network image saved to: {}", output.display()).bold()
    );

    Ok(())
}
