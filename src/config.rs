use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default similarity cutoff for drawing an edge.
pub const DEFAULT_THRESHOLD: f64 = 0.3;
/// Default seed for layout and community detection.
pub const DEFAULT_SEED: u64 = 42;
/// Default output path for the rendered network.
pub const DEFAULT_OUTPUT: &str = "mood_network.svg";

/// Central configuration loaded from environment variables.
///
/// Every field has a CLI flag that overrides it. The .env file is loaded
/// automatically at startup via dotenvy, so a checked-out project can pin
/// its own threshold or seed without touching the command line.
pub struct Config {
    /// Similarity cutoff for drawing an edge (MOODBOARD_THRESHOLD).
    pub threshold: f64,
    /// RNG seed shared by layout and community detection (MOODBOARD_SEED).
    pub seed: u64,
    /// Where the rendered SVG lands (MOODBOARD_OUTPUT).
    pub output: PathBuf,
    /// Optional JSON brand file replacing the built-in catalog
    /// (MOODBOARD_DATA).
    pub data: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables, with defaults for
    /// everything. Unset is fine; set-but-unparseable is an error.
    pub fn load() -> Result<Self> {
        let threshold = match env::var("MOODBOARD_THRESHOLD") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("MOODBOARD_THRESHOLD is not a number: {raw}"))?,
            Err(_) => DEFAULT_THRESHOLD,
        };

        let seed = match env::var("MOODBOARD_SEED") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("MOODBOARD_SEED is not an integer: {raw}"))?,
            Err(_) => DEFAULT_SEED,
        };

        let output = env::var("MOODBOARD_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT));

        let data = env::var("MOODBOARD_DATA").ok().map(PathBuf::from);

        Ok(Self {
            threshold,
            seed,
            output,
            data,
        })
    }
}
