// Moodboard: mood-tag similarity network for fashion brands
//
// This is the library root. Each module corresponds to one stage of the
// analysis pipeline, from the curated brand records to the rendered network.

pub mod config;
pub mod dataset;
pub mod moods;
pub mod network;
pub mod output;
pub mod pipeline;
pub mod render;
