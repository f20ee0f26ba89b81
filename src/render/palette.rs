// Mood color palette: the static mood-to-color map behind the render.

use anyhow::{bail, Result};

use crate::network::graph::MoodGraph;

/// Display colors for every mood in the built-in catalog, in legend order.
/// A brand catalog that introduces a new mood needs an entry here (or a
/// custom palette) before it can be rendered.
const DEFAULT_COLORS: &[(&str, &str)] = &[
    ("클래식", "#e74c3c"),
    ("캐주얼", "#3498db"),
    ("걸리시", "#2ecc71"),
    ("로맨틱", "#f39c12"),
    ("미니멀", "#9b59b6"),
    ("시크", "#e84393"),
    ("스트릿", "#6c5ce7"),
    ("스포티", "#00cec9"),
    ("에스닉", "#fdcb6e"),
    ("워크웨어", "#d35400"),
];

/// Mood label to hex color. Entry order doubles as legend order.
#[derive(Debug, Clone)]
pub struct MoodPalette {
    entries: Vec<(String, String)>,
}

impl Default for MoodPalette {
    fn default() -> Self {
        Self {
            entries: DEFAULT_COLORS
                .iter()
                .map(|&(mood, color)| (mood.to_string(), color.to_string()))
                .collect(),
        }
    }
}

impl MoodPalette {
    /// A palette from custom (mood, color) pairs, in legend order.
    pub fn from_entries(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    pub fn color_for(&self, mood: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(label, _)| label == mood)
            .map(|(_, color)| color.as_str())
    }

    /// Check that every main mood in the graph has a color. Runs before
    /// any drawing so a palette gap is a configuration error, not a
    /// half-rendered image.
    pub fn validate(&self, graph: &MoodGraph) -> Result<()> {
        let missing: Vec<&str> = graph
            .present_moods()
            .into_iter()
            .filter(|mood| self.color_for(mood).is_none())
            .collect();
        if !missing.is_empty() {
            bail!("No palette color for moods: {}", missing.join(", "));
        }
        Ok(())
    }

    /// Legend rows for a graph: palette entries filtered down to the main
    /// moods actually present on the canvas, in palette order. Moods that
    /// only occur as sub tags never make the legend.
    pub fn legend_entries(&self, graph: &MoodGraph) -> Vec<(&str, &str)> {
        let present = graph.present_moods();
        self.entries
            .iter()
            .filter(|(mood, _)| present.contains(mood.as_str()))
            .map(|(mood, color)| (mood.as_str(), color.as_str()))
            .collect()
    }
}
