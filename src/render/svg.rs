// SVG rendering of the similarity network.
//
// The image is assembled by hand: edge lines first, then mood-colored
// nodes, bold labels, the title, and a legend of the main moods present.
// Geometry comes from a LayoutStrategy, so rendering itself is pure
// string building plus one filesystem write.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::network::graph::MoodGraph;
use crate::network::layout::Point;
use crate::render::palette::MoodPalette;

/// Canvas geometry and typography for the rendered network.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    pub width: f64,
    pub height: f64,
    /// Blank border inside the canvas; positions scale into the rest.
    pub margin: f64,
    pub node_radius: f64,
    /// Edge stroke width is similarity weight times this factor.
    pub edge_width_scale: f64,
    pub label_size: f64,
    pub title_size: f64,
    pub title: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            width: 1400.0,
            height: 1000.0,
            margin: 80.0,
            node_radius: 15.0,
            edge_width_scale: 3.0,
            label_size: 10.0,
            title_size: 18.0,
            title: "브랜드 무드 유사도 네트워크".to_string(),
        }
    }
}

/// Render the network to an SVG document.
///
/// `positions` must be unit-square coordinates in node order, as produced
/// by a `LayoutStrategy` for this graph. The palette is validated up
/// front, so a missing mood color fails the render before any output.
pub fn render_network(
    graph: &MoodGraph,
    positions: &[Point],
    palette: &MoodPalette,
    style: &RenderStyle,
) -> Result<String> {
    palette.validate(graph)?;
    if positions.len() != graph.node_count() {
        bail!(
            "Layout produced {} positions for {} nodes",
            positions.len(),
            graph.node_count()
        );
    }

    // Map unit-square coordinates into the canvas, inside the margin.
    let span_x = style.width - 2.0 * style.margin;
    let span_y = style.height - 2.0 * style.margin;
    let canvas: Vec<(f64, f64)> = positions
        .iter()
        .map(|p| (style.margin + p.x * span_x, style.margin + p.y * span_y))
        .collect();

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg width="{}" height="{}" viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">"#,
        style.width, style.height, style.width, style.height
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r##"<rect width="{}" height="{}" fill="#ffffff"/>"##,
        style.width, style.height
    ));
    svg.push('\n');

    // Edges underneath the nodes, width scaled by similarity.
    for edge in graph.edges() {
        let (x1, y1) = canvas[edge.a];
        let (x2, y2) = canvas[edge.b];
        svg.push_str(&format!(
            r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="#808080" stroke-width="{:.2}" stroke-opacity="0.6"/>"##,
            x1,
            y1,
            x2,
            y2,
            edge.weight * style.edge_width_scale
        ));
        svg.push('\n');
    }

    // Nodes colored by main mood. validate() ran above, so every main
    // mood has a color; the fallback never shows.
    for (node, &(x, y)) in graph.nodes().iter().zip(&canvas) {
        let color = palette.color_for(&node.main_mood).unwrap_or("#000000");
        svg.push_str(&format!(
            r##"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" fill-opacity="0.8"/>"##,
            x, y, style.node_radius, color
        ));
        svg.push('\n');
    }

    // Brand labels centered on their nodes.
    for (node, &(x, y)) in graph.nodes().iter().zip(&canvas) {
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-family="NanumGothic, sans-serif" font-size="{}" font-weight="bold" text-anchor="middle" dy="0.35em">{}</text>"#,
            x,
            y,
            style.label_size,
            escape_text(&node.name)
        ));
        svg.push('\n');
    }

    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" font-family="NanumGothic, sans-serif" font-size="{}" font-weight="bold" text-anchor="middle">{}</text>"#,
        style.width / 2.0,
        style.margin / 2.0,
        style.title_size,
        escape_text(&style.title)
    ));
    svg.push('\n');

    // Legend in the top-right corner: one swatch per main mood present.
    let legend_x = style.width - style.margin - 150.0;
    for (row, (mood, color)) in palette.legend_entries(graph).iter().enumerate() {
        let y = style.margin + row as f64 * 26.0;
        svg.push_str(&format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="8" fill="{}"/>"#,
            legend_x, y, color
        ));
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-family="NanumGothic, sans-serif" font-size="13" dy="0.35em">{}</text>"#,
            legend_x + 16.0,
            y,
            escape_text(mood)
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Render the network and write it to disk.
pub fn write_network(
    path: &Path,
    graph: &MoodGraph,
    positions: &[Point],
    palette: &MoodPalette,
    style: &RenderStyle,
) -> Result<()> {
    let svg = render_network(graph, positions, palette, style)?;
    fs::write(path, svg)
        .with_context(|| format!("Failed to write network image to {}", path.display()))?;
    info!(path = %path.display(), "Wrote network image");
    Ok(())
}

/// Escape the XML special characters that can appear in labels.
fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
