// End-to-end tests for the analysis pipeline and its outputs.
//
// Each test runs the real pipeline (no mocks; the dataset is in-memory
// and rendering writes to a temp directory) and checks the contracts a
// user sees: the report lines, the legend, and the SVG on disk.

use std::fs;

use moodboard::dataset::{BrandRecord, Dataset};
use moodboard::network::community::LouvainCommunities;
use moodboard::network::layout::{LayoutStrategy, SpringLayout};
use moodboard::output::terminal::{community_lines, pair_lines};
use moodboard::pipeline::{self, AnalysisOptions};
use moodboard::render::palette::MoodPalette;
use moodboard::render::svg::{render_network, write_network, RenderStyle};

fn analyze(dataset: &Dataset, threshold: f64) -> pipeline::NetworkAnalysis {
    pipeline::run(
        dataset,
        &AnalysisOptions { threshold, seed: 42 },
        &LouvainCommunities::default(),
    )
}

fn record(name: &str, main: &str, sub1: &str, sub2: &str) -> BrandRecord {
    BrandRecord {
        name: name.to_string(),
        main_mood: main.to_string(),
        sub_mood_1: sub1.to_string(),
        sub_mood_2: sub2.to_string(),
    }
}

// ============================================================
// Report: above-threshold pairs
// ============================================================

#[test]
fn report_includes_the_sporty_pair() {
    let dataset = Dataset::builtin();
    let analysis = analyze(&dataset, 0.3);
    let lines = pair_lines(&dataset.names(), &analysis.matrix, 0.3);
    assert!(lines.contains(&"발리안트 ↔ 디터민드: 0.96".to_string()));
}

#[test]
fn report_shows_identical_tuples_as_a_perfect_match() {
    let dataset = Dataset::builtin();
    let analysis = analyze(&dataset, 0.3);
    let lines = pair_lines(&dataset.names(), &analysis.matrix, 0.3);
    assert!(lines.contains(&"니즈르 ↔ 준준스페이스: 1.00".to_string()));
}

#[test]
fn report_omits_brands_with_nothing_in_common() {
    let dataset = Dataset::builtin();
    let analysis = analyze(&dataset, 0.3);
    let lines = pair_lines(&dataset.names(), &analysis.matrix, 0.3);
    assert!(!lines
        .iter()
        .any(|line| line.contains("스토리요가") && line.contains("던드롬")));
}

#[test]
fn report_follows_catalog_order() {
    let dataset = Dataset::builtin();
    let analysis = analyze(&dataset, 0.3);
    let lines = pair_lines(&dataset.names(), &analysis.matrix, 0.3);

    // 발리안트 precedes 디터민드 in the catalog, so the pair prints
    // with 발리안트 on the left.
    assert!(!lines
        .iter()
        .any(|line| line.starts_with("디터민드 ↔ 발리안트")));
}

// ============================================================
// Degenerate datasets
// ============================================================

#[test]
fn unique_moods_make_an_edgeless_network() {
    let dataset = Dataset::from_records(vec![
        record("가", "시크", "", ""),
        record("나", "캐주얼", "", ""),
        record("다", "로맨틱", "", ""),
    ])
    .unwrap();
    let analysis = analyze(&dataset, 0.3);

    assert_eq!(analysis.graph.edge_count(), 0);
    assert!(pair_lines(&dataset.names(), &analysis.matrix, 0.3).is_empty());
    // With no edges everyone stays in their own community.
    assert_eq!(analysis.communities.community_count(), 3);
    assert_eq!(community_lines(&analysis.graph, &analysis.communities).len(), 3);
}

#[test]
fn empty_dataset_flows_through_to_an_empty_image() {
    let dataset = Dataset::from_records(Vec::new()).unwrap();
    let analysis = analyze(&dataset, 0.3);
    let positions = SpringLayout::default().positions(&analysis.graph, 42);

    let svg = render_network(
        &analysis.graph,
        &positions,
        &MoodPalette::default(),
        &RenderStyle::default(),
    )
    .unwrap();
    assert!(svg.contains("</svg>"));
    assert_eq!(svg.matches("<line").count(), 0);
}

#[test]
fn near_perfect_threshold_keeps_only_the_identical_pair() {
    let dataset = Dataset::builtin();
    let analysis = analyze(&dataset, 0.99);
    assert_eq!(analysis.graph.edge_count(), 1);

    let twins = analysis.graph.edges()[0];
    let names = dataset.names();
    assert_eq!(names[twins.a], "니즈르");
    assert_eq!(names[twins.b], "준준스페이스");
}

// ============================================================
// Rendering: legend and the file on disk
// ============================================================

#[test]
fn legend_covers_exactly_the_main_moods_present() {
    let dataset = Dataset::builtin();
    let analysis = analyze(&dataset, 0.3);
    let palette = MoodPalette::default();
    let legend = palette.legend_entries(&analysis.graph);

    let moods: Vec<&str> = legend.iter().map(|&(mood, _)| mood).collect();
    assert_eq!(
        moods,
        vec!["클래식", "캐주얼", "걸리시", "로맨틱", "미니멀", "시크", "스트릿", "스포티"]
    );
}

#[test]
fn network_image_lands_on_disk() {
    let dataset = Dataset::builtin();
    let analysis = analyze(&dataset, 0.3);
    let positions = SpringLayout::default().positions(&analysis.graph, 42);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("network.svg");
    write_network(
        &path,
        &analysis.graph,
        &positions,
        &MoodPalette::default(),
        &RenderStyle::default(),
    )
    .unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<svg"));
    assert!(written.contains("발리안트"));
    assert!(written.contains("브랜드 무드 유사도 네트워크"));
}

#[test]
fn rendering_fails_fast_on_a_palette_gap() {
    let dataset = Dataset::from_records(vec![record("가", "빈티지", "", "")]).unwrap();
    let analysis = analyze(&dataset, 0.3);
    let positions = SpringLayout::default().positions(&analysis.graph, 42);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("network.svg");
    let result = write_network(
        &path,
        &analysis.graph,
        &positions,
        &MoodPalette::default(),
        &RenderStyle::default(),
    );
    assert!(result.is_err());
    assert!(!path.exists());
}

// ============================================================
// External data files
// ============================================================

#[test]
fn external_json_replaces_the_builtin_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("brands.json");
    fs::write(
        &path,
        r#"[
            {"name": "가", "main_mood": "시크", "sub_mood_1": "캐주얼"},
            {"name": "나", "main_mood": "시크", "sub_mood_1": "캐주얼", "sub_mood_2": "미니멀"}
        ]"#,
    )
    .unwrap();

    let dataset = Dataset::from_path(&path).unwrap();
    assert_eq!(dataset.len(), 2);

    let analysis = analyze(&dataset, 0.3);
    assert_eq!(analysis.graph.edge_count(), 1);
    let lines = pair_lines(&dataset.names(), &analysis.matrix, 0.3);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("가 ↔ 나: 0.9"));
}

#[test]
fn malformed_json_is_a_readable_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json ]").unwrap();

    let error = Dataset::from_path(&path).unwrap_err();
    assert!(error.to_string().contains("broken.json"));
}
