// Dashboard rendering properties

use std::fs;

use ai4disco::core::{demo_clusters, GenomeUpload, PageState};
use ai4disco::render::{render_page, table, ScatterChart, Theme};

fn accepted_upload(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> GenomeUpload {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    GenomeUpload::accept(&path).unwrap()
}

fn status_free(page: &str) -> String {
    page.lines()
        .filter(|line| !line.contains("role=\"status\""))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_table_always_has_four_rows() {
    let dir = tempfile::tempdir().unwrap();
    let states = [
        PageState::new(),
        PageState::with_upload(Some(accepted_upload(&dir, "a.fasta", b">x\nAC\n"))),
        PageState::with_upload(Some(accepted_upload(&dir, "b.gbk", b"LOCUS x"))),
    ];

    for state in &states {
        let page = render_page(state, &demo_clusters(), Theme::Classic);
        let rows: Vec<&str> = page.lines().filter(|l| l.starts_with("<tr><td>")).collect();
        assert_eq!(rows.len(), 4);
        for (row, id) in rows.iter().zip(["Cluster 1", "Cluster 2", "Cluster 3", "Cluster 4"]) {
            assert!(row.starts_with(&format!("<tr><td>{}</td>", id)));
        }
    }
}

#[test]
fn test_scatter_points_match_scores() {
    let clusters = demo_clusters();
    let chart = ScatterChart::from_clusters(&clusters);

    assert_eq!(chart.points.len(), clusters.len());
    for (point, cluster) in chart.points.iter().zip(&clusters) {
        assert_eq!(point.label, cluster.id);
        assert!((point.x - cluster.novelty).abs() < 1e-9);
        assert!((point.y - cluster.drug_likeness).abs() < 1e-9);
    }
}

#[test]
fn test_axes_fixed_to_unit_range() {
    let svg = ScatterChart::from_clusters(&demo_clusters()).to_svg(Theme::Styled);
    assert!(svg.contains(r#"data-x-min="0" data-x-max="1" data-y-min="0" data-y-max="1""#));
    assert!(svg.contains(">0.0</text>"));
    assert!(svg.contains(">1.0</text>"));
}

#[test]
fn test_upload_only_adds_status_messages() {
    let dir = tempfile::tempdir().unwrap();
    let upload = accepted_upload(&dir, "genome.gbk", b"garbage that is never parsed");

    for theme in [Theme::Classic, Theme::Styled] {
        let without = render_page(&PageState::new(), &demo_clusters(), theme);
        let with = render_page(&PageState::with_upload(Some(upload.clone())), &demo_clusters(), theme);

        assert_ne!(without, with);
        assert_eq!(with.matches("role=\"status\"").count(), 2);
        assert_eq!(status_free(&without), status_free(&with));
    }
}

#[test]
fn test_sequential_renders_are_identical() {
    let first = render_page(&PageState::new(), &demo_clusters(), Theme::Classic);
    let second = render_page(&PageState::new(), &demo_clusters(), Theme::Classic);
    assert_eq!(first, second);
    assert_eq!(table::to_html(&demo_clusters()), table::to_html(&demo_clusters()));
}
