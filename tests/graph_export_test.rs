mod common;

use common::*;
use indoc::indoc;
use pretty_assertions::assert_eq;
use stabilitymap::analysis::{analyze, AnalysisOptions, EdgeClassification};
use stabilitymap::io::writers::{CsvWriter, DotConfig, DotWriter};
use stabilitymap::io::OutputWriter;
use stabilitymap::ComponentId;

fn id(name: &str) -> ComponentId {
    ComponentId::from(name)
}

#[test]
fn test_chain_graph_is_fully_compliant() {
    let report = analyze(&chain_universe(), &AnalysisOptions::default());
    let graph = &report.graph;

    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 4);
    for (source, target) in [("B", "A"), ("C", "B"), ("C", "D"), ("D", "B")] {
        assert_eq!(
            graph.classification(&id(source), &id(target)),
            Some(EdgeClassification::Compliant),
            "{source} -> {target}"
        );
    }
    assert!(graph.warning_edges().is_empty());
    assert!(graph.warning_paths(10).is_empty());
    assert!(graph.cycles().is_empty());
}

#[test]
fn test_warning_edges_match_violations() {
    let universe = universe(vec![
        module("core", vec![class("core.Registry", &["plugin.Hook"])]),
        module(
            "plugin",
            vec![class("plugin.Hook", &[]), class("plugin.Loader", &["core.Registry"])],
        ),
        module("app", vec![class("app.Main", &["core.Registry"])]),
    ]);

    let report = analyze(&universe, &AnalysisOptions::default());

    let warnings: Vec<(String, String)> = report
        .graph
        .warning_edges()
        .into_iter()
        .map(|e| (e.source.to_string(), e.target.to_string()))
        .collect();
    let violations: Vec<(String, String)> = report
        .violations
        .iter()
        .map(|v| (v.source.to_string(), v.outside.to_string()))
        .collect();
    assert_eq!(warnings, vec![("core".to_string(), "plugin".to_string())]);
    assert_eq!(warnings, violations);
}

#[test]
fn test_dot_export_of_chain() {
    let report = analyze(&chain_universe(), &AnalysisOptions::default());

    let mut out = Vec::new();
    DotWriter::with_config(
        &mut out,
        DotConfig {
            title: "Chain".into(),
            ..DotConfig::default()
        },
    )
    .write_report(&report)
    .unwrap();

    let expected = indoc! {r#"
        digraph "Chain" {
          labelloc="t";
          label="Chain";
          fontsize="30";
          1 [label="A\nI = 0"];
          2 [label="B\nI = 0.333"];
          3 [label="C\nI = 1"];
          4 [label="D\nI = 0.5"];
          2 -> 1 [label="✓", color="green"];
          3 -> 2 [label="✓", color="green"];
          3 -> 4 [label="✓", color="green"];
          4 -> 2 [label="✓", color="green"];
        }
    "#};
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_csv_export_follows_component_order() {
    let report = analyze(&chain_universe(), &AnalysisOptions::default());

    let mut out = Vec::new();
    CsvWriter::new(&mut out).write_report(&report).unwrap();

    let text = String::from_utf8(out).unwrap();
    let names: Vec<&str> = text
        .lines()
        .map(|line| line.split(',').next().unwrap())
        .collect();
    assert_eq!(names, vec!["A", "B", "C", "D"]);
    assert_eq!(text.lines().next(), Some("A,0.0,1.0,0.0"));
    assert_eq!(text.lines().nth(3), Some("D,0.5,0.0,0.5"));
}

#[test]
fn test_description_vertex_ids_start_at_one() {
    let report = analyze(&chain_universe(), &AnalysisOptions::default());

    let description = report.graph.describe("t", 2);

    let ids: Vec<usize> = description.vertices.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(description.vertices[1].label, "B\nI = 0.33");
}
