//! Tests for layered configuration.

use serial_test::serial;

use crate::config::{ReportFormat, SpanwiseConfig};
use crate::error::Error;
use crate::graph::DEFAULT_MAX_VERTICES;

#[test]
fn test_defaults() {
    let config = SpanwiseConfig::default();
    assert_eq!(config.limits.max_vertices, DEFAULT_MAX_VERTICES);
    assert_eq!(config.report.format, ReportFormat::Text);
    assert!(config.report.list_edges);
    assert!(config.algorithms.prim);
    assert!(config.algorithms.kruskal);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let config = SpanwiseConfig::from_toml_str(
        r#"
        [report]
        format = "json"
        "#,
    )
    .unwrap();
    assert_eq!(config.report.format, ReportFormat::Json);
    assert!(config.report.list_edges);
    assert_eq!(config.limits.max_vertices, DEFAULT_MAX_VERTICES);
}

#[test]
fn test_zero_max_vertices_rejected() {
    let result = SpanwiseConfig::from_toml_str("[limits]\nmax_vertices = 0\n");
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_no_algorithm_rejected() {
    let result = SpanwiseConfig::from_toml_str("[algorithms]\nprim = false\nkruskal = false\n");
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_malformed_toml_rejected() {
    let result = SpanwiseConfig::from_toml_str("[report]\nformat = \"yaml\"\n");
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_toml_round_trip() {
    let mut config = SpanwiseConfig::default();
    config.limits.max_vertices = 64;
    config.report.format = ReportFormat::Json;
    config.algorithms.prim = false;

    let text = config.to_toml().unwrap();
    let restored = SpanwiseConfig::from_toml_str(&text).unwrap();
    assert_eq!(config, restored);
}

#[test]
#[serial]
fn test_load_from_file_then_env_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spanwise.toml");
    std::fs::write(
        &path,
        "[limits]\nmax_vertices = 50\n\n[report]\nlist_edges = false\n",
    )
    .unwrap();

    let config = SpanwiseConfig::load_from(&path).unwrap();
    assert_eq!(config.limits.max_vertices, 50);
    assert!(!config.report.list_edges);

    std::env::set_var("SPANWISE_LIMITS__MAX_VERTICES", "75");
    let config = SpanwiseConfig::load_from(&path);
    std::env::remove_var("SPANWISE_LIMITS__MAX_VERTICES");

    let config = config.unwrap();
    assert_eq!(config.limits.max_vertices, 75);
    assert!(!config.report.list_edges);
}

#[test]
#[serial]
fn test_load_from_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = SpanwiseConfig::load_from(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, SpanwiseConfig::default());
}

#[test]
#[serial]
fn test_load_from_defers_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spanwise.toml");
    std::fs::write(&path, "[algorithms]\nprim = false\nkruskal = false\n").unwrap();

    let mut config = SpanwiseConfig::load_from(&path).unwrap();
    assert!(matches!(config.validate(), Err(Error::Config(_))));

    config.algorithms.prim = true;
    assert!(config.validate().is_ok());
}
