//! Tests for the Strata configuration types.

use strata_core::config::{ProjectionConfig, ProjectionMode};

#[test]
fn test_default_mode_is_internal_only() {
    let config = ProjectionConfig::default();
    assert_eq!(config.mode, ProjectionMode::InternalOnly);
    assert!(config.pattern.is_none());
    assert!(config.suffix_labels.is_empty());
}

#[test]
fn test_missing_projection_table_falls_back_to_defaults() {
    let config = ProjectionConfig::from_toml("").unwrap();
    assert_eq!(config.mode, ProjectionMode::InternalOnly);
}

#[test]
fn test_parse_slice_pattern_mode() {
    let config = ProjectionConfig::from_toml(
        r#"
        [projection]
        mode = "slice_pattern"
        pattern = "src/(**)/index.ts"
        "#,
    )
    .unwrap();
    assert_eq!(config.mode, ProjectionMode::SlicePattern);
    assert_eq!(config.pattern.as_deref(), Some("src/(**)/index.ts"));
}

#[test]
fn test_parse_suffix_table_preserves_order() {
    let config = ProjectionConfig::from_toml(
        r#"
        [projection]
        mode = "file_suffix"
        suffix_labels = [
            { suffix = "Controller", label = "controllers" },
            { suffix = "Service", label = "services" },
        ]
        "#,
    )
    .unwrap();
    assert_eq!(config.mode, ProjectionMode::FileSuffix);
    let table: Vec<(&str, &str)> = config
        .suffix_labels
        .iter()
        .map(|e| (e.suffix.as_str(), e.label.as_str()))
        .collect();
    assert_eq!(
        table,
        vec![("Controller", "controllers"), ("Service", "services")]
    );
}

#[test]
fn test_unknown_mode_is_rejected() {
    let result = ProjectionConfig::from_toml(
        r#"
        [projection]
        mode = "approximate"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_mode_names_are_stable() {
    assert_eq!(ProjectionMode::KeepAll.name(), "keep_all");
    assert_eq!(ProjectionMode::InternalOnly.name(), "internal_only");
    assert_eq!(ProjectionMode::SlicePattern.name(), "slice_pattern");
    assert_eq!(ProjectionMode::FileSuffix.name(), "file_suffix");
}
