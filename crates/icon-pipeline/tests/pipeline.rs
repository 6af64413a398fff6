//! End-to-end pipeline runs over temporary directories.

use std::fs;
use std::path::Path;

use icon_pipeline::pipeline::MANIFEST_FILE;
use icon_pipeline::{run_build, run_normalize, BuildConfig, PipelineError};
use tempfile::TempDir;

const ADD_RAW: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<!-- Generator: Adobe Illustrator 24.0.0 -->
<svg version="1.1" id="Layer_1" xmlns="http://www.w3.org/2000/svg" x="0px" y="0px" fill="#000" xml:space="preserve">
  <path fill="#000" d="M19 11H13V5H11V11H5V13H11V19H13V13H19V11Z"/>
  <g id="Info"></g>
</svg>
"##;

const TROPHY_RAW: &str = r#"<svg viewBox="0 0 24 24">
  <path d="M5 3H19V5H5V3Z"/>
  <path d="M12 6L13 8L15 8.5L13 10L12 12L11 10L9 8.5L11 8L12 6Z"/>
</svg>
"#;

const BADGE_RAW: &str = r##"<svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
  <defs><path id="base" d="M12 2L22 22H2L12 2Z"/></defs>
  <use xlink:href="#base"/>
</svg>
"##;

fn workspace(assets: &[(&str, &str)]) -> (TempDir, BuildConfig) {
    let root = TempDir::new().expect("temp workspace");
    let config = BuildConfig {
        input_dir: root.path().join("svg"),
        normalized_dir: root.path().join("svg-normalized"),
        components_dir: root.path().join("icons"),
    };
    fs::create_dir_all(&config.input_dir).expect("input dir");
    for (name, contents) in assets {
        fs::write(config.input_dir.join(name), contents).expect("asset");
    }
    (root, config)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("generated file")
}

#[test]
fn full_build_generates_components_and_artifacts() {
    let (_root, config) = workspace(&[
        ("filled-action-add.svg", ADD_RAW),
        ("filled-content-trophystar.svg", TROPHY_RAW),
    ]);

    let summary = run_build(&config).expect("build succeeds");
    assert_eq!(summary.generated, 2);
    assert!(summary.failures.is_empty());

    let normalized = read(&config.normalized_dir.join("filled-action-add.svg"));
    assert!(normalized.contains(r#"viewBox="0 0 24 24""#));
    assert!(!normalized.contains("fill="));

    let component = read(&config.components_dir.join("filled_action_add.rs"));
    assert!(component.contains("pub const FILLED_ACTION_ADD: IconDef"));
    assert!(component.contains("do not edit manually"));

    let trophy = read(&config.components_dir.join("filled_content_trophystar.rs"));
    assert!(trophy.contains("<g><path"));

    let mapping = read(&config.components_dir.join("mapping.rs"));
    assert!(mapping.contains("\"filled-action-add\",\n    \"filled-content-trophystar\","));

    let categories = read(&config.components_dir.join("categories.rs"));
    assert!(categories.contains("(\"filled-action-add\", \"action\"),"));

    let manifest = read(&config.components_dir.join(MANIFEST_FILE));
    assert!(manifest.contains("\"generated\": 2"));
}

#[test]
fn rebuild_is_byte_identical() {
    let (_root, config) = workspace(&[("filled-action-add.svg", ADD_RAW)]);
    run_build(&config).expect("first build");
    let first = read(&config.components_dir.join("mapping.rs"));
    run_build(&config).expect("second build");
    assert_eq!(first, read(&config.components_dir.join("mapping.rs")));
}

#[test]
fn malformed_asset_is_skipped_not_fatal() {
    let (_root, config) = workspace(&[
        ("filled-action-add.svg", ADD_RAW),
        ("broken.svg", "<svg><path</svg>"),
    ]);

    let summary = run_build(&config).expect("build continues");
    assert_eq!(summary.generated, 1);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].file, "broken.svg");

    let mapping = read(&config.components_dir.join("mapping.rs"));
    assert!(!mapping.contains("broken"));
}

#[test]
fn internal_reference_fragments_stay_valid_source() {
    let (_root, config) = workspace(&[("filled-misc-badge.svg", BADGE_RAW)]);

    let summary = run_build(&config).expect("build succeeds");
    assert_eq!(summary.generated, 1);

    let component = read(&config.components_dir.join("filled_misc_badge.rs"));
    assert!(component.contains(r###"fragment: r##"<g><defs>"###));
    assert!(component.contains(r###""#base"/></g>"##,"###));
}

#[test]
fn duplicate_keys_fail_before_writing_artifacts() {
    let (_root, config) = workspace(&[
        ("A_x.svg", r#"<svg viewBox="0 0 24 24"><path d="M0 0"/></svg>"#),
        ("a-x.svg", r#"<svg viewBox="0 0 24 24"><path d="M1 1"/></svg>"#),
    ]);

    let err = run_build(&config).expect_err("duplicate key");
    assert!(matches!(
        err,
        PipelineError::DuplicateKey { ref key, .. } if key == "a-x"
    ));
    assert!(!config.normalized_dir.join("a-x.svg").exists());
    assert!(!config.components_dir.join("mapping.rs").exists());
    assert!(!config.components_dir.join("mod.rs").exists());

    let err = run_normalize(&config).expect_err("duplicate key");
    assert!(matches!(err, PipelineError::DuplicateKey { .. }));
    assert!(!config.normalized_dir.join("a-x.svg").exists());
}

#[test]
fn empty_input_is_fatal() {
    let (_root, config) = workspace(&[]);
    assert!(matches!(
        run_build(&config),
        Err(PipelineError::EmptyInput(_))
    ));
    assert!(matches!(
        run_normalize(&config),
        Err(PipelineError::EmptyInput(_))
    ));
}

#[test]
fn normalize_only_clears_previous_output() {
    let (_root, config) = workspace(&[("logo.svg", r#"<svg><circle cx="12" cy="12" r="10"/></svg>"#)]);
    fs::create_dir_all(&config.normalized_dir).expect("normalized dir");
    fs::write(config.normalized_dir.join("stale.svg"), "<svg/>").expect("stale file");

    let summary = run_normalize(&config).expect("normalize succeeds");
    assert_eq!(summary.generated, 1);
    assert!(!config.normalized_dir.join("stale.svg").exists());
    assert!(config.normalized_dir.join("logo.svg").exists());
    assert!(!config.components_dir.exists());
}
