//! Tests for system spec discovery and loading
use std::fs;

use design_token_validator::config::{Args, Config};
use design_token_validator::SystemConstraintSpec;
use clap::Parser;
use tempfile::TempDir;

const STRICT_SPEC: &str = r#"
required_contrast_pairs = [["textPrimary", "background"]]

[typography]
min_base_font_size = 14.0
max_base_font_size = 20.0
min_scale_ratio = 1.2
max_scale_ratio = 1.3

[spacing]
min_base_unit = 4.0
max_base_unit = 4.0
steps = ["sm", "md", "lg"]
monotonic = true

[contrast.AA]
normal_text = 5.0

[contrast.AAA]
normal_text = 8.0
"#;

fn config_with(spec: Option<&str>, spec_dir: &TempDir) -> Config {
    let mut argv = vec!["token-check".to_string()];
    if let Some(path) = spec {
        argv.push("--spec".to_string());
        argv.push(path.to_string());
    }
    let mut config = Config::from_args(Args::parse_from(argv)).expect("create config");
    config.spec_dirs = vec![spec_dir.path().to_path_buf()];
    config
}

#[test]
fn test_cli_spec_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("strict.toml");
    fs::write(&path, STRICT_SPEC).unwrap();

    let empty = TempDir::new().unwrap();
    let config = config_with(path.to_str(), &empty);
    let spec = SystemConstraintSpec::from_config(&config).expect("load spec");

    assert_eq!(spec.typography.min_base_font_size, 14.0);
    assert_eq!(spec.spacing.steps, vec!["sm", "md", "lg"]);
    assert_eq!(spec.required_contrast_pairs.len(), 1);
    assert!(spec.consistency_issues().is_empty());
}

#[test]
fn test_spec_dir_file_is_discovered() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("system-spec.toml"), STRICT_SPEC).unwrap();

    let config = config_with(None, &dir);
    let spec = SystemConstraintSpec::from_config(&config).expect("load spec");
    assert_eq!(spec.contrast.aa.normal_text, 5.0);
}

#[test]
fn test_falls_back_to_builtin() {
    let empty = TempDir::new().unwrap();
    let config = config_with(None, &empty);
    let spec = SystemConstraintSpec::from_config(&config).expect("builtin spec");
    assert_eq!(spec, SystemConstraintSpec::builtin());
}

#[test]
fn test_missing_cli_spec_is_an_error() {
    let empty = TempDir::new().unwrap();
    let missing = empty.path().join("nope.toml");
    let config = config_with(missing.to_str(), &empty);

    let err = SystemConstraintSpec::from_config(&config).unwrap_err();
    assert!(format!("{:#}", err).contains("nope.toml"));
}

#[test]
fn test_malformed_spec_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[typography]\nmin_base_font_size = \"ten\"\n").unwrap();

    let config = config_with(path.to_str(), &dir);
    assert!(SystemConstraintSpec::from_config(&config).is_err());
}
