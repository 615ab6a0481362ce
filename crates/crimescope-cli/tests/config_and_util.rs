//! Integration tests for CLI config parsing and path validation.

use crimescope_cli::run::{load_run_config, validate_csv_file, RunConfig};

// ---------------------------------------------------------------------------
// validate_csv_file
// ---------------------------------------------------------------------------

#[test]
fn validate_csv_file_exists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    std::fs::File::create(&path).unwrap();
    assert!(validate_csv_file(path.to_str().unwrap()).is_ok());
}

#[test]
fn validate_uppercase_extension_ok() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.CSV");
    std::fs::File::create(&path).unwrap();
    assert!(validate_csv_file(path.to_str().unwrap()).is_ok());
}

#[test]
fn validate_wrong_extension_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.xlsx");
    std::fs::File::create(&path).unwrap();
    assert!(validate_csv_file(path.to_str().unwrap()).is_err());
}

#[test]
fn validate_nonexistent_file_errors() {
    assert!(validate_csv_file("/nonexistent/path/data.csv").is_err());
}

// ---------------------------------------------------------------------------
// RunConfig defaults & serialization
// ---------------------------------------------------------------------------

#[test]
fn run_config_default_values() {
    let cfg = RunConfig::default();
    assert!(cfg.report);
    assert!(cfg.model.learning_rate > 0.0);
    assert!((cfg.split.test_fraction - 0.2).abs() < 1e-6);
    assert_eq!(cfg.split.seed, 42);
}

#[test]
fn run_config_serializes_to_json() {
    let cfg = RunConfig::default();
    let json = serde_json::to_string_pretty(&cfg).unwrap();
    assert!(json.contains("learning_rate"));
    assert!(json.contains("test_fraction"));
    assert!(json.contains("report"));
}

#[test]
fn run_config_round_trips_json() {
    let cfg = RunConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    let cfg2: RunConfig = serde_json::from_str(&json).unwrap();
    assert!((cfg.model.learning_rate - cfg2.model.learning_rate).abs() < 1e-6);
    assert_eq!(cfg.split.seed, cfg2.split.seed);
    assert_eq!(cfg.report, cfg2.report);
}

#[test]
fn run_config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run_config.json");
    let json = serde_json::to_string_pretty(&RunConfig::default()).unwrap();
    std::fs::write(&path, json).unwrap();

    let loaded = load_run_config(&path).unwrap();
    assert!(loaded.report);
}

#[test]
fn run_config_partial_json_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.json");
    std::fs::write(&path, "{\"report\": false}").unwrap();

    let loaded = load_run_config(&path).unwrap();
    assert!(!loaded.report);
    assert_eq!(loaded.split.seed, 42);
}

#[test]
fn run_config_missing_file_errors() {
    assert!(load_run_config("/nonexistent/config.json").is_err());
}
