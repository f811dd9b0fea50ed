use crate::arena::{ArenaConfig, EntryConfig};
use crate::assert_err;
use crate::errors::ConfigError;
use crate::optimizer::{DEFAULT_PATH_THRESHOLD, Hyperparameters, OptimizerKind};

#[test]
fn test_default_config_lists_standard_lineup() {
    let config = ArenaConfig::default();
    assert_eq!(config.start, [0.0, 0.0]);
    assert_eq!(config.path_threshold, DEFAULT_PATH_THRESHOLD);
    let kinds: Vec<_> = config.lineup.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, OptimizerKind::ALL);
    assert!(config.lineup.iter().all(|e| e.enabled));
    assert!(
        config
            .lineup
            .iter()
            .all(|e| e.hyperparameters == Hyperparameters::default())
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_partial_json_fills_defaults() {
    let json = r#"{
        "start": [10.0, -5.0],
        "lineup": [
            { "kind": "gradient_descent" },
            { "kind": "adam", "enabled": false, "hyperparameters": { "learning_rate": 0.1 } }
        ]
    }"#;
    let config = ArenaConfig::from_json_str(json).unwrap();

    assert_eq!(config.start, [10.0, -5.0]);
    assert_eq!(config.path_threshold, DEFAULT_PATH_THRESHOLD);
    assert_eq!(config.lineup[0], EntryConfig::new(OptimizerKind::GradientDescent));
    assert_eq!(config.lineup[1].kind, OptimizerKind::Adam);
    assert!(!config.lineup[1].enabled);
    assert_eq!(
        config.lineup[1].hyperparameters,
        Hyperparameters {
            learning_rate: 0.1,
            ..Hyperparameters::default()
        }
    );
}

#[test]
fn test_empty_json_object_is_default_config() {
    let config = ArenaConfig::from_json_str("{}").unwrap();
    assert_eq!(config, ArenaConfig::default());
}

#[test]
fn test_json_round_trip_keeps_config() {
    let mut config = ArenaConfig::default();
    config.start = [1.5, -2.5];
    config.lineup[2].enabled = false;
    config.lineup[4].hyperparameters = Hyperparameters::new(0.05, 0.8, 0.999);

    let json = config.to_json_string().unwrap();
    assert!(json.contains("\"rms_prop\""));
    assert_eq!(ArenaConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn test_empty_lineup_is_rejected() {
    let result = ArenaConfig::from_json_str(r#"{ "lineup": [] }"#);
    assert_err!(result, ConfigError::EmptyLineup);
}

#[test]
fn test_bad_path_threshold_is_rejected() {
    let result = ArenaConfig::from_json_str(r#"{ "path_threshold": -1.0 }"#);
    assert_err!(result, ConfigError::InvalidPathThreshold(-1.0));

    let config = ArenaConfig {
        path_threshold: f64::NAN,
        ..ArenaConfig::default()
    };
    assert_err!(config.validate(), ConfigError::InvalidPathThreshold(f64::NAN));

    // 0 是合法阈值：每个tick都记录
    let config = ArenaConfig {
        path_threshold: 0.0,
        ..ArenaConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_hyperparameters_are_not_validated() {
    let json = r#"{ "lineup": [ { "kind": "momentum",
        "hyperparameters": { "learning_rate": -3.0, "momentum": 1.5, "decay_rate": -0.2 } } ] }"#;
    let config = ArenaConfig::from_json_str(json).unwrap();
    assert_eq!(
        config.lineup[0].hyperparameters,
        Hyperparameters::new(-3.0, 1.5, -0.2)
    );
}

#[test]
fn test_malformed_json_is_format_error() {
    assert_err!(ArenaConfig::from_json_str("{ start: "), ConfigError::FormatError(_));
    assert_err!(
        ArenaConfig::from_json_str(r#"{ "lineup": [ { "kind": "newton" } ] }"#),
        ConfigError::FormatError(_)
    );
}

#[test]
fn test_missing_file_is_reported() {
    let result = ArenaConfig::from_json_file("definitely/not/here/arena.json");
    assert_err!(result, ConfigError::FileNotFound(path) if path.ends_with("arena.json"));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("only_descent_arena_{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "start": [3.0, 4.0], "path_threshold": 1.0 }"#).unwrap();

    let config = ArenaConfig::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.start, [3.0, 4.0]);
    assert_eq!(config.path_threshold, 1.0);
    assert_eq!(config.lineup.len(), 5);
}
