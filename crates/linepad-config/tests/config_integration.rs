use linepad_config::AppConfig;

#[test]
fn test_load_creates_default_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linepad.json");
    assert!(!path.exists());

    let config = AppConfig::load_or_create(&path);
    assert!(path.exists());
    assert_eq!(config, AppConfig::default());

    // File should contain valid JSON
    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert!(parsed.is_object());
    assert_eq!(parsed["show_status"], serde_json::Value::Bool(true));
}

#[test]
fn test_load_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested").join("deeper");
    let path = nested.join("linepad.json");

    AppConfig::load_or_create(&path);
    assert!(path.exists());
}

#[test]
fn test_load_existing_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linepad.json");
    let json = r#"{
        "max_history_depth": 50,
        "show_status": false,
        "prompt": "lp> "
    }"#;
    std::fs::write(&path, json).unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config.max_history_depth, Some(50));
    assert!(!config.show_status);
    assert_eq!(config.prompt, "lp> ");
}

#[test]
fn test_broken_json_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linepad.json");
    std::fs::write(&path, "{ this is not valid json }}}").unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config, AppConfig::default());

    // Broken file is left untouched
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "{ this is not valid json }}}");
}

#[test]
fn test_strict_load_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linepad.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let err = AppConfig::load(&path).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse config"));
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linepad.json");
    std::fs::write(&path, r#"{"max_history_depth": 0}"#).unwrap();

    let config = AppConfig::load_or_create(&path);
    // Sanitized on load
    assert_eq!(config.max_history_depth, Some(1));
    assert!(config.show_status);
    assert_eq!(config.prompt, "> ");
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linepad.json");
    let config = AppConfig {
        max_history_depth: Some(7),
        show_status: false,
        prompt: "? ".to_string(),
    };
    config.save(&path).unwrap();

    let loaded = AppConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.history_config().max_depth, Some(7));
}
