//! Configuration system tests
//!
//! Tests for config paths, YAML loading/saving, sanitization, and CLI overrides.

use sidepanel::cli::CliArgs;
use sidepanel::config::AppConfig;
use sidepanel::config_paths;
use sidepanel::disclosure::DEFAULT_BREAKPOINT_PX;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("sidepanel"));
        assert!(path_str.ends_with("config.yaml"));
    }
}

#[test]
fn test_config_file_is_inside_config_dir() {
    if let Some(config) = config_paths::config_dir() {
        assert!(config_paths::config_file().unwrap().starts_with(&config));
    }
}

// ========================================================================
// App Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.theme, "dark");
    assert_eq!(config.window.width, 800);
    assert_eq!(config.window.height, 600);
    assert_eq!(config.disclosure.panel_id, "sidebar");
    assert_eq!(config.disclosure.breakpoint_px, 768.0);
    assert!(config.page.provide_toggle);
}

#[test]
fn test_config_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let mut config = AppConfig::default();
    config.theme = "light".to_string();
    config.disclosure.breakpoint_px = 600.0;
    config.disclosure.open_class = "is-open".to_string();
    config.page.provide_toggle = false;

    config.save_to(&path).unwrap();
    assert!(path.exists());

    assert_eq!(AppConfig::load_from(&path), config);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_invalid_yaml_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "window: [this is: not valid").unwrap();

    assert_eq!(AppConfig::load_from(&path), AppConfig::default());
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let config = AppConfig::from_yaml("disclosure:\n  panel_id: menu\n").unwrap();
    assert_eq!(config.disclosure.panel_id, "menu");
    assert_eq!(config.disclosure.toggle_id, "sidebar-toggle");
    assert_eq!(config.window.width, 800);
    assert_eq!(config.theme, "dark");
}

#[test]
fn test_invalid_breakpoint_is_sanitized() {
    let config = AppConfig::from_yaml("disclosure:\n  breakpoint_px: -20\n").unwrap();
    assert_eq!(config.disclosure.breakpoint_px, DEFAULT_BREAKPOINT_PX);
}

#[test]
fn test_empty_ids_are_sanitized() {
    let yaml = "disclosure:\n  panel_id: ''\n  toggle_id: ''\n";
    let config = AppConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.disclosure.panel_id, "sidebar");
    assert_eq!(config.disclosure.toggle_id, "sidebar-toggle");
}

#[test]
fn test_wrong_type_is_an_error() {
    assert!(AppConfig::from_yaml("window:\n  width: wide\n").is_err());
}

// ========================================================================
// CLI Overrides
// ========================================================================

#[test]
fn test_cli_overrides_file_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "theme: light\nwindow:\n  width: 1200\n").unwrap();

    let args = CliArgs {
        config: Some(path),
        width: Some(640),
        ..Default::default()
    };
    let base = args.load_config();
    let config = args.into_config(base).unwrap();

    assert_eq!(config.theme, "light");
    assert_eq!(config.window.width, 640);
}

#[test]
fn test_cli_zero_height_is_rejected() {
    let args = CliArgs {
        height: Some(0),
        ..Default::default()
    };
    let err = args.into_config(AppConfig::default()).unwrap_err();
    assert!(err.contains("--height"));
}
