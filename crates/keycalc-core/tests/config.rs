use keycalc_core::config::CalculatorConfig;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keycalc.json");

    let config = CalculatorConfig {
        history_key: "history".to_string(),
        error_token: "Ошибка".to_string(),
        max_fraction_digits: 5,
        store_path: Some(PathBuf::from("/var/lib/keycalc/prefs.json")),
    };
    config.save(&path).unwrap();

    assert_eq!(CalculatorConfig::load(&path).unwrap(), config);
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = TempDir::new().unwrap();
    let config = CalculatorConfig::load_or_default(dir.path().join("missing.json")).unwrap();
    assert_eq!(config, CalculatorConfig::default());
}

#[test]
fn test_load_invalid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keycalc.json");
    std::fs::write(&path, "{ \"max_fraction_digits\": \"three\" }").unwrap();

    assert!(CalculatorConfig::load(&path).is_err());
    assert!(CalculatorConfig::load_or_default(&path).is_err());
}

#[test]
fn test_number_format_from_config() {
    let config = CalculatorConfig {
        max_fraction_digits: 2,
        ..CalculatorConfig::default()
    };
    assert_eq!(config.number_format().format(1.0 / 3.0), "0.33");
}
