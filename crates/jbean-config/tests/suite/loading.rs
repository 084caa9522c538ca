use jbean_config::{ConfigError, JbeanConfig, CONFIG_FILE_NAME};
use pretty_assertions::assert_eq;

#[test]
fn discover_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = JbeanConfig::discover(dir.path()).unwrap();
    assert_eq!(config, JbeanConfig::default());
    assert_eq!(JbeanConfig::discover_path(dir.path()), None);
}

#[test]
fn discover_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[introspection]\nreserved_names = [\"owner\"]\n",
    )
    .unwrap();

    assert_eq!(
        JbeanConfig::discover_path(dir.path()),
        Some(dir.path().join(CONFIG_FILE_NAME))
    );
    let config = JbeanConfig::discover(dir.path()).unwrap();
    assert_eq!(config.introspection.reserved_names, vec!["owner".to_string()]);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn missing_explicit_path_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = JbeanConfig::load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "{err:?}");
    assert!(err.to_string().contains("missing.toml"), "{err}");
}

#[test]
fn malformed_toml_is_reported_without_snippet() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "[logging]\njson = \"maybe\"\n").unwrap();

    let err = JbeanConfig::load_from_path(&path).unwrap_err();
    match err {
        ConfigError::Toml(message) => assert!(!message.contains("json ="), "{message}"),
        other => panic!("unexpected error: {other:?}"),
    }
}
