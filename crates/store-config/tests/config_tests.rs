use store_config::{Config, ConfigError, ConfigManager, FileTokenStore, TokenStore, TOKEN_KEY};
use tempfile::tempdir;

#[test]
fn default_config_points_at_local_backend() {
    let cfg = Config::default();

    assert_eq!(cfg.api_base_url, "http://localhost:8080/api/v1");
    assert_eq!(cfg.currency_symbol, "₽");
    assert!(cfg.check_stock_before_sale);
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut cfg = Config::default();
    cfg.set("api_base_url", "https://store.example.com/api/v1/")
        .expect("set url");
    cfg.set("check_stock_before_sale", "off").expect("set flag");

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.api_base_url, "https://store.example.com/api/v1");
    assert!(!loaded.check_stock_before_sale);
}

#[test]
fn missing_config_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("nested")).expect("manager");

    assert_eq!(manager.load().expect("load"), Config::default());
}

#[test]
fn partial_config_file_fills_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    std::fs::write(manager.config_path(), r#"{"locale":"en-US"}"#).expect("write");

    let loaded = manager.load().expect("load");
    assert_eq!(loaded.locale, "en-US");
    assert_eq!(loaded.currency_symbol, "₽");
}

#[test]
fn rejects_unknown_keys_and_bad_values() {
    let mut cfg = Config::default();

    assert!(matches!(
        cfg.set("colour", "true"),
        Err(ConfigError::UnknownKey(_))
    ));
    assert!(matches!(
        cfg.set("ui_color_enabled", "maybe"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        cfg.set("api_base_url", "ftp://host"),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn file_token_store_round_trips_and_clears() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("session.json");
    let store = FileTokenStore::new(path.clone());

    assert_eq!(store.load().expect("empty load"), None);

    store.save("token-123").expect("save");
    let raw = std::fs::read_to_string(&path).expect("session file");
    assert!(raw.contains(TOKEN_KEY));
    assert_eq!(store.load().expect("load").as_deref(), Some("token-123"));

    store.clear().expect("clear");
    assert_eq!(store.load().expect("load after clear"), None);
}

#[test]
fn clearing_without_token_is_a_no_op() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("session.json");
    let store = FileTokenStore::new(path.clone());

    store.clear().expect("clear");
    assert!(!path.exists());
}
