use std::time::Duration;

use hushwave::presentation::{Environment, Settings, StorageProviderSetting};

#[test]
fn given_defaults_when_inspected_then_match_documented_values() {
    let settings = Settings::default();

    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.upload.max_upload_bytes(), 10 * 1024 * 1024);
    assert_eq!(settings.storage.provider, StorageProviderSetting::Memory);
    assert_eq!(settings.storage.ttl(), Some(Duration::from_secs(3600)));
    assert_eq!(settings.storage.max_entries, 256);
    assert_eq!(settings.denoise.fft_size, 2048);
    assert!(settings.validate().is_ok());
}

#[test]
fn given_zero_ttl_when_reading_then_results_never_expire() {
    let mut settings = Settings::default();
    settings.storage.ttl_seconds = 0;

    assert_eq!(settings.storage.ttl(), None);
}

#[test]
fn given_default_server_when_building_address_then_binds_all_interfaces() {
    let addr = Settings::default().server.socket_addr().unwrap();

    assert_eq!(addr.to_string(), "0.0.0.0:5000");
}

#[test]
fn given_invalid_host_when_building_address_then_returns_error() {
    let mut settings = Settings::default();
    settings.server.host = "not a host".to_string();

    assert!(settings.server.socket_addr().is_err());
}

#[test]
fn given_zero_upload_limit_when_validating_then_rejected() {
    let mut settings = Settings::default();
    settings.upload.max_file_size_mb = 0;

    assert!(settings.validate().is_err());
}

#[test]
fn given_local_provider_without_path_when_validating_then_rejected() {
    let mut settings = Settings::default();
    settings.storage.provider = StorageProviderSetting::Local;
    settings.storage.local_path = String::new();

    assert!(settings.validate().is_err());
}

#[test]
fn given_ttl_without_sweep_interval_when_validating_then_rejected() {
    let mut settings = Settings::default();
    settings.storage.sweep_interval_seconds = 0;

    assert!(settings.validate().is_err());
}

#[test]
fn given_config_files_when_loading_then_environment_overlay_wins() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("base.toml"),
        "[server]\nport = 8080\n\n[upload]\nmax_file_size_mb = 25\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("test.toml"),
        "[server]\nport = 9090\n\n[storage]\nprovider = \"local\"\n",
    )
    .unwrap();

    let settings =
        Settings::load_from(dir.path().to_str().unwrap(), Environment::Test).unwrap();

    assert_eq!(settings.server.port, 9090);
    assert_eq!(settings.upload.max_file_size_mb, 25);
    assert_eq!(settings.storage.provider, StorageProviderSetting::Local);
    assert_eq!(settings.storage.local_path, "uploads");
    assert_eq!(settings.denoise.n_std_threshold, 1.5);
}

#[test]
fn given_missing_config_dir_when_loading_then_defaults_apply() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("nope");

    let settings = Settings::load_from(missing.to_str().unwrap(), Environment::Local).unwrap();

    assert_eq!(settings.server.port, 5000);
}

#[test]
fn given_invalid_overlay_when_loading_then_validation_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("base.toml"), "[server]\nport = 0\n").unwrap();

    let result = Settings::load_from(dir.path().to_str().unwrap(), Environment::Local);

    assert!(result.is_err());
}
