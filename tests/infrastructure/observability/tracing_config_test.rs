use hushwave::infrastructure::observability::TracingConfig;
use hushwave::presentation::{Environment, LoggingSettings};

#[test]
fn given_default_config_when_created_then_plain_text_for_local() {
    let config = TracingConfig::default();

    assert!(!config.json_format);
    assert_eq!(config.environment, Environment::Local);
    assert!(config.default_filter.contains("hushwave=debug"));
}

#[test]
fn given_logging_settings_when_building_then_copies_filter_and_format() {
    let logging = LoggingSettings {
        level: "warn".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::new(Environment::Prod, &logging);

    assert!(config.json_format);
    assert_eq!(config.default_filter, "warn");
    assert_eq!(config.environment, Environment::Prod);
}
