use kvdns_domain::{Config, InvalidAddressPolicy};
use std::time::Duration;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.dns_port, 53);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.backend.path_prefix, "/dns");
    assert_eq!(config.backend.fetch_timeout(), Duration::from_secs(3));
    assert_eq!(config.backend.invalid_address, InvalidAddressPolicy::Unspecified);
    assert!(config.backend.endpoints.is_empty());
    assert!(!config.backend.uses_etcd());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_from_toml() {
    let toml_str = r#"
        [server]
        dns_port = 5353

        [backend]
        path_prefix = "/skydns"
        zones = ["example.com", "example.org."]
        fallthrough = ["example.org"]
        endpoints = ["http://127.0.0.1:2379"]
        fetch_timeout_ms = 1500
        invalid_address = "skip"

        [logging]
        level = "debug"
    "#;

    let config = Config::from_toml(toml_str).unwrap();

    assert_eq!(config.server.dns_port, 5353);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.backend.path_prefix, "/skydns");
    assert_eq!(config.backend.fetch_timeout(), Duration::from_millis(1500));
    assert_eq!(config.backend.invalid_address, InvalidAddressPolicy::Skip);
    assert!(config.backend.uses_etcd());
    assert_eq!(config.backend.zone_set().matches("www.example.org"), Some("example.org"));
    assert_eq!(config.backend.fallthrough_set().matches("a.example.org"), Some("example.org"));
    assert_eq!(config.backend.fallthrough_set().matches("a.example.com"), None);
    assert_eq!(config.logging.level, "debug");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_without_zones_serves_root() {
    let config = Config::default();

    assert_eq!(config.backend.zone_set().matches("anything.internal"), Some(""));
}

#[test]
fn test_key_mapper_uses_configured_prefix() {
    let config = Config::from_toml("[backend]\npath_prefix = \"/coredns\"\n").unwrap();
    let key = config
        .backend
        .key_mapper()
        .build_key("a.example.com", kvdns_domain::RecordType::A.into())
        .unwrap();

    assert_eq!(key.as_str(), "/coredns/com/example/a/TYPE_A");
}

#[test]
fn test_validate_rejects_zero_port_and_timeout() {
    let mut config = Config::default();
    config.server.dns_port = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.backend.fetch_timeout_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_non_http_endpoint() {
    let mut config = Config::default();
    config.backend.endpoints = vec!["127.0.0.1:2379".to_string()];

    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let result = Config::from_toml("[backend\npath_prefix = 1");

    assert!(matches!(result, Err(kvdns_domain::ConfigError::Parse(_))));
}
