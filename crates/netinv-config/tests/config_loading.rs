// Provider-stack tests: file, environment and defaults layered through figment.
#![allow(clippy::unwrap_used)]

use std::path::Path;
use std::time::Duration;

use figment::Jail;
use pretty_assertions::assert_eq;

use netinv_config::{Config, ConfigError, LogFormat, load_config, save_config};

const SAMPLE: &str = r#"
[server]
host = "0.0.0.0"
port = 9000
cors_origins = ["http://localhost:5173"]

[logging]
level = "debug"
format = "json"

[inventory]
sample_devices = true

[[inventory.devices]]
name = "Edge-01"
ip_address = "10.1.0.1"
device_type = "router"
status = "online"
"#;

#[test]
fn file_values_override_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("netinv.toml", SAMPLE)?;

        let cfg = load_config(Some(Path::new("netinv.toml"))).map_err(|e| e.to_string())?;
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.request_timeout_secs, 30);
        assert_eq!(cfg.logging.format, LogFormat::Json);

        let api = cfg.api_config();
        assert_eq!(api.socket_addr(), "0.0.0.0:9000");
        assert_eq!(api.request_timeout, Duration::from_secs(30));
        assert_eq!(api.cors_origins, vec!["http://localhost:5173".to_owned()]);

        let seeds = cfg.seed_devices().map_err(|e| e.to_string())?;
        assert_eq!(seeds.len(), 4);
        assert_eq!(seeds[3].name, "Edge-01");
        Ok(())
    });
}

#[test]
fn environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("netinv.toml", SAMPLE)?;
        jail.set_env("NETINV_SERVER__PORT", "9100");
        jail.set_env("NETINV_LOGGING__LEVEL", "warn");

        let cfg = load_config(Some(Path::new("netinv.toml"))).map_err(|e| e.to_string())?;
        assert_eq!(cfg.server.port, 9100);
        assert_eq!(cfg.logging.level, "warn");
        assert_eq!(cfg.server.host, "0.0.0.0");
        Ok(())
    });
}

#[test]
fn explicit_missing_file_is_an_error() {
    let err = load_config(Some(Path::new("/definitely/not/here/netinv.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Missing { .. }));
}

#[test]
fn wrongly_typed_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("bad.toml", "[server]\nport = \"eighty\"\n")?;
        let err = load_config(Some(Path::new("bad.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

#[test]
fn zero_timeout_from_file_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file("zero.toml", "[server]\nrequest_timeout_secs = 0\n")?;
        let err = load_config(Some(Path::new("zero.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
        Ok(())
    });
}

#[test]
fn saved_config_loads_back() {
    Jail::expect_with(|jail| {
        let path = jail.directory().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.server.port = 8123;
        cfg.inventory.sample_devices = true;
        save_config(&cfg, &path).map_err(|e| e.to_string())?;

        let loaded = load_config(Some(&path)).map_err(|e| e.to_string())?;
        assert_eq!(loaded, cfg);
        Ok(())
    });
}
