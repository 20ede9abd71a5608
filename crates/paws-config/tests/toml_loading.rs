//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and cwd manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use paws_config::PawsConfig;
use paws_core::enums::UnknownIdPolicy;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
host = "0.0.0.0"
port = 8080
max_upload_bytes = 1024

[admin]
unknown_id = "reject"

[store]
currency_symbol = "€"
"#,
        )?;

        let config: PawsConfig = Figment::from(Serialized::defaults(PawsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.server.max_upload_bytes, 1024);
        assert_eq!(config.admin.unknown_id, UnknownIdPolicy::Reject);
        assert_eq!(config.store.currency_symbol, "€");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
port = 9000
"#,
        )?;

        let config: PawsConfig = Figment::from(Serialized::defaults(PawsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.admin.unknown_id, UnknownIdPolicy::Ignore);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".paws")?;
        jail.create_file(
            ".paws/config.toml",
            r#"
[admin]
unknown_id = "reject"
"#,
        )?;

        let config = PawsConfig::load().expect("config loads");
        assert_eq!(config.admin.unknown_id, UnknownIdPolicy::Reject);
        Ok(())
    });
}

#[test]
fn unknown_policy_value_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".paws")?;
        jail.create_file(
            ".paws/config.toml",
            r#"
[admin]
unknown_id = "shrug"
"#,
        )?;

        assert!(PawsConfig::load().is_err());
        Ok(())
    });
}
