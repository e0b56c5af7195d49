use super::util::{non_empty, parse_bool};
use super::AppConfig;

#[test]
fn defaults_are_local_and_dry() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.bind_addr, "127.0.0.1:8080");
    assert!(cfg.model_path.is_none());
    assert!(!cfg.mail_enabled);
}

#[test]
fn file_sections_override_defaults() {
    let mut cfg = AppConfig::default();
    cfg.apply_file_str(
        r#"
        [server]
        bind_addr = "0.0.0.0:9000"

        [storage]
        database_path = "/var/lib/claimguard/claims.db"

        [model]
        path = "/etc/claimguard/fraud-model.json"

        [mail]
        gateway_url = "http://mail.internal:8025/send"
        sender = "fraud@example.com"
        enabled = true
        "#,
    )
    .unwrap();

    assert_eq!(cfg.bind_addr, "0.0.0.0:9000");
    assert_eq!(cfg.database_path, "/var/lib/claimguard/claims.db");
    assert_eq!(
        cfg.model_path.as_deref(),
        Some("/etc/claimguard/fraud-model.json")
    );
    assert_eq!(cfg.mail_gateway_url, "http://mail.internal:8025/send");
    assert!(cfg.mail_enabled);
}

#[test]
fn missing_sections_keep_defaults() {
    let mut cfg = AppConfig::default();
    cfg.apply_file_str("[server]\nbind_addr = \"127.0.0.1:7000\"\n")
        .unwrap();
    assert_eq!(cfg.bind_addr, "127.0.0.1:7000");
    assert_eq!(cfg.database_path, AppConfig::default().database_path);
}

#[test]
fn empty_file_values_are_ignored() {
    let mut cfg = AppConfig::default();
    cfg.apply_file_str("[server]\nbind_addr = \"  \"\n").unwrap();
    assert_eq!(cfg.bind_addr, AppConfig::default().bind_addr);
}

#[test]
fn malformed_toml_is_an_error() {
    let mut cfg = AppConfig::default();
    assert!(cfg.apply_file_str("[server\nbind_addr=").is_err());
}

#[test]
fn env_overrides_take_precedence() {
    std::env::set_var("CLAIMGUARD_BIND_ADDR", "127.0.0.1:9999");
    let mut cfg = AppConfig::default();
    cfg.apply_env_overrides();
    std::env::remove_var("CLAIMGUARD_BIND_ADDR");
    assert_eq!(cfg.bind_addr, "127.0.0.1:9999");
}

#[test]
fn bool_parsing_accepts_common_spellings() {
    for raw in ["1", "true", "YES", "Enabled", "on"] {
        assert!(parse_bool(raw), "{}", raw);
    }
    for raw in ["0", "false", "off", "nope", ""] {
        assert!(!parse_bool(raw), "{}", raw);
    }
}

#[test]
fn non_empty_trims_whitespace_only() {
    assert_eq!(non_empty(Some("x".to_string())).as_deref(), Some("x"));
    assert!(non_empty(Some("   ".to_string())).is_none());
    assert!(non_empty(None).is_none());
}
