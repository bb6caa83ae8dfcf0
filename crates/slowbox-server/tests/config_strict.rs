#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use slowbox_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
  porte: 9090 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("config"));
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
}

#[test]
fn bad_listen_addr_rejected() {
    let bad = r#"
version: 1
server:
  listen: "not-an-addr"
"#;
    config::load_from_str(bad).expect_err("must fail validation");
}

#[test]
fn unsupported_version_rejected() {
    let bad = r#"
version: 2
"#;
    config::load_from_str(bad).expect_err("must fail validation");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let cfg = config::load_or_default("does-not-exist.yaml").expect("defaults must apply");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
}
