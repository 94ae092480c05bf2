#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use promhook_adapter::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
router:
  url: "http://router:3100"
  periodz_ms: 5000 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.error_code().as_str(), "CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
router:
  url: "http://router:3100"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.router.url, "http://router:3100");
    assert_eq!(cfg.router.period_ms, 3000);
    assert_eq!(cfg.adapter.group, "adapters");
    assert_eq!(cfg.cluster.workers, 1);
}

#[test]
fn unsupported_version_rejected() {
    let bad = r#"
version: 2
router:
  url: "http://router:3100"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.error_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn out_of_range_workers_rejected() {
    let bad = r#"
version: 1
router:
  url: "http://router:3100"
cluster:
  workers: 0
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.error_code().as_str(), "CONFIG");
}

#[test]
fn empty_router_url_rejected() {
    let bad = r#"
version: 1
router:
  url: ""
"#;
    assert!(config::load_from_str(bad).is_err());
}
