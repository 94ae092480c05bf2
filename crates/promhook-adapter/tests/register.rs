//! Route-descriptor field fidelity (names the router expects).

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use promhook_adapter::{config, register};

#[test]
fn descriptor_matches_router_contract() {
    let cfg = config::load_from_str(
        r#"
version: 1
adapter:
  group: "billing"
  self_path: "metrics"
  self_url: "http://10.0.0.5:8100"
  secure_key: "k1"
router:
  url: "http://router:3100"
  secure_key: "k2"
"#,
    )
    .unwrap();

    let v = serde_json::to_value(register::route_descriptor(&cfg)).unwrap();

    assert_eq!(v["type"], "hook");
    assert_eq!(v["hook"][0]["phase"], "after");
    assert_eq!(v["hook"][0]["type"], "adapter");
    assert_eq!(v["hook"][0]["group"], "billing");
    assert_eq!(v["conditions"]["headers"][0]["name"], "user-agent");
    assert_eq!(v["conditions"]["headers"][0]["value"], "Prometheus");
    assert_eq!(v["conditions"]["headers"][0]["isRegex"], true);
    assert_eq!(v["conditions"]["methods"][0], "GET");
    assert_eq!(v["path"][0], "metrics");
    assert_eq!(v["url"], "http://10.0.0.5:8100");
    assert_eq!(v["secureKey"], "k1");
    assert_eq!(v["online"], true);
}
