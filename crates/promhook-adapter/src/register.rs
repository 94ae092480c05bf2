//! Route-registration descriptor.
//!
//! Configuration data handed to the external router-registration client at
//! startup: receive "after"-phase hook notifications for GET requests whose
//! user-agent matches `Prometheus`, scoped to the configured group. The
//! client, its refresh loop, and heartbeating live outside this crate.

use serde::Serialize;

use crate::config::AdapterConfig;

#[derive(Debug, Serialize)]
pub struct RouteDescriptor {
    #[serde(rename = "type")]
    pub route_type: &'static str,
    pub hook: Vec<HookBinding>,
    pub conditions: Conditions,
    pub path: Vec<String>,
    pub url: String,
    #[serde(rename = "secureKey")]
    pub secure_key: String,
    pub online: bool,
}

#[derive(Debug, Serialize)]
pub struct HookBinding {
    pub phase: &'static str,
    #[serde(rename = "type")]
    pub binding_type: &'static str,
    pub group: String,
}

#[derive(Debug, Serialize)]
pub struct Conditions {
    pub headers: Vec<HeaderCondition>,
    pub methods: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct HeaderCondition {
    pub name: &'static str,
    pub value: &'static str,
    #[serde(rename = "isRegex")]
    pub is_regex: bool,
}

/// Build the descriptor for the configured adapter.
pub fn route_descriptor(cfg: &AdapterConfig) -> RouteDescriptor {
    RouteDescriptor {
        route_type: "hook",
        hook: vec![HookBinding {
            phase: "after",
            binding_type: "adapter",
            group: cfg.adapter.group.clone(),
        }],
        conditions: Conditions {
            headers: vec![HeaderCondition {
                name: "user-agent",
                value: "Prometheus",
                is_regex: true,
            }],
            methods: vec!["GET"],
        },
        path: vec![cfg.adapter.self_path.clone()],
        url: cfg.adapter.self_url.clone(),
        secure_key: cfg.adapter.secure_key.clone(),
        online: true,
    }
}
