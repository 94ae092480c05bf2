use promhook_core::error::{PromHookError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterConfig {
    pub version: u32,

    #[serde(default)]
    pub adapter: AdapterSection,

    pub router: RouterSection,

    #[serde(default)]
    pub cluster: ClusterSection,
}

impl AdapterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PromHookError::UnsupportedVersion);
        }

        self.adapter.validate()?;
        self.router.validate()?;
        self.cluster.validate()?;

        Ok(())
    }
}

/// What this adapter registers as, and where it can be reached.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterSection {
    /// Service group the hook is scoped to.
    #[serde(default = "default_group")]
    pub group: String,

    /// Path the adapter is exposed at.
    #[serde(default = "default_self_path")]
    pub self_path: String,

    /// URL the router calls back with hook notifications.
    #[serde(default = "default_self_url")]
    pub self_url: String,

    /// Schema identifier handed to the external validator.
    #[serde(default = "default_schema")]
    pub schema: String,

    /// Process secure key (consumed by the external validation layer).
    #[serde(default)]
    pub secure_key: String,
}

impl Default for AdapterSection {
    fn default() -> Self {
        Self {
            group: default_group(),
            self_path: default_self_path(),
            self_url: default_self_url(),
            schema: default_schema(),
            secure_key: String::new(),
        }
    }
}

impl AdapterSection {
    pub fn validate(&self) -> Result<()> {
        if self.self_path.is_empty() {
            return Err(PromHookError::Config(
                "adapter.self_path must not be empty".into(),
            ));
        }
        if self.self_url.is_empty() {
            return Err(PromHookError::Config(
                "adapter.self_url must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_group() -> String {
    "adapters".into()
}
fn default_self_path() -> String {
    "metrics".into()
}
fn default_self_url() -> String {
    "http://127.0.0.1:8100".into()
}
fn default_schema() -> String {
    "metrics.json".into()
}

/// The external router this adapter registers against.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouterSection {
    pub url: String,

    /// Shared secret for the registration client.
    #[serde(default)]
    pub secure_key: String,

    /// Registration refresh period.
    #[serde(default = "default_period_ms")]
    pub period_ms: u64,
}

impl RouterSection {
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(PromHookError::Config("router.url must not be empty".into()));
        }
        if !(1000..=600000).contains(&self.period_ms) {
            return Err(PromHookError::Config(
                "router.period_ms must be between 1000 and 600000".into(),
            ));
        }
        Ok(())
    }
}

fn default_period_ms() -> u64 {
    3000
}

/// Process settings consumed by the external worker supervisor.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClusterSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_workers")]
    pub workers: u32,

    #[serde(default = "default_pid_file")]
    pub pid_file: String,
}

impl Default for ClusterSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            workers: default_workers(),
            pid_file: default_pid_file(),
        }
    }
}

impl ClusterSection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.is_empty() {
            return Err(PromHookError::Config(
                "cluster.listen must not be empty".into(),
            ));
        }
        if !(1..=64).contains(&self.workers) {
            return Err(PromHookError::Config(
                "cluster.workers must be between 1 and 64".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8100".into()
}
fn default_workers() -> u32 {
    1
}
fn default_pid_file() -> String {
    "/var/run/promhook.pid".into()
}
