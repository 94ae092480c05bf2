//! Adapter service object.
//!
//! Explicitly constructed and dependency-injected, with an explicit
//! `start`/`stop` lifecycle. Never a process-wide singleton: tests and the
//! external supervisor build as many instances as they need.

use promhook_core::error::{PromHookError, Result};
use promhook_core::stats::encode::encode;
use promhook_core::stats::payload::parse_payload;

use crate::config::AdapterConfig;
use crate::hook::{HookResponse, PayloadValidator, SchemaValidator};
use crate::register::{route_descriptor, RouteDescriptor};

pub struct AdapterService {
    cfg: AdapterConfig,
    validator: Box<dyn PayloadValidator>,
    started: bool,
}

impl AdapterService {
    /// Build with the default payload validator.
    pub fn new(cfg: AdapterConfig) -> Self {
        Self::with_validator(cfg, Box::new(SchemaValidator))
    }

    /// Build with an injected validator (the external validation layer).
    pub fn with_validator(cfg: AdapterConfig, validator: Box<dyn PayloadValidator>) -> Self {
        Self {
            cfg,
            validator,
            started: false,
        }
    }

    pub fn cfg(&self) -> &AdapterConfig {
        &self.cfg
    }

    /// Registration data for the external router client.
    pub fn route_descriptor(&self) -> RouteDescriptor {
        route_descriptor(&self.cfg)
    }

    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Err(PromHookError::Internal("service already started".into()));
        }
        self.started = true;
        tracing::info!(
            group = %self.cfg.adapter.group,
            self_url = %self.cfg.adapter.self_url,
            "promhook adapter started"
        );
        Ok(())
    }

    /// Idempotent; stopping a stopped service is a no-op.
    pub fn stop(&mut self) {
        if !self.started {
            return;
        }
        self.started = false;
        tracing::info!("promhook adapter stopped");
    }

    /// Handle one hook notification carrying a JSON statistics body.
    ///
    /// Parse, validate (through the injected seam), encode. All-or-nothing:
    /// any failure yields an error and no response body.
    pub fn handle_notify(&self, raw: &str) -> Result<HookResponse> {
        if !self.started {
            return Err(PromHookError::Internal("service not started".into()));
        }

        let payload = parse_payload(raw)?;
        self.validator.validate(&payload)?;

        let answer = encode(&payload);
        tracing::debug!(bytes = answer.len(), "encoded statistics payload");
        Ok(HookResponse::metrics(answer))
    }
}
