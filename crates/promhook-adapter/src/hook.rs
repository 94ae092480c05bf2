//! Hook-notification response and the payload-validator seam.
//!
//! The external transport delivers a NOTIFY call with a JSON statistics
//! body; it expects back a response value carrying the exposition text and
//! a content-type override header. Request authentication and signature
//! checks happen before any of this is reached.

use promhook_core::error::Result;
use promhook_core::stats::payload::{validate_payload, StatsPayload};
use serde::Serialize;

/// Content type the transport is told to serve the body as.
pub const TEXT_PLAIN: &str = "text/plain";

/// Response handed back to the external transport.
#[derive(Debug, Serialize)]
pub struct HookResponse {
    /// HTTP-level status the transport should use.
    pub code: u16,
    /// Exposition text body.
    pub answer: String,
    pub headers: HookHeaders,
}

/// Response headers; `x-set-content-type` overrides the transport default.
#[derive(Debug, Serialize)]
pub struct HookHeaders {
    #[serde(rename = "x-set-content-type")]
    pub set_content_type: String,
}

impl HookResponse {
    /// Successful metrics response: 200, plain text.
    pub fn metrics(answer: String) -> Self {
        Self {
            code: 200,
            answer,
            headers: HookHeaders {
                set_content_type: TEXT_PLAIN.into(),
            },
        }
    }
}

/// Seam for the external validation layer.
///
/// The adapter runs this after ingestion and before encoding; a rejection
/// means no response body is produced at all.
pub trait PayloadValidator: Send + Sync {
    fn validate(&self, payload: &StatsPayload) -> Result<()>;
}

/// Default validator: duration-aggregate invariants only.
#[derive(Debug, Default)]
pub struct SchemaValidator;

impl PayloadValidator for SchemaValidator {
    fn validate(&self, payload: &StatsPayload) -> Result<()> {
        validate_payload(payload)
    }
}
