//! Accumulated request-statistics payload (JSON).
//!
//! The producer keys samples by route path, then HTTP method, then status
//! code. Per-code values come in two shapes and both must be accepted:
//! a bare count (legacy producers) or `{counter, time}` with duration
//! aggregates. `BTreeMap` keys give the encoder a stable iteration order,
//! so the same payload always renders to byte-identical text.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{PromHookError, Result};

/// Route path -> per-path statistics.
pub type StatsPayload = BTreeMap<String, PathStats>;

/// Statistics for one route path.
#[derive(Debug, Deserialize)]
pub struct PathStats {
    /// HTTP method -> per-method statistics. Required; a path entry without
    /// it violates the structural contract.
    pub methods: BTreeMap<String, MethodStats>,
}

/// Status code -> per-code statistics. Codes are opaque strings.
pub type MethodStats = BTreeMap<String, CodeStats>;

/// Per-code statistics, resolved from JSON once at ingestion.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CodeStats {
    /// Extended shape: `{counter, time}` with duration aggregates.
    Extended {
        /// Number of observed requests.
        counter: u64,
        /// Duration aggregates over those requests.
        time: TimeStats,
    },
    /// Legacy shape: a bare request count.
    Legacy(u64),
}

impl CodeStats {
    /// Request count, regardless of shape.
    pub fn counter(&self) -> u64 {
        match self {
            CodeStats::Extended { counter, .. } => *counter,
            CodeStats::Legacy(count) => *count,
        }
    }

    /// Duration aggregates, if the producer supplied them.
    pub fn time(&self) -> Option<&TimeStats> {
        match self {
            CodeStats::Extended { time, .. } => Some(time),
            CodeStats::Legacy(_) => None,
        }
    }
}

/// Duration aggregates in the producer's unit (e.g. milliseconds).
#[derive(Debug, Deserialize)]
pub struct TimeStats {
    /// Shortest observed duration.
    pub min: f64,
    /// Longest observed duration.
    pub max: f64,
    /// Sum of all observed durations.
    pub total: f64,
}

impl TimeStats {
    /// Mean duration, derived at read time. Undefined for zero observations.
    pub fn avg(&self, counter: u64) -> Option<f64> {
        if counter == 0 {
            return None;
        }
        Some(self.total / counter as f64)
    }
}

/// Resolve a raw JSON body into the typed payload.
///
/// Any shape violation (top level not an object-of-objects, a path entry
/// missing `methods`, a non-numeric or negative counter) is reported as
/// `InvalidPayload` and nothing is produced.
pub fn parse_payload(raw: &str) -> Result<StatsPayload> {
    serde_json::from_str(raw).map_err(|e| PromHookError::InvalidPayload(e.to_string()))
}

/// Check the duration-aggregate invariants across the payload.
///
/// For every extended triple: `min <= max`, and `total >= max` whenever at
/// least one request was observed. Shape errors are already impossible here;
/// this catches producers that accumulated inconsistently.
pub fn validate_payload(payload: &StatsPayload) -> Result<()> {
    for (path, stats) in payload {
        for (method, codes) in &stats.methods {
            for (code, entry) in codes {
                let Some(time) = entry.time() else { continue };
                if time.min > time.max {
                    return Err(PromHookError::Validation(format!(
                        "time.min > time.max for {path} {method} {code}"
                    )));
                }
                if entry.counter() >= 1 && time.total < time.max {
                    return Err(PromHookError::Validation(format!(
                        "time.total < time.max for {path} {method} {code}"
                    )));
                }
            }
        }
    }
    Ok(())
}
