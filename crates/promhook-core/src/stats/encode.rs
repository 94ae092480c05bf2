//! Prometheus text-exposition encoder.
//!
//! Pure transform: same payload in, byte-identical text out. Two blocks are
//! emitted in fixed order, counts first, then duration aggregates (only when
//! at least one triple carries them).
//!
//! Format notes (kept for compatibility with existing scrapers):
//! - header lines are `#HELP`/`#TYPE` with no space after `#`;
//! - every label set opens with a leading comma (`{,path=...}`);
//! - label values are emitted verbatim, no escaping of `"`, `\`, or newline.

use std::fmt::Write;

use crate::error::Result;
use crate::stats::payload::{parse_payload, StatsPayload};

/// Counts metric name.
pub const REQUESTS_TOTAL: &str = "mfwapi_requests_total";
/// Duration-aggregates metric name.
pub const REQUESTS_DURATION: &str = "mfwapi_requests_duration";

const REQUESTS_TOTAL_HELP: &str = "The total numbers of mfwapi requests";
const REQUESTS_DURATION_HELP: &str = "The duration aggregates of mfwapi requests";

/// Render the payload as Prometheus text-exposition format.
///
/// Never mutates its input. Iteration follows the maps' key order, so the
/// output is deterministic for a given payload. For an extended triple with
/// `counter == 0` the `avg` line is omitted (the mean is undefined); the
/// other three duration lines are still emitted.
pub fn encode(payload: &StatsPayload) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "#HELP {REQUESTS_TOTAL} {REQUESTS_TOTAL_HELP}");
    let _ = writeln!(out, "#TYPE {REQUESTS_TOTAL} counter");
    for (path, stats) in payload {
        for (method, codes) in &stats.methods {
            for (code, entry) in codes {
                let _ = writeln!(
                    out,
                    "{REQUESTS_TOTAL}{{,path=\"{path}\",method=\"{method}\",code=\"{code}\"}} {}",
                    entry.counter()
                );
            }
        }
    }

    let has_durations = payload
        .values()
        .flat_map(|stats| stats.methods.values())
        .flat_map(|codes| codes.values())
        .any(|entry| entry.time().is_some());
    if !has_durations {
        return out;
    }

    let _ = writeln!(out, "#HELP {REQUESTS_DURATION} {REQUESTS_DURATION_HELP}");
    let _ = writeln!(out, "#TYPE {REQUESTS_DURATION} counter");
    for (path, stats) in payload {
        for (method, codes) in &stats.methods {
            for (code, entry) in codes {
                let Some(time) = entry.time() else { continue };
                let mut sample = |kind: &str, value: f64| {
                    let _ = writeln!(
                        out,
                        "{REQUESTS_DURATION}{{,path=\"{path}\",method=\"{method}\",code=\"{code}\",type=\"{kind}\"}} {value}"
                    );
                };
                sample("min", time.min);
                sample("max", time.max);
                sample("total", time.total);
                if let Some(avg) = time.avg(entry.counter()) {
                    sample("avg", avg);
                }
            }
        }
    }

    out
}

/// Parse a raw JSON body and render it.
///
/// All-or-nothing: on any shape violation no text is produced.
pub fn encode_json(raw: &str) -> Result<String> {
    let payload = parse_payload(raw)?;
    Ok(encode(&payload))
}
