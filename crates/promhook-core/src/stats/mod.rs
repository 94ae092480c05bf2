//! Statistics model and Prometheus text encoder.
//!
//! Two halves:
//! - `payload`: the typed statistics model. The duck-typed per-code value
//!   (bare count vs `{counter, time}`) is resolved once at ingestion into a
//!   sum type, never re-checked downstream.
//! - `encode`: the pure transform from the typed model to text-exposition
//!   format.
//!
//! Parsing is panic-free: malformed input is reported as `PromHookError`
//! and never yields partial output.

pub mod encode;
pub mod payload;
