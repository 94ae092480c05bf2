//! promhook core: statistics payload model, Prometheus text encoder, and
//! error types.
//!
//! This crate holds the one piece of real behavior in the adapter: turning an
//! accumulated request-statistics payload into Prometheus text-exposition
//! format. It intentionally carries no transport or runtime dependencies so
//! it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `PromHookError`/`Result` so a caller
//! never crashes on a malformed statistics payload.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod stats;

/// Shared result type.
pub use error::{PromHookError, Result};
