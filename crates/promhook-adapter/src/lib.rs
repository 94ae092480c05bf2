//! promhook adapter library entry.
//!
//! This crate wires the configuration surface, the hook-notification
//! handler, and the route-registration descriptor around the core encoder.
//! Everything here is data and seams for the external service layer:
//! transport, worker supervision, signature validation, and the actual
//! router-registration client stay outside.

pub mod config;
pub mod hook;
pub mod register;
pub mod service;
