//! Top-level facade crate for promhook.
//!
//! Re-exports core types and the adapter library so users can depend on a single crate.

pub mod core {
    pub use promhook_core::*;
}

pub mod adapter {
    pub use promhook_adapter::*;
}
