//! Networking modules for the two outbound HTTP exchanges.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema of the chat and lead endpoints, `api`
//! defines the `WidgetApi` seam and its browser implementation.

pub mod api;
pub mod types;
