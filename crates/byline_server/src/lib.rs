//! HTTP surface for the byline article service.
//!
//! # Responsibility
//! - Parse request input, delegate to core services, serialize
//!   responses.
//! - Map the core error taxonomy onto HTTP status codes.
//!
//! # Invariants
//! - Handlers stay thin; business invariants live in `byline_core`.
//! - Storage failures are logged and answered with 500, never
//!   swallowed.

pub mod config;
pub mod services;
pub mod state;
