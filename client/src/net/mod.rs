//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the `PortalApi` seam and its browser implementation, `error`
//! the failure taxonomy, and `types` the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
