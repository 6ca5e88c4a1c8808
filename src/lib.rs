//! lifecycle-console: a browser-served control panel for S3 bucket
//! administration — bucket creation, a sample upload, a tiered archival
//! policy, and an intelligent-tiering preset — with a flat activity log.
//!
//! The library target exists so integration tests can assemble the real
//! router; the binary in `main.rs` is the only other consumer.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
