//! Core data models for the lifecycle console.
//!
//! These types describe the JSON bodies exchanged with the control-panel
//! page: the per-request credential set, the archival policy inputs, and
//! the uniform result envelope every action returns.

pub mod envelope;
pub mod request;
