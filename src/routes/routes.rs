//! Defines routes for the lifecycle console.
//!
//! ## Structure
//! - **Page & log viewer**
//!   - `GET  /`          — control-panel page
//!   - `GET  /get_logs`  — last 20 activity-log lines
//!
//! - **Administration actions** (JSON bodies, uniform `{status, message}`
//!   envelope, one provider call each)
//!   - `POST /create_bucket`
//!   - `POST /upload_file`
//!   - `POST /apply_custom_lifecycle`
//!   - `POST /enable_intelligent_tiering`
//!
//! Each action is resolved here, at the routing boundary, to exactly one
//! admin-service method.

use crate::{
    handlers::{
        action_handlers::{
            apply_custom_lifecycle, create_bucket, enable_intelligent_tiering, upload_file,
        },
        health_handlers::{healthz, readyz},
        log_handlers::{get_logs, index},
    },
    state::AppState,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Build and return the router for the whole HTTP surface.
///
/// The router carries shared state (`AppState`) to all handlers.
pub fn routes() -> Router<AppState> {
    Router::new()
        // page + log viewer
        .route("/", get(index))
        .route("/get_logs", get(get_logs))
        // health endpoints
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // administration actions
        .route("/create_bucket", post(create_bucket))
        .route("/upload_file", post(upload_file))
        .route("/apply_custom_lifecycle", post(apply_custom_lifecycle))
        .route("/enable_intelligent_tiering", post(enable_intelligent_tiering))
}
