//! Handlers for the four administration actions.
//!
//! Each handler is the same thin shim: validate the request fields, build
//! the per-request admin service, invoke the one matching action, and
//! forward its envelope with HTTP 200. Validation failures short-circuit
//! as `AppError` (HTTP 400) before any client is constructed.

use crate::{
    errors::AppError,
    models::{envelope::ActionResult, request::ActionRequest},
    state::AppState,
};
use axum::{Json, extract::State};

/// POST `/create_bucket`
pub async fn create_bucket(
    State(state): State<AppState>,
    Json(payload): Json<ActionRequest>,
) -> Result<Json<ActionResult>, AppError> {
    let credentials = payload.credentials()?;
    let admin = state.admin(&credentials);
    Ok(Json(admin.create_bucket(&credentials.region).await))
}

/// POST `/upload_file`
pub async fn upload_file(
    State(state): State<AppState>,
    Json(payload): Json<ActionRequest>,
) -> Result<Json<ActionResult>, AppError> {
    let credentials = payload.credentials()?;
    let key = payload.object_key();
    Ok(Json(state.admin(&credentials).upload_sample(&key).await))
}

/// POST `/apply_custom_lifecycle`
pub async fn apply_custom_lifecycle(
    State(state): State<AppState>,
    Json(payload): Json<ActionRequest>,
) -> Result<Json<ActionResult>, AppError> {
    let credentials = payload.credentials()?;
    let spec = payload.lifecycle_spec()?;
    Ok(Json(state.admin(&credentials).apply_lifecycle(spec).await))
}

/// POST `/enable_intelligent_tiering`
pub async fn enable_intelligent_tiering(
    State(state): State<AppState>,
    Json(payload): Json<ActionRequest>,
) -> Result<Json<ActionResult>, AppError> {
    let credentials = payload.credentials()?;
    Ok(Json(
        state.admin(&credentials).enable_intelligent_tiering().await,
    ))
}
