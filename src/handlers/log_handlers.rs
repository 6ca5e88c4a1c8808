//! The control-panel page and the activity-log viewer.

use crate::{
    errors::AppError,
    services::activity_log::NOT_FOUND_SENTINEL,
    state::AppState,
};
use axum::{Json, extract::State, response::Html};
use serde::Serialize;

#[derive(Serialize)]
pub struct LogsResponse {
    pub logs: String,
}

/// `GET /` — the control panel, embedded at compile time.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// `GET /get_logs` — the last 20 activity-log lines, oldest first, or the
/// fixed sentinel when the file does not exist.
pub async fn get_logs(State(state): State<AppState>) -> Result<Json<LogsResponse>, AppError> {
    let logs = state
        .activity_log
        .tail()
        .await?
        .unwrap_or_else(|| NOT_FOUND_SENTINEL.to_string());
    Ok(Json(LogsResponse { logs }))
}
