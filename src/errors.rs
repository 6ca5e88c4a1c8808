//! Error taxonomy for the HTTP surface.
//!
//! Provider rejections never appear here: each action catches them itself
//! and reports through the normal `ActionResult` envelope with HTTP 200.
//! `AppError` covers only faults local to this service — missing or
//! malformed request fields, and I/O problems around the activity log.

use crate::models::envelope::ActionResult;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required fields (Credentials, Region, or Bucket Name).")]
    MissingCredentials,

    #[error("Missing lifecycle policy days.")]
    MissingPolicyDays,

    #[error("Policy days must be valid integers.")]
    InvalidPolicyDays,

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingCredentials | Self::MissingPolicyDays | Self::InvalidPolicyDays => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        match status.as_u16() {
            400..=499 => tracing::warn!("request rejected: {message}"),
            _ => tracing::error!("request failed: {message}"),
        }

        (status, Json(ActionResult::error(message))).into_response()
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
