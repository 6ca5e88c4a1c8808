//! The uniform `{status, message}` envelope returned by every action.

use serde::{Deserialize, Serialize};

/// Terminal outcome of an action, as shown to the user.
///
/// Provider rejections are reported with `Error` inside an HTTP 200
/// response; the transport status only reflects faults local to this
/// service (missing fields, I/O).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Success,
    Error,
}

/// Result envelope for a single administration action.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ActionResult {
    pub status: ActionStatus,
    pub message: String,
}

impl ActionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ActionStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ActionStatus::Error,
            message: message.into(),
        }
    }
}
