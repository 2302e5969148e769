use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::Stage;

/// Faults of the inbound HTTP surface. Pipeline faults never reach here.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

/// A terminal fault inside the scheduling pipeline, tagged with the stage
/// that produced it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StageError {
    #[error("parse failed: could not understand \"{raw}\": {reason}")]
    Parse { raw: String, reason: String },

    #[error("CRM lookup failed: {0}")]
    Lookup(String),

    #[error("calendar event creation failed: {0}")]
    Calendar(String),

    #[error("CRM appointment update failed: {0}")]
    CrmUpdate(String),

    #[error("unexpected error: {0}")]
    Unknown(String),
}

impl StageError {
    pub fn stage(&self) -> Stage {
        match self {
            StageError::Parse { .. } => Stage::Parse,
            StageError::Lookup(_) => Stage::Lookup,
            StageError::Calendar(_) => Stage::Calendar,
            StageError::CrmUpdate(_) => Stage::CrmUpdate,
            StageError::Unknown(_) => Stage::Unknown,
        }
    }

    /// The underlying error text, without the stage prefix.
    pub fn message(&self) -> String {
        match self {
            StageError::Parse { raw, reason } => {
                format!("could not understand \"{raw}\": {reason}")
            }
            StageError::Lookup(m)
            | StageError::Calendar(m)
            | StageError::CrmUpdate(m)
            | StageError::Unknown(m) => m.clone(),
        }
    }
}

/// Delivering the reply failed. Logged by the caller and otherwise dropped.
#[derive(Debug, thiserror::Error)]
#[error("failed to notify channel {channel}: {message}")]
pub struct NotifyError {
    pub channel: String,
    pub message: String,
}
