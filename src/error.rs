use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("whatsapp api rejected the message: {status}")]
    Provider { status: StatusCode, body: String },

    #[error("whatsapp api unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Full provider bodies and transport causes go to the log only;
        // the caller gets a generic detail.
        let (status, detail) = match &self {
            AppError::Provider { status, body } => {
                log::error!("WhatsApp API error: {} {}", status, body);
                (*status, "Failed to send message via WhatsApp API")
            }
            AppError::Transport(err) => {
                log::error!("Network error calling WhatsApp API: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to communicate with WhatsApp API",
                )
            }
        };

        (status, Json(json!({ "error": detail }))).into_response()
    }
}
