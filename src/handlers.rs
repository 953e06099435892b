use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::info;
use tower_http::cors::CorsLayer;

use crate::error::AppError;
use crate::types::{RootResponse, SendRequest, SendResponse};
use crate::whatsapp::WhatsAppClient;

pub struct AppState {
    pub whatsapp: WhatsAppClient,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/send", post(send_message))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn root() -> impl IntoResponse {
    Json(RootResponse {
        status: "ok",
        app: env!("CARGO_PKG_NAME"),
    })
}

pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SendRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Relaying message to {}", req.to);

    let data = state.whatsapp.send_text(&req.to, &req.message).await?;

    Ok((
        StatusCode::OK,
        Json(SendResponse {
            success: true,
            whatsapp_response: data,
        }),
    ))
}
