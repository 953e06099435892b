use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize)]
pub struct SendRequest {
    pub to: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct SendResponse {
    pub success: bool,
    pub whatsapp_response: Value,
}

#[derive(Serialize)]
pub struct RootResponse {
    pub status: &'static str,
    pub app: &'static str,
}
