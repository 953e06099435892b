use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone)]
pub struct WhatsAppClient {
    http: reqwest::Client,
    messages_url: String,
    token: SecretString,
}

#[derive(Serialize)]
struct TextMessage<'a> {
    messaging_product: &'static str,
    to: &'a str,
    #[serde(rename = "type")]
    message_type: &'static str,
    text: TextBody<'a>,
}

#[derive(Serialize)]
struct TextBody<'a> {
    body: &'a str,
}

impl WhatsAppClient {
    pub fn new(
        api_base: &str,
        phone_number_id: &str,
        token: SecretString,
    ) -> Result<Self, AppError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            messages_url: format!(
                "{}/{}/messages",
                api_base.trim_end_matches('/'),
                phone_number_id
            ),
            token,
        })
    }

    pub async fn send_text(&self, to: &str, message: &str) -> Result<Value, AppError> {
        let payload = TextMessage {
            messaging_product: "whatsapp",
            to,
            message_type: "text",
            text: TextBody { body: message },
        };

        let response = self
            .http
            .post(&self.messages_url)
            .bearer_auth(self.token.expose_secret())
            .json(&payload)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(AppError::Provider { status, body })
        }
    }
}
