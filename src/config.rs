use anyhow::bail;
use secrecy::SecretString;

const DEFAULT_API_BASE: &str = "https://graph.facebook.com/v22.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug)]
pub struct Config {
    pub api_base: String,
    pub phone_number_id: String,
    pub token: SecretString,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let phone_number_id = require("WHATSAPP_PHONE_NUMBER_ID")?;
        let token = require("WHATSAPP_TOKEN")?;

        let api_base = std::env::var("WHATSAPP_API_BASE")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let port = std::env::var("RELAY_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            api_base,
            phone_number_id,
            token: SecretString::from(token),
            port,
        })
    }
}

// Empty counts as missing; whitespace-only values pass.
fn require(name: &str) -> anyhow::Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => bail!("{name} is not set"),
    }
}
