mod config;
mod error;
mod handlers;
mod types;
mod whatsapp;

use std::sync::Arc;

use log::info;

use config::Config;
use handlers::AppState;
use whatsapp::WhatsAppClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init_timed();

    // Refuse to start without the provider credentials.
    let config = Config::from_env()?;
    info!("Relaying through phone number id {}", config.phone_number_id);

    let whatsapp = WhatsAppClient::new(
        &config.api_base,
        &config.phone_number_id,
        config.token.clone(),
    )?;
    let state = Arc::new(AppState { whatsapp });

    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
