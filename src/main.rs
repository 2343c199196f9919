use std::net::SocketAddr;

use hirepulse::{
    config::{get_config, init_config, LogFormat},
    routes, AppState,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hirepulse=info,tower_http=info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    if config.api_key.is_none() {
        tracing::warn!("API_KEY is not set; every AI screening will fail");
    }
    match &config.invite_webhook_url {
        Some(url) => info!("Interview invites are posted to {}", url),
        None => info!(
            delay_ms = config.invite_delay.as_millis() as u64,
            "Interview invites are simulated"
        ),
    }

    let app_state = AppState::new(config)?;
    let app = routes::build_router(app_state, config.cors_allowed_origin.as_deref());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
