use tracing::info;
use tracing_subscriber::EnvFilter;

use syndx_server::state::AppState;
use syndx_server::{app, config};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = config::load_config()?;
    let state = AppState::from_config(&config).await?;

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, advisory = config.advisory.enabled, "syndx server listening");

    axum::serve(listener, app(state)).await?;
    Ok(())
}
