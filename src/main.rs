use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cinetrack::{Ctx, app, config::AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;

    let discovery = match config.build_discovery() {
        Ok(discovery) => {
            info!("discovery backend: {}", discovery.provider_name());
            Some(discovery)
        }
        Err(e) => {
            warn!("discovery backend unavailable: {e}");
            None
        }
    };

    let bind = config.bind.clone();
    let ctx = Ctx {
        config: Arc::new(config),
        discovery,
    };

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!("listening on {bind}");
    axum::serve(listener, app(ctx)).await?;

    Ok(())
}
