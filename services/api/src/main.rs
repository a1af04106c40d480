use std::sync::Arc;

use anyhow::Context;
use api::{router, ServerConfig};
use converters::Services;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let services = Services::from_env()?;
    tracing::info!(ai_endpoint = services.chat.endpoint(), "chat-completion endpoint configured");

    let app = router(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    tracing::info!("listening on http://{}", config.addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
