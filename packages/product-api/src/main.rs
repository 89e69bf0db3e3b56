use clap::Parser;
use product_api::{router, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::parse();
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("serving products on http://{}", listener.local_addr()?);

    axum::serve(listener, router(config.state())).await?;
    Ok(())
}
