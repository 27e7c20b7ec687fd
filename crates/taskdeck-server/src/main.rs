use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use taskdeck_server::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("taskdeck_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::parse();
    let addr = config.addr();
    match &config.cors_origin {
        Some(origin) => info!("cors enabled for {origin}"),
        None => info!("cors disabled"),
    }

    let listener = TcpListener::bind(addr).await?;
    taskdeck_server::serve(listener, config.cors_origin).await?;

    Ok(())
}
