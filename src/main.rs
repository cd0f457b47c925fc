use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use video_gateway::config;
use video_gateway::lifecycle::{wait_for_signal, Shutdown};
use video_gateway::observability::logging;
use video_gateway::HttpServer;

#[derive(Parser)]
#[command(name = "video-gateway")]
#[command(about = "Forwards video processing requests to the processing service", long_about = None)]
struct Cli {
    /// Optional TOML configuration file; defaults apply when omitted.
    #[arg(short, long, env = "GATEWAY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref())?;
    logging::init(&config.logging)?;

    tracing::info!("video-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        downstream = %config.downstream.url,
        downstream_timeout_secs = config.timeouts.downstream_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
