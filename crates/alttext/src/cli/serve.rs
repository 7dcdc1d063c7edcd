//! The `alttext serve` command: run the HTTP service.

use crate::server::{self, AppState};
use alttext_core::{AltTextGenerator, Config};
use clap::Args;

/// Arguments for the `serve` command.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides `server.host`)
    #[arg(long, env = "ALTTEXT_HOST")]
    pub host: Option<String>,

    /// Port to listen on (overrides `server.port`)
    #[arg(short, long, env = "ALTTEXT_PORT")]
    pub port: Option<u16>,
}

/// Execute the serve command.
pub async fn execute(args: ServeArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let generator = AltTextGenerator::from_config(&config)?;
    let provider = generator.provider();
    tracing::info!(
        provider = provider.name(),
        model = provider.model(),
        "Using LLM provider"
    );
    if !provider.is_available().await {
        tracing::warn!(
            "Provider '{}' is not available yet; requests will fail until it is",
            provider.name()
        );
    }

    let app = server::router(AppState::new(generator));

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
