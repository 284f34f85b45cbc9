//! PyTutor Server - Headless Daemon
//!
//! Serves the PyTutor iframe widget:
//! - `POST /proxy?action=...` (and `/`) answers with a small HTML document
//! - `OPTIONS` on the same paths answers CORS preflight
//! - `/health`, `/healthz`, `/version` for supervisors
//!
//! Access via: http://localhost:8787/proxy

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use validator::Validate;

mod api;
mod cli;
mod commands;
mod listener;
mod router;
mod state;

#[cfg(test)]
mod test_helpers;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = cli.widget.to_config();
    config.validate().map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    match cli.command {
        None => serve(&cli.host, cli.port, config).await,
        Some(Commands::Serve { port }) => serve(&cli.host, port, config).await,
        Some(Commands::Lessons { json }) => commands::handle_lessons(json),
        Some(Commands::Config(cmd)) => commands::handle_config_command(cmd, &config),
    }
}

async fn serve(host: &str, port: u16, config: pytutor_types::WidgetConfig) -> Result<()> {
    info!("🚀 PyTutor Server starting on port {}...", port);
    info!("🔐 {} allowed origin(s)", config.allow_origins.len());
    if !config.completion.has_credential() {
        warn!("⚠️ OPENAI_API_KEY is not set; tutor and quiz requests will return errors");
    }

    let state = AppState::new(config).map_err(|e| anyhow::anyhow!("Failed to build widget: {}", e))?;
    let app = router::build_router(state);

    let listener = listener::bind(host, port).await?;
    info!("🌐 Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).with_graceful_shutdown(listener::shutdown_signal()).await?;

    info!("✅ Server stopped");
    Ok(())
}
