//! Tactics game client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Transport (HTTP to the game server)
//! 2. Frontend (UI) - CLI
//!
//! Both are built independently and injected into the Client container.
//!
//! # Examples
//!
//! ```bash
//! SERVER_URL=http://localhost:8080 cargo run -p tactics-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(all(feature = "frontend-cli", feature = "transport-http"))]
    {
        run_cli().await?;
    }

    #[cfg(not(all(feature = "frontend-cli", feature = "transport-http")))]
    {
        compile_error!("The tactics binary needs the frontend-cli and transport-http features");
    }

    Ok(())
}

/// Run the CLI frontend against the HTTP transport.
#[cfg(all(feature = "frontend-cli", feature = "transport-http"))]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use client_transport_http::{HttpConfig, HttpTransport};
    use tactics_client::Client;

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();
    let http_config = HttpConfig::from_env()?;

    // 2. Setup logging (file only; the TUI owns the terminal)
    let session_label = std::env::var("TACTICS_SESSION").ok();
    let _log_guard = logging::setup_logging(session_label.as_deref())?;

    tracing::info!("Starting tactics client");
    tracing::info!("Server: {}", http_config.server_url);
    tracing::info!("Poll interval: {:?}", frontend_config.poll.interval);

    // 3. Build Transport (independent layer)
    let transport = HttpTransport::new(http_config)?;

    // 4. Build Frontend (independent layer)
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(frontend_config.clone(), cli_config);

    // 5. Build and run
    let client = Client::builder()
        .transport(transport)
        .frontend(frontend)
        .config(frontend_config)
        .build()?;

    tracing::info!("Client assembled, starting...");
    if let Err(e) = client.run().await {
        tracing::error!("Client failed: {:#}", e);
        return Err(e);
    }

    tracing::info!("Client shutdown complete");
    Ok(())
}
