use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use mailbridge_mailgun::{MailgunConfig, MailgunProvider};
use mailbridge_provider::DynEmailProvider;
use mailbridge_sendgrid::{SendgridConfig, SendgridProvider};
use mailbridge_server::api::{self, AppState};
use mailbridge_server::config::MailbridgeConfig;

/// Mailbridge email relay HTTP server.
#[derive(Parser, Debug)]
#[command(name = "mailbridge-server", about = "HTTP email relay with provider fallback")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "mailbridge.toml")]
    config: String,

    /// Override the bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration from TOML file, or use defaults if the file does
    // not exist.
    let config: MailbridgeConfig = if Path::new(&cli.config).exists() {
        let contents = std::fs::read_to_string(&cli.config)?;
        toml::from_str(&contents)?
    } else {
        toml::from_str("")?
    };

    mailbridge_server::telemetry::init();

    if !Path::new(&cli.config).exists() {
        info!(path = %cli.config, "config file not found, using defaults");
    }

    // Providers read their credentials from the environment once, here;
    // requests only ever see the immutable snapshot.
    let mailgun: Arc<dyn DynEmailProvider> =
        Arc::new(MailgunProvider::new(MailgunConfig::from_env()));
    let sendgrid: Arc<dyn DynEmailProvider> =
        Arc::new(SendgridProvider::new(SendgridConfig::from_env()));

    let state = AppState { mailgun, sendgrid };
    let app = api::router(state);

    let host = cli.host.unwrap_or(config.server.host);
    let port = cli.port.unwrap_or(config.server.port);
    let addr = format!("{host}:{port}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "mailbridge-server listening");

    // Serve with graceful shutdown on SIGINT / SIGTERM.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("mailbridge-server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { info!("received SIGINT"); }
        () = terminate => { info!("received SIGTERM"); }
    }
}
