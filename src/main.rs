//! Shift Payroll Engine server.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use shift_payroll::api::{AppState, create_router};
use shift_payroll::config::ConfigLoader;

#[derive(Parser)]
#[command(
    name = "shift-payroll",
    version,
    about = "Shift Payroll Engine HTTP server"
)]
struct Cli {
    /// Configuration directory (payroll.yaml, shift_types.yaml, pay_rules/)
    #[arg(short, long, default_value = "./config/default")]
    config: PathBuf,

    /// Address to listen on
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "shift_payroll=debug"
    } else {
        "shift_payroll=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config = ConfigLoader::load(&cli.config)?;
    tracing::info!(
        config = %cli.config.display(),
        payroll = %config.metadata().code,
        shift_types = config.shift_types().len(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = TcpListener::bind(cli.bind).await?;
    tracing::info!(addr = %cli.bind, "Shift payroll server listening");

    axum::serve(listener, router).await?;
    Ok(())
}
