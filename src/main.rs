//! Salary report HTTP server.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

use salary_report::api::{AppState, create_router};
use salary_report::config::ConfigLoader;
use salary_report::logging::init_logging;
use salary_report::store::Store;

/// Employee salary register and report server.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(long, default_value = "./config/salary_report.yaml")]
    config: PathBuf,

    /// Address to listen on, overriding `server.bind_address`.
    #[arg(long)]
    bind: Option<String>,

    /// SQLite URL, overriding `database.url`.
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let mut config = ConfigLoader::load(&args.config)?.into_config();
    if let Some(bind) = args.bind {
        config.server.bind_address = bind;
    }
    if let Some(url) = args.database_url {
        config.database.url = url;
    }

    init_logging(&config.logging)?;
    info!(
        config = %args.config.display(),
        database = %config.database.url,
        overtime_hourly_rate = %config.salary.overtime_hourly_rate,
        "Starting salary report server"
    );

    let store = Store::connect(&config.database).await?;
    let seeded = store.designations().seed(&config.designations).await?;
    if seeded > 0 {
        info!(count = seeded, "Inserted seed designations");
    }

    let state = AppState::new(store.clone(), config.salary);
    let router = create_router(state);

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    info!(address = %listener.local_addr()?, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down"),
        Err(err) => warn!(error = %err, "Failed to listen for Ctrl+C, shutting down"),
    }
}
