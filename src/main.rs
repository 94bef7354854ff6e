use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use employee_service::{
    AppState, EmployeeRepository, ServiceConfig, SqliteEmployeeRepository, build_router,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Employee records CRUD service
#[derive(Parser, Debug)]
#[command(name = "employee_service", version, about, long_about = None)]
struct Cli {
    /// Bind host (overrides APP_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides APP_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// SQLite URL (overrides DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,

    /// Pool size (overrides DB_MAX_CONNECTIONS)
    #[arg(long)]
    max_connections: Option<u32>,

    /// Idle connections kept open (overrides DB_MIN_CONNECTIONS)
    #[arg(long)]
    min_connections: Option<u32>,

    /// Seconds to wait for a connection or lock (overrides DB_CONNECT_TIMEOUT_SECS)
    #[arg(long)]
    connect_timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = ServiceConfig::from_env().context("failed to load service configuration")?;

    // CLI > ENV > defaults
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }
    if let Some(max) = cli.max_connections {
        config.max_connections = max;
    }
    if let Some(min) = cli.min_connections {
        config.min_connections = min;
    }
    if let Some(secs) = cli.connect_timeout_secs {
        config.connect_timeout_secs = secs;
    }

    info!(database = %config.database_url, "opening employee store");
    let repo = SqliteEmployeeRepository::connect(&config.store_config())
        .await
        .context("failed to open database")?;
    repo.init()
        .await
        .context("failed to initialize employees table")?;

    let app = build_router(AppState::new(Arc::new(repo.clone())));

    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(address = %addr, "employee service started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    repo.close().await;
    info!("shutdown complete");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("employee_service=debug,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Resolve when `listener` reports Ctrl+C. If the handler cannot be
/// installed, never resolve.
async fn wait_for_ctrl_c<F>(listener: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(err) = listener.await {
        error!(error = %err, "unable to install Ctrl+C signal handler");
        std::future::pending::<()>().await;
    }
}

async fn shutdown_signal() {
    let ctrl_c = wait_for_ctrl_c(tokio::signal::ctrl_c());

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "unable to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C"),
        _ = terminate => info!("received terminate signal"),
    }
}
