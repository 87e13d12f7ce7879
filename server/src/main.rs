//! VectorGate binary — thin CLI shell over the [`vectorgate_server`] library crate.

use axum::{
    routing::{get, post},
    Router,
};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use vectorgate_server::api::{api_health, api_index};
use vectorgate_server::config::Config;
use vectorgate_server::index::VectorClient;
use vectorgate_server::types::AppContext;
use vectorgate_server::users::TomlUserStore;

// ---------------------------------------------------------------------------
// CLI definition (clap derive)
// ---------------------------------------------------------------------------

/// URL indexing gateway — validates URL batches and fans them out to a vector-search backend.
#[derive(Parser)]
#[command(name = "vectorgate", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the users TOML file (default: ./users.toml)
    #[arg(long, default_value = "users.toml")]
    users: PathBuf,

    /// Bind to 0.0.0.0 instead of 127.0.0.1 (localhost)
    #[arg(long)]
    bind_all: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Graceful shutdown signal
// ---------------------------------------------------------------------------

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to register SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => info!("Received SIGINT, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await.expect("failed to listen for Ctrl+C");
        info!("Received Ctrl+C, shutting down...");
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vectorgate=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        clap_complete::generate(*shell, &mut Cli::command(), "vectorgate", &mut std::io::stdout());
        return;
    }

    // Startup configuration — resolved once, before the listener binds
    let config = Config::from_env().unwrap_or_else(|e| {
        error!(error = %e, "Configuration error");
        std::process::exit(1);
    });
    info!(vector_host = config.vector_host.as_str(), "Resolved vector backend");

    // User store — the gateway refuses to start without its user list
    let users = TomlUserStore::load(&cli.users).unwrap_or_else(|e| {
        error!(error = %e, "Could not load user store");
        std::process::exit(1);
    });
    info!(users = users.len(), path = %cli.users.display(), "Loaded user store");

    let ctx = AppContext {
        users: Arc::new(users),
        vector: Arc::new(VectorClient::new(&config)),
    };

    let app = Router::new()
        .route("/health", get(api_health))
        .route("/api/index", post(api_index))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(ctx);

    // Bind address: 127.0.0.1 by default, --bind-all for 0.0.0.0
    let bind_addr = if cli.bind_all { "0.0.0.0" } else { "127.0.0.1" };

    let explicit_port: Option<u16> = std::env::var("PORT").ok().and_then(|p| p.parse().ok());

    let listener = if let Some(port) = explicit_port {
        tokio::net::TcpListener::bind(format!("{bind_addr}:{port}")).await.unwrap_or_else(|e| {
            error!(port = port, error = %e, "Could not bind to port");
            eprintln!("  PORT={port} was set explicitly. Choose a different port.");
            std::process::exit(1);
        })
    } else {
        // Auto-scan: try 8090..=8099
        const BASE: u16 = 8090;
        const RANGE: u16 = 10;
        let mut found = None;
        for port in BASE..BASE + RANGE {
            match tokio::net::TcpListener::bind(format!("{bind_addr}:{port}")).await {
                Ok(l) => {
                    found = Some(l);
                    break;
                }
                Err(_) => continue,
            }
        }
        found.unwrap_or_else(|| {
            error!(range_start = BASE, range_end = BASE + RANGE - 1, "No free port found");
            eprintln!("  Try: PORT=<port> vectorgate");
            std::process::exit(1);
        })
    };

    let port = listener.local_addr().unwrap().port();
    info!(port = port, "http://localhost:{port}");
    // Machine-readable line for scripts (not through tracing)
    eprintln!("VECTORGATE_PORT={port}");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await.unwrap();
}
