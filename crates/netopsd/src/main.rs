//! netopsd - Network Command Gateway Daemon
//!
//! HTTP gateway for registering network devices and running CLI commands
//! against them under a process-wide session bound.
//!
//! Usage:
//!   netopsd [OPTIONS]
//!
//! Options:
//!   -i, --inventory <path>   Load devices from a JSON inventory file
//!   -p, --port <port>        Listen port (default 8080)
//!       --max-sessions <n>   Concurrent device session cap (default 20)

use std::net::SocketAddr;
use std::sync::Arc;

use netops_api::{create_router, AppState};
use netops_core::Inventory;
use netops_exec::{CommandExecutor, ExecutorConfig, MockTransport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parsed command-line arguments
struct Args {
    /// JSON inventory file to bulk-load at startup
    inventory_path: Option<String>,
    /// HTTP listen port
    port: u16,
    /// Concurrent session cap
    max_sessions: usize,
}

fn parse_args() -> anyhow::Result<Args> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut result = Args {
        inventory_path: None,
        port: 8080,
        max_sessions: ExecutorConfig::default().max_sessions,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--inventory" | "-i" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("Missing argument for --inventory"))?;
                result.inventory_path = Some(value.clone());
                i += 2;
            }
            "--port" | "-p" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("Missing argument for --port"))?;
                result.port = value.parse()?;
                i += 2;
            }
            "--max-sessions" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("Missing argument for --max-sessions"))?;
                result.max_sessions = value.parse()?;
                i += 2;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                anyhow::bail!("Unknown argument: {}", other);
            }
        }
    }

    Ok(result)
}

fn print_help() {
    eprintln!(
        r#"netopsd - Network Command Gateway Daemon

Usage: netopsd [OPTIONS]

Options:
  -i, --inventory <path>   Load devices from a JSON inventory file
                           (a bare array of device objects, or an object
                           with a "devices" key holding that array)
  -p, --port <port>        Listen port (default 8080)
      --max-sessions <n>   Concurrent device session cap (default 20)
  -h, --help               Print this help message

Examples:
  # Run empty, register devices over HTTP
  netopsd

  # Preload an inventory and allow 50 concurrent sessions
  netopsd -i devices.json --max-sessions 50
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "netopsd=info,netops_api=info,netops_exec=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting netopsd (Network Command Gateway Daemon)");

    let args = parse_args()?;

    // Build the shared inventory, optionally bulk-loading a JSON file.
    // Incomplete items in the file are skipped, not fatal.
    let inventory = Arc::new(Inventory::new());
    if let Some(ref path) = args.inventory_path {
        let loaded = inventory.load_from_file(path)?;
        tracing::info!(path = %path, loaded, "Loaded inventory file");
    }

    // The real SSH transport is an external capability; the daemon ships
    // with the mock transport wired in so the full request path is
    // exercisable end to end.
    tracing::warn!("No SSH transport configured, using mock transport");
    let transport = Arc::new(MockTransport::new());

    let executor = Arc::new(CommandExecutor::new(
        transport,
        &ExecutorConfig {
            max_sessions: args.max_sessions,
        },
    ));
    tracing::info!(max_sessions = executor.capacity(), "Session gate configured");

    let state = AppState::new(inventory, executor);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
