use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use testgen_core::{init_tracing, METRICS};
use testgen_github::{GitHubClient, GitHubConfig};
use testgend::config::{DEFAULT_BIND, DEFAULT_MAX_BODY_BYTES, DEFAULT_PING_MESSAGE};
use testgend::{build_router, AppState, ServerConfig};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "testgend")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "TestGen HTTP service", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "TESTGEN_BIND", default_value = DEFAULT_BIND)]
    bind: String,

    /// Message returned by /api/ping
    #[arg(long, env = "PING_MESSAGE", default_value = DEFAULT_PING_MESSAGE)]
    ping_message: String,

    /// Delay added before classification and code generation
    #[arg(long, env = "TESTGEN_SIMULATED_LATENCY_MS", default_value_t = 0)]
    simulated_latency_ms: u64,

    /// Maximum accepted request body size
    #[arg(long, env = "TESTGEN_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    max_body_bytes: usize,

    /// Emit JSON-formatted log lines
    #[arg(long, env = "TESTGEN_LOG_JSON")]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_tracing(args.json, level);

    let github = GitHubConfig::from_env();
    let config = ServerConfig::default()
        .with_ping_message(&args.ping_message)
        .with_github_client_id(&github.client_id)
        .with_simulated_latency_ms(args.simulated_latency_ms)
        .with_max_body_bytes(args.max_body_bytes);

    let client = GitHubClient::new(github).context("Failed to build GitHub client")?;
    let state = AppState::new(config, Arc::new(client));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;
    info!(addr = %args.bind, "testgend listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    METRICS.flush();
    info!("testgend stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
