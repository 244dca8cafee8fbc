use anyhow::{Context, Result};
use clap::Parser;
use minutegem::{create_app, AppState, Config, GeminiClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// LLM meeting-minutes generator
#[derive(Debug, Parser)]
#[command(name = "minutegem", version)]
struct Args {
    /// Config file (without extension)
    #[arg(short, long, default_value = "config/minutegem")]
    config: String,

    /// Override the HTTP bind address
    #[arg(long)]
    bind: Option<String>,

    /// Override the HTTP port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("MinuteGem v{}", env!("CARGO_PKG_VERSION"));
    info!("Loaded config: {}", cfg.service.name);

    let api_key = cfg.api_key()?.to_string();

    let initial = cfg.initial_participants();
    if let Some(notice) = &initial.notice {
        warn!("{}", notice);
    }
    info!("Initial participants: {}", initial.participants.len());

    let generator = GeminiClient::new(
        api_key,
        &cfg.generation.api_base,
        Duration::from_secs(cfg.generation.timeout_secs),
    )?;
    info!("Generation model: {}", cfg.generation.model);

    let state = AppState::new(Arc::new(generator), cfg.generation.model.clone())
        .with_initial_participants(initial.participants)
        .with_notices(initial.notice.into_iter().collect());

    let app = create_app(state, &cfg.static_dir);

    let bind = args.bind.unwrap_or(cfg.service.http.bind);
    let port = args.port.unwrap_or(cfg.service.http.port);
    let addr = format!("{}:{}", bind, port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app).await.context("HTTP server failed")?;

    Ok(())
}
