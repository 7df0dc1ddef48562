//! context-tasks server entry point.
//!
//! ```bash
//! cargo run
//! ```
//!
//! The server listens on `0.0.0.0:3000` unless `HOST` / `PORT` say
//! otherwise. See [`context_tasks::config`] for every variable.

use anyhow::Context as _;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use context_tasks::api::{AppState, create_router};
use context_tasks::config::{AppConfig, LogFormat};
use context_tasks::infrastructure::InMemoryStore;
use context_tasks::server::Server;

const DEFAULT_LOG_FILTER: &str = "context_tasks=debug,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    let log_format = config
        .as_ref()
        .map_or(LogFormat::default(), |config| config.log_format);
    init_tracing(log_format);

    let config = match config {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "Configuration error");
            return Err(error.into());
        }
    };

    tracing::info!(
        address = %config.server.socket_addr(),
        seed_default_contexts = config.seed_default_contexts,
        "Starting context-tasks API"
    );

    let store = if config.seed_default_contexts {
        InMemoryStore::with_default_contexts().context("failed to seed default contexts")?
    } else {
        InMemoryStore::new()
    };

    let router = create_router(AppState::in_memory(store));

    Server::new(config.server).run(router).await
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}
