mod bio;
mod config;
mod errors;
mod flash;
mod llm_client;
mod matching;
mod models;
mod profiles;
mod routes;
mod state;
mod store;
mod views;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::bio::generator::BioGenerator;
use crate::config::{Config, StoreBackend};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{FileProfileStore, MemoryProfileStore, ProfileRepository};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Runmatch v{}", env!("CARGO_PKG_VERSION"));

    // Initialize profile storage
    let profiles: Arc<dyn ProfileRepository> = match config.store_backend {
        StoreBackend::File => {
            let store = FileProfileStore::new(&config.data_file);
            store.ensure_initialized().await?;
            info!("Profile store ready at {}", store.path().display());
            Arc::new(store)
        }
        StoreBackend::Memory => {
            info!("Using in-memory profile store; profiles are lost on restart");
            Arc::new(MemoryProfileStore::new())
        }
    };

    // Initialize bio generation (template-only without a key)
    let llm = match &config.anthropic_api_key {
        Some(key) => {
            let mut client = LlmClient::new(key.clone())?;
            if let Some(url) = &config.anthropic_api_url {
                client = client.with_endpoint(url.clone());
            }
            if let Some(attempts) = config.llm_max_attempts {
                client = client.with_max_attempts(attempts);
            }
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(client)
        }
        None => {
            info!("ANTHROPIC_API_KEY not set; bios use the template fallback");
            None
        }
    };

    let state = AppState {
        profiles,
        bio: BioGenerator::new(llm),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
