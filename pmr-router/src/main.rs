use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use pmr_router::config::ServerConfig;
use pmr_router::index::{MemoryStore, StationIndex, StationStore};
use pmr_router::seed::{self, SeedClient, SeedClientConfig};
use pmr_router::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let store: Arc<dyn StationStore> = Arc::new(MemoryStore::new());
    let index = StationIndex::new(store);

    // Seed file first, then the remote document on top of it
    if let Some(path) = &config.seed_path {
        seed::load_file(&index, path)?;
    }
    if let Some(url) = &config.seed_url {
        let client = SeedClient::new(SeedClientConfig::new(url))?;
        client.load_into(&index).await?;
    }

    let graph = index.snapshot()?;
    if graph.station_count() == 0 {
        warn!("starting with an empty station index; set PMR_SEED_PATH or PMR_SEED_URL");
    }
    info!(
        stations = graph.station_count(),
        connections = graph.connection_count(),
        max_transfers_ceiling = config.search.max_transfers_ceiling,
        deadline_ms = config.search.deadline_ms,
        "station index ready"
    );
    drop(graph);

    let state = AppState::new(index, config.search.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "PMR router listening");
    axum::serve(listener, app).await?;
    Ok(())
}
