use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use route_server::config::ServerConfig;
use route_server::dataset::{AttractionIndex, load_attractions, load_edges};
use route_server::network::{BuiltNetwork, NetworkBuilder};
use route_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    // Load the network (fail fast if unavailable)
    let records = load_edges(&config.dataset)?;
    let BuiltNetwork { network, issues } = NetworkBuilder::new(config.build.clone())
        .add_records(&records)
        .build();
    info!(
        stations = network.station_count(),
        segments = network.segment_count(),
        issues = issues.len(),
        "Loaded network from {}",
        config.dataset.display()
    );

    let attractions = match &config.attractions {
        Some(path) => load_attractions(path)?,
        None => AttractionIndex::new(),
    };
    if !attractions.is_empty() {
        info!(count = attractions.len(), "Loaded attraction aliases");
    }

    let state = AppState::new(network, attractions, config.route.clone(), &config.cache);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Route server listening on http://{}", config.bind);
    info!("  GET /health        - Health check");
    info!("  GET /api/stations  - List stations (?q=&limit=)");
    info!("  GET /api/route     - Plan a route (?from=&to=&mode=)");

    axum::serve(listener, app).await?;
    Ok(())
}
