use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use range_server::config::AppConfig;
use range_server::directory::StationTable;
use range_server::ekispert::EkispertClient;
use range_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("range_server=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Create range API client
    let client = EkispertClient::new(config.ekispert.clone())
        .expect("Failed to create Ekispert client");

    // Load station table (fail fast if unavailable)
    let stations =
        StationTable::load(&config.station_data_path).expect("Failed to load station table");
    info!(
        count = stations.len().await,
        path = %config.station_data_path.display(),
        "loaded station table"
    );

    // Spawn background task to reload the station table
    let stations_refresh = stations.clone();
    let refresh_every = config.station_refresh;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(refresh_every);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match stations_refresh.reload().await {
                Ok(count) => info!(count, "reloaded station table"),
                Err(e) => error!(error = %e, "failed to reload station table"),
            }
        }
    });

    // Build app state and router
    let state = AppState::new(stations, client, config.api_keys.clone());
    let app = create_router(state);

    let addr = config.bind_addr;
    info!("Station range search listening on http://{addr}");
    info!("  POST /range-search        - Range search");
    info!("  GET  /incremental-search  - Station name autocomplete");
    info!("  GET  /health              - Health check");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
