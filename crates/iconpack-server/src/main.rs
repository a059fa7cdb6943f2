use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use iconpack_catalog::{default_registry, HttpCatalog};
use iconpack_db::{init_database, RedbSelectionStore};
use iconpack_server::{routes, AppState, Config};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Required: ICONPACK_PACK_ID=<pack id>");
            eprintln!(
                "Optional: ICONPACK_LISTEN_ADDR, ICONPACK_DB_PATH, ICONPACK_CATALOG_URL, ICONPACK_EXTRACTOR"
            );
            std::process::exit(1);
        }
    };

    tracing::info!("Starting Iconpack server");
    tracing::info!("Pack id: {}", config.pack_id);
    tracing::info!("Listen address: {}", config.listen_addr);
    tracing::info!("Database path: {}", config.db_path.display());
    tracing::info!("Catalog URL: {}", config.catalog_url);

    // Initialize database
    let db = match init_database(&config.db_path) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Database error: {}", e);
            std::process::exit(1);
        }
    };

    let selection_store = Arc::new(RedbSelectionStore::new(db));
    let catalog = Arc::new(HttpCatalog::new(&config.catalog_url));

    // Extractor registry, populated once at startup
    let registry = Arc::new(default_registry());

    // Create app state
    let state = AppState::new(
        config.pack_id.clone(),
        config.extractor_kind.clone(),
        selection_store,
        catalog,
        registry,
    );

    // Build router
    let app = routes::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server running at http://{}", config.listen_addr);

    axum::serve(listener, app).await.expect("Server error");
}
