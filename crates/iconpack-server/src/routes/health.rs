use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use iconpack_catalog::CollectionCatalog;
use iconpack_core::SelectionStore;

use crate::state::AppState;

pub fn routes<C: CollectionCatalog + 'static>() -> Router<AppState<C>> {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn ready<C: CollectionCatalog + 'static>(
    State(state): State<AppState<C>>,
) -> Json<HealthResponse> {
    // Ready once the configuration store answers; the catalog is allowed
    // to be unreachable.
    let status = match state.selection_store.get(&state.pack_id) {
        Ok(_) => "ok",
        Err(_) => "degraded",
    };
    Json(HealthResponse { status })
}
