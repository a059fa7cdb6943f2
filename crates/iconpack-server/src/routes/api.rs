use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use iconpack_catalog::{CollectionCatalog, ExtractError};
use iconpack_core::{DiscoveryCache, SelectionStore};

use crate::state::AppState;

pub fn routes<C: CollectionCatalog + 'static>() -> Router<AppState<C>> {
    Router::new()
        .route("/api/icons", get(get_icons))
        .route("/api/collections", get(get_collections))
}

/// Run an extraction pass for the configured pack, serving from the
/// discovery cache when the selection has not changed since the last pass.
async fn get_icons<C: CollectionCatalog + 'static>(State(state): State<AppState<C>>) -> Response {
    if let Some(records) = state.cache.get(&state.pack_id) {
        return Json(records).into_response();
    }

    let selection = match state.selection_store.get(&state.pack_id) {
        Ok(s) => s,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Storage error: {}", e),
            )
                .into_response();
        }
    };

    let extractor = match state.registry.create(
        &state.extractor_kind,
        &state.pack_id,
        state.catalog.clone(),
    ) {
        Some(extractor) => extractor,
        None => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("No extractor registered for kind: {}", state.extractor_kind),
            )
                .into_response();
        }
    };

    match extractor.discover_icons(selection.as_ref()).await {
        Ok(records) => {
            state.cache.put(&state.pack_id, records.clone());
            Json(records).into_response()
        }
        Err(ExtractError::Config(e)) => {
            tracing::warn!("Extraction refused for pack {}: {}", state.pack_id, e);
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response()
        }
        Err(ExtractError::Catalog(e)) => {
            tracing::warn!("Catalog failure during extraction: {}", e);
            (StatusCode::BAD_GATEWAY, format!("Catalog error: {}", e)).into_response()
        }
    }
}

async fn get_collections<C: CollectionCatalog + 'static>(
    State(state): State<AppState<C>>,
) -> Response {
    match state.catalog.list_collections().await {
        Ok(collections) => Json(collections).into_response(),
        Err(e) => {
            tracing::warn!("Failed to fetch catalog collections: {}", e);
            (StatusCode::BAD_GATEWAY, format!("Catalog error: {}", e)).into_response()
        }
    }
}
