use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use iconpack_catalog::CollectionCatalog;
use iconpack_core::{CollectionSelection, DiscoveryCache, SelectionStore};

use crate::form;
use crate::state::AppState;

pub fn routes<C: CollectionCatalog + 'static>() -> Router<AppState<C>> {
    Router::new()
        .route("/api/settings/form", get(get_form))
        .route("/settings", post(submit_settings))
}

/// Serve the settings form description.
///
/// A catalog failure is surfaced as an error rather than an empty,
/// misleadingly valid collection list.
async fn get_form<C: CollectionCatalog + 'static>(State(state): State<AppState<C>>) -> Response {
    let collections = match state.catalog.list_collections().await {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to fetch catalog collections: {}", e);
            return (StatusCode::BAD_GATEWAY, format!("Catalog error: {}", e)).into_response();
        }
    };

    let current = match state.selection_store.get(&state.pack_id) {
        Ok(s) => s,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Storage error: {}", e),
            )
                .into_response();
        }
    };

    Json(form::render(current.as_ref(), &collections)).into_response()
}

#[derive(Deserialize)]
pub struct SettingsSubmit {
    /// Collection ids to select. Duplicates collapse; an empty list stores
    /// an empty selection.
    #[serde(default)]
    collections: Vec<String>,
}

#[derive(Serialize)]
struct SettingsSaved {
    status: &'static str,
    count: usize,
    message: &'static str,
}

async fn submit_settings<C: CollectionCatalog + 'static>(
    State(state): State<AppState<C>>,
    Json(submit): Json<SettingsSubmit>,
) -> Response {
    let selection: CollectionSelection = submit.collections.into_iter().collect();

    if let Err(e) = state.selection_store.save(&state.pack_id, &selection) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Storage error: {}", e),
        )
            .into_response();
    }

    // Stored selection changed; cached discovery results are stale now.
    state.cache.invalidate(&state.pack_id);

    tracing::info!(
        "Saved selection of {} collections for pack {}",
        selection.len(),
        state.pack_id
    );

    (
        StatusCode::OK,
        Json(SettingsSaved {
            status: "saved",
            count: selection.len(),
            message: "Cache has been cleared.",
        }),
    )
        .into_response()
}
