pub mod api;
pub mod health;
pub mod pages;
pub mod settings;

use axum::Router;

use iconpack_catalog::CollectionCatalog;

use crate::state::AppState;

pub fn create_router<C: CollectionCatalog + 'static>(state: AppState<C>) -> Router {
    Router::new()
        .merge(pages::routes())
        .merge(api::routes())
        .merge(settings::routes())
        .merge(health::routes())
        .with_state(state)
}
