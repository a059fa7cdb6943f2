use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use indexmap::IndexMap;
use tempfile::TempDir;
use tower::ServiceExt;

use iconpack_catalog::{default_registry, CollectionCatalog};
use iconpack_core::{CatalogError, Collection, CollectionSelection, SelectionStore};
use iconpack_db::{init_database, RedbSelectionStore};
use iconpack_server::{routes, AppState};

/// Catalog stub serving a fixed listing, with an optional failure mode.
struct StubCatalog {
    collections: IndexMap<String, Collection>,
    icons: HashMap<String, Vec<String>>,
    fail: bool,
}

impl StubCatalog {
    fn new() -> Self {
        let mut collections = IndexMap::new();
        collections.insert(
            "mdi".to_string(),
            Collection::new("Material", Some("General"), 500),
        );
        collections.insert(
            "fa".to_string(),
            Collection::new("FontAwesome", Some("Brand"), 200),
        );

        let mut icons = HashMap::new();
        icons.insert(
            "mdi".to_string(),
            vec!["home".to_string(), "user".to_string()],
        );
        icons.insert("fa".to_string(), vec!["star".to_string()]);

        Self {
            collections,
            icons,
            fail: false,
        }
    }

    fn failing() -> Self {
        let mut stub = Self::new();
        stub.fail = true;
        stub
    }
}

impl CollectionCatalog for StubCatalog {
    async fn list_collections(&self) -> Result<IndexMap<String, Collection>, CatalogError> {
        if self.fail {
            return Err(CatalogError::Status(503));
        }
        Ok(self.collections.clone())
    }

    async fn list_icon_ids(&self, collection_id: &str) -> Result<Vec<String>, CatalogError> {
        if self.fail {
            return Err(CatalogError::Status(503));
        }
        Ok(self.icons.get(collection_id).cloned().unwrap_or_default())
    }
}

/// Create a test app over a temp database and the given catalog stub.
fn create_test_app(catalog: StubCatalog) -> (axum::Router, Arc<RedbSelectionStore>, TempDir) {
    let dir = TempDir::new().unwrap();
    let db = init_database(dir.path().join("test.redb")).unwrap();
    let selection_store = Arc::new(RedbSelectionStore::new(db));

    let state = AppState::new(
        "iconify",
        "iconify",
        selection_store.clone(),
        Arc::new(catalog),
        Arc::new(default_registry()),
    );

    (routes::create_router(state), selection_store, dir)
}

/// Helper to get response body as JSON.
async fn body_json(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, json: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

// ============================================================================
// Health endpoint tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _store, _dir) = create_test_app(StubCatalog::new());

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_ready_endpoint() {
    let (app, _store, _dir) = create_test_app(StubCatalog::failing());

    // Readiness only depends on storage, not on the remote catalog
    let response = app.oneshot(get("/ready")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["status"], "ok");
}

// ============================================================================
// Settings form tests
// ============================================================================

#[tokio::test]
async fn test_form_sorted_by_total_descending() {
    let (app, _store, _dir) = create_test_app(StubCatalog::new());

    let response = app.oneshot(get("/api/settings/form")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;

    let options = json["collections"].as_array().unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0]["id"], "mdi");
    assert_eq!(options[0]["label"], "Material - General (500)");
    assert_eq!(options[1]["id"], "fa");
    assert_eq!(
        options[0]["href"],
        "https://icon-sets.iconify.design/mdi"
    );
}

#[tokio::test]
async fn test_form_surfaces_catalog_failure() {
    let (app, _store, _dir) = create_test_app(StubCatalog::failing());

    let response = app.oneshot(get("/api/settings/form")).await.unwrap();

    // A broken catalog must not render as an empty, valid-looking list
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_settings_page_surfaces_catalog_failure() {
    let (app, _store, _dir) = create_test_app(StubCatalog::failing());

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_submit_deduplicates_and_persists() {
    let (app, store, _dir) = create_test_app(StubCatalog::new());

    let response = app
        .oneshot(post_json(
            "/settings",
            r#"{"collections": ["mdi", "fa", "mdi"]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["status"], "saved");
    assert_eq!(json["count"], 2);

    let stored = store.get("iconify").unwrap().unwrap();
    assert_eq!(stored, CollectionSelection::from_ids(["mdi", "fa"]));
}

#[tokio::test]
async fn test_submit_empty_stores_empty_selection() {
    let (app, store, _dir) = create_test_app(StubCatalog::new());

    let response = app
        .clone()
        .oneshot(post_json("/settings", r#"{"collections": []}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Present-but-empty, not absent
    let stored = store.get("iconify").unwrap().unwrap();
    assert!(stored.is_empty());

    let response = app.oneshot(get("/api/icons")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

// ============================================================================
// Icon discovery tests
// ============================================================================

#[tokio::test]
async fn test_icons_without_selection_is_a_config_error() {
    let (app, _store, _dir) = create_test_app(StubCatalog::new());

    let response = app.oneshot(get("/api/icons")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_icons_after_selection() {
    let (app, _store, _dir) = create_test_app(StubCatalog::new());

    let response = app
        .clone()
        .oneshot(post_json("/settings", r#"{"collections": ["mdi"]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/icons")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response.into_body()).await;
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], "iconify:home");
    assert_eq!(
        records[0]["source"],
        "https://api.iconify.design/mdi/home.svg"
    );
    assert_eq!(records[1]["id"], "iconify:user");
}

#[tokio::test]
async fn test_submit_invalidates_discovery_cache() {
    let (app, _store, _dir) = create_test_app(StubCatalog::new());

    app.clone()
        .oneshot(post_json("/settings", r#"{"collections": ["mdi"]}"#))
        .await
        .unwrap();

    // First pass populates the cache
    let response = app.clone().oneshot(get("/api/icons")).await.unwrap();
    let json = body_json(response.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    // Changing the selection must not serve the stale cached pass
    app.clone()
        .oneshot(post_json("/settings", r#"{"collections": ["fa"]}"#))
        .await
        .unwrap();

    let response = app.oneshot(get("/api/icons")).await.unwrap();
    let json = body_json(response.into_body()).await;
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], "iconify:star");
}

#[tokio::test]
async fn test_icons_catalog_failure_is_bad_gateway() {
    let (app, store, _dir) = create_test_app(StubCatalog::failing());

    store
        .save("iconify", &CollectionSelection::from_ids(["mdi"]))
        .unwrap();

    let response = app.oneshot(get("/api/icons")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_collections_passthrough() {
    let (app, _store, _dir) = create_test_app(StubCatalog::new());

    let response = app.oneshot(get("/api/collections")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["mdi"]["name"], "Material");
    assert_eq!(json["fa"]["total"], 200);
}
