use axum::routing::{get, post};
use axum::Router;

use crate::store::DocumentStore;
use crate::AppState;

pub mod category;
pub mod health;
pub mod import;

/// Full API surface. Generic over the store so the same router runs against
/// Postgres in `main` and the in-memory store in tests.
pub fn api_router<S: DocumentStore>() -> Router<AppState<S>> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/upload-csv", post(import::upload_csv))
        .route("/api/categories", get(category::list_categories))
        .route(
            "/api/categories/:id",
            get(category::get_category).delete(category::delete_category),
        )
        .route(
            "/api/categories/:id/postings",
            get(category::list_postings),
        )
}
