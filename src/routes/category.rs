use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use crate::dto::category_dto::CategoryDetailResponse;
use crate::error::{Error, Result};
use crate::models::category::Category;
use crate::models::posting::Posting;
use crate::store::DocumentStore;
use crate::AppState;

pub async fn list_categories<S: DocumentStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Category>>> {
    let categories = state.store.list_categories().await?;
    Ok(Json(categories))
}

pub async fn get_category<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CategoryDetailResponse>> {
    let category = state
        .store
        .get_category(id)
        .await?
        .ok_or_else(|| Error::NotFound("Category not found".to_string()))?;
    let postings = state.store.list_postings(id).await?;

    Ok(Json(CategoryDetailResponse { category, postings }))
}

pub async fn list_postings<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Posting>>> {
    if state.store.get_category(id).await?.is_none() {
        return Err(Error::NotFound("Category not found".to_string()));
    }

    let postings = state.store.list_postings(id).await?;
    Ok(Json(postings))
}

pub async fn delete_category<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    if !state.store.delete_category(id).await? {
        return Err(Error::NotFound("Category not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
