use axum::extract::{Path, Query};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::industry::{self, Industry};
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::query::{ListQuery, Paged};

/// GET /api/industries
pub async fn list(Query(query): Query<ListQuery>) -> ApiResult<Paged<Industry>> {
    let pool = DatabaseManager::pool().await?;
    let page = industry::list(&pool, &query).await?;
    Ok(ApiResponse::success(page))
}

/// GET /api/industries/:id
pub async fn get(Path(id): Path<Uuid>) -> ApiResult<Industry> {
    let pool = DatabaseManager::pool().await?;
    let found = industry::find(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Industry not found"))?;
    Ok(ApiResponse::success(found))
}
