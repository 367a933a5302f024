use axum::extract::{Path, Query};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::product::{self, Product};
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::query::{ListQuery, Paged};

/// GET /api/products - product catalog with optional search and paging
pub async fn list(Query(query): Query<ListQuery>) -> ApiResult<Paged<Product>> {
    let pool = DatabaseManager::pool().await?;
    let page = product::list(&pool, &query).await?;
    Ok(ApiResponse::success(page))
}

/// GET /api/products/:id
pub async fn get(Path(id): Path<Uuid>) -> ApiResult<Product> {
    let pool = DatabaseManager::pool().await?;
    let found = product::find(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;
    Ok(ApiResponse::success(found))
}
