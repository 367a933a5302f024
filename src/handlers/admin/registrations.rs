use axum::extract::{Path, Query};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::registration::{self, Registration};
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::query::{ListQuery, Paged};

/// GET /api/admin/registrations
pub async fn list(Query(query): Query<ListQuery>) -> ApiResult<Paged<Registration>> {
    let pool = DatabaseManager::pool().await?;
    Ok(ApiResponse::success(registration::list(&pool, &query).await?))
}

/// GET /api/admin/registrations/:id
pub async fn get(Path(id): Path<Uuid>) -> ApiResult<Registration> {
    let pool = DatabaseManager::pool().await?;
    let found = registration::find(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Registration not found"))?;
    Ok(ApiResponse::success(found))
}

/// DELETE /api/admin/registrations/:id
pub async fn delete(Path(id): Path<Uuid>) -> ApiResult<()> {
    let pool = DatabaseManager::pool().await?;
    if !registration::delete(&pool, id).await? {
        return Err(ApiError::not_found("Registration not found"));
    }
    Ok(ApiResponse::<()>::no_content())
}
