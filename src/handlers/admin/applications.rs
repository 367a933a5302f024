use axum::extract::{Path, Query};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::application::{self, Application};
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::query::{ListQuery, Paged};

/// GET /api/admin/applications - review queue, searchable by name/email
pub async fn list(Query(query): Query<ListQuery>) -> ApiResult<Paged<Application>> {
    let pool = DatabaseManager::pool().await?;
    Ok(ApiResponse::success(application::list(&pool, &query).await?))
}

/// GET /api/admin/applications/:id
pub async fn get(Path(id): Path<Uuid>) -> ApiResult<Application> {
    let pool = DatabaseManager::pool().await?;
    let found = application::find(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Application not found"))?;
    Ok(ApiResponse::success(found))
}

/// DELETE /api/admin/applications/:id
pub async fn delete(Path(id): Path<Uuid>) -> ApiResult<()> {
    let pool = DatabaseManager::pool().await?;
    if !application::delete(&pool, id).await? {
        return Err(ApiError::not_found("Application not found"));
    }
    Ok(ApiResponse::<()>::no_content())
}
