use axum::extract::{Path, Query};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::message::{self, ContactMessage};
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::query::{ListQuery, Paged};

/// GET /api/admin/messages
pub async fn list(Query(query): Query<ListQuery>) -> ApiResult<Paged<ContactMessage>> {
    let pool = DatabaseManager::pool().await?;
    Ok(ApiResponse::success(message::list(&pool, &query).await?))
}

/// GET /api/admin/messages/:id
pub async fn get(Path(id): Path<Uuid>) -> ApiResult<ContactMessage> {
    let pool = DatabaseManager::pool().await?;
    let found = message::find(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Message not found"))?;
    Ok(ApiResponse::success(found))
}

/// DELETE /api/admin/messages/:id
pub async fn delete(Path(id): Path<Uuid>) -> ApiResult<()> {
    let pool = DatabaseManager::pool().await?;
    if !message::delete(&pool, id).await? {
        return Err(ApiError::not_found("Message not found"));
    }
    Ok(ApiResponse::<()>::no_content())
}
