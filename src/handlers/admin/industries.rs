use axum::extract::{Path, Query};
use axum::Json;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::industry::{self, Industry, IndustryInput};
use crate::error::ApiError;
use crate::handlers::require_fields;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::query::{ListQuery, Paged};

/// GET /api/admin/industries
pub async fn list(Query(query): Query<ListQuery>) -> ApiResult<Paged<Industry>> {
    let pool = DatabaseManager::pool().await?;
    Ok(ApiResponse::success(industry::list(&pool, &query).await?))
}

/// POST /api/admin/industries
pub async fn create(Json(input): Json<IndustryInput>) -> ApiResult<Industry> {
    validate(&input)?;
    let pool = DatabaseManager::pool().await?;
    Ok(ApiResponse::created(industry::insert(&pool, &input).await?))
}

/// GET /api/admin/industries/:id
pub async fn get(Path(id): Path<Uuid>) -> ApiResult<Industry> {
    let pool = DatabaseManager::pool().await?;
    let found = industry::find(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Industry not found"))?;
    Ok(ApiResponse::success(found))
}

/// PUT /api/admin/industries/:id
pub async fn update(
    Path(id): Path<Uuid>,
    Json(input): Json<IndustryInput>,
) -> ApiResult<Industry> {
    validate(&input)?;
    let pool = DatabaseManager::pool().await?;
    let updated = industry::update(&pool, id, &input)
        .await?
        .ok_or_else(|| ApiError::not_found("Industry not found"))?;
    Ok(ApiResponse::success(updated))
}

/// DELETE /api/admin/industries/:id
pub async fn delete(Path(id): Path<Uuid>) -> ApiResult<()> {
    let pool = DatabaseManager::pool().await?;
    if !industry::delete(&pool, id).await? {
        return Err(ApiError::not_found("Industry not found"));
    }
    Ok(ApiResponse::<()>::no_content())
}

fn validate(input: &IndustryInput) -> Result<(), ApiError> {
    require_fields(&[
        ("name", &input.name),
        ("summary", &input.summary),
        ("description", &input.description),
    ])
}
