use axum::extract::{Path, Query};
use axum::Json;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::training::{self, Training, TrainingInput};
use crate::error::ApiError;
use crate::handlers::require_fields;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::query::{ListQuery, Paged};

/// GET /api/admin/trainings
pub async fn list(Query(query): Query<ListQuery>) -> ApiResult<Paged<Training>> {
    let pool = DatabaseManager::pool().await?;
    Ok(ApiResponse::success(training::list(&pool, &query).await?))
}

/// POST /api/admin/trainings
pub async fn create(Json(input): Json<TrainingInput>) -> ApiResult<Training> {
    validate(&input)?;
    let pool = DatabaseManager::pool().await?;
    Ok(ApiResponse::created(training::insert(&pool, &input).await?))
}

/// GET /api/admin/trainings/:id
pub async fn get(Path(id): Path<Uuid>) -> ApiResult<Training> {
    let pool = DatabaseManager::pool().await?;
    let found = training::find(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Training not found"))?;
    Ok(ApiResponse::success(found))
}

/// PUT /api/admin/trainings/:id
pub async fn update(
    Path(id): Path<Uuid>,
    Json(input): Json<TrainingInput>,
) -> ApiResult<Training> {
    validate(&input)?;
    let pool = DatabaseManager::pool().await?;
    let updated = training::update(&pool, id, &input)
        .await?
        .ok_or_else(|| ApiError::not_found("Training not found"))?;
    Ok(ApiResponse::success(updated))
}

/// DELETE /api/admin/trainings/:id
pub async fn delete(Path(id): Path<Uuid>) -> ApiResult<()> {
    let pool = DatabaseManager::pool().await?;
    if !training::delete(&pool, id).await? {
        return Err(ApiError::not_found("Training not found"));
    }
    Ok(ApiResponse::<()>::no_content())
}

fn validate(input: &TrainingInput) -> Result<(), ApiError> {
    require_fields(&[
        ("title", &input.title),
        ("summary", &input.summary),
        ("description", &input.description),
        ("duration", &input.duration),
        ("location", &input.location),
    ])
}
