use axum::extract::{Path, Query};
use axum::Json;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::job::{self, JobInput, JobPosting};
use crate::error::ApiError;
use crate::handlers::require_fields;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::query::{ListQuery, Paged};

/// GET /api/admin/jobs - includes closed postings
pub async fn list(Query(query): Query<ListQuery>) -> ApiResult<Paged<JobPosting>> {
    let pool = DatabaseManager::pool().await?;
    Ok(ApiResponse::success(job::list(&pool, &query).await?))
}

/// POST /api/admin/jobs
pub async fn create(Json(input): Json<JobInput>) -> ApiResult<JobPosting> {
    validate(&input)?;
    let pool = DatabaseManager::pool().await?;
    Ok(ApiResponse::created(job::insert(&pool, &input).await?))
}

/// GET /api/admin/jobs/:id
pub async fn get(Path(id): Path<Uuid>) -> ApiResult<JobPosting> {
    let pool = DatabaseManager::pool().await?;
    let found = job::find(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Job posting not found"))?;
    Ok(ApiResponse::success(found))
}

/// PUT /api/admin/jobs/:id - also used to open/close a posting
pub async fn update(Path(id): Path<Uuid>, Json(input): Json<JobInput>) -> ApiResult<JobPosting> {
    validate(&input)?;
    let pool = DatabaseManager::pool().await?;
    let updated = job::update(&pool, id, &input)
        .await?
        .ok_or_else(|| ApiError::not_found("Job posting not found"))?;
    Ok(ApiResponse::success(updated))
}

/// DELETE /api/admin/jobs/:id - cascades to its applications
pub async fn delete(Path(id): Path<Uuid>) -> ApiResult<()> {
    let pool = DatabaseManager::pool().await?;
    if !job::delete(&pool, id).await? {
        return Err(ApiError::not_found("Job posting not found"));
    }
    Ok(ApiResponse::<()>::no_content())
}

fn validate(input: &JobInput) -> Result<(), ApiError> {
    require_fields(&[
        ("title", &input.title),
        ("department", &input.department),
        ("location", &input.location),
        ("employment_type", &input.employment_type),
        ("summary", &input.summary),
        ("description", &input.description),
    ])
}
