use axum::extract::{Path, Query};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::application::{self, Application, NewApplication};
use crate::database::models::job::{self, JobPosting};
use crate::error::ApiError;
use crate::handlers::{require_email, require_fields};
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::query::{ListQuery, Paged};
use crate::services::media::MediaClient;

/// GET /api/jobs - open postings only
pub async fn list(Query(query): Query<ListQuery>) -> ApiResult<Paged<JobPosting>> {
    let pool = DatabaseManager::pool().await?;
    let page = job::list_open(&pool, &query).await?;
    Ok(ApiResponse::success(page))
}

/// GET /api/jobs/:id - closed postings are not exposed here
pub async fn get(Path(id): Path<Uuid>) -> ApiResult<JobPosting> {
    let pool = DatabaseManager::pool().await?;
    let found = job::find(&pool, id)
        .await?
        .filter(|posting| posting.is_open)
        .ok_or_else(|| ApiError::not_found("Job posting not found"))?;
    Ok(ApiResponse::success(found))
}

#[derive(Debug, Deserialize)]
pub struct ApplicationSubmit {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub cover_note: Option<String>,
    pub resume: Option<ResumeUpload>,
}

#[derive(Debug, Deserialize)]
pub struct ResumeUpload {
    pub filename: String,
    /// Data URI, e.g. `data:application/pdf;base64,...`. Forwarded to the
    /// media host as-is; only the resulting URL is persisted.
    pub content: String,
}

/// POST /api/jobs/:id/applications - application form on the careers page
pub async fn apply(
    Path(id): Path<Uuid>,
    Json(payload): Json<ApplicationSubmit>,
) -> ApiResult<Application> {
    require_fields(&[("name", &payload.name), ("email", &payload.email)])?;
    require_email(&payload.email)?;

    let pool = DatabaseManager::pool().await?;
    let posting = job::find(&pool, id)
        .await?
        .filter(|posting| posting.is_open)
        .ok_or_else(|| ApiError::not_found("Job posting not found"))?;

    let resume_url = match &payload.resume {
        Some(upload) => {
            let media = MediaClient::from_config()?;
            Some(media.upload_resume(&upload.content, &upload.filename).await?)
        }
        None => None,
    };

    let new = NewApplication {
        job_id: posting.id,
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        cover_note: payload.cover_note,
        resume_url,
    };
    let saved = application::insert(&pool, &new).await?;

    tracing::info!("new application for job posting '{}'", posting.title);
    Ok(ApiResponse::created(saved))
}
