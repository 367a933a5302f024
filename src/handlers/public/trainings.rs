use axum::extract::{Path, Query};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::registration::{self, NewRegistration, Registration};
use crate::database::models::training::{self, Training};
use crate::error::ApiError;
use crate::handlers::{require_email, require_fields};
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::query::{ListQuery, Paged};

/// GET /api/trainings
pub async fn list(Query(query): Query<ListQuery>) -> ApiResult<Paged<Training>> {
    let pool = DatabaseManager::pool().await?;
    let page = training::list(&pool, &query).await?;
    Ok(ApiResponse::success(page))
}

/// GET /api/trainings/:id
pub async fn get(Path(id): Path<Uuid>) -> ApiResult<Training> {
    let pool = DatabaseManager::pool().await?;
    let found = training::find(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Training not found"))?;
    Ok(ApiResponse::success(found))
}

#[derive(Debug, Deserialize)]
pub struct RegistrationSubmit {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
}

/// POST /api/trainings/:id/registrations - course sign-up form
pub async fn register(
    Path(id): Path<Uuid>,
    Json(payload): Json<RegistrationSubmit>,
) -> ApiResult<Registration> {
    require_fields(&[("name", &payload.name), ("email", &payload.email)])?;
    require_email(&payload.email)?;

    let pool = DatabaseManager::pool().await?;
    let training = training::find(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Training not found"))?;

    let new = NewRegistration {
        training_id: training.id,
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        company: payload.company,
    };
    let saved = registration::insert(&pool, &new).await?;

    tracing::info!("new registration for training '{}'", training.title);
    Ok(ApiResponse::created(saved))
}
