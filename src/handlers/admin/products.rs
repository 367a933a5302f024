use axum::extract::{Path, Query};
use axum::Json;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::product::{self, Product, ProductInput};
use crate::error::ApiError;
use crate::handlers::require_fields;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::query::{ListQuery, Paged};

/// GET /api/admin/products
pub async fn list(Query(query): Query<ListQuery>) -> ApiResult<Paged<Product>> {
    let pool = DatabaseManager::pool().await?;
    Ok(ApiResponse::success(product::list(&pool, &query).await?))
}

/// POST /api/admin/products
pub async fn create(Json(input): Json<ProductInput>) -> ApiResult<Product> {
    validate(&input)?;
    let pool = DatabaseManager::pool().await?;
    Ok(ApiResponse::created(product::insert(&pool, &input).await?))
}

/// GET /api/admin/products/:id
pub async fn get(Path(id): Path<Uuid>) -> ApiResult<Product> {
    let pool = DatabaseManager::pool().await?;
    let found = product::find(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;
    Ok(ApiResponse::success(found))
}

/// PUT /api/admin/products/:id
pub async fn update(Path(id): Path<Uuid>, Json(input): Json<ProductInput>) -> ApiResult<Product> {
    validate(&input)?;
    let pool = DatabaseManager::pool().await?;
    let updated = product::update(&pool, id, &input)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;
    Ok(ApiResponse::success(updated))
}

/// DELETE /api/admin/products/:id
pub async fn delete(Path(id): Path<Uuid>) -> ApiResult<()> {
    let pool = DatabaseManager::pool().await?;
    if !product::delete(&pool, id).await? {
        return Err(ApiError::not_found("Product not found"));
    }
    Ok(ApiResponse::<()>::no_content())
}

fn validate(input: &ProductInput) -> Result<(), ApiError> {
    require_fields(&[
        ("name", &input.name),
        ("category", &input.category),
        ("summary", &input.summary),
        ("description", &input.description),
    ])
}
