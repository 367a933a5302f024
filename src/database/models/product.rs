use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::repository::Repository;
use crate::query::{ListQuery, Paged};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub summary: String,
    pub description: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub category: String,
    pub summary: String,
    pub description: String,
    pub image_url: Option<String>,
}

const TABLE: &str = "products";
const SEARCHABLE: &[&str] = &["name", "category", "summary"];

pub async fn list(pool: &PgPool, query: &ListQuery) -> Result<Paged<Product>, DatabaseError> {
    Repository::new(TABLE, pool.clone())?.list(query, SEARCHABLE).await
}

pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<Product>, DatabaseError> {
    Repository::new(TABLE, pool.clone())?.find_by_id(id).await
}

pub async fn insert(pool: &PgPool, input: &ProductInput) -> Result<Product, DatabaseError> {
    let row = sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, category, summary, description, image_url) \
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(&input.name)
    .bind(&input.category)
    .bind(&input.summary)
    .bind(&input.description)
    .bind(&input.image_url)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: &ProductInput,
) -> Result<Option<Product>, DatabaseError> {
    let row = sqlx::query_as::<_, Product>(
        "UPDATE products SET name = $2, category = $3, summary = $4, description = $5, \
         image_url = $6, updated_at = now() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&input.name)
    .bind(&input.category)
    .bind(&input.summary)
    .bind(&input.description)
    .bind(&input.image_url)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, DatabaseError> {
    Repository::<Product>::new(TABLE, pool.clone())?.delete_by_id(id).await
}
