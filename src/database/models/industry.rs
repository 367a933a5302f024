use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::repository::Repository;
use crate::query::{ListQuery, Paged};

/// An industry the company serves, e.g. "Oil & Gas" or "Food Processing".
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Industry {
    pub id: Uuid,
    pub name: String,
    pub summary: String,
    pub description: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryInput {
    pub name: String,
    pub summary: String,
    pub description: String,
    pub image_url: Option<String>,
}

const TABLE: &str = "industries";
const SEARCHABLE: &[&str] = &["name", "summary"];

pub async fn list(pool: &PgPool, query: &ListQuery) -> Result<Paged<Industry>, DatabaseError> {
    Repository::new(TABLE, pool.clone())?.list(query, SEARCHABLE).await
}

pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<Industry>, DatabaseError> {
    Repository::new(TABLE, pool.clone())?.find_by_id(id).await
}

pub async fn insert(pool: &PgPool, input: &IndustryInput) -> Result<Industry, DatabaseError> {
    let row = sqlx::query_as::<_, Industry>(
        "INSERT INTO industries (name, summary, description, image_url) \
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(&input.name)
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
    input: &IndustryInput,
) -> Result<Option<Industry>, DatabaseError> {
    let row = sqlx::query_as::<_, Industry>(
        "UPDATE industries SET name = $2, summary = $3, description = $4, image_url = $5, \
         updated_at = now() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&input.name)
    .bind(&input.summary)
    .bind(&input.description)
    .bind(&input.image_url)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, DatabaseError> {
    Repository::<Industry>::new(TABLE, pool.clone())?.delete_by_id(id).await
}
