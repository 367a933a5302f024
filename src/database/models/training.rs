use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::repository::Repository;
use crate::query::{ListQuery, Paged};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Training {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub description: String,
    /// Free-form, e.g. "3 days" or "2 x half day".
    pub duration: String,
    pub location: String,
    pub starts_on: Option<NaiveDate>,
    pub capacity: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingInput {
    pub title: String,
    pub summary: String,
    pub description: String,
    pub duration: String,
    pub location: String,
    pub starts_on: Option<NaiveDate>,
    pub capacity: Option<i32>,
}

const TABLE: &str = "trainings";
const SEARCHABLE: &[&str] = &["title", "summary", "location"];

pub async fn list(pool: &PgPool, query: &ListQuery) -> Result<Paged<Training>, DatabaseError> {
    Repository::new(TABLE, pool.clone())?.list(query, SEARCHABLE).await
}

pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<Training>, DatabaseError> {
    Repository::new(TABLE, pool.clone())?.find_by_id(id).await
}

pub async fn insert(pool: &PgPool, input: &TrainingInput) -> Result<Training, DatabaseError> {
    let row = sqlx::query_as::<_, Training>(
        "INSERT INTO trainings (title, summary, description, duration, location, starts_on, capacity) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(&input.title)
    .bind(&input.summary)
    .bind(&input.description)
    .bind(&input.duration)
    .bind(&input.location)
    .bind(input.starts_on)
    .bind(input.capacity)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: &TrainingInput,
) -> Result<Option<Training>, DatabaseError> {
    let row = sqlx::query_as::<_, Training>(
        "UPDATE trainings SET title = $2, summary = $3, description = $4, duration = $5, \
         location = $6, starts_on = $7, capacity = $8, updated_at = now() \
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&input.title)
    .bind(&input.summary)
    .bind(&input.description)
    .bind(&input.duration)
    .bind(&input.location)
    .bind(input.starts_on)
    .bind(input.capacity)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, DatabaseError> {
    Repository::<Training>::new(TABLE, pool.clone())?.delete_by_id(id).await
}
