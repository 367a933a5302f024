use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::repository::Repository;
use crate::query::{ListQuery, Paged};

/// A job application submitted through the careers page. The resume itself
/// lives in the media host; only its URL is stored here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub cover_note: Option<String>,
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewApplication {
    pub job_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub cover_note: Option<String>,
    pub resume_url: Option<String>,
}

const TABLE: &str = "applications";
const SEARCHABLE: &[&str] = &["name", "email"];

pub async fn list(pool: &PgPool, query: &ListQuery) -> Result<Paged<Application>, DatabaseError> {
    Repository::new(TABLE, pool.clone())?.list(query, SEARCHABLE).await
}

pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<Application>, DatabaseError> {
    Repository::new(TABLE, pool.clone())?.find_by_id(id).await
}

pub async fn insert(pool: &PgPool, new: &NewApplication) -> Result<Application, DatabaseError> {
    let row = sqlx::query_as::<_, Application>(
        "INSERT INTO applications (job_id, name, email, phone, cover_note, resume_url) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(new.job_id)
    .bind(&new.name)
    .bind(&new.email)
    .bind(&new.phone)
    .bind(&new.cover_note)
    .bind(&new.resume_url)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, DatabaseError> {
    Repository::<Application>::new(TABLE, pool.clone())?.delete_by_id(id).await
}
