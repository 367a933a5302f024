use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::repository::Repository;
use crate::query::{ListQuery, Paged};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

const TABLE: &str = "messages";
const SEARCHABLE: &[&str] = &["name", "email", "subject"];

pub async fn list(
    pool: &PgPool,
    query: &ListQuery,
) -> Result<Paged<ContactMessage>, DatabaseError> {
    Repository::new(TABLE, pool.clone())?.list(query, SEARCHABLE).await
}

pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<ContactMessage>, DatabaseError> {
    Repository::new(TABLE, pool.clone())?.find_by_id(id).await
}

pub async fn insert(pool: &PgPool, new: &NewContactMessage) -> Result<ContactMessage, DatabaseError> {
    let row = sqlx::query_as::<_, ContactMessage>(
        "INSERT INTO messages (name, email, phone, subject, message) \
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(&new.name)
    .bind(&new.email)
    .bind(&new.phone)
    .bind(&new.subject)
    .bind(&new.message)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, DatabaseError> {
    Repository::<ContactMessage>::new(TABLE, pool.clone())?.delete_by_id(id).await
}
