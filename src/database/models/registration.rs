use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::repository::Repository;
use crate::query::{ListQuery, Paged};

/// A training course registration.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Registration {
    pub id: Uuid,
    pub training_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub training_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
}

const TABLE: &str = "registrations";
const SEARCHABLE: &[&str] = &["name", "email", "company"];

pub async fn list(pool: &PgPool, query: &ListQuery) -> Result<Paged<Registration>, DatabaseError> {
    Repository::new(TABLE, pool.clone())?.list(query, SEARCHABLE).await
}

pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<Registration>, DatabaseError> {
    Repository::new(TABLE, pool.clone())?.find_by_id(id).await
}

pub async fn insert(pool: &PgPool, new: &NewRegistration) -> Result<Registration, DatabaseError> {
    let row = sqlx::query_as::<_, Registration>(
        "INSERT INTO registrations (training_id, name, email, phone, company) \
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(new.training_id)
    .bind(&new.name)
    .bind(&new.email)
    .bind(&new.phone)
    .bind(&new.company)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, DatabaseError> {
    Repository::<Registration>::new(TABLE, pool.clone())?.delete_by_id(id).await
}
