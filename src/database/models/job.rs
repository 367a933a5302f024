use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, Row};
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::repository::{like_pattern, Repository};
use crate::query::{ListQuery, Paged};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub department: String,
    pub location: String,
    /// Free-form, e.g. "full-time", "contract".
    pub employment_type: String,
    pub summary: String,
    pub description: String,
    pub is_open: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobInput {
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub summary: String,
    pub description: String,
    #[serde(default = "default_open")]
    pub is_open: bool,
}

fn default_open() -> bool {
    true
}

const TABLE: &str = "jobs";
const SEARCHABLE: &[&str] = &["title", "department", "location"];

/// All postings, open and closed. Admin view.
pub async fn list(pool: &PgPool, query: &ListQuery) -> Result<Paged<JobPosting>, DatabaseError> {
    Repository::new(TABLE, pool.clone())?.list(query, SEARCHABLE).await
}

/// Open postings only. Public careers page.
pub async fn list_open(
    pool: &PgPool,
    query: &ListQuery,
) -> Result<Paged<JobPosting>, DatabaseError> {
    let (sql, count_sql, pattern) = match query.term() {
        Some(term) => (
            "SELECT * FROM jobs WHERE is_open AND (title ILIKE $1 OR department ILIKE $1 OR location ILIKE $1) \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
            "SELECT COUNT(*) AS count FROM jobs WHERE is_open AND (title ILIKE $1 OR department ILIKE $1 OR location ILIKE $1)",
            Some(like_pattern(term)),
        ),
        None => (
            "SELECT * FROM jobs WHERE is_open ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            "SELECT COUNT(*) AS count FROM jobs WHERE is_open",
            None,
        ),
    };

    let mut rows_query = sqlx::query_as::<_, JobPosting>(sql);
    let mut count_query = sqlx::query(count_sql);
    if let Some(pattern) = &pattern {
        rows_query = rows_query.bind(pattern);
        count_query = count_query.bind(pattern);
    }

    let items = rows_query
        .bind(query.per_page())
        .bind(query.offset())
        .fetch_all(pool)
        .await?;
    let total: i64 = count_query.fetch_one(pool).await?.try_get("count")?;

    Ok(Paged {
        items,
        page: query.page(),
        per_page: query.per_page(),
        total,
    })
}

pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<JobPosting>, DatabaseError> {
    Repository::new(TABLE, pool.clone())?.find_by_id(id).await
}

pub async fn insert(pool: &PgPool, input: &JobInput) -> Result<JobPosting, DatabaseError> {
    let row = sqlx::query_as::<_, JobPosting>(
        "INSERT INTO jobs (title, department, location, employment_type, summary, description, is_open) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(&input.title)
    .bind(&input.department)
    .bind(&input.location)
    .bind(&input.employment_type)
    .bind(&input.summary)
    .bind(&input.description)
    .bind(input.is_open)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: &JobInput,
) -> Result<Option<JobPosting>, DatabaseError> {
    let row = sqlx::query_as::<_, JobPosting>(
        "UPDATE jobs SET title = $2, department = $3, location = $4, employment_type = $5, \
         summary = $6, description = $7, is_open = $8, updated_at = now() \
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&input.title)
    .bind(&input.department)
    .bind(&input.location)
    .bind(&input.employment_type)
    .bind(&input.summary)
    .bind(&input.description)
    .bind(input.is_open)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, DatabaseError> {
    Repository::<JobPosting>::new(TABLE, pool.clone())?.delete_by_id(id).await
}
