use axum::Json;
use serde::Deserialize;

use crate::database::manager::DatabaseManager;
use crate::database::models::message::{self, ContactMessage, NewContactMessage};
use crate::handlers::{require_email, require_fields};
use crate::middleware::response::{ApiResponse, ApiResult};

#[derive(Debug, Deserialize)]
pub struct ContactSubmit {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// POST /api/contact - general enquiry form
pub async fn submit(Json(payload): Json<ContactSubmit>) -> ApiResult<ContactMessage> {
    require_fields(&[
        ("name", &payload.name),
        ("email", &payload.email),
        ("subject", &payload.subject),
        ("message", &payload.message),
    ])?;
    require_email(&payload.email)?;

    let pool = DatabaseManager::pool().await?;
    let new = NewContactMessage {
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        subject: payload.subject,
        message: payload.message,
    };
    let saved = message::insert(&pool, &new).await?;

    Ok(ApiResponse::created(saved))
}
