use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use sha2::{Digest, Sha256};

use crate::config;
use crate::error::ApiError;
use crate::middleware::gate::{ADMIN_SESSION_COOKIE, SESSION_AUTHENTICATED};
use crate::middleware::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/auth/login - check admin credentials and establish the session
///
/// On success the session cookie is set to the authenticated marker that the
/// gate recognizes. On failure the response is a generic 401 that does not
/// reveal which field was wrong.
pub async fn login(Json(payload): Json<LoginRequest>) -> Result<Response, ApiError> {
    if !credentials_match(&payload.username, &payload.password) {
        tracing::info!("rejected admin login attempt");
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let headers = [(header::SET_COOKIE, session_cookie(true))];
    Ok((headers, ApiResponse::success(json!({ "authenticated": true }))).into_response())
}

/// POST /api/auth/logout - clear the session cookie
pub async fn logout() -> Response {
    let headers = [(header::SET_COOKIE, session_cookie(false))];
    (headers, ApiResponse::success(json!({ "authenticated": false }))).into_response()
}

fn credentials_match(username: &str, password: &str) -> bool {
    let security = &config::config().security;

    // No digest configured means login is disabled, not open
    if security.admin_password_sha256.is_empty() {
        return false;
    }

    let digest = format!("{:x}", Sha256::digest(password.as_bytes()));
    username == security.admin_username && digest == security.admin_password_sha256
}

fn session_cookie(establish: bool) -> String {
    let mut cookie = if establish {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            ADMIN_SESSION_COOKIE, SESSION_AUTHENTICATED
        )
    } else {
        format!(
            "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
            ADMIN_SESSION_COOKIE
        )
    };

    if config::config().security.require_https {
        cookie.push_str("; Secure");
    }

    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_carries_the_sentinel() {
        let cookie = session_cookie(true);
        assert!(cookie.starts_with("admin-session=authenticated;"));
        assert!(cookie.contains("HttpOnly"));

        let cleared = session_cookie(false);
        assert!(cleared.starts_with("admin-session=;"));
        assert!(cleared.contains("Max-Age=0"));
    }
}
