//! JWT issuing and the auth middlewares
//!
//! `authenticate` runs on every request and only records who the caller is.
//! The `ensure_*` middlewares are layered onto individual routes and reject
//! callers that lack the required claims.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use config::AuthConfig;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::state::AppState;
use crate::errors::JoblyError;

/// Token payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
    pub exp: i64,
}

/// Sign an HS256 token for `username`, valid for `auth.token_ttl_seconds`
pub fn create_token(username: &str, is_admin: bool, auth: &AuthConfig) -> Result<String, JoblyError> {
    let claims = Claims {
        username: username.to_string(),
        is_admin,
        exp: Utc::now().timestamp() + auth.token_ttl_seconds as i64,
    };
    let key = EncodingKey::from_secret(auth.secret_key.as_bytes());
    Ok(encode(&Header::new(Algorithm::HS256), &claims, &key)?)
}

/// Verify a token's signature and expiry
pub fn verify_token(token: &str, auth: &AuthConfig) -> Result<Claims, JoblyError> {
    let key = DecodingKey::from_secret(auth.secret_key.as_bytes());
    let data = decode::<Claims>(token, &key, &Validation::new(Algorithm::HS256))?;
    Ok(data.claims)
}

/// Strip a case-insensitive `Bearer ` prefix
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    if scheme.eq_ignore_ascii_case("bearer") {
        Some(token.trim())
    } else {
        None
    }
}

/// Store verified claims in the request extensions. A missing or invalid
/// token is not an error here.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .map(str::to_owned);

    if let Some(token) = token {
        crate::trace_log!("verifying bearer token");
        match verify_token(&token, &state.auth) {
            Ok(claims) => {
                tracing::debug!(username = %claims.username, "authenticated");
                request.extensions_mut().insert(claims);
            }
            Err(e) => tracing::warn!(error = %e, "ignoring invalid token"),
        }
    }
    next.run(request).await
}

pub async fn ensure_logged_in(request: Request, next: Next) -> Result<Response, JoblyError> {
    if request.extensions().get::<Claims>().is_none() {
        return Err(JoblyError::Unauthorized);
    }
    Ok(next.run(request).await)
}

pub async fn ensure_admin(request: Request, next: Next) -> Result<Response, JoblyError> {
    let is_admin = request
        .extensions()
        .get::<Claims>()
        .is_some_and(|claims| claims.is_admin);
    if !is_admin {
        return Err(JoblyError::Unauthorized);
    }
    Ok(next.run(request).await)
}
