use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::{header, request::Parts};
use axum_extra::extract::CookieJar;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt;

/// Name of the HttpOnly cookie carrying the admin session token.
pub const SESSION_COOKIE: &str = "session";

/// The signed-in administrator, from the `session` cookie or an
/// `Authorization: Bearer <token>` header.
///
/// Add this as a handler parameter to require an admin session.
pub struct AdminUser {
    pub email: String,
}

fn session_token(parts: &Parts) -> Result<String, AppError> {
    if let Some(cookie) = CookieJar::from_headers(&parts.headers).get(SESSION_COOKIE) {
        return Ok(cookie.value().to_string());
    }

    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::TokenMissing)?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::to_string)
        .ok_or(AppError::TokenInvalid)
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(parts)?;
        let claims = jwt::verify(&token, &state.config.auth.jwt_secret)
            .map_err(|_| AppError::TokenInvalid)?;

        // Tokens signed for a previous admin address are rejected.
        if !claims.sub.eq_ignore_ascii_case(&state.config.auth.admin_email) {
            return Err(AppError::TokenInvalid);
        }

        Ok(AdminUser { email: claims.sub })
    }
}

/// Missing or invalid sessions become `None`, for pages that redirect instead
/// of rejecting.
impl OptionalFromRequestParts<AppState> for AdminUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(<AdminUser as FromRequestParts<AppState>>::from_request_parts(parts, state)
            .await
            .ok())
    }
}
