use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Request body for admin login.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    /// Administrator email address.
    #[schema(example = "admin@example.com")]
    pub email: String,
    /// Account password.
    #[schema(example = "s3cure_P@ss!")]
    pub password: String,
}

pub fn validate_login_request(payload: &LoginRequest) -> Result<(), AppError> {
    let email = payload.email.trim();
    if email.is_empty() {
        return Err(AppError::Validation("Email must not be empty".into()));
    }
    if !email.contains('@') || email.chars().count() > 254 {
        return Err(AppError::Validation("Email is not a valid address".into()));
    }
    if payload.password.is_empty() {
        return Err(AppError::Validation("Password must not be empty".into()));
    }
    Ok(())
}

/// Successful login response. The same token is also set as the `session` cookie.
#[derive(Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    /// Session token (HS256 JWT).
    pub token: String,
    #[schema(example = "admin@example.com")]
    pub email: String,
    /// Session lifetime in seconds.
    #[schema(example = 604800)]
    pub expires_in: i64,
}

/// The signed-in administrator.
#[derive(Serialize, utoipa::ToSchema)]
pub struct MeResponse {
    #[schema(example = "admin@example.com")]
    pub email: String,
}
