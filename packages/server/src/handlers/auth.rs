use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::{AdminUser, SESSION_COOKIE};
use crate::extractors::json::AppJson;
use crate::models::auth::{LoginRequest, LoginResponse, MeResponse, validate_login_request};
use crate::state::AppState;
use crate::utils::{hash, jwt};

fn session_cookie(state: &AppState, token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.site.base_url.starts_with("https://"))
        .path("/")
        .max_age(time::Duration::hours(state.config.auth.session_ttl_hours))
        .build()
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    operation_id = "login",
    summary = "Sign in as the administrator",
    description = "Checks the credentials against the configured administrator account. \
        On success the session token is returned and also set as an HttpOnly `session` cookie.",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = LoginResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Wrong email or password (INVALID_CREDENTIALS)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, jar, payload), fields(email = %payload.email))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_login_request(&payload)?;

    let auth = &state.config.auth;
    let email = payload.email.trim();

    // The hash is checked even when the email does not match.
    let password_ok = hash::verify_password(&payload.password, &auth.admin_password_hash)
        .map_err(|e| AppError::Internal(format!("Password verify error: {e}")))?;
    if !password_ok || !email.eq_ignore_ascii_case(&auth.admin_email) {
        tracing::warn!("Rejected admin login");
        return Err(AppError::InvalidCredentials);
    }

    let token = jwt::sign(&auth.admin_email, &auth.jwt_secret, auth.session_ttl_hours)
        .map_err(|e| AppError::Internal(format!("JWT sign error: {e}")))?;

    tracing::info!("Admin signed in");

    let response = LoginResponse {
        token: token.clone(),
        email: auth.admin_email.clone(),
        expires_in: auth.session_ttl_hours * 3600,
    };
    Ok((jar.add(session_cookie(&state, token)), Json(response)))
}

#[utoipa::path(
    post,
    path = "/logout",
    tag = "Auth",
    operation_id = "logout",
    summary = "Sign out",
    description = "Clears the session cookie. Bearer tokens stay valid until they expire.",
    responses(
        (status = 204, description = "Signed out"),
    ),
)]
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/me",
    tag = "Auth",
    operation_id = "getMe",
    summary = "Current session",
    responses(
        (status = 200, description = "Signed-in administrator", body = MeResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
pub async fn me(admin: AdminUser) -> Json<MeResponse> {
    Json(MeResponse { email: admin.email })
}
