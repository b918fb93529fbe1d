use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor whose rejections are `VALIDATION_ERROR` responses.
pub struct AppJson<T>(pub T);

fn rejection_message(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Expected 'Content-Type: application/json'".to_string()
        }
        JsonRejection::JsonSyntaxError(e) => format!("Malformed JSON body: {}", e.body_text()),
        JsonRejection::JsonDataError(e) => format!("Invalid request body: {}", e.body_text()),
        other => format!("Unreadable request body: {}", other.body_text()),
    }
}

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(rejection_message(&e)))?;
        Ok(AppJson(value))
    }
}
