use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::card::CardError;
use crate::phrases::PhraseError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Card(#[from] CardError),

    #[error("Phrase source error: {0}")]
    Phrases(#[from] PhraseError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Card(e @ CardError::InsufficientPhrases { .. }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INSUFFICIENT_PHRASES",
                e.to_string(),
            ),
            AppError::Phrases(e) => {
                tracing::error!("Phrase source error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "PHRASE_SOURCE_ERROR",
                    "The phrase source could not be loaded".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
