use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use toolboard_core::BoardError;

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self(BoardError::ToolNotFound(name.into()).into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0.downcast_ref::<BoardError>() {
            Some(BoardError::ToolNotFound(_)) => StatusCode::NOT_FOUND,
            Some(BoardError::InvalidCategory(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
