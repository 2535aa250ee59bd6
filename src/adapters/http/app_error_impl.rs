use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedRequest(_) | AppError::InvalidEmail | AppError::DuplicateEmail => {
                StatusCode::BAD_REQUEST
            }
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Store failures are logged at the persistence adapter.
        tracing::debug!(error = %self, status = status.as_u16(), "Request failed");

        error_resp(status, self.code(), self.public_message())
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: &str) -> Response {
    let body = serde_json::json!({ "code": code.as_str(), "error": message });
    (status, Json(body)).into_response()
}
