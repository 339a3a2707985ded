pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body of every error response.
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Product not found with id=42"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Field-level validation errors, keyed by field name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: error_code.code(),
            error: error_code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Application error type that renders as an [`ErrorResponse`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// HTTP status and error code this error renders with
    pub fn status_and_code(&self) -> (StatusCode, ErrorCode) {
        match self {
            AppError::JsonExtractorRejection(e) => match e {
                JsonRejection::MissingJsonContentType(_) => (
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    ErrorCode::UnsupportedMediaType,
                ),
                JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                    (StatusCode::BAD_REQUEST, ErrorCode::InvalidJson)
                }
                other => (other.status(), ErrorCode::InvalidJson),
            },
            AppError::ValidationError(_) => (StatusCode::BAD_REQUEST, ErrorCode::ValidationError),
            AppError::InvalidId(_) => (StatusCode::BAD_REQUEST, ErrorCode::InvalidId),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NotFound),
            AppError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(error_code = code.code(), "JSON extraction error: {:?}", e);
                ErrorResponse::new(code, e.body_text())
            }
            AppError::ValidationError(e) => {
                tracing::info!(error_code = code.code(), "Validation error: {}", e);
                let details = serde_json::to_value(&e).unwrap_or(serde_json::Value::Null);
                ErrorResponse::new(code, code.default_message()).with_details(details)
            }
            AppError::InvalidId(raw) => {
                tracing::info!(error_code = code.code(), raw_id = %raw, "Invalid id");
                ErrorResponse::new(code, format!("Invalid id: {raw}"))
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                ErrorResponse::new(code, msg)
            }
            AppError::InternalServerError(msg) => {
                // Internal detail stays in the logs.
                tracing::error!(error_code = code.code(), "Internal server error: {}", msg);
                ErrorResponse::new(code, code.default_message())
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Build an error response without going through [`AppError`].
///
/// Used by the router fallbacks, which have no error value to convert.
pub fn error_response(status: StatusCode, error_code: ErrorCode) -> Response {
    let body = ErrorResponse::new(error_code, error_code.default_message());
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use validator::{Validate, ValidationError};

    #[derive(Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
    }

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let response = AppError::NotFound("Product not found with id=7".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_of(response).await;
        assert_eq!(body.code, 1004);
        assert_eq!(body.error, "NOT_FOUND");
        assert_eq!(body.message, "Product not found with id=7");
        assert!(body.details.is_none());
    }

    #[tokio::test]
    async fn test_validation_error_lists_fields() {
        let errors = Payload {
            name: String::new(),
        }
        .validate()
        .unwrap_err();

        let response = AppError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert_eq!(body.error, "VALIDATION_ERROR");
        let details = body.details.unwrap();
        assert_eq!(details["name"][0]["message"], "Name is required");
        assert_eq!(details["name"][0]["code"], "length");
    }

    #[tokio::test]
    async fn test_custom_validation_error_serializes_code() {
        let mut errors = ValidationErrors::new();
        errors.add("price", ValidationError::new("price_scale"));

        let body = body_of(AppError::ValidationError(errors).into_response()).await;
        assert_eq!(body.details.unwrap()["price"][0]["code"], "price_scale");
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response =
            AppError::InternalServerError("connection reset by peer".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert_eq!(body.error, "INTERNAL_ERROR");
        assert_eq!(body.message, "An internal server error occurred");
    }

    #[tokio::test]
    async fn test_error_response_uses_default_message() {
        let response = error_response(StatusCode::METHOD_NOT_ALLOWED, ErrorCode::MethodNotAllowed);
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body = body_of(response).await;
        assert_eq!(body.code, 1005);
        assert_eq!(body.message, ErrorCode::MethodNotAllowed.default_message());
    }

    #[test]
    fn test_invalid_id_is_bad_request() {
        assert_eq!(
            AppError::InvalidId("abc".into()).status_and_code(),
            (StatusCode::BAD_REQUEST, ErrorCode::InvalidId)
        );
    }
}
