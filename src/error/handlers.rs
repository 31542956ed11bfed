//! Error handlers
//!
//! Converts storage failures into HTTP responses.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use std::fmt;

use crate::error::types::StorageError;

/// Shape of an error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    /// `{"error": "..."}`
    Json,
    /// Bare message
    Text,
}

/// Error returned by a request handler
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
    format: BodyFormat,
}

impl ApiError {
    pub fn json(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            format: BodyFormat::Json,
        }
    }

    pub fn text(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            format: BodyFormat::Text,
        }
    }

    pub fn not_found() -> Self {
        Self::json(StatusCode::NOT_FOUND, "Note not found")
    }

    pub fn invalid_name() -> Self {
        Self::json(StatusCode::BAD_REQUEST, "Invalid note name")
    }

    pub fn invalid_body() -> Self {
        Self::json(StatusCode::BAD_REQUEST, "Invalid request body")
    }

    pub fn payload_too_large() -> Self {
        Self::json(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status.as_u16(), self.message)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        match self.format {
            BodyFormat::Json => HttpResponse::build(self.status)
                .json(serde_json::json!({ "error": self.message })),
            BodyFormat::Text => HttpResponse::build(self.status)
                .content_type(ContentType::plaintext())
                .body(self.message),
        }
    }
}

/// Map a storage error on a `{name}` endpoint: a bad name is a client error,
/// every other failure reads as absence.
pub fn not_found_unless_invalid(err: &StorageError) -> ApiError {
    match err {
        StorageError::InvalidName(_) => ApiError::invalid_name(),
        _ => ApiError::not_found(),
    }
}

/// Map a storage error raised while creating a note
pub fn create_error(err: &StorageError) -> ApiError {
    match err {
        StorageError::InvalidName(_) => ApiError::invalid_name(),
        StorageError::AlreadyExists(_) => {
            ApiError::json(StatusCode::BAD_REQUEST, "Note already exists")
        }
        other => {
            error!("Failed to write note: {other}");
            ApiError::json(StatusCode::INTERNAL_SERVER_ERROR, "Error writing note")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::types::NameError;
    use std::io;

    #[test]
    fn storage_errors_on_name_endpoints_become_not_found() {
        let err = StorageError::Io(io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(not_found_unless_invalid(&err).status_code(), StatusCode::NOT_FOUND);

        let err = StorageError::InvalidName(NameError::Empty);
        let api = not_found_unless_invalid(&err);
        assert_eq!(api.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(api.message, "Invalid note name");
    }

    #[test]
    fn create_conflict_is_bad_request() {
        let api = create_error(&StorageError::AlreadyExists("a".into()));
        assert_eq!(api.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(api.message, "Note already exists");

        let api = create_error(&StorageError::Io(io::Error::other("disk full")));
        assert_eq!(api.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn text_errors_have_bare_bodies() {
        let api = ApiError::text(StatusCode::BAD_REQUEST, "Text is required");
        assert_eq!(api.format, BodyFormat::Text);
        assert_eq!(api.to_string(), "400 Text is required");
    }
}
