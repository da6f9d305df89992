//! Mapping from domain errors to structured HTTP responses.
//!
//! Every endpoint resolves failures to `{error, message}` JSON with a
//! stable kind string, so clients can branch on `error` without parsing
//! prose.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domains::bookings::BookingError;
use crate::domains::events::EventError;

/// Structured error payload returned by every endpoint
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            kind,
            message: message.into(),
        }
    }

    pub fn bad_request(kind: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, kind, message)
    }

    pub fn not_found(kind: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, kind, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.kind,
                message: self.message,
            }),
        )
            .into_response()
    }
}

impl From<EventError> for ApiError {
    fn from(e: EventError) -> Self {
        let (status, kind) = match &e {
            EventError::MissingField(_) => (StatusCode::BAD_REQUEST, "missing_field"),
            EventError::InvalidDate(_) => (StatusCode::BAD_REQUEST, "invalid_date"),
            EventError::InvalidTime(_) => (StatusCode::BAD_REQUEST, "invalid_time"),
            EventError::InvalidMode(_) => (StatusCode::BAD_REQUEST, "invalid_mode"),
            EventError::DuplicateSlug(_) => (StatusCode::CONFLICT, "duplicate_slug"),
            EventError::ImageTooLarge(_) => (StatusCode::BAD_REQUEST, "image_too_large"),
            EventError::ImageUpload(_) => (StatusCode::BAD_GATEWAY, "image_upload_failed"),
            EventError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };

        let message = match &e {
            // Storage details stay in the logs, not the response
            EventError::Database(inner) => {
                tracing::error!(error = %inner, "Event operation failed");
                "Internal error occurred".to_string()
            }
            _ => e.to_string(),
        };

        Self {
            status,
            kind,
            message,
        }
    }
}

impl From<BookingError> for ApiError {
    fn from(e: BookingError) -> Self {
        let (status, kind) = match &e {
            BookingError::InvalidEmail(_) => (StatusCode::BAD_REQUEST, "invalid_email"),
            BookingError::AlreadyBooked => (StatusCode::CONFLICT, "already_booked"),
            BookingError::UnknownEvent(_) => (StatusCode::NOT_FOUND, "unknown_event"),
            BookingError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };

        let message = match &e {
            BookingError::Database(inner) => {
                tracing::error!(error = %inner, "Booking operation failed");
                "Internal error occurred".to_string()
            }
            _ => e.to_string(),
        };

        Self {
            status,
            kind,
            message,
        }
    }
}
