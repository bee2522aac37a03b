//! Mapping of domain errors to HTTP responses

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use tu_core::errors::DomainError;
use tu_shared::types::ErrorBody;

/// HTTP face of a failed request
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Body exceeded the configured payload limit
    #[error("Body too large")]
    PayloadTooLarge,
}

impl ApiError {
    /// Classify a failure to read the request body.
    ///
    /// Overflow keeps its 413; every other read failure is treated as a body
    /// that is not JSON.
    pub fn from_payload_error(err: actix_web::Error) -> Self {
        if err.as_response_error().status_code() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::Domain(DomainError::MalformedBody)
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Domain(_) => StatusCode::BAD_GATEWAY,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody::new(self.to_string()))
    }
}
