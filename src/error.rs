use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Request-level failures. Both are answered directly with a plain-text body.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The endpoint exists but does not accept the request method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The request body is missing or is not the expected JSON.
    #[error("Invalid request body")]
    InvalidInput,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

/// Startup failures. Any of these ends the process with a non-zero status.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("server terminated: {0}")]
    Run(#[from] std::io::Error),
}
