//! Application error taxonomy and HTTP response mapping.
//!
//! Three failure classes exist: the durable store failed ([`AppError::Storage`]),
//! the cache failed ([`AppError::Cache`]), or the requested mapping does not
//! exist ([`AppError::NotFound`]). Not-found is a normal outcome and maps to a
//! plain-text 404; infrastructure failures map to a generic 500 with a JSON body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::infrastructure::cache::CacheError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
}

/// Top-level application error.
#[derive(Debug)]
pub enum AppError {
    /// The durable store (PostgreSQL) is unreachable or a query failed.
    Storage { message: String },
    /// The cache (Redis) is unreachable or an operation failed.
    Cache { message: String },
    /// No mapping exists for the requested short id.
    NotFound,
}

impl AppError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage { message } => write!(f, "Storage error: {}", message),
            Self::Cache { message } => write!(f, "Cache error: {}", message),
            Self::NotFound => write!(f, "Not found"),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Missing short ids get the bare body redirect clients expect.
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            AppError::Storage { message } => {
                error_response("storage_error", message).into_response()
            }
            AppError::Cache { message } => error_response("cache_error", message).into_response(),
        }
    }
}

fn error_response(code: &'static str, message: String) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: ErrorInfo { code, message },
        }),
    )
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::storage(e.to_string())
    }
}

impl From<CacheError> for AppError {
    fn from(e: CacheError) -> Self {
        AppError::cache(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_error_maps_to_500() {
        let response = AppError::storage("connection refused").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_cache_error_maps_to_500() {
        let response = AppError::cache("PING failed").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display_includes_message() {
        let err = AppError::storage("pool timed out");
        assert!(err.to_string().contains("pool timed out"));
    }
}
