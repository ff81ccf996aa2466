use axum::{
    Json,
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use types::errors::FetchError;

/// Fixed detail returned for every fetch failure
pub const LIVE_DATA_UNAVAILABLE: &str = "Failed to fetch live data";

/// Central error type for the gateway
///
/// Responses carry a single `detail` field. Fetch failures, and symbols
/// the path extractor cannot decode, are collapsed into one opaque 503.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Live data unavailable: {0}")]
    LiveData(#[from] FetchError),

    #[error("Invalid path: {0}")]
    InvalidPath(#[from] PathRejection),

    #[error("Not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::LiveData(_) | AppError::InvalidPath(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, LIVE_DATA_UNAVAILABLE)
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::errors::AttemptError;

    #[test]
    fn test_every_fetch_error_is_503() {
        let errors = [
            FetchError::EmptyBody,
            FetchError::NotAnObject,
            FetchError::Exhausted {
                attempts: 3,
                last: AttemptError::Timeout,
            },
        ];
        for err in errors {
            let res = AppError::from(err).into_response();
            assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
        }
    }

    #[test]
    fn test_not_found_status() {
        let res = AppError::NotFound.into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
