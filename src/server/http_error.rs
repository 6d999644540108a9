//! JSON error responses for the HTTP API.

use crate::error::GardenError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct HttpError {
    /// User-facing error message
    pub error: String,
    /// Machine-readable error code
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl HttpError {
    pub const NOT_FOUND: &'static str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &'static str = "VALIDATION_ERROR";
    pub const INTERNAL_ERROR: &'static str = "INTERNAL_ERROR";

    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            details: None,
        }
    }

    pub fn with_details(
        error: impl Into<String>,
        code: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            details: Some(details.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.code.as_str() {
            Self::NOT_FOUND => StatusCode::NOT_FOUND,
            Self::VALIDATION_ERROR => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<GardenError> for HttpError {
    fn from(err: GardenError) -> Self {
        match err {
            GardenError::NotFound(what) => {
                HttpError::with_details("Not found", Self::NOT_FOUND, what)
            }
            GardenError::Validation(msg) | GardenError::Parse(msg) => {
                HttpError::new(msg, Self::VALIDATION_ERROR)
            }
            other => {
                tracing::error!(error = %other, "Request failed");
                HttpError::with_details("Internal error", Self::INTERNAL_ERROR, other.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let not_found: HttpError = GardenError::NotFound("Plant id: 9".to_string()).into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.error, "Not found");
        assert_eq!(not_found.details.as_deref(), Some("Plant id: 9"));

        let invalid: HttpError = GardenError::Validation("bad month".to_string()).into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.error, "bad month");

        let storage: HttpError = GardenError::Storage("disk full".to_string()).into();
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_body_omits_empty_details() {
        let json = serde_json::to_value(HttpError::new("oops", "VALIDATION_ERROR")).unwrap();
        assert_eq!(json, serde_json::json!({"error": "oops", "code": "VALIDATION_ERROR"}));
    }
}
