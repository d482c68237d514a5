use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::DomainError;

/// The wire-level error payload returned to a client.
///
/// A flat, serializable snapshot of a [`DomainError`] plus the request path
/// that triggered it. Built per error, serialized once, then discarded.
///
/// # Example
/// ```
/// use exceptra::error::DomainError;
/// use exceptra::response::ErrorResponse;
///
/// let error = DomainError::resource_not_found().with_context("person id", 1);
/// let response = ErrorResponse::build(&error, "/api/resourceNotFound");
/// assert_eq!(response.error_id, "RESOURCE_NOT_FOUND");
/// assert_eq!(response.status, 404);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status: u16,
    pub error_id: String,
    pub message: String,
    pub path: String,
    pub context: Map<String, Value>,
}

impl ErrorResponse {
    /// Build the payload for an error raised while serving `path`.
    ///
    /// The status defaults to the error code's declared status; exception
    /// filters that override the wire status adjust it with
    /// [`ErrorResponse::with_status`]. The context is copied out of the
    /// error so neither side can mutate the other after construction.
    pub fn build(error: &DomainError, path: &str) -> Self {
        Self {
            status: error.code().status().as_u16(),
            error_id: error.code().id().to_owned(),
            message: error.to_string(),
            path: path.to_owned(),
            context: error.context().clone(),
        }
    }

    /// Replace the status carried on the wire and in the body.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status.as_u16();
        self
    }

    /// The HTTP status to respond with.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_snapshots_the_error() {
        let error = DomainError::resource_not_found().with_context("person id", 1);
        let response = ErrorResponse::build(&error, "/api/resourceNotFound");

        assert_eq!(response.status, 404);
        assert_eq!(response.error_id, "RESOURCE_NOT_FOUND");
        assert_eq!(response.message, error.to_string());
        assert_eq!(response.path, "/api/resourceNotFound");
        assert_eq!(response.context.get("person id"), Some(&json!(1)));
    }

    #[test]
    fn test_with_status_overrides_wire_status() {
        let error = DomainError::resource_not_found();
        let response =
            ErrorResponse::build(&error, "/api/resourceNotFound").with_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.status, 400);
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_build_copies_the_context() {
        let error = DomainError::resource_not_found().with_context("person id", 1);
        let mut response = ErrorResponse::build(&error, "/api/resourceNotFound");

        response.context.insert("mutated".to_owned(), json!(true));
        assert!(!error.context().contains_key("mutated"));
        assert_eq!(error.context().len(), 1);

        // And the other way round.
        let error = error.with_context("later", true);
        assert!(error.context().contains_key("later"));
        assert!(!response.context.contains_key("later"));
    }

    #[test]
    fn test_build_is_idempotent() {
        let error = DomainError::invalid_parameter().with_context("parameter", "page");
        let first = ErrorResponse::build(&error, "/api/search");
        let second = ErrorResponse::build(&error, "/api/search");
        assert_eq!(first, second);
    }

    #[test]
    fn test_serializes_camel_case_with_empty_context_object() {
        let error = DomainError::internal();
        let response = ErrorResponse::build(&error, "/api/whatever");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({
                "status": 500,
                "errorId": "INTERNAL",
                "message": "An unexpected internal error occurred",
                "path": "/api/whatever",
                "context": {}
            })
        );
    }
}
