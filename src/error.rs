use crate::code::ErrorCode;
use crate::exception::{ArgumentsHost, GlobalErrorTranslator};
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomainError>;

/// A recognized, expected failure raised inside a request handler.
///
/// Carries the [`ErrorCode`] identifying the failure kind plus an owned
/// mapping of diagnostic key/value pairs describing what triggered it.
/// Constructed at the point of failure, propagated with `?`, and consumed
/// once by the exception boundary.
///
/// # Example
/// ```
/// use exceptra::error::DomainError;
///
/// let error = DomainError::resource_not_found().with_context("person id", 1);
/// assert_eq!(error.code().id(), "RESOURCE_NOT_FOUND");
/// ```
#[derive(Debug, Clone, Error)]
#[error("{}", .message.as_deref().unwrap_or(.code.message()))]
pub struct DomainError {
    code: ErrorCode,
    context: Map<String, Value>,
    message: Option<String>,
}

impl DomainError {
    /// Create an error of the given kind with an empty context.
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            context: Map::new(),
            message: None,
        }
    }

    /// A resource the caller asked for does not exist.
    pub fn resource_not_found() -> Self {
        Self::new(ErrorCode::ResourceNotFound)
    }

    /// A request argument failed validation.
    pub fn invalid_parameter() -> Self {
        Self::new(ErrorCode::InvalidParameter)
    }

    /// An unclassified server-side failure.
    pub fn internal() -> Self {
        Self::new(ErrorCode::Internal)
    }

    /// Attach one diagnostic key/value pair.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Replace the whole context mapping.
    pub fn with_context_map(mut self, context: Map<String, Value>) -> Self {
        self.context = context;
        self
    }

    /// Override the code's message template for this instance.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Which failure kind this is.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The diagnostic context, owned exclusively by this instance.
    pub fn context(&self) -> &Map<String, Value> {
        &self.context
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        // The request path is not known here; an installed ExceptionLayer
        // re-translates with the real URI. The error rides along in the
        // response extensions so the layer (and outer middleware) can see it.
        let translator = GlobalErrorTranslator::default();
        let host = ArgumentsHost::new("");
        let mut response = translator.translate(&self, &host).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_constructor_binds_code() {
        let error = DomainError::resource_not_found();
        assert_eq!(error.code(), ErrorCode::ResourceNotFound);
        assert!(error.context().is_empty());
    }

    #[test]
    fn test_with_context_accumulates_pairs() {
        let error = DomainError::resource_not_found()
            .with_context("person id", 1)
            .with_context("source", "lookup");
        assert_eq!(error.context().get("person id"), Some(&json!(1)));
        assert_eq!(error.context().get("source"), Some(&json!("lookup")));
    }

    #[test]
    fn test_with_context_map_replaces_mapping() {
        let mut context = Map::new();
        context.insert("person id".to_owned(), json!(7));
        let error = DomainError::resource_not_found()
            .with_context("stale", true)
            .with_context_map(context);
        assert_eq!(error.context().len(), 1);
        assert_eq!(error.context().get("person id"), Some(&json!(7)));
    }

    #[test]
    fn test_display_uses_template_by_default() {
        let error = DomainError::invalid_parameter();
        assert_eq!(error.to_string(), ErrorCode::InvalidParameter.message());
    }

    #[test]
    fn test_display_prefers_override_message() {
        let error = DomainError::invalid_parameter().with_message("page must be positive");
        assert_eq!(error.to_string(), "page must be positive");
    }

    #[test]
    fn test_clone_owns_its_context() {
        let original = DomainError::resource_not_found().with_context("person id", 1);
        let cloned = original.clone().with_context("extra", true);
        assert!(!original.context().contains_key("extra"));
        assert!(cloned.context().contains_key("extra"));
    }
}
