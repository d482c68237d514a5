use axum::http::StatusCode;

use crate::code::ErrorCode;
use crate::error::DomainError;
use crate::exception::{ArgumentsHost, ExceptionFilter};
use crate::response::ErrorResponse;

/// Filter for the resource-not-found failure kind.
///
/// Responds 400 Bad Request rather than the 404 the code itself declares.
/// Callers depend on this contract; changing it to 404 is an API break.
#[derive(Default)]
pub struct ResourceNotFoundFilter;

impl ExceptionFilter for ResourceNotFoundFilter {
    fn matches(&self, error: &DomainError) -> bool {
        error.code() == ErrorCode::ResourceNotFound
    }

    fn catch(&self, error: &DomainError, host: &ArgumentsHost) -> ErrorResponse {
        ErrorResponse::build(error, host.path()).with_status(StatusCode::BAD_REQUEST)
    }
}

/// Catch-all filter for any domain error.
///
/// Answers with the status the error's code declares. Registered last so
/// more specific filters get the first look.
#[derive(Default)]
pub struct DomainErrorFilter;

impl ExceptionFilter for DomainErrorFilter {
    fn matches(&self, _error: &DomainError) -> bool {
        true
    }

    fn catch(&self, error: &DomainError, host: &ArgumentsHost) -> ErrorResponse {
        ErrorResponse::build(error, host.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_not_found_filter_only_claims_its_kind() {
        let filter = ResourceNotFoundFilter;
        assert!(filter.matches(&DomainError::resource_not_found()));
        assert!(!filter.matches(&DomainError::invalid_parameter()));
        assert!(!filter.matches(&DomainError::internal()));
    }

    #[test]
    fn test_resource_not_found_filter_forces_400() {
        let filter = ResourceNotFoundFilter;
        let error = DomainError::resource_not_found().with_context("person id", 1);
        let host = ArgumentsHost::new("/api/resourceNotFound");

        let response = filter.catch(&error, &host);

        assert_eq!(response.status, 400);
        assert_eq!(response.error_id, "RESOURCE_NOT_FOUND");
    }

    #[test]
    fn test_domain_error_filter_claims_everything() {
        let filter = DomainErrorFilter;
        assert!(filter.matches(&DomainError::resource_not_found()));
        assert!(filter.matches(&DomainError::internal()));
    }

    #[test]
    fn test_domain_error_filter_uses_declared_status() {
        let filter = DomainErrorFilter;
        let host = ArgumentsHost::new("/api/whatever");

        let response = filter.catch(&DomainError::internal(), &host);
        assert_eq!(response.status, 500);
        assert_eq!(response.path, "/api/whatever");
    }
}
