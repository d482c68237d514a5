use crate::error::DomainError;
use crate::response::ErrorResponse;

pub mod http;
pub mod layer;

/// Request-side context handed to exception filters.
///
/// Carries the URI path of the request whose handler raised the error, so
/// filters can stamp it into the response payload.
pub struct ArgumentsHost {
    path: String,
}

impl ArgumentsHost {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The request path as received, e.g. `/api/resourceNotFound`.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// The ExceptionFilter trait
///
/// A filter is one `(predicate, handler)` pair in the translation chain:
/// `matches` decides whether this filter claims the error, `catch` produces
/// the wire payload for it. Filters must be pure; logging and other side
/// effects belong to the surrounding middleware.
pub trait ExceptionFilter: Send + Sync + 'static {
    /// Whether this filter handles the given error.
    fn matches(&self, error: &DomainError) -> bool;

    /// Produce the response payload for an error this filter matched.
    fn catch(&self, error: &DomainError, host: &ArgumentsHost) -> ErrorResponse;
}

/// The single translation point for domain errors escaping request handlers.
///
/// Holds an ordered list of [`ExceptionFilter`]s; the first filter whose
/// predicate matches wins, so the most specific filter must be registered
/// first. Translation is total: when no filter claims the error, the
/// response falls back to the error code's own status.
///
/// # Example
/// ```
/// use exceptra::error::DomainError;
/// use exceptra::exception::{ArgumentsHost, GlobalErrorTranslator};
///
/// let translator = GlobalErrorTranslator::with_defaults();
/// let error = DomainError::resource_not_found().with_context("person id", 1);
/// let response = translator.translate(&error, &ArgumentsHost::new("/api/resourceNotFound"));
/// assert_eq!(response.status, 400);
/// ```
pub struct GlobalErrorTranslator {
    filters: Vec<Box<dyn ExceptionFilter>>,
}

impl GlobalErrorTranslator {
    /// A translator with no filters registered.
    pub fn empty() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The built-in filter chain: the resource-not-found override first,
    /// then the catch-all that answers with each code's declared status.
    pub fn with_defaults() -> Self {
        Self::empty()
            .register(http::ResourceNotFoundFilter)
            .register(http::DomainErrorFilter)
    }

    /// Append a filter to the chain. Registration order is evaluation order.
    pub fn register<F: ExceptionFilter>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Translate an escaping error into its wire payload.
    ///
    /// Never panics: if no registered filter matches, the payload is built
    /// directly from the error with the code's declared status.
    pub fn translate(&self, error: &DomainError, host: &ArgumentsHost) -> ErrorResponse {
        for filter in &self.filters {
            if filter.matches(error) {
                return filter.catch(error, host);
            }
        }
        ErrorResponse::build(error, host.path())
    }
}

impl Default for GlobalErrorTranslator {
    fn default() -> Self {
        Self::with_defaults()
    }
}
