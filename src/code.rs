use axum::http::StatusCode;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Closed catalog of the failure kinds this service recognizes.
///
/// Every kind carries a stable wire identifier, a human-readable message
/// template, and the HTTP status it maps to by default. The set is fixed at
/// compile time; introducing a new kind is a code change, not configuration.
///
/// # Example
/// ```
/// use exceptra::code::ErrorCode;
///
/// let code = ErrorCode::ResourceNotFound;
/// assert_eq!(code.id(), "RESOURCE_NOT_FOUND");
/// assert_eq!(code.status().as_u16(), 404);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The requested resource does not exist.
    ResourceNotFound,
    /// A request argument failed validation.
    InvalidParameter,
    /// An unclassified server-side failure.
    Internal,
}

impl ErrorCode {
    /// Stable wire identifier, e.g. `RESOURCE_NOT_FOUND`.
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Default message template for this kind.
    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::ResourceNotFound => "The requested resource could not be found",
            ErrorCode::InvalidParameter => "One or more request parameters are invalid",
            ErrorCode::Internal => "An unexpected internal error occurred",
        }
    }

    /// The HTTP status this kind declares.
    ///
    /// Exception filters may still override the status on the wire; see
    /// `exception::http::ResourceNotFoundFilter`.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::ResourceNotFound => StatusCode::NOT_FOUND,
            ErrorCode::InvalidParameter => StatusCode::BAD_REQUEST,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
