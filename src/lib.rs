//! # Exceptra
//!
//! Centralized exception handling and HTTP error translation for Axum services.
//!
//! Exceptra gives request handlers a typed domain error and a single boundary
//! layer that turns every escaping error into a structured JSON response with
//! the right HTTP status, the way Spring's `@ControllerAdvice` centralizes
//! exception translation, but with an explicit, ordered filter chain instead
//! of annotation-driven dispatch.
//!
//! ## Features
//!
//! - **Closed error catalog**: every failure kind has a stable id, message
//!   template, and default HTTP status
//! - **Typed domain errors**: handlers return `Result<T, DomainError>` and
//!   attach diagnostic context at the point of failure
//! - **One translation point**: an ordered list of exception filters, most
//!   specific first, evaluated by a tower layer at the router boundary
//! - **Structured wire payloads**: `{status, errorId, message, path, context}`
//!   JSON bodies, never a raw stack trace
//! - **Request logging**: a companion layer records method, URI, status,
//!   latency, and the error id of translated failures
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use exceptra::prelude::*;
//! use axum::routing::get;
//!
//! async fn find_person() -> Result<Json<&'static str>> {
//!     // The person does not exist; raise the typed failure and let the
//!     // boundary layer translate it.
//!     Err(DomainError::resource_not_found().with_context("person id", 1))
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let app: Router = Router::new()
//!         .route("/api/resourceNotFound", get(find_person))
//!         .layer(ExceptionLayer::new())
//!         .layer(RequestLogLayer::default());
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod code;
pub mod config;
pub mod error;
pub mod exception;
pub mod logging;
pub mod response;

// Re-export core types
pub use code::ErrorCode;
pub use error::{DomainError, Result};
pub use exception::{ArgumentsHost, ExceptionFilter, GlobalErrorTranslator};
pub use response::ErrorResponse;

// Re-export commonly used types from dependencies
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use exceptra::prelude::*;
/// ```
pub mod prelude {
    pub use crate::code::ErrorCode;
    pub use crate::config::ConfigService;
    pub use crate::error::{DomainError, Result};
    pub use crate::exception::http::{DomainErrorFilter, ResourceNotFoundFilter};
    pub use crate::exception::layer::ExceptionLayer;
    pub use crate::exception::{ArgumentsHost, ExceptionFilter, GlobalErrorTranslator};
    pub use crate::logging::RequestLogLayer;
    pub use crate::response::ErrorResponse;
    pub use axum::{
        Json, Router,
        extract::{Path, Query, State},
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    pub use std::sync::Arc;
}
