use axum::{
    body::Body,
    http::Request,
    response::{IntoResponse, Response},
};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

use crate::error::DomainError;
use crate::exception::{ArgumentsHost, GlobalErrorTranslator};

/// Tower layer installing the [`GlobalErrorTranslator`] at the router boundary.
///
/// Handlers return `Result<T, DomainError>`; when the error variant surfaces,
/// this layer re-translates it with the real request path and replaces the
/// response. The original error stays in the response extensions so outer
/// middleware can still observe it.
///
/// # Example
/// ```rust,no_run
/// use axum::{Router, routing::get};
/// use exceptra::error::{DomainError, Result};
/// use exceptra::exception::layer::ExceptionLayer;
///
/// async fn handler() -> Result<&'static str> {
///     Err(DomainError::resource_not_found().with_context("person id", 1))
/// }
///
/// let app: Router = Router::new()
///     .route("/api/resourceNotFound", get(handler))
///     .layer(ExceptionLayer::new());
/// ```
#[derive(Clone)]
pub struct ExceptionLayer {
    translator: Arc<GlobalErrorTranslator>,
}

impl ExceptionLayer {
    /// A layer running the default filter chain.
    pub fn new() -> Self {
        Self::with_translator(GlobalErrorTranslator::with_defaults())
    }

    /// A layer running a custom filter chain.
    pub fn with_translator(translator: GlobalErrorTranslator) -> Self {
        Self {
            translator: Arc::new(translator),
        }
    }
}

impl Default for ExceptionLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for ExceptionLayer {
    type Service = ExceptionMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ExceptionMiddleware {
            inner,
            translator: self.translator.clone(),
        }
    }
}

#[derive(Clone)]
pub struct ExceptionMiddleware<S> {
    inner: S,
    translator: Arc<GlobalErrorTranslator>,
}

impl<S> Service<Request<Body>> for ExceptionMiddleware<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let path = request.uri().path().to_owned();
        let translator = self.translator.clone();
        // Take the service that was polled ready; leave the clone behind.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let response = inner.call(request).await?;

            if let Some(error) = response.extensions().get::<DomainError>() {
                let error = error.clone();
                let host = ArgumentsHost::new(path);
                let mut translated = translator.translate(&error, &host).into_response();
                translated.extensions_mut().insert(error);
                return Ok(translated);
            }

            Ok(response)
        })
    }
}
