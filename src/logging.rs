use axum::{body::Body, http::Request, response::Response};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;
use tower::{Layer, Service};

use crate::error::DomainError;

/// Middleware that logs request timing and outcome.
///
/// Emits one `tracing` event per request: `info` for ordinary responses,
/// `warn` with the error id when the response carries a translated
/// [`DomainError`]. Install it outside the `ExceptionLayer` so it sees the
/// translated response.
#[derive(Clone, Default)]
pub struct RequestLogLayer;

impl<S> Layer<S> for RequestLogLayer {
    type Service = RequestLogMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestLogMiddleware { inner }
    }
}

#[derive(Clone)]
pub struct RequestLogMiddleware<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for RequestLogMiddleware<S>
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
        let method = request.method().clone();
        let uri = request.uri().clone();
        let start = Instant::now();

        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let response = inner.call(request).await?;
            let latency = start.elapsed();
            let status = response.status();

            match response.extensions().get::<DomainError>() {
                Some(error) => {
                    tracing::warn!(
                        %method,
                        %uri,
                        status = status.as_u16(),
                        error_id = error.code().id(),
                        latency_ms = latency.as_millis() as u64,
                        "request failed with domain error"
                    );
                }
                None => {
                    tracing::info!(
                        %method,
                        %uri,
                        status = status.as_u16(),
                        latency_ms = latency.as_millis() as u64,
                        "request completed"
                    );
                }
            }

            Ok(response)
        })
    }
}
