//! Correlation middleware attaching a request-scoped identifier.
//!
//! The identifier is taken from the incoming `correlation-id` header when it
//! is valid and generated otherwise. It is stored in task-local storage for
//! the lifetime of the request, recorded on the request span, and echoed on
//! every response.
//!
//! Tokio task-local variables are not inherited across spawned tasks. Use
//! [`CorrelationId::scope`] when spawning new tasks or moving work onto
//! blocking threads so the identifier propagates.

use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{Instrument, error, info, info_span, warn};

use crate::domain::{CORRELATION_ID_HEADER, CorrelationId};

/// Correlation middleware.
///
/// Handlers and domain code can read the identifier via
/// [`CorrelationId::current`].
///
/// # Examples
/// ```
/// use actix_web::App;
/// use food_orders::Correlation;
///
/// let app = App::new().wrap(Correlation);
/// ```
#[derive(Clone)]
pub struct Correlation;

impl<S, B> Transform<S, ServiceRequest> for Correlation
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = CorrelationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorrelationMiddleware { service }))
    }
}

/// Service wrapper produced by [`Correlation`].
///
/// Applications should not use this type directly.
pub struct CorrelationMiddleware<S> {
    service: S,
}

fn correlation_id_for(req: &ServiceRequest) -> CorrelationId {
    let Some(raw) = req.headers().get(CORRELATION_ID_HEADER) else {
        return CorrelationId::generate();
    };

    match raw.to_str().map(CorrelationId::parse) {
        Ok(Ok(id)) => id,
        Ok(Err(reason)) => {
            warn!(%reason, "ignoring invalid correlation id header");
            CorrelationId::generate()
        }
        Err(_) => {
            warn!("ignoring non-ASCII correlation id header");
            CorrelationId::generate()
        }
    }
}

impl<S, B> Service<ServiceRequest> for CorrelationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let correlation_id = correlation_id_for(&req);
        let span = info_span!(
            "request",
            correlation_id = %correlation_id,
            method = %req.method(),
            path = %req.path(),
        );
        let started = Instant::now();
        let fut = CorrelationId::sync_scope(correlation_id.clone(), || {
            span.in_scope(|| self.service.call(req))
        });

        let scoped_id = correlation_id.clone();
        Box::pin(
            CorrelationId::scope(scoped_id, async move {
                let mut res = fut.await?;
                match HeaderValue::from_str(correlation_id.as_str()) {
                    Ok(value) => {
                        res.response_mut()
                            .headers_mut()
                            .insert(HeaderName::from_static(CORRELATION_ID_HEADER), value);
                    }
                    Err(error) => {
                        error!(%error, "failed to encode correlation id header");
                    }
                }
                info!(
                    status = res.status().as_u16(),
                    latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                    "request completed"
                );
                Ok(res)
            })
            .instrument(span),
        )
    }
}
