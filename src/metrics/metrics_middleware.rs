//! Middleware that records request count, latency and error responses per
//! endpoint. Routes are labelled by their match pattern to keep cardinality low.

use crate::metrics::{ERROR_COUNTER, REQUEST_COUNTER, REQUEST_LATENCY};
use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use std::{
    task::{Context, Poll},
    time::Instant,
};

pub struct MetricsMiddleware;

impl<S, B> Transform<S, ServiceRequest> for MetricsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = MetricsMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(MetricsMiddlewareService { service })
    }
}

pub struct MetricsMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for MetricsMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Unmatched requests share one label instead of one per raw path.
        let endpoint = req
            .match_pattern()
            .unwrap_or_else(|| "unmatched".to_string());
        let method = req.method().to_string();
        let start = Instant::now();

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await;
            let status = match &res {
                Ok(response) => response.status().as_u16().to_string(),
                Err(err) => err.as_response_error().status_code().as_u16().to_string(),
            };
            let elapsed = start.elapsed().as_secs_f64();

            REQUEST_COUNTER
                .with_label_values(&[&endpoint, &method, &status])
                .inc();
            REQUEST_LATENCY
                .with_label_values(&[&endpoint, &method, &status])
                .observe(elapsed);
            if !status.starts_with('2') {
                ERROR_COUNTER
                    .with_label_values(&[&endpoint, &method, &status])
                    .inc();
            }

            res
        })
    }
}
