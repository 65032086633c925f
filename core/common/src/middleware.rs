// core/common/src/middleware.rs
// Request metrics middleware

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::metrics::{MetricsTimer, ServiceMetrics};

pub struct MetricsMiddleware {
    metrics: Rc<ServiceMetrics>,
}

impl MetricsMiddleware {
    pub fn new(metrics: ServiceMetrics) -> Self {
        Self {
            metrics: Rc::new(metrics),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for MetricsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = MetricsMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MetricsMiddlewareService {
            service: Rc::new(service),
            metrics: self.metrics.clone(),
        }))
    }
}

pub struct MetricsMiddlewareService<S> {
    service: Rc<S>,
    metrics: Rc<ServiceMetrics>,
}

impl<S, B> Service<ServiceRequest> for MetricsMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let metrics = self.metrics.clone();
        let service = self.service.clone();

        let method = req.method().to_string();
        let path = req.path().to_string();

        metrics
            .http_requests_in_progress
            .with_label_values(&[&method])
            .inc();

        let timer = MetricsTimer::new();

        Box::pin(async move {
            let result = service.call(req).await;

            metrics
                .http_requests_in_progress
                .with_label_values(&[&method])
                .dec();

            let duration = timer.elapsed_seconds();

            // Label by route pattern, not raw path, so `/env/{key}` stays one series.
            match &result {
                Ok(response) => {
                    let endpoint = response
                        .request()
                        .match_pattern()
                        .unwrap_or_else(|| "unmatched".to_string());
                    metrics.record_http_request(&method, &endpoint, response.status().as_u16(), duration);
                }
                Err(_) => {
                    tracing::debug!(path = %path, "request failed before producing a response");
                    metrics.record_http_request(&method, "unmatched", 500, duration);
                }
            }

            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};
    use prometheus::Registry;

    async fn test_handler() -> HttpResponse {
        HttpResponse::Ok().body("success")
    }

    #[actix_web::test]
    async fn test_metrics_middleware_records_request() {
        let registry = Registry::new();
        let metrics = ServiceMetrics::new(&registry, "test_service").unwrap();

        let app = test::init_service(
            App::new()
                .wrap(MetricsMiddleware::new(metrics.clone()))
                .route("/env/{key}", web::get().to(test_handler)),
        )
        .await;

        let req = test::TestRequest::get().uri("/env/BASE_API").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let count = metrics
            .http_requests_total
            .with_label_values(&["GET", "/env/{key}", "200"])
            .get();
        assert_eq!(count, 1);
    }
}
