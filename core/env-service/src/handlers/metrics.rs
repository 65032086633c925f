// core/env-service/src/handlers/metrics.rs
// Prometheus scrape endpoint

use actix_web::{web, HttpResponse};
use mcs_common::{gather_text, ServiceError};

use crate::state::AppState;

pub async fn metrics_handler(data: web::Data<AppState>) -> Result<HttpResponse, ServiceError> {
    let text = gather_text(&data.registry).map_err(|e| {
        data.service_metrics.record_error("metrics_encoding", "metrics_handler");
        ServiceError::InternalError(e.to_string())
    })?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(text))
}
