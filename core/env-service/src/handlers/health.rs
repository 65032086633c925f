// core/env-service/src/handlers/health.rs
// Health check endpoints

use actix_web::{http::StatusCode, web, HttpResponse, Result};
use mcs_common::{check_origins_health, HealthResponse, LivenessProbe, ReadinessProbe};

use crate::state::AppState;

/// Health check endpoint - probes the advertised origins when enabled
pub async fn health_check(data: web::Data<AppState>) -> Result<HttpResponse> {
    let mut health = HealthResponse::new(
        env!("CARGO_PKG_NAME").to_string(),
        env!("CARGO_PKG_VERSION").to_string(),
        data.variant.to_string(),
        data.start_time,
    );

    if data.probe_origins {
        for dependency in check_origins_health(&data.profile.service_origins()).await {
            health.add_dependency(dependency);
        }
    }

    Ok(HttpResponse::Ok().json(health))
}

/// Liveness probe - is the service alive?
pub async fn liveness_probe() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(LivenessProbe::healthy()))
}

/// Readiness probe - the profile is loaded once at startup, so this only re-checks it.
pub async fn readiness_probe(data: web::Data<AppState>) -> Result<HttpResponse> {
    let ready = data.profile.validate().is_ok();

    let (probe, status) = if ready {
        (ReadinessProbe::ready(), StatusCode::OK)
    } else {
        (ReadinessProbe::not_ready(), StatusCode::SERVICE_UNAVAILABLE)
    };

    Ok(HttpResponse::build(status).json(probe))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState::new("test", false).unwrap())
    }

    #[actix_web::test]
    async fn test_liveness_probe() {
        let response = liveness_probe().await.unwrap();
        assert_eq!(response.status(), 200);
    }

    #[actix_web::test]
    async fn test_health_check_without_probes() {
        let app = test::init_service(
            App::new()
                .app_data(state())
                .route("/health", web::get().to(health_check)),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["environment"], "test");
        assert_eq!(body["service"], "env-service");
        assert_eq!(body["dependencies"].as_array().unwrap().len(), 0);
    }

    #[actix_web::test]
    async fn test_readiness_probe() {
        let response = readiness_probe(state()).await.unwrap();
        assert_eq!(response.status(), 200);
    }
}
