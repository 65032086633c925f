// core/env-service/src/main.rs
// Environment profile service: serves the frontend build profile over HTTP

mod state;
mod handlers {
    pub mod health;
    pub mod metrics;
    pub mod profile;
}

use actix_cors::Cors;
use actix_web::{middleware::DefaultHeaders, middleware::Logger, web, App, HttpServer};
use mcs_common::{init_with_format, MetricsMiddleware, ServiceConfig};

use crate::state::AppState;

/// Every route the service exposes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Health endpoints
        .route("/health", web::get().to(handlers::health::health_check))
        .route("/liveness", web::get().to(handlers::health::liveness_probe))
        .route("/readiness", web::get().to(handlers::health::readiness_probe))
        // Metrics endpoint
        .route("/metrics", web::get().to(handlers::metrics::metrics_handler))
        // Profile endpoints
        .route("/env", web::get().to(handlers::profile::get_profile))
        .route("/env.js", web::get().to(handlers::profile::get_module))
        .route("/env/{key}", web::get().to(handlers::profile::get_value))
        .route("/networks/{network}", web::get().to(handlers::profile::get_network));
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::from_env()?;

    init_with_format("env-service", config.log_format);

    let (host, port) = config.bind_address();
    tracing::info!(
        environment = %config.environment,
        probe_origins = config.probe_origins,
        "Starting Env Service on {}:{}",
        host,
        port
    );

    let state = web::Data::new(AppState::new(&config.environment, config.probe_origins)?);
    tracing::info!(variant = %state.variant, "Profile loaded and validated");

    let allowed_origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET"])
            .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(MetricsMiddleware::new(state.service_metrics.clone()))
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Frame-Options", "DENY"))
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Content-Security-Policy", "default-src 'self'")),
            )
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind(config.bind_address())?
    .run()
    .await?;

    Ok(())
}
