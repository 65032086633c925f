// core/env-service/src/handlers/profile.rs
// Read-only profile endpoints

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use mcs_common::{
    generate_request_id, log_failure, log_success, log_validation_error, LogContext, ServiceError,
};
use mcs_env_profile::{render_module, EnvKey, Network, ProfileError, RenderFormat};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct KeyValueResponse {
    pub key: EnvKey,
    pub value: String,
    pub unquoted: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NetworkResponse {
    pub network: Network,
    pub explorer: String,
    pub payment_gateway: Option<String>,
}

fn to_service_error(err: ProfileError) -> ServiceError {
    match err {
        ProfileError::UnknownKey(_) => ServiceError::NotFound(err.to_string()),
        ProfileError::UnknownNetwork(_) => ServiceError::BadRequest(err.to_string()),
        ProfileError::Validation(invalid) => invalid.into(),
        ProfileError::NoPaymentGateway(_) | ProfileError::NoTransactionExplorer(_) => {
            ServiceError::Custom {
                status_code: StatusCode::UNPROCESSABLE_ENTITY,
                error_code: "not_configured".to_string(),
                message: err.to_string(),
            }
        }
        other => ServiceError::InternalError(other.to_string()),
    }
}

fn context(req: &HttpRequest, data: &AppState) -> LogContext {
    let ctx = LogContext::new(generate_request_id()).with_environment(data.variant.to_string());
    match req.connection_info().realip_remote_addr() {
        Some(ip) => ctx.with_ip(ip.to_string()),
        None => ctx,
    }
}

/// The whole mapping, raw literals, in record order.
pub async fn get_profile(data: web::Data<AppState>) -> HttpResponse {
    data.profile_metrics.record_render(RenderFormat::Json.as_str());
    HttpResponse::Ok().json(&data.profile)
}

/// The CommonJS module a bundler can consume directly.
pub async fn get_module(data: web::Data<AppState>) -> HttpResponse {
    data.profile_metrics.record_render(RenderFormat::Module.as_str());
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(render_module(&data.profile))
}

pub async fn get_value(
    req: HttpRequest,
    data: web::Data<AppState>,
    name: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let key: EnvKey = match name.parse() {
        Ok(key) => key,
        Err(err) => {
            data.profile_metrics.record_lookup(&name, false);
            log_validation_error(&context(&req, &data), "key", &name, &err.to_string());
            return Err(to_service_error(err));
        }
    };

    data.profile_metrics.record_lookup(key.as_str(), true);
    let value = data.profile.get(key);

    Ok(HttpResponse::Ok().json(KeyValueResponse {
        key,
        value: value.raw().to_string(),
        unquoted: value.unquoted().to_string(),
    }))
}

/// Explorer and gateway origins for a payment network.
///
/// Unknown names get a 400 listing the supported networks.
pub async fn get_network(
    req: HttpRequest,
    data: web::Data<AppState>,
    name: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let ctx = context(&req, &data);

    let network = match Network::from_name(&name) {
        Ok(network) => network,
        Err(err) => {
            log_validation_error(&ctx, "network", &name, &err.to_string());
            data.service_metrics.record_error("unknown_network", "get_network");

            let error = to_service_error(err);
            let supported: Vec<&str> = Network::ALL.iter().map(Network::name).collect();
            let body = error
                .to_error_response(Some(ctx.request_id.clone()))
                .with_details(serde_json::json!({ "supported": supported }));
            return Ok(HttpResponse::build(error.status_code()).json(body));
        }
    };

    let payment_gateway = match data.profile.payment_gateway(network) {
        Ok(url) => Some(url.to_string()),
        Err(ProfileError::NoPaymentGateway(_)) => None,
        Err(err) => {
            log_failure(&ctx, "get_network", &err.to_string());
            return Err(to_service_error(err));
        }
    };

    log_success(&ctx, "get_network", Some(network.name()));

    Ok(HttpResponse::Ok().json(NetworkResponse {
        network,
        explorer: data.profile.explorer_base(network).to_string(),
        payment_gateway,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use mcs_common::{ErrorResponse, ValidationError};
    use mcs_env_profile::{EnvProfile, TEST_ENTRIES};

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState::new("test", false).unwrap())
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state)
                    .route("/env", web::get().to(get_profile))
                    .route("/env.js", web::get().to(get_module))
                    .route("/env/{key}", web::get().to(get_value))
                    .route("/networks/{network}", web::get().to(get_network)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_get_profile_returns_all_nine_raw_literals() {
        let app = app!(state());

        let req = test::TestRequest::get().uri("/env").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let profile = EnvProfile::from_json(std::str::from_utf8(&body).unwrap()).unwrap();

        assert_eq!(profile, EnvProfile::test());

        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 9);
        assert_eq!(value["NODE_ENV"], "\"test\"");
    }

    #[actix_web::test]
    async fn test_get_value_for_every_key() {
        let app = app!(state());

        for (key, raw) in TEST_ENTRIES {
            let req = test::TestRequest::get()
                .uri(&format!("/env/{}", key))
                .to_request();
            let body: KeyValueResponse = test::call_and_read_body_json(&app, req).await;

            assert_eq!(body.key, key);
            assert_eq!(body.value, raw);
            assert_eq!(format!("\"{}\"", body.unquoted), raw);
        }
    }

    #[actix_web::test]
    async fn test_get_value_base_api() {
        let app = app!(state());

        let req = test::TestRequest::get().uri("/env/BASE_API").to_request();
        let body: KeyValueResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.value, "\"http://192.168.88.216:5002/\"");
        assert_eq!(body.unquoted, "http://192.168.88.216:5002/");
    }

    #[actix_web::test]
    async fn test_get_value_unknown_key_is_404() {
        let state = state();
        let app = app!(state.clone());

        let req = test::TestRequest::get().uri("/env/base_api").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error_code, "not_found");
        assert_eq!(body.message, "Unknown key: base_api");

        assert_eq!(
            state
                .profile_metrics
                .key_lookups_total
                .with_label_values(&["unknown", "not_found"])
                .get(),
            1
        );
    }

    #[actix_web::test]
    async fn test_get_module() {
        let app = app!(state());

        let req = test::TestRequest::get().uri("/env.js").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/javascript; charset=utf-8"
        );

        let body = test::read_body(resp).await;
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            render_module(&EnvProfile::test())
        );
    }

    #[actix_web::test]
    async fn test_get_network_routes() {
        let app = app!(state());

        let req = test::TestRequest::get().uri("/networks/polygon").to_request();
        let body: NetworkResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.network, Network::Polygon);
        assert_eq!(body.explorer, "https://mumbai.polygonscan.com/");
        assert_eq!(body.payment_gateway.as_deref(), Some("http://192.168.88.41:8889/"));

        let req = test::TestRequest::get().uri("/networks/calibration").to_request();
        let body: NetworkResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.explorer, "https://calibration.filscan.io/tipset/dsn-detail");
        assert!(body.payment_gateway.is_none());
    }

    #[actix_web::test]
    async fn test_get_network_unknown_is_400() {
        let state = state();
        let app = app!(state.clone());

        let req = test::TestRequest::get().uri("/networks/ethereum").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error_code, "bad_request");
        assert_eq!(body.message, "Unknown network: ethereum");
        assert!(body.request_id.is_some());
        assert_eq!(
            body.details,
            Some(serde_json::json!({ "supported": ["mainnet", "calibration", "polygon", "bsc"] }))
        );

        assert_eq!(
            state
                .service_metrics
                .errors_total
                .with_label_values(&["unknown_network", "get_network"])
                .get(),
            1
        );
    }

    #[::core::prelude::v1::test]
    fn test_validation_failures_map_to_validation_error() {
        let err = to_service_error(ProfileError::Validation(ValidationError::InvalidTxHash(
            "must be 0x followed by 64 hexadecimal characters".to_string(),
        )));

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "validation_error");
    }

    #[::core::prelude::v1::test]
    fn test_missing_gateway_maps_to_unprocessable() {
        let err = to_service_error(ProfileError::NoPaymentGateway(Network::FilecoinMainnet));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.error_code(), "not_configured");
    }
}
