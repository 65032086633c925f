// core/common/src/lib.rs
// MCS common library - shared functionality for the environment profile crates

pub mod config;
pub mod error;
pub mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod validation;

// Re-export commonly used items
pub use config::{ConfigError, LogFormat, ServiceConfig};
pub use error::{ErrorResponse, ServiceError};
pub use health::{
    check_external_api_health, check_origins_health, DependencyHealth, HealthResponse, HealthStatus, LivenessProbe,
    ReadinessProbe,
};
pub use logging::{
    generate_request_id, init_console_logging, init_logging, init_with_format, log_failure, log_success,
    log_validation_error, LogContext,
};
pub use metrics::{gather_text, MetricsTimer, ProfileMetrics, ServiceMetrics};
pub use middleware::MetricsMiddleware;
pub use validation::{
    validate_evm_tx_hash, validate_http_url, validate_max_length, validate_no_xss,
    validate_quoted_literal, ValidationError,
};
