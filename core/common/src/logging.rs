// core/common/src/logging.rs
// Structured JSON logging with correlation IDs

use tracing::{error, info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};
use uuid::Uuid;

use crate::config::LogFormat;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize structured logging for a service
pub fn init_logging(service_name: &str) {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .json()
                .with_target(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_span_events(FmtSpan::CLOSE)
                .with_current_span(true),
        )
        .init();

    info!(service = service_name, "Logging initialized");
}

/// Initialize simple console logging (for development and the CLI)
pub fn init_console_logging(service_name: &str) {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().pretty().with_target(true).with_writer(std::io::stderr))
        .init();

    info!(service = service_name, "Console logging initialized");
}

/// Pick the subscriber matching the configured format.
pub fn init_with_format(service_name: &str, format: LogFormat) {
    match format {
        LogFormat::Json => init_logging(service_name),
        LogFormat::Pretty => init_console_logging(service_name),
    }
}

/// Generate a correlation ID for request tracing
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Context for structured logging
#[derive(Debug, Clone)]
pub struct LogContext {
    pub request_id: String,
    pub environment: Option<String>,
    pub ip_address: Option<String>,
}

impl LogContext {
    pub fn new(request_id: String) -> Self {
        Self {
            request_id,
            environment: None,
            ip_address: None,
        }
    }

    pub fn with_environment(mut self, environment: String) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn with_ip(mut self, ip: String) -> Self {
        self.ip_address = Some(ip);
        self
    }
}

/// Log a successful operation
pub fn log_success(ctx: &LogContext, action: &str, details: Option<&str>) {
    info!(
        request_id = %ctx.request_id,
        environment = ?ctx.environment,
        ip_address = ?ctx.ip_address,
        action = action,
        details = ?details,
        "Operation successful"
    );
}

/// Log a failed operation
pub fn log_failure(ctx: &LogContext, action: &str, error: &str) {
    error!(
        request_id = %ctx.request_id,
        environment = ?ctx.environment,
        ip_address = ?ctx.ip_address,
        action = action,
        error = error,
        "Operation failed"
    );
}

/// Log a validation error
pub fn log_validation_error(ctx: &LogContext, field: &str, value: &str, reason: &str) {
    warn!(
        request_id = %ctx.request_id,
        environment = ?ctx.environment,
        ip_address = ?ctx.ip_address,
        field = field,
        value = %sanitize_for_logging(value),
        reason = reason,
        "Validation error"
    );
}

/// Truncate oversized input before it reaches the log sink
pub fn sanitize_for_logging(input: &str) -> String {
    if input.chars().count() > 100 {
        let head: String = input.chars().take(20).collect();
        format!("{}...[TRUNCATED]", head)
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_id() {
        let id1 = generate_request_id();
        let id2 = generate_request_id();

        assert_ne!(id1, id2);
        assert_eq!(id1.len(), 36); // UUID v4 length
    }

    #[test]
    fn test_log_context_chaining() {
        let ctx = LogContext::new("test-123".to_string())
            .with_environment("test".to_string())
            .with_ip("192.168.1.1".to_string());

        assert_eq!(ctx.request_id, "test-123");
        assert_eq!(ctx.environment, Some("test".to_string()));
        assert_eq!(ctx.ip_address, Some("192.168.1.1".to_string()));
    }

    #[test]
    fn test_sanitize_for_logging_short() {
        assert_eq!(sanitize_for_logging("BASE_API"), "BASE_API");
    }

    #[test]
    fn test_sanitize_for_logging_long() {
        let input = "a".repeat(200);
        let sanitized = sanitize_for_logging(&input);
        assert!(sanitized.ends_with("[TRUNCATED]"));
        assert!(sanitized.len() < input.len());
    }
}
