// core/common/src/metrics.rs
// Prometheus metrics collection

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGaugeVec, Opts, Registry, TextEncoder,
};
use std::time::Instant;

/// Service-wide metrics
#[derive(Clone)]
pub struct ServiceMetrics {
    pub http_requests_total: IntCounterVec,
    pub http_request_duration_seconds: HistogramVec,
    pub http_requests_in_progress: IntGaugeVec,
    pub errors_total: IntCounterVec,
}

impl ServiceMetrics {
    pub fn new(registry: &Registry, service_name: &str) -> Result<Self, prometheus::Error> {
        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests")
                .namespace(service_name),
            &["method", "endpoint", "status"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            )
            .namespace(service_name)
            .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
            &["method", "endpoint"],
        )?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        let http_requests_in_progress = IntGaugeVec::new(
            Opts::new("http_requests_in_progress", "Number of HTTP requests currently being processed")
                .namespace(service_name),
            &["method"],
        )?;
        registry.register(Box::new(http_requests_in_progress.clone()))?;

        let errors_total = IntCounterVec::new(
            Opts::new("errors_total", "Total number of errors")
                .namespace(service_name),
            &["type", "operation"],
        )?;
        registry.register(Box::new(errors_total.clone()))?;

        Ok(Self {
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_progress,
            errors_total,
        })
    }

    /// Record an HTTP request
    pub fn record_http_request(&self, method: &str, endpoint: &str, status: u16, duration: f64) {
        self.http_requests_total
            .with_label_values(&[method, endpoint, &status.to_string()])
            .inc();

        self.http_request_duration_seconds
            .with_label_values(&[method, endpoint])
            .observe(duration);
    }

    /// Record an error
    pub fn record_error(&self, error_type: &str, operation: &str) {
        self.errors_total
            .with_label_values(&[error_type, operation])
            .inc();
    }
}

/// Profile lookup and rendering metrics
#[derive(Clone)]
pub struct ProfileMetrics {
    pub key_lookups_total: IntCounterVec,
    pub renders_total: IntCounterVec,
}

impl ProfileMetrics {
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let key_lookups_total = IntCounterVec::new(
            Opts::new("profile_key_lookups_total", "Total number of single-key lookups"),
            &["key", "status"],
        )?;
        registry.register(Box::new(key_lookups_total.clone()))?;

        let renders_total = IntCounterVec::new(
            Opts::new("profile_renders_total", "Total number of full profile renders"),
            &["format"],
        )?;
        registry.register(Box::new(renders_total.clone()))?;

        Ok(Self {
            key_lookups_total,
            renders_total,
        })
    }

    pub fn record_lookup(&self, key: &str, found: bool) {
        // Unknown names are bucketed so arbitrary input cannot blow up label cardinality.
        let (key, status) = if found { (key, "found") } else { ("unknown", "not_found") };
        self.key_lookups_total.with_label_values(&[key, status]).inc();
    }

    pub fn record_render(&self, format: &str) {
        self.renders_total.with_label_values(&[format]).inc();
    }
}

/// Encode everything in the registry in the Prometheus text format.
pub fn gather_text(registry: &Registry) -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&registry.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}

/// Timer to measure operation duration
pub struct MetricsTimer {
    start: Instant,
}

impl MetricsTimer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for MetricsTimer {
    fn default() -> Self {
        Self::new()
    }
}
