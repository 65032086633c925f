// core/common/src/health.rs
// Health reporting for the profile service and the origins it advertises

use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant, SystemTime};

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
const DEGRADED_LATENCY_MS: u64 = 2000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub service: String,
    pub version: String,
    pub environment: String,
    pub uptime_seconds: u64,
    pub dependencies: Vec<DependencyHealth>,
}

impl HealthResponse {
    pub fn new(service: String, version: String, environment: String, start_time: SystemTime) -> Self {
        let uptime = SystemTime::now()
            .duration_since(start_time)
            .unwrap_or(Duration::from_secs(0))
            .as_secs();

        Self {
            status: HealthStatus::Healthy,
            service,
            version,
            environment,
            uptime_seconds: uptime,
            dependencies: Vec::new(),
        }
    }

    pub fn add_dependency(&mut self, dependency: DependencyHealth) {
        self.dependencies.push(dependency);
        self.update_overall_status();
    }

    // Worst dependency status wins.
    fn update_overall_status(&mut self) {
        if self.dependencies.is_empty() {
            return;
        }

        let has_unhealthy = self.dependencies.iter().any(|d| d.status == HealthStatus::Unhealthy);
        let has_degraded = self.dependencies.iter().any(|d| d.status == HealthStatus::Degraded);

        self.status = if has_unhealthy {
            HealthStatus::Unhealthy
        } else if has_degraded {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        };
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DependencyHealth {
    pub name: String,
    pub status: HealthStatus,
    pub latency_ms: Option<u64>,
    pub message: Option<String>,
}

impl DependencyHealth {
    pub fn new(name: String, status: HealthStatus) -> Self {
        Self {
            name,
            status,
            latency_ms: None,
            message: None,
        }
    }

    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = Some(latency_ms);
        self
    }

    pub fn with_message(mut self, message: String) -> Self {
        self.message = Some(message);
        self
    }
}

/// Check an external HTTP origin.
///
/// Any response (even 4xx) means the origin is reachable; only 5xx or a
/// transport error marks it unhealthy.
pub async fn check_external_api_health(name: &str, url: &str) -> DependencyHealth {
    let start = Instant::now();
    let client = reqwest::Client::new();

    match client.get(url).timeout(PROBE_TIMEOUT).send().await {
        Ok(response) => {
            let latency = start.elapsed().as_millis() as u64;

            let status = if response.status().is_server_error() {
                HealthStatus::Unhealthy
            } else if latency > DEGRADED_LATENCY_MS {
                HealthStatus::Degraded
            } else {
                HealthStatus::Healthy
            };

            DependencyHealth::new(name.to_string(), status)
                .with_latency(latency)
                .with_message(format!("HTTP {}", response.status()))
        }
        Err(e) => DependencyHealth::new(name.to_string(), HealthStatus::Unhealthy)
            .with_message(format!("API error: {}", e)),
    }
}

/// Probe several origins concurrently, preserving input order.
pub async fn check_origins_health(origins: &[(String, String)]) -> Vec<DependencyHealth> {
    join_all(
        origins
            .iter()
            .map(|(name, url)| check_external_api_health(name, url)),
    )
    .await
}

/// Liveness probe - is the service running?
#[derive(Debug, Clone, Serialize)]
pub struct LivenessProbe {
    pub alive: bool,
}

impl LivenessProbe {
    pub fn healthy() -> Self {
        Self { alive: true }
    }
}

/// Readiness probe - is the service ready to accept traffic?
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessProbe {
    pub ready: bool,
    pub profile_loaded: bool,
}

impl ReadinessProbe {
    pub fn new(profile_loaded: bool) -> Self {
        Self {
            ready: profile_loaded,
            profile_loaded,
        }
    }

    pub fn ready() -> Self {
        Self::new(true)
    }

    pub fn not_ready() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response() -> HealthResponse {
        HealthResponse::new(
            "env-service".to_string(),
            "0.1.0".to_string(),
            "test".to_string(),
            SystemTime::now(),
        )
    }

    #[test]
    fn test_health_status_is_healthy() {
        assert!(HealthStatus::Healthy.is_healthy());
        assert!(!HealthStatus::Degraded.is_healthy());
        assert!(!HealthStatus::Unhealthy.is_healthy());
    }

    #[test]
    fn test_health_response_without_dependencies() {
        let health = response();

        assert_eq!(health.status, HealthStatus::Healthy);
        assert_eq!(health.environment, "test");
        assert!(health.dependencies.is_empty());
    }

    #[test]
    fn test_health_response_worst_status_wins() {
        let mut health = response();

        health.add_dependency(DependencyHealth::new("BASE_API".to_string(), HealthStatus::Healthy));
        assert_eq!(health.status, HealthStatus::Healthy);

        health.add_dependency(
            DependencyHealth::new("BASE_ECO_API".to_string(), HealthStatus::Degraded).with_latency(2500),
        );
        assert_eq!(health.status, HealthStatus::Degraded);

        health.add_dependency(
            DependencyHealth::new("BASE_PAYMENT_GATEWAY_API".to_string(), HealthStatus::Unhealthy)
                .with_message("Connection refused".to_string()),
        );
        assert_eq!(health.status, HealthStatus::Unhealthy);
        assert_eq!(health.dependencies.len(), 3);
    }

    #[test]
    fn test_readiness_probe() {
        assert!(ReadinessProbe::ready().ready);
        assert!(!ReadinessProbe::not_ready().profile_loaded);
    }

    #[tokio::test]
    async fn test_unreachable_origin_is_unhealthy() {
        // Port 9 on localhost (discard) is not expected to serve HTTP.
        let dep = check_external_api_health("BASE_API", "http://127.0.0.1:9/").await;
        assert_eq!(dep.name, "BASE_API");
        assert_eq!(dep.status, HealthStatus::Unhealthy);
        assert!(dep.message.is_some());
    }

    #[test]
    fn test_health_response_serialization() {
        let mut health = response();
        health.add_dependency(
            DependencyHealth::new("BASE_API".to_string(), HealthStatus::Healthy).with_latency(10),
        );

        let json = serde_json::to_string(&health).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"environment\":\"test\""));
        assert!(json.contains("\"BASE_API\""));
    }
}
