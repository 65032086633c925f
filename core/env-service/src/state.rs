// core/env-service/src/state.rs
// Shared, read-only application state

use std::time::SystemTime;

use mcs_common::{ProfileMetrics, ServiceMetrics};
use mcs_env_profile::{EnvProfile, EnvironmentVariant, ProfileError};
use prometheus::Registry;

pub struct AppState {
    pub profile: EnvProfile,
    pub variant: EnvironmentVariant,
    pub start_time: SystemTime,
    pub probe_origins: bool,
    pub registry: Registry,
    pub service_metrics: ServiceMetrics,
    pub profile_metrics: ProfileMetrics,
}

impl AppState {
    /// Load and validate the profile for `environment` and register the metrics.
    pub fn new(environment: &str, probe_origins: bool) -> anyhow::Result<Self> {
        let variant: EnvironmentVariant = environment.parse()?;
        let profile = EnvProfile::for_variant(variant)?;
        profile.validate()?;

        if profile.environment()? != variant {
            return Err(ProfileError::InvalidValue {
                key: mcs_env_profile::EnvKey::NodeEnv,
                reason: format!("profile declares a different environment than {}", variant),
            }
            .into());
        }

        let registry = Registry::new();
        let service_metrics = ServiceMetrics::new(&registry, "env_service")?;
        let profile_metrics = ProfileMetrics::new(&registry)?;

        Ok(Self {
            profile,
            variant,
            start_time: SystemTime::now(),
            probe_origins,
            registry,
            service_metrics,
            profile_metrics,
        })
    }
}
