use super::client::EnvClient;
use anyhow::{ensure, Context, Result};
use mcs_env_profile::{parse_module, EnvKey, EnvProfile, QuotedLiteral};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct KeyValue {
    key: EnvKey,
    value: String,
}

impl EnvClient {
    /// Fetch the whole profile; the values are validated before it is returned.
    pub async fn fetch_profile(&self) -> Result<EnvProfile> {
        let body = self.get_text("/env").await?;
        EnvProfile::from_json(&body).context("service returned an invalid profile")
    }

    /// Fetch a single raw literal by key name.
    pub async fn fetch_value(&self, key: EnvKey) -> Result<QuotedLiteral> {
        let body = self.get_text(&format!("/env/{}", key)).await?;
        let reply: KeyValue = serde_json::from_str(&body)?;

        ensure!(
            reply.key == key,
            "asked for {} but the service answered for {}",
            key,
            reply.key
        );
        Ok(QuotedLiteral::parse(&reply.value)?)
    }

    /// Fetch the rendered CommonJS module and parse it back into a profile.
    pub async fn fetch_module(&self) -> Result<EnvProfile> {
        let body = self.get_text("/env.js").await?;
        parse_module(&body).context("service returned an invalid module")
    }
}
