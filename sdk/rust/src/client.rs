use anyhow::{bail, Result};
use reqwest::Client;

/// HTTP client for the env-service profile endpoints.
pub struct EnvClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl EnvClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and return the body, turning any non-2xx status into an error.
    pub(crate) async fn get_text(&self, path: &str) -> Result<String> {
        let response = self.client.get(self.url(path)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            bail!("GET {} failed with {}: {}", path, status, body);
        }
        Ok(body)
    }
}
