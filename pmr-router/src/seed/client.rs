//! HTTP seed import.

use std::time::Duration;

use tracing::info;

use crate::index::{ImportSummary, StationIndex, StationStore};

use super::document::SeedDocument;
use super::error::SeedError;

/// Configuration for the seed client.
#[derive(Debug, Clone)]
pub struct SeedClientConfig {
    /// URL of the seed document
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SeedClientConfig {
    /// Create a new config for the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: 30,
        }
    }

    /// Set a custom request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Fetches seed documents over HTTP.
#[derive(Debug, Clone)]
pub struct SeedClient {
    http: reqwest::Client,
    url: String,
}

impl SeedClient {
    /// Create a new seed client.
    pub fn new(config: SeedClientConfig) -> Result<Self, SeedError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// Fetch and parse the seed document.
    pub async fn fetch(&self) -> Result<SeedDocument, SeedError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SeedError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        SeedDocument::from_json(&body)
    }

    /// Fetch the seed document and import it into `index`.
    pub async fn load_into<S: StationStore>(
        &self,
        index: &StationIndex<S>,
    ) -> Result<ImportSummary, SeedError> {
        let summary = self.fetch().await?.import_into(index)?;
        info!(
            url = %self.url,
            stations = summary.stations,
            connections = summary.connections,
            "loaded seed document"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = SeedClientConfig::new("http://localhost:8080/seed.json");
        assert_eq!(config.url, "http://localhost:8080/seed.json");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_with_timeout() {
        let config = SeedClientConfig::new("http://localhost:8080/seed.json").with_timeout_secs(5);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn builds_client() {
        let client = SeedClient::new(SeedClientConfig::new("http://localhost:8080/seed.json"));
        assert!(client.is_ok());
    }
}
