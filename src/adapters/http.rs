use crate::domain::model::{Project, ProjectsResponse};
use crate::domain::ports::{ConfigProvider, ProjectSource};
use crate::utils::error::{ExplorerError, Result};
use reqwest::Client;

/// Fetches the project list with a single unauthenticated GET. No query
/// parameters, no timeout, no retry: a hung request simply never resolves
/// and a failed one is reported once.
pub struct HttpProjectSource {
    endpoint: String,
    client: Client,
}

impl HttpProjectSource {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.api_endpoint().to_string())
    }
}

impl ProjectSource for HttpProjectSource {
    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        tracing::debug!("Requesting projects from: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(ExplorerError::FetchError {
                reason: format!("server returned status {}", status),
            });
        }

        // Decode from the raw body so a malformed payload surfaces as a
        // decode failure rather than a transport one.
        let body = response.text().await?;
        let payload: ProjectsResponse = serde_json::from_str(&body)?;
        Ok(payload.jobs)
    }
}
