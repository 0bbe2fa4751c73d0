//! HTTP client for the remote explain service.

use reqwest::Client;
use std::future::Future;
use std::time::{Duration, Instant};

use crate::config::ServiceConfig;

use super::error::ExplainError;
use super::types::{ExplainRequest, ExplainResponse};

/// Anything that can turn code into an explanation.
///
/// [`ExplainClient`] is the production implementation; the session store only
/// depends on this contract.
pub trait ExplainService: Send + Sync {
    fn explain(
        &self,
        request: ExplainRequest,
    ) -> impl Future<Output = Result<ExplainResponse, ExplainError>> + Send;
}

/// Client for `POST {base_url}/api/explain/`.
///
/// No authentication, no retries. A timeout is applied only when configured.
#[derive(Debug, Clone)]
pub struct ExplainClient {
    client: Client,
    endpoint: String,
}

impl ExplainClient {
    /// Create a client from service config.
    pub fn new(config: &ServiceConfig) -> Result<Self, ExplainError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
        })
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, request: &ExplainRequest) -> Result<ExplainResponse, ExplainError> {
        tracing::debug!(
            url = %self.endpoint,
            language = %request.language,
            code_len = request.code.len(),
            "Sending explain request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::warn!(
                status = %status,
                latency_ms,
                error = %body,
                "Explain service returned an error"
            );

            return Err(ExplainError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let parsed: ExplainResponse = serde_json::from_str(&text)
            .map_err(|e| ExplainError::Decode(format!("Failed to parse response JSON: {}", e)))?;

        tracing::debug!(
            status = %status,
            latency_ms,
            explanation_len = parsed.explanation.len(),
            "Explain request succeeded"
        );

        Ok(parsed)
    }
}

impl ExplainService for ExplainClient {
    async fn explain(&self, request: ExplainRequest) -> Result<ExplainResponse, ExplainError> {
        let result = self.send(&request).await;
        if let Err(ExplainError::Transport(err)) = &result {
            tracing::warn!(url = %self.endpoint, error = %err, "Explain request failed");
        }
        result
    }
}
