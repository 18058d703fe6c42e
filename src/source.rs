//! Document source: retrieve raw agent documents by identifier.

use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Default per-request timeout (30 seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetch capability injected into the pipeline.
///
/// Implementations return the raw document text for an identifier or a
/// transport-level failure. One attempt per call; retry policy is the
/// caller's concern (the pipeline performs none).
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self, name: &str) -> Result<String, FetchError>;
}

/// HTTP document source.
///
/// The target address is the configured base URL with the identifier
/// appended. Single GET per document, no authentication, no custom headers.
pub struct HttpSource {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            timeout,
        }
    }

    fn target_url(&self, name: &str) -> String {
        format!("{}{}", self.base_url, name)
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self, name: &str) -> Result<String, FetchError> {
        let url = self.target_url(name);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                let reason = if e.is_timeout() {
                    format!("request timed out after {:?}", self.timeout)
                } else if e.is_connect() {
                    format!("failed to connect: {}", e)
                } else {
                    format!("request failed: {}", e)
                };
                FetchError::Transport {
                    name: name.to_string(),
                    reason,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                name: name.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| FetchError::Transport {
            name: name.to_string(),
            reason: format!("failed to read response body: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_url_appends_identifier_to_base() {
        let source = HttpSource::new("https://example.com/agents/");
        assert_eq!(
            source.target_url("debugger.md"),
            "https://example.com/agents/debugger.md"
        );
    }

    #[test]
    fn target_url_is_plain_concatenation() {
        // The base address is expected to carry its trailing slash.
        let source = HttpSource::new("https://example.com/agents");
        assert_eq!(
            source.target_url("debugger.md"),
            "https://example.com/agentsdebugger.md"
        );
    }
}
