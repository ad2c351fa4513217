//! Outbound host requests over HTTP.
//!
//! Every [`HostRequest`] becomes one `POST {endpoint}/{resource}/{action}`
//! with a JSON body. Requests are fire-and-forget: [`HttpHost::send`] spawns
//! the POST and returns immediately, the response is ignored and failures are
//! logged at `warn` without retry.
//!
//! # Configuration
//!
//! [`HttpHostConfig::default`] reads environment variables:
//! - `PHONEBOX_ENDPOINT`: host base URL (default: `http://127.0.0.1:30120`)
//! - `PHONEBOX_RESOURCE`: resource name the host routes on (default: `phone`)

use std::time::Duration;

use phonebox_proto::HostRequest;
use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use tokio::runtime::Handle;

use crate::TransportError;

/// Default host base URL.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:30120";

/// Default resource name.
pub const DEFAULT_RESOURCE: &str = "phone";

/// Configuration for [`HttpHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpHostConfig {
    /// Host base URL.
    pub endpoint: String,
    /// Resource name, the first path segment of every request.
    pub resource: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for HttpHostConfig {
    fn default() -> Self {
        Self {
            endpoint: std::env::var("PHONEBOX_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_owned()),
            resource: std::env::var("PHONEBOX_RESOURCE")
                .unwrap_or_else(|_| DEFAULT_RESOURCE.to_owned()),
            timeout: Duration::from_secs(5),
        }
    }
}

impl HttpHostConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), TransportError> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(TransportError::Config(format!(
                "endpoint must be an http(s) URL: {}",
                self.endpoint
            )));
        }
        if self.resource.is_empty() || self.resource.contains('/') {
            return Err(TransportError::Config(format!("invalid resource name: {:?}", self.resource)));
        }
        Ok(())
    }

    /// Full URL for an action.
    pub fn url(&self, action: &str) -> String {
        format!("{}/{}/{action}", self.endpoint.trim_end_matches('/'), self.resource)
    }
}

/// Fire-and-forget HTTP sender for host requests.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpHost {
    config: HttpHostConfig,
    http: Client,
}

impl HttpHost {
    /// Create a sender with the given configuration.
    pub fn new(config: HttpHostConfig) -> Result<Self, TransportError> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Config(e.to_string()))?;

        Ok(Self { config, http })
    }

    /// Get the configuration.
    pub fn config(&self) -> &HttpHostConfig {
        &self.config
    }

    /// Spawn the POST for `request` and return without waiting.
    ///
    /// # Errors
    ///
    /// Fails only if called outside a tokio runtime. Delivery failures are
    /// logged by the spawned task.
    pub fn send(&self, request: HostRequest) -> Result<(), TransportError> {
        let runtime = Handle::try_current().map_err(|_| TransportError::NoRuntime)?;
        let host = self.clone();

        runtime.spawn(async move {
            let action = request.action();
            match host.post(&request).await {
                Ok(status) if status.is_success() => {
                    tracing::trace!(action, %status, "host request delivered");
                },
                Ok(status) => tracing::warn!(action, %status, "host rejected request"),
                Err(e) => tracing::warn!(action, error = %e, "host request failed"),
            }
        });
        Ok(())
    }

    /// POST `request` and wait for the response status.
    pub async fn post(&self, request: &HostRequest) -> Result<StatusCode, TransportError> {
        let url = self.config.url(request.action());
        let body = request.encode_body()?;

        tracing::debug!(%url, "posting host request");
        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json; charset=UTF-8")
            .body(body)
            .send()
            .await?;
        Ok(response.status())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config(endpoint: &str) -> HttpHostConfig {
        HttpHostConfig {
            endpoint: endpoint.into(),
            resource: "phone".into(),
            timeout: Duration::from_secs(1),
        }
    }

    #[test]
    fn url_joins_endpoint_resource_and_action() {
        assert_eq!(
            config("http://localhost:30120/").url("phone:openApp"),
            "http://localhost:30120/phone/phone:openApp"
        );
    }

    #[test]
    fn rejects_non_http_endpoint() {
        assert!(matches!(config("ftp://host").validate(), Err(TransportError::Config(_))));
        assert!(config("https://host").validate().is_ok());
    }

    #[test]
    fn rejects_resource_with_slash() {
        let config = HttpHostConfig { resource: "a/b".into(), ..config("http://host") };
        assert!(config.validate().is_err());
    }

    #[test]
    fn send_outside_runtime_fails() {
        let host = HttpHost::new(config("http://127.0.0.1:9")).unwrap();
        assert!(matches!(host.send(HostRequest::Lock), Err(TransportError::NoRuntime)));
    }
}
