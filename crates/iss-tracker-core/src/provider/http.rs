use std::time::Duration;

use futures::future::BoxFuture;
use tracing::debug;

use crate::position::Position;
use crate::provider::errors::ProviderError;
use crate::provider::traits::PositionProvider;
use crate::provider::wire::decode_location;

/// Fetches the position with an HTTP GET against a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpProvider {
    /// Build a provider for `endpoint` with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::ClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("iss-tracker/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProviderError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Build a provider around an already configured client.
    pub fn with_client(endpoint: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue one request and decode the body.
    pub async fn fetch_position(&self) -> Result<Position, ProviderError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| ProviderError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport {
                message: e.to_string(),
            })?;

        let position = decode_location(&body)?;

        debug!(
            event = "core.provider.fetch_completed",
            endpoint = %self.endpoint,
            latitude = position.latitude(),
            longitude = position.longitude(),
        );

        Ok(position)
    }
}

impl PositionProvider for HttpProvider {
    fn describe(&self) -> String {
        self.endpoint.clone()
    }

    fn fetch(&self) -> BoxFuture<'_, Result<Position, ProviderError>> {
        Box::pin(self.fetch_position())
    }
}
