use crate::config::NwmHsConfig;
use crate::hydroshare::error::FetchError;
use async_trait::async_trait;
use log::info;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};

/// Status and body of a `GetWaterML` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Issues the HTTP call for a validated query.
///
/// The endpoint and credential belong to the implementation; callers only
/// provide the query parameters. A non-success status is returned as-is,
/// deciding what it means is left to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    /// The URL requests are sent to, used in error messages.
    fn endpoint(&self) -> &str;

    async fn fetch(&self, query: &[(&'static str, String)]) -> Result<RawResponse, FetchError>;
}

/// [`Transport`] for the HydroShare NWM forecasts app.
pub struct HydroShareTransport {
    client: Client,
    endpoint: String,
    token: String,
}

impl HydroShareTransport {
    pub fn new(config: &NwmHsConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::ClientBuild)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: config.token.clone(),
        })
    }
}

#[async_trait]
impl Transport for HydroShareTransport {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch(&self, query: &[(&'static str, String)]) -> Result<RawResponse, FetchError> {
        info!("Requesting WaterML from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(query)
            .header(AUTHORIZATION, format!("Token {}", self.token))
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(self.endpoint.clone(), e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::ResponseBody(self.endpoint.clone(), e))?;
        info!(
            "Received {} bytes from {} with status {}",
            body.len(),
            self.endpoint,
            status
        );

        Ok(RawResponse { status, body })
    }
}
