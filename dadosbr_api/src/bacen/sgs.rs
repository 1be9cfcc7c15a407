use crate::{
    client::{ClientConfig, Endpoint, Transport},
    format::{Dispatch, Payload},
    query::SgsQuery,
    Error,
};

/// Client for the SGS time-series API.
#[derive(Clone, Debug)]
pub struct SgsClient {
    endpoint: Endpoint,
}

impl SgsClient {
    pub const BASE_URL: &'static str = "https://api.bcb.gov.br/dados/serie";

    pub fn new() -> Result<Self, Error> {
        Self::with_config(&ClientConfig::default())
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self, Error> {
        Ok(Self::with_transport(Transport::new(config)?, Self::BASE_URL))
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Ok(Self::with_transport(
            Transport::new(&ClientConfig::default())?,
            base_url,
        ))
    }

    pub fn with_transport(transport: Transport, base_url: &str) -> Self {
        Self {
            endpoint: Endpoint::new(transport, base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        self.endpoint.base_url()
    }

    /// Fetches observations of one series.
    ///
    /// Returns JSON unless the query asks for CSV, in which case the body is
    /// returned as text.
    pub async fn series(&self, query: &SgsQuery) -> Result<Payload, Error> {
        let format = query.effective_format();
        if format != query.format {
            tracing::warn!("SGS does not serve {}, falling back to {}", query.format, format);
        }
        self.endpoint
            .get(&query.path(), query, Dispatch::Requested(format))
            .await
    }
}
