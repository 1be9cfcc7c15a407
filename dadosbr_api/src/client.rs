//! Shared HTTP transport. Every endpoint client owns a [`Transport`] and a
//! base URL; the transport performs the GET and hands the response to the
//! format dispatcher.

use std::time::Duration;

use reqwest::header::{HeaderMap, CONTENT_DISPOSITION, CONTENT_TYPE};
use url::Url;

use crate::{
    format::{Dispatch, Payload, RawResponse},
    query::Query,
    Error,
};

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("dadosbr/", env!("CARGO_PKG_VERSION"));

/// Transport settings.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Whole-request timeout. `None` leaves the call unbounded.
    pub timeout: Option<Duration>,
    /// When `false`, 3xx responses are returned to the caller as-is.
    pub follow_redirects: bool,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            follow_redirects: true,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults for the Senate APIs, which are called without following redirects.
    pub fn senado() -> Self {
        Self::default().with_follow_redirects(false)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_follow_redirects(mut self, follow_redirects: bool) -> Self {
        self.follow_redirects = follow_redirects;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }
}

/// One-shot GET transport. Cloning shares the underlying connection pool.
#[derive(Clone, Debug)]
pub struct Transport {
    client: reqwest::Client,
}

impl Transport {
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if !config.follow_redirects {
            builder = builder.redirect(reqwest::redirect::Policy::none());
        }
        let client = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Transport(e)
        })?;
        Ok(Self { client })
    }

    /// Sends a single GET and dispatches the response.
    pub async fn fetch(&self, url: Url, dispatch: Dispatch) -> Result<Payload, Error> {
        let response = self.send(url).await?;
        dispatch.apply(response)
    }

    async fn send(&self, url: Url) -> Result<RawResponse, Error> {
        tracing::debug!("GET {}", url);
        let resp = self.client.get(url.clone()).send().await.map_err(|e| {
            tracing::error!("Failed to get resource {}: {}", url, e);
            Error::Transport(e)
        })?;

        let status = resp.status().as_u16();
        let content_type = header(resp.headers(), CONTENT_TYPE.as_str());
        let content_disposition = header(resp.headers(), CONTENT_DISPOSITION.as_str());
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body from {}: {}", url, e);
            Error::Transport(e)
        })?;

        Ok(RawResponse {
            url: url.to_string(),
            status,
            content_type,
            content_disposition,
            body,
        })
    }
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Transport bound to one base URL.
#[derive(Clone, Debug)]
pub(crate) struct Endpoint {
    transport: Transport,
    base_url: String,
}

impl Endpoint {
    pub(crate) fn new(transport: Transport, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url<Q: Query + ?Sized>(&self, path: &str, query: &Q) -> Result<Url, Error> {
        let url = Url::parse(&format!("{}/{}", self.base_url, path.trim_start_matches('/')))
            .map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::InvalidUrl(e)
            })?;
        Ok(query.add_to_url(&url))
    }

    /// Like [`Endpoint::url`], with `segment` appended as one percent-encoded
    /// path segment. `/`, `?` and `#` inside `segment` stay part of it.
    pub(crate) fn url_with_segment<Q: Query + ?Sized>(
        &self,
        path: &str,
        segment: &str,
        query: &Q,
    ) -> Result<Url, Error> {
        let mut url = self.url(path, &())?;
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL cannot take path segments: {}", self.base_url);
                Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase)
            })?
            .pop_if_empty()
            .push(segment);
        Ok(query.add_to_url(&url))
    }

    pub(crate) async fn get<Q: Query + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        dispatch: Dispatch,
    ) -> Result<Payload, Error> {
        let url = self.url(path, query)?;
        self.transport.fetch(url, dispatch).await
    }

    pub(crate) async fn get_segment<Q: Query + ?Sized>(
        &self,
        path: &str,
        segment: &str,
        query: &Q,
        dispatch: Dispatch,
    ) -> Result<Payload, Error> {
        let url = self.url_with_segment(path, segment, query)?;
        self.transport.fetch(url, dispatch).await
    }
}

#[cfg(test)]
mod tests {
    use crate::query::ODataQuery;

    use super::{ClientConfig, Endpoint, Transport};

    #[test]
    fn test_endpoint_url_joins_base_and_path() {
        let transport = Transport::new(&ClientConfig::default()).unwrap();
        let endpoint = Endpoint::new(transport, "https://example.com/api/v1/");
        let url = endpoint.url("/servidores/cargos", &()).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/v1/servidores/cargos");

        let url = endpoint
            .url("odata/Moedas", &ODataQuery::default().with_top(1))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/api/v1/odata/Moedas?%24top=1&%24format=json"
        );
    }

    #[test]
    fn test_senado_config_disables_redirects() {
        let config = ClientConfig::senado();
        assert!(!config.follow_redirects);
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("dadosbr/"));
    }

    #[test]
    fn test_endpoint_url_with_segment_encodes_reserved_characters() {
        let transport = Transport::new(&ClientConfig::default()).unwrap();
        let endpoint = Endpoint::new(transport, "https://example.com/odata");
        let url = endpoint
            .url_with_segment("PTAX", "Dia(moeda='EUR#x/y?a=b',data='03-05-2024')", &())
            .unwrap();
        assert_eq!(
            url.path(),
            "/odata/PTAX/Dia(moeda='EUR%23x%2Fy%3Fa=b',data='03-05-2024')"
        );
        assert_eq!(url.fragment(), None);
        assert_eq!(url.query(), None);

        let url = endpoint
            .url_with_segment("PTAX/", "Moedas", &ODataQuery::default())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/odata/PTAX/Moedas?%24format=json"
        );
    }

    #[test]
    fn test_custom_user_agent_builds_transport() {
        let config = ClientConfig::default()
            .with_user_agent("pesquisa/1.0")
            .with_timeout(std::time::Duration::from_secs(5));
        assert_eq!(config.user_agent, "pesquisa/1.0");
        assert_eq!(config.timeout, Some(std::time::Duration::from_secs(5)));
        assert!(Transport::new(&config).is_ok());
    }
}
