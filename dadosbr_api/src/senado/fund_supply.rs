use crate::{
    client::{ClientConfig, Endpoint, Transport},
    format::{Dispatch, Payload},
    query::Route,
    Error, Format,
};

use super::{area_url, DADOS_ABERTOS_BASE_URL};

const AREA: &str = "supridos";

const BY_YEAR: Route = Route::new("{}").with_csv();
const TRANSACTIONS: Route = Route::new("transacoes/{}").with_csv();
const MOVEMENTS: Route = Route::new("movimentacoes/{}").with_csv();
const COMMITMENTS: Route = Route::new("empenhos/{}").with_csv();
const GRANT_ACTS: Route = Route::new("atosConcessao/{}").with_csv();

/// Client for fund supply ("suprimento de fundos") grants.
///
/// Every listing is scoped to one year.
#[derive(Clone, Debug)]
pub struct FundSupplyClient {
    endpoint: Endpoint,
}

impl FundSupplyClient {
    pub fn new() -> Result<Self, Error> {
        Self::with_config(&ClientConfig::senado())
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self, Error> {
        Ok(Self::with_transport(
            Transport::new(config)?,
            DADOS_ABERTOS_BASE_URL,
        ))
    }

    /// Creates a client with a custom open-data root. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Ok(Self::with_transport(
            Transport::new(&ClientConfig::senado())?,
            base_url,
        ))
    }

    pub fn with_transport(transport: Transport, base_url: &str) -> Self {
        Self {
            endpoint: Endpoint::new(transport, &area_url(base_url, AREA)),
        }
    }

    pub fn base_url(&self) -> &str {
        self.endpoint.base_url()
    }

    async fn get(&self, route: Route, year: i32, format: Format) -> Result<Payload, Error> {
        let path = route.path(&[&year], format);
        self.endpoint.get(&path, &(), Dispatch::Negotiated).await
    }

    /// People supplied with funds by grant act in `year`.
    pub async fn by_year(&self, year: i32, format: Format) -> Result<Payload, Error> {
        self.get(BY_YEAR, year, format).await
    }

    pub async fn transactions(&self, year: i32, format: Format) -> Result<Payload, Error> {
        self.get(TRANSACTIONS, year, format).await
    }

    pub async fn movements(&self, year: i32, format: Format) -> Result<Payload, Error> {
        self.get(MOVEMENTS, year, format).await
    }

    pub async fn commitments(&self, year: i32, format: Format) -> Result<Payload, Error> {
        self.get(COMMITMENTS, year, format).await
    }

    pub async fn grant_acts(&self, year: i32, format: Format) -> Result<Payload, Error> {
        self.get(GRANT_ACTS, year, format).await
    }
}
