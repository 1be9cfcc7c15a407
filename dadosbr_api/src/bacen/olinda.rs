//! Clients for the Olinda OData services: market expectations, coin
//! emission and PTAX quotations.

use chrono::NaiveDate;

use crate::{
    client::{ClientConfig, Endpoint, Transport},
    format::{Dispatch, Payload},
    query::{ODataQuery, PtaxResource},
    types::ExpectationsReport,
    Error,
};

/// Base URL shared by every Olinda service.
pub const OLINDA_BASE_URL: &str = "https://olinda.bcb.gov.br/olinda/servico";

const EXPECTATIONS_SERVICE: &str = "Expectativas/versao/v1/odata";
const COIN_EMISSION_SERVICE: &str = "mecir_moedas/versao/v1/odata";
const COIN_EMISSION_ANNUAL: &str = "informacoes_anuais";
const PTAX_SERVICE: &str = "PTAX/versao/v1/odata";

async fn get_odata(
    endpoint: &Endpoint,
    service: &str,
    resource: &str,
    query: &ODataQuery,
) -> Result<Payload, Error> {
    endpoint
        .get(
            &format!("{}/{}", service, resource),
            query,
            Dispatch::Requested(query.format),
        )
        .await
}

/// Client for the Focus market-expectations reports.
#[derive(Clone, Debug)]
pub struct ExpectationsClient {
    endpoint: Endpoint,
}

impl ExpectationsClient {
    pub fn new() -> Result<Self, Error> {
        Self::with_config(&ClientConfig::default())
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self, Error> {
        Ok(Self::with_transport(Transport::new(config)?, OLINDA_BASE_URL))
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

    pub async fn report(
        &self,
        report: ExpectationsReport,
        query: &ODataQuery,
    ) -> Result<Payload, Error> {
        get_odata(&self.endpoint, EXPECTATIONS_SERVICE, report.resource(), query).await
    }
}

/// Client for the annual coin emission data of the currency department.
#[derive(Clone, Debug)]
pub struct CoinEmissionClient {
    endpoint: Endpoint,
}

impl CoinEmissionClient {
    pub fn new() -> Result<Self, Error> {
        Self::with_config(&ClientConfig::default())
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self, Error> {
        Ok(Self::with_transport(Transport::new(config)?, OLINDA_BASE_URL))
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

    pub async fn annual(&self, query: &ODataQuery) -> Result<Payload, Error> {
        get_odata(
            &self.endpoint,
            COIN_EMISSION_SERVICE,
            COIN_EMISSION_ANNUAL,
            query,
        )
        .await
    }
}

/// Client for PTAX exchange-rate quotations.
///
/// Currency codes are the ones listed by [`PtaxClient::currencies`], e.g. `EUR`.
#[derive(Clone, Debug)]
pub struct PtaxClient {
    endpoint: Endpoint,
}

impl PtaxClient {
    pub fn new() -> Result<Self, Error> {
        Self::with_config(&ClientConfig::default())
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self, Error> {
        Ok(Self::with_transport(Transport::new(config)?, OLINDA_BASE_URL))
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

    /// Fetches any PTAX resource.
    pub async fn resource(
        &self,
        resource: &PtaxResource,
        query: &ODataQuery,
    ) -> Result<Payload, Error> {
        self.endpoint
            .get_segment(
                PTAX_SERVICE,
                &resource.path_segment(),
                query,
                Dispatch::Requested(query.format),
            )
            .await
    }

    pub async fn currencies(&self, query: &ODataQuery) -> Result<Payload, Error> {
        self.resource(&PtaxResource::Currencies, query).await
    }

    pub async fn dollar_day(&self, date: NaiveDate, query: &ODataQuery) -> Result<Payload, Error> {
        self.resource(&PtaxResource::DollarDay { date }, query).await
    }

    pub async fn dollar_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        query: &ODataQuery,
    ) -> Result<Payload, Error> {
        self.resource(&PtaxResource::DollarPeriod { start, end }, query)
            .await
    }

    pub async fn currency_day(
        &self,
        currency: &str,
        date: NaiveDate,
        query: &ODataQuery,
    ) -> Result<Payload, Error> {
        let resource = PtaxResource::CurrencyDay {
            currency: currency.to_string(),
            date,
        };
        self.resource(&resource, query).await
    }

    pub async fn currency_period(
        &self,
        currency: &str,
        start: NaiveDate,
        end: NaiveDate,
        query: &ODataQuery,
    ) -> Result<Payload, Error> {
        let resource = PtaxResource::CurrencyPeriod {
            currency: currency.to_string(),
            start,
            end,
        };
        self.resource(&resource, query).await
    }

    pub async fn currency_opening_or_intermediate(
        &self,
        currency: &str,
        date: NaiveDate,
        query: &ODataQuery,
    ) -> Result<Payload, Error> {
        let resource = PtaxResource::CurrencyOpeningOrIntermediate {
            currency: currency.to_string(),
            date,
        };
        self.resource(&resource, query).await
    }

    pub async fn currency_period_closing(
        &self,
        currency: &str,
        start: NaiveDate,
        end: NaiveDate,
        query: &ODataQuery,
    ) -> Result<Payload, Error> {
        let resource = PtaxResource::CurrencyPeriodClosing {
            currency: currency.to_string(),
            start,
            end,
        };
        self.resource(&resource, query).await
    }
}
