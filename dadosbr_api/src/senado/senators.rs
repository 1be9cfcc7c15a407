use crate::{
    client::{ClientConfig, Endpoint, Transport},
    format::{Dispatch, Payload},
    query::{HousingAllowanceFilter, Route},
    Error, Format,
};

use super::{area_url, DADOS_ABERTOS_BASE_URL};

const AREA: &str = "senadores";

const HEADCOUNT: Route = Route::new("quantitativos/senadores").with_csv();
const OFFICES: Route = Route::new("escritorios").with_csv();
const CEAPS_EXPENSES: Route = Route::new("despesas_ceaps/{}").with_csv();
const HOUSING_ALLOWANCE: Route = Route::new("auxilio-moradia").with_csv();
const RETIREES: Route = Route::new("aposentados").with_csv();

/// Client for senators and former senators on the Senate payroll.
#[derive(Clone, Debug)]
pub struct SenatorsClient {
    endpoint: Endpoint,
}

impl SenatorsClient {
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

    /// Headcount of senators and former senators by group.
    pub async fn headcount(&self, format: Format) -> Result<Payload, Error> {
        self.endpoint
            .get(&HEADCOUNT.path(&[], format), &(), Dispatch::Negotiated)
            .await
    }

    /// Support offices of the senators.
    pub async fn offices(&self, format: Format) -> Result<Payload, Error> {
        self.endpoint
            .get(&OFFICES.path(&[], format), &(), Dispatch::Negotiated)
            .await
    }

    /// CEAPS (parliamentary activity quota) expenses of all senators in `year`.
    pub async fn ceaps_expenses(&self, year: i32, format: Format) -> Result<Payload, Error> {
        self.endpoint
            .get(&CEAPS_EXPENSES.path(&[&year], format), &(), Dispatch::Negotiated)
            .await
    }

    /// Whether each senator opted for housing allowance or a functional apartment.
    pub async fn housing_allowance(
        &self,
        filter: &HousingAllowanceFilter,
        format: Format,
    ) -> Result<Payload, Error> {
        self.endpoint
            .get(&HOUSING_ALLOWANCE.path(&[], format), filter, Dispatch::Negotiated)
            .await
    }

    pub async fn retirees(&self, format: Format) -> Result<Payload, Error> {
        self.endpoint
            .get(&RETIREES.path(&[], format), &(), Dispatch::Negotiated)
            .await
    }
}
