use crate::{
    client::{ClientConfig, Endpoint, Transport},
    format::{Dispatch, Payload},
    query::{Route, StaffFilter},
    Error, Format,
};

use super::{area_url, DADOS_ABERTOS_BASE_URL};

const AREA: &str = "servidores";

const STAFF: Route = Route::new("servidores").with_csv();
const INACTIVE: Route = Route::new("servidores/inativos");
const PERMANENT: Route = Route::new("servidores/efetivos");
const COMMISSIONED: Route = Route::new("servidores/comissionados");
const ACTIVE: Route = Route::new("servidores/ativos");
const PAYROLL: Route = Route::new("remuneracoes/{}/{}").with_csv();
const HEADCOUNT: Route = Route::new("quantitativos/pessoal").with_csv();
const POSITIONS_HEADCOUNT: Route = Route::new("quantitativos/cargos-funcoes").with_csv();
const RETIREMENT_FORECAST: Route = Route::new("previsao-aposentadoria").with_csv();
const PENSIONERS: Route = Route::new("pensionistas").with_csv();
const PENSIONER_PAYROLL: Route = Route::new("pensionistas/remuneracoes/{}/{}").with_csv();
const DEPARTMENTS: Route = Route::new("lotacoes");
const OVERTIME: Route = Route::new("horas-extras/{}/{}").with_csv();
const INTERNS: Route = Route::new("estagiarios").with_csv();
const POSITIONS: Route = Route::new("cargos");

/// Client for staff, pensioners, outsourced workers and interns.
#[derive(Clone, Debug)]
pub struct StaffClient {
    endpoint: Endpoint,
}

impl StaffClient {
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

    async fn get(
        &self,
        route: Route,
        args: &[&(dyn std::fmt::Display + Sync)],
        format: Format,
    ) -> Result<Payload, Error> {
        self.endpoint
            .get(&route.path(args, format), &(), Dispatch::Negotiated)
            .await
    }

    pub async fn staff(&self, filter: &StaffFilter, format: Format) -> Result<Payload, Error> {
        self.endpoint
            .get(&STAFF.path(&[], format), filter, Dispatch::Negotiated)
            .await
    }

    pub async fn inactive(&self) -> Result<Payload, Error> {
        self.get(INACTIVE, &[], Format::Json).await
    }

    pub async fn permanent(&self) -> Result<Payload, Error> {
        self.get(PERMANENT, &[], Format::Json).await
    }

    pub async fn commissioned(&self) -> Result<Payload, Error> {
        self.get(COMMISSIONED, &[], Format::Json).await
    }

    pub async fn active(&self) -> Result<Payload, Error> {
        self.get(ACTIVE, &[], Format::Json).await
    }

    /// Staff remuneration for one month.
    pub async fn payroll(&self, year: i32, month: u32, format: Format) -> Result<Payload, Error> {
        self.get(PAYROLL, &[&year, &month], format).await
    }

    /// Headcount of permanent, active, retired staff and pensioners.
    pub async fn headcount(&self, format: Format) -> Result<Payload, Error> {
        self.get(HEADCOUNT, &[], format).await
    }

    /// Headcount of commissioned positions and trust functions.
    pub async fn positions_headcount(&self, format: Format) -> Result<Payload, Error> {
        self.get(POSITIONS_HEADCOUNT, &[], format).await
    }

    /// Expected retirements by position, year and month.
    pub async fn retirement_forecast(&self, format: Format) -> Result<Payload, Error> {
        self.get(RETIREMENT_FORECAST, &[], format).await
    }

    pub async fn pensioners(&self, format: Format) -> Result<Payload, Error> {
        self.get(PENSIONERS, &[], format).await
    }

    pub async fn pensioner_payroll(
        &self,
        year: i32,
        month: u32,
        format: Format,
    ) -> Result<Payload, Error> {
        self.get(PENSIONER_PAYROLL, &[&year, &month], format).await
    }

    pub async fn departments(&self) -> Result<Payload, Error> {
        self.get(DEPARTMENTS, &[], Format::Json).await
    }

    /// Overtime paid in one month.
    pub async fn overtime(&self, year: i32, month: u32, format: Format) -> Result<Payload, Error> {
        self.get(OVERTIME, &[&year, &month], format).await
    }

    pub async fn interns(&self, format: Format) -> Result<Payload, Error> {
        self.get(INTERNS, &[], format).await
    }

    pub async fn positions(&self) -> Result<Payload, Error> {
        self.get(POSITIONS, &[], Format::Json).await
    }
}
