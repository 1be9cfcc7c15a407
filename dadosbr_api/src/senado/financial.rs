use crate::{
    client::{ClientConfig, Endpoint, Transport},
    format::{Dispatch, Payload},
    types::FinancialReport,
    Error, Format,
};

/// Client for the static budget files of the Senate finance office.
///
/// Each report is a fixed file; the format picks the file.
#[derive(Clone, Debug)]
pub struct FinancialReportsClient {
    endpoint: Endpoint,
}

impl FinancialReportsClient {
    pub const BASE_URL: &'static str = "https://www.senado.gov.br/bi-arqs/Arquimedes/Financeiro";

    pub fn new() -> Result<Self, Error> {
        Self::with_config(&ClientConfig::senado())
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self, Error> {
        Ok(Self::with_transport(Transport::new(config)?, Self::BASE_URL))
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Ok(Self::with_transport(
            Transport::new(&ClientConfig::senado())?,
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

    /// Fetches a report. Only JSON and CSV exist; other formats fail before
    /// any request is sent.
    pub async fn report(&self, report: FinancialReport, format: Format) -> Result<Payload, Error> {
        let file = match format {
            Format::Json => report.json_file(),
            Format::Csv => report.csv_file(),
            other => {
                return Err(Error::UnsupportedFormat {
                    format: other,
                    expected: "json, csv",
                })
            }
        };
        self.endpoint.get(file, &(), Dispatch::Negotiated).await
    }

    /// Budget allocation and committed, liquidated and paid expenses.
    pub async fn expenses(&self, format: Format) -> Result<Payload, Error> {
        self.report(FinancialReport::Expenses, format).await
    }

    /// Forecast and collected own revenues.
    pub async fn revenues(&self, format: Format) -> Result<Payload, Error> {
        self.report(FinancialReport::Revenues, format).await
    }
}
