//! CLI subcommand implementations.

pub mod finance;
pub mod fund_supply;
pub mod olinda;
pub mod procurement;
pub mod senators;
pub mod sgs;
pub mod staff;

use anyhow::Result;
use dadosbr_api::bacen::OLINDA_BASE_URL;
use dadosbr_api::senado::DADOS_ABERTOS_BASE_URL;
use dadosbr_api::{
    ClientConfig, CoinEmissionClient, ExpectationsClient, FinancialReportsClient,
    FundSupplyClient, ProcurementClient, PtaxClient, SenatorsClient, SgsClient, StaffClient,
    Transport,
};

/// Shared client settings plus base URLs, overridable through the environment.
pub struct Context {
    config: ClientConfig,
    bacen_url: String,
    olinda_url: String,
    senado_url: String,
    financeiro_url: String,
}

fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => {
            tracing::debug!("{} overrides base URL with {}", key, value);
            value
        }
        _ => default.to_string(),
    }
}

impl Context {
    pub fn from_env(config: ClientConfig) -> Self {
        Self {
            config,
            bacen_url: env_or("DADOSBR_BACEN_URL", SgsClient::BASE_URL),
            olinda_url: env_or("DADOSBR_OLINDA_URL", OLINDA_BASE_URL),
            senado_url: env_or("DADOSBR_SENADO_URL", DADOS_ABERTOS_BASE_URL),
            financeiro_url: env_or("DADOSBR_FINANCEIRO_URL", FinancialReportsClient::BASE_URL),
        }
    }

    fn bacen_transport(&self) -> Result<Transport> {
        Ok(Transport::new(&self.config)?)
    }

    fn senado_transport(&self) -> Result<Transport> {
        let config = self.config.clone().with_follow_redirects(false);
        Ok(Transport::new(&config)?)
    }

    pub fn sgs(&self) -> Result<SgsClient> {
        Ok(SgsClient::with_transport(self.bacen_transport()?, &self.bacen_url))
    }

    pub fn expectations(&self) -> Result<ExpectationsClient> {
        Ok(ExpectationsClient::with_transport(
            self.bacen_transport()?,
            &self.olinda_url,
        ))
    }

    pub fn coins(&self) -> Result<CoinEmissionClient> {
        Ok(CoinEmissionClient::with_transport(
            self.bacen_transport()?,
            &self.olinda_url,
        ))
    }

    pub fn ptax(&self) -> Result<PtaxClient> {
        Ok(PtaxClient::with_transport(self.bacen_transport()?, &self.olinda_url))
    }

    pub fn senators(&self) -> Result<SenatorsClient> {
        Ok(SenatorsClient::with_transport(
            self.senado_transport()?,
            &self.senado_url,
        ))
    }

    pub fn staff(&self) -> Result<StaffClient> {
        Ok(StaffClient::with_transport(self.senado_transport()?, &self.senado_url))
    }

    pub fn fund_supply(&self) -> Result<FundSupplyClient> {
        Ok(FundSupplyClient::with_transport(
            self.senado_transport()?,
            &self.senado_url,
        ))
    }

    pub fn procurement(&self) -> Result<ProcurementClient> {
        Ok(ProcurementClient::with_transport(
            self.senado_transport()?,
            &self.senado_url,
        ))
    }

    pub fn finance(&self) -> Result<FinancialReportsClient> {
        Ok(FinancialReportsClient::with_transport(
            self.senado_transport()?,
            &self.financeiro_url,
        ))
    }
}
