//! Federal Senate clients.
//!
//! The open-data clients pick JSON or text from the response headers rather
//! than from the requested format, since CSV variants live on their own paths.

mod financial;
pub use self::financial::FinancialReportsClient;

mod fund_supply;
pub use self::fund_supply::FundSupplyClient;

mod procurement;
pub use self::procurement::ProcurementClient;

mod senators;
pub use self::senators::SenatorsClient;

mod staff;
pub use self::staff::StaffClient;

/// Root of the Senate administrative open-data API.
pub const DADOS_ABERTOS_BASE_URL: &str = "https://adm.senado.gov.br/adm-dadosabertos/api/v1";

fn area_url(base_url: &str, area: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), area)
}
