//! Typed clients for Brazilian public open-data APIs: the central bank's
//! SGS time series and Olinda OData services, and the Federal Senate's
//! administrative open data.
//!
//! Every operation sends exactly one GET and returns a [`Payload`]: decoded
//! JSON or the raw body text, depending on the requested [`Format`].

pub mod bacen;
mod client;
mod errors;
mod format;
mod query;
pub mod senado;
pub mod types;
pub use self::bacen::{CoinEmissionClient, ExpectationsClient, PtaxClient, SgsClient};
pub use self::client::{ClientConfig, Transport, USER_AGENT};
pub use self::errors::Error;
pub use self::format::{Dispatch, Format, Payload, RawResponse};
pub use self::query::{
    CommitmentNoteFilter, CompanyFilter, ContractFilter, DateStyle, HousingAllowanceFilter,
    ODataQuery, OutsourcedFilter, PriceRegistrationFilter, PtaxResource, Query, QueryParams,
    Route, SgsQuery, StaffFilter, TenderFilter,
};
pub use self::senado::{
    FinancialReportsClient, FundSupplyClient, ProcurementClient, SenatorsClient, StaffClient,
};
