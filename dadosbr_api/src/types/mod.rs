mod bacen;
pub use self::bacen::{ExpectationsReport, SeriesCode};

mod senado;
pub use self::senado::{
    BondType, ContractKind, ContractStatus, FinancialReport, OutsourcedSituation, StaffSituation,
    ValidityStatus,
};
