mod common;
pub use self::common::{DateStyle, Query, QueryParams};

mod route;
pub use self::route::Route;

mod odata;
pub use self::odata::ODataQuery;

mod sgs;
pub use self::sgs::SgsQuery;

mod ptax;
pub use self::ptax::PtaxResource;

mod senado;
pub use self::senado::{
    CommitmentNoteFilter, CompanyFilter, ContractFilter, HousingAllowanceFilter,
    OutsourcedFilter, PriceRegistrationFilter, StaffFilter, TenderFilter,
};
