//! Filter sets of the Senate open-data listings.
//!
//! Field names follow the API's own suffix convention: `...Contains` is a
//! free-text match, `...Equals` an exact match.

use chrono::NaiveDate;

use crate::types::{BondType, ContractStatus, OutsourcedSituation, StaffSituation, ValidityStatus};

use super::{
    common::{DateStyle, QueryParams},
    Query,
};

/// Filters for the senators' housing allowance listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HousingAllowanceFilter {
    pub name: Option<String>,
    pub state: Option<String>,
    pub party: Option<String>,
}

impl Query for HousingAllowanceFilter {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("nomeParlamentarContains", self.name.as_deref())
            .push("estadoEleitoEquals", self.state.as_deref())
            .push("partidoEleitoEquals", self.party.as_deref());
        params
    }
}

impl HousingAllowanceFilter {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// State the senator was elected in, e.g. `SP`.
    pub fn with_state(mut self, state: &str) -> Self {
        self.state = Some(state.to_string());
        self
    }

    pub fn with_party(mut self, party: &str) -> Self {
        self.party = Some(party.to_string());
        self
    }
}

/// Filters for the staff listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaffFilter {
    pub bond_type: Option<BondType>,
    pub situation: Option<StaffSituation>,
    pub department: Option<String>,
    pub position: Option<String>,
}

impl Query for StaffFilter {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("tipoVinculoEquals", self.bond_type)
            .push("situacaoEquals", self.situation)
            .push("lotacaoEquals", self.department.as_deref())
            .push("cargoEquals", self.position.as_deref());
        params
    }
}

impl StaffFilter {
    pub fn with_bond_type(mut self, bond_type: BondType) -> Self {
        self.bond_type = Some(bond_type);
        self
    }

    pub fn with_situation(mut self, situation: StaffSituation) -> Self {
        self.situation = Some(situation);
        self
    }

    pub fn with_department(mut self, department: &str) -> Self {
        self.department = Some(department.to_string());
        self
    }

    pub fn with_position(mut self, position: &str) -> Self {
        self.position = Some(position.to_string());
        self
    }
}

/// Filters for commitment notes (notas de empenho).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommitmentNoteFilter {
    pub status: Option<ValidityStatus>,
    pub supplier_name: Option<String>,
    pub tax_id: Option<String>,
    pub number: Option<String>,
    pub year: Option<i32>,
    pub object_description: Option<String>,
}

impl Query for CommitmentNoteFilter {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("status", self.status)
            .push("nomeFornecedorContains", self.supplier_name.as_deref())
            .push("cnpjCpfEquals", self.tax_id.as_deref())
            .push("numeroEquals", self.number.as_deref())
            .push("anoEquals", self.year)
            .push("objetoDescricaoContains", self.object_description.as_deref());
        params
    }
}

impl CommitmentNoteFilter {
    pub fn with_status(mut self, status: ValidityStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_supplier_name(mut self, supplier_name: &str) -> Self {
        self.supplier_name = Some(supplier_name.to_string());
        self
    }

    /// CNPJ or CPF of the supplier.
    pub fn with_tax_id(mut self, tax_id: &str) -> Self {
        self.tax_id = Some(tax_id.to_string());
        self
    }

    pub fn with_number(mut self, number: &str) -> Self {
        self.number = Some(number.to_string());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_object_description(mut self, object_description: &str) -> Self {
        self.object_description = Some(object_description.to_string());
        self
    }
}

/// Filters for tenders (licitações). Opening dates are sent as `YYYY-MM-DD`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TenderFilter {
    pub number: Option<String>,
    pub object: Option<String>,
    pub opening_from: Option<NaiveDate>,
    pub opening_to: Option<NaiveDate>,
}

impl Query for TenderFilter {
    fn params(&self) -> QueryParams {
        let style = DateStyle::Iso;
        let mut params = QueryParams::new();
        params
            .push("numeroEquals", self.number.as_deref())
            .push("objetoContains", self.object.as_deref())
            .push("aberturaRangeBegin", self.opening_from.map(|d| style.format(d)))
            .push("aberturaRangeEnd", self.opening_to.map(|d| style.format(d)));
        params
    }
}

impl TenderFilter {
    pub fn with_number(mut self, number: &str) -> Self {
        self.number = Some(number.to_string());
        self
    }

    pub fn with_object(mut self, object: &str) -> Self {
        self.object = Some(object.to_string());
        self
    }

    pub fn with_opening_from(mut self, date: NaiveDate) -> Self {
        self.opening_from = Some(date);
        self
    }

    pub fn with_opening_to(mut self, date: NaiveDate) -> Self {
        self.opening_to = Some(date);
        self
    }
}

/// Filters for contracted companies. `page` is passed through as `pagina`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompanyFilter {
    pub status: Option<ValidityStatus>,
    pub labor: Option<bool>,
    pub name: Option<String>,
    pub tax_id: Option<String>,
    pub page: Option<u32>,
}

impl Query for CompanyFilter {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("status", self.status)
            .push("maoDeObraEquals", self.labor)
            .push("nomeContains", self.name.as_deref())
            .push("cnpjCpfEquals", self.tax_id.as_deref())
            .push("pagina", self.page);
        params
    }
}

impl CompanyFilter {
    pub fn with_status(mut self, status: ValidityStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Only companies providing (or not providing) dedicated labor.
    pub fn with_labor(mut self, labor: bool) -> Self {
        self.labor = Some(labor);
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_tax_id(mut self, tax_id: &str) -> Self {
        self.tax_id = Some(tax_id.to_string());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

/// Filters for contracts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractFilter {
    pub status: Option<ContractStatus>,
    pub labor: Option<bool>,
    pub supplier_name: Option<String>,
    pub tax_id: Option<String>,
    pub number: Option<String>,
    pub year: Option<i32>,
    pub sub_species: Option<String>,
    pub object_description: Option<String>,
    pub engineering_work: Option<bool>,
}

impl Query for ContractFilter {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("statusContratoParam", self.status)
            .push("maoDeObraEquals", self.labor)
            .push("nomeFornecedorContains", self.supplier_name.as_deref())
            .push("cnpjCpfEquals", self.tax_id.as_deref())
            .push("numeroEquals", self.number.as_deref())
            .push("anoEquals", self.year)
            .push("subEspecieSiglaEquals", self.sub_species.as_deref())
            .push("objetoDescricaoContains", self.object_description.as_deref())
            .push("obraEngenhariaEquals", self.engineering_work);
        params
    }
}

impl ContractFilter {
    pub fn with_status(mut self, status: ContractStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_labor(mut self, labor: bool) -> Self {
        self.labor = Some(labor);
        self
    }

    pub fn with_supplier_name(mut self, supplier_name: &str) -> Self {
        self.supplier_name = Some(supplier_name.to_string());
        self
    }

    pub fn with_tax_id(mut self, tax_id: &str) -> Self {
        self.tax_id = Some(tax_id.to_string());
        self
    }

    pub fn with_number(mut self, number: &str) -> Self {
        self.number = Some(number.to_string());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sub-species acronym of the contract.
    pub fn with_sub_species(mut self, sub_species: &str) -> Self {
        self.sub_species = Some(sub_species.to_string());
        self
    }

    pub fn with_object_description(mut self, object_description: &str) -> Self {
        self.object_description = Some(object_description.to_string());
        self
    }

    pub fn with_engineering_work(mut self, engineering_work: bool) -> Self {
        self.engineering_work = Some(engineering_work);
        self
    }
}

/// Filters for price registration records (atas de registro de preço).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PriceRegistrationFilter {
    pub status: Option<ValidityStatus>,
    pub supplier_name: Option<String>,
    pub tax_id: Option<String>,
    pub number: Option<String>,
    pub year: Option<i32>,
    pub object_description: Option<String>,
    pub engineering_work: Option<bool>,
}

impl Query for PriceRegistrationFilter {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("status", self.status)
            .push("nomeFornecedorContains", self.supplier_name.as_deref())
            .push("cnpjCpfEquals", self.tax_id.as_deref())
            .push("numeroEquals", self.number.as_deref())
            .push("anoEquals", self.year)
            .push("objetoDescricaoContains", self.object_description.as_deref())
            .push("obraEngenhariaEquals", self.engineering_work);
        params
    }
}

impl PriceRegistrationFilter {
    pub fn with_status(mut self, status: ValidityStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_supplier_name(mut self, supplier_name: &str) -> Self {
        self.supplier_name = Some(supplier_name.to_string());
        self
    }

    pub fn with_tax_id(mut self, tax_id: &str) -> Self {
        self.tax_id = Some(tax_id.to_string());
        self
    }

    pub fn with_number(mut self, number: &str) -> Self {
        self.number = Some(number.to_string());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_object_description(mut self, object_description: &str) -> Self {
        self.object_description = Some(object_description.to_string());
        self
    }

    pub fn with_engineering_work(mut self, engineering_work: bool) -> Self {
        self.engineering_work = Some(engineering_work);
        self
    }
}

/// Situation filter for the outsourced workers of one contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutsourcedFilter {
    pub situation: Option<OutsourcedSituation>,
}

impl Query for OutsourcedFilter {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("situacaoTerceirizadoParam", self.situation);
        params
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use url::Url;

    use crate::{
        query::Query,
        types::{BondType, ContractStatus, StaffSituation},
    };

    use super::{ContractFilter, StaffFilter, TenderFilter};

    #[test]
    fn test_staff_filter() {
        let url = Url::parse("https://example.com/servidores").unwrap();

        insta::assert_snapshot!(StaffFilter::default().add_to_url(&url).as_str(), @"https://example.com/servidores");

        insta::assert_snapshot!(StaffFilter::default()
            .with_bond_type(BondType::Permanent)
            .with_situation(StaffSituation::Active)
            .add_to_url(&url)
            .as_str(), @"https://example.com/servidores?tipoVinculoEquals=EFETIVO&situacaoEquals=ATIVO");
    }

    #[test]
    fn test_tender_filter_dates() {
        let params = TenderFilter::default()
            .with_opening_from(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
            .with_opening_to(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
            .params();
        assert_eq!(params.get("aberturaRangeBegin"), Some("2024-02-01"));
        assert_eq!(params.get("aberturaRangeEnd"), Some("2024-02-29"));
        assert!(!params.contains_key("numeroEquals"));
    }

    #[test]
    fn test_contract_filter_keeps_false_flags() {
        let params = ContractFilter::default()
            .with_status(ContractStatus::UnderRenewal)
            .with_labor(false)
            .with_engineering_work(false)
            .with_year(0)
            .params();
        assert_eq!(params.get("statusContratoParam"), Some("EM_RENOVACAO"));
        assert_eq!(params.get("maoDeObraEquals"), Some("false"));
        assert_eq!(params.get("obraEngenhariaEquals"), Some("false"));
        assert_eq!(params.get("anoEquals"), Some("0"));
        assert!(!params.contains_key("nomeFornecedorContains"));
    }
}
