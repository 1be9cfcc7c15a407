use chrono::NaiveDate;
use dadosbr_api::types::{ContractStatus, OutsourcedSituation, SeriesCode, ValidityStatus};
use dadosbr_api::{
    CommitmentNoteFilter, CompanyFilter, ContractFilter, DateStyle, Format,
    HousingAllowanceFilter, ODataQuery, OutsourcedFilter, PriceRegistrationFilter, PtaxResource,
    Query, Route, SgsQuery, TenderFilter,
};
use url::Url;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn base() -> Url {
    Url::parse("https://example.com/api").unwrap()
}

#[test]
fn date_styles_render_per_endpoint() {
    let day = date(2024, 3, 5);
    assert_eq!(DateStyle::DayMonthYear.format(day), "05/03/2024");
    assert_eq!(DateStyle::Iso.format(day), "2024-03-05");
    assert_eq!(DateStyle::MonthDayYear.format(day), "03-05-2024");
}

#[test]
fn sgs_query_omits_absent_dates() {
    let params = SgsQuery::new(SeriesCode::Selic).with_start(date(2024, 1, 2)).params();
    assert_eq!(params.get("formato"), Some("json"));
    assert_eq!(params.get("dataInicial"), Some("02/01/2024"));
    assert!(!params.contains_key("dataFinal"));
}

#[test]
fn sgs_query_last_zero_is_kept() {
    let query = SgsQuery::new(1u32).with_last(0);
    assert_eq!(query.path(), "bcdata.sgs.1/dados/ultimos/0");
}

#[test]
fn odata_query_always_sends_format() {
    let params = ODataQuery::default().params();
    assert_eq!(params.keys().collect::<Vec<_>>(), vec!["$format"]);
    assert_eq!(params.get("$format"), Some("json"));

    let params = ODataQuery::default()
        .with_top(10)
        .with_format(Format::Csv)
        .params();
    assert_eq!(params.get("$top"), Some("10"));
    assert_eq!(params.get("$format"), Some("text/csv"));
    assert!(!params.contains_key("$skip"));
    assert!(!params.contains_key("$filter"));
}

#[test]
fn odata_query_full_url() {
    let query = ODataQuery::default()
        .with_filter("Indicador eq 'IPCA'")
        .with_orderby("Data desc")
        .with_format(Format::Atom);

    insta::assert_snapshot!(query.add_to_url(&base()).as_str(), @"https://example.com/api?%24filter=Indicador+eq+%27IPCA%27&%24orderby=Data+desc&%24format=atom");
}

#[test]
fn ptax_resource_arguments_use_month_first_dates() {
    let resource = PtaxResource::CurrencyPeriod {
        currency: "USD".to_string(),
        start: date(2024, 1, 2),
        end: date(2024, 1, 31),
    };
    assert_eq!(
        resource.path_segment(),
        "CotacaoMoedaPeriodo(codigoMoeda='USD',dataInicial='01-02-2024',dataFinalCotacao='01-31-2024')"
    );

    let resource = PtaxResource::CurrencyDay {
        currency: "EUR".to_string(),
        date: date(2024, 12, 24),
    };
    assert_eq!(
        resource.arguments(),
        vec![
            ("moeda", "EUR".to_string()),
            ("dataCotacao", "12-24-2024".to_string())
        ]
    );
}

#[test]
fn housing_allowance_filter_catalog() {
    let url = HousingAllowanceFilter::default()
        .with_state("SP")
        .with_party("PT")
        .add_to_url(&base());
    insta::assert_snapshot!(url.as_str(), @"https://example.com/api?estadoEleitoEquals=SP&partidoEleitoEquals=PT");
}

#[test]
fn commitment_note_filter_catalog() {
    let params = CommitmentNoteFilter::default()
        .with_status(ValidityStatus::Closed)
        .with_supplier_name("ACME")
        .with_tax_id("12345678000199")
        .with_number("2024NE000123")
        .with_year(2024)
        .with_object_description("limpeza")
        .params();
    assert_eq!(
        params.keys().collect::<Vec<_>>(),
        vec![
            "status",
            "nomeFornecedorContains",
            "cnpjCpfEquals",
            "numeroEquals",
            "anoEquals",
            "objetoDescricaoContains"
        ]
    );
    assert_eq!(params.get("status"), Some("ENCERRADO"));
}

#[test]
fn empty_filters_leave_url_untouched() {
    let url = base();
    assert_eq!(CommitmentNoteFilter::default().add_to_url(&url), url);
    assert_eq!(CompanyFilter::default().add_to_url(&url), url);
    assert_eq!(ContractFilter::default().add_to_url(&url), url);
    assert_eq!(PriceRegistrationFilter::default().add_to_url(&url), url);
    assert_eq!(TenderFilter::default().add_to_url(&url), url);
    assert_eq!(OutsourcedFilter::default().add_to_url(&url), url);
}

#[test]
fn company_filter_passes_page_through() {
    let url = CompanyFilter::default()
        .with_status(ValidityStatus::Current)
        .with_labor(true)
        .with_page(2)
        .add_to_url(&base());
    insta::assert_snapshot!(url.as_str(), @"https://example.com/api?status=VIGENTE&maoDeObraEquals=true&pagina=2");
}

#[test]
fn contract_and_price_registration_filters() {
    let params = ContractFilter::default()
        .with_status(ContractStatus::Closed)
        .with_sub_species("CT")
        .params();
    assert_eq!(params.get("statusContratoParam"), Some("ENCERRADO"));
    assert_eq!(params.get("subEspecieSiglaEquals"), Some("CT"));

    let params = PriceRegistrationFilter::default()
        .with_engineering_work(true)
        .params();
    assert_eq!(params.get("obraEngenhariaEquals"), Some("true"));
    assert!(!params.contains_key("status"));
}

#[test]
fn outsourced_filter_uses_situation_key() {
    let filter = OutsourcedFilter {
        situation: Some(OutsourcedSituation::Replaced),
    };
    assert_eq!(
        filter.params().get("situacaoTerceirizadoParam"),
        Some("SUBSTITUIDO")
    );
}

#[test]
fn route_adds_csv_suffix_only_where_served() {
    let payroll = Route::new("remuneracoes/{}/{}").with_csv();
    assert_eq!(payroll.path(&[&2024, &3], Format::Json), "remuneracoes/2024/3");
    assert_eq!(payroll.path(&[&2024, &3], Format::Csv), "remuneracoes/2024/3/csv");
    assert_eq!(payroll.path(&[&2024, &3], Format::Xml), "remuneracoes/2024/3");

    let departments = Route::new("lotacoes");
    assert!(!departments.has_csv());
    assert_eq!(departments.path(&[], Format::Csv), "lotacoes");
}
