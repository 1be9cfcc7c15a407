//! Contracts, tenders, commitment notes and price registrations.

use crate::{
    client::{ClientConfig, Endpoint, Transport},
    format::{Dispatch, Payload},
    query::{
        CommitmentNoteFilter, CompanyFilter, ContractFilter, OutsourcedFilter,
        PriceRegistrationFilter, Query, Route, TenderFilter,
    },
    types::{ContractKind, OutsourcedSituation},
    Error, Format,
};

use super::{area_url, DADOS_ABERTOS_BASE_URL};

const AREA: &str = "contratacoes";

const PAYMENTS: Route = Route::new("{}/{}/pagamentos").with_csv();
const PAYMENT_COMMITMENTS: Route = Route::new("{}/{}/pagamentos/{}/empenhos").with_csv();
const INVOICES: Route = Route::new("{}/{}/pagamentos/{}/documentos_fiscais").with_csv();
const ITEMS: Route = Route::new("{}/{}/itens").with_csv();
const GUARANTEES: Route = Route::new("{}/{}/garantias").with_csv();
const OUTSOURCED: Route = Route::new("terceirizados").with_csv();
const COMMITMENT_NOTES: Route = Route::new("notas_empenho").with_csv();
const APPRENTICES: Route = Route::new("menores_aprendizes").with_csv();
const TENDERS: Route = Route::new("licitacoes").with_csv();
const TENDER_DETAILS: Route = Route::new("licitacoes/{}/detalhamentos").with_csv();
const TENDER_DETAIL: Route = Route::new("licitacoes/{}/detalhamentos/{}").with_csv();
const COMPANIES: Route = Route::new("empresas").with_csv();
const CONTRACTS: Route = Route::new("contratos").with_csv();
const CONTRACT_AMENDMENTS: Route = Route::new("contratos/{}/aditivos").with_csv();
const CONTRACT_OUTSOURCED: Route = Route::new("contratos/terceirizados/{}").with_csv();
const PRICE_REGISTRATIONS: Route = Route::new("atas_registro_preco").with_csv();
const PRICE_REGISTRATION_ACTIVATIONS: Route =
    Route::new("atas_registro_preco/{}/acionamentos").with_csv();

/// Client for the Senate's procurement data.
#[derive(Clone, Debug)]
pub struct ProcurementClient {
    endpoint: Endpoint,
}

impl ProcurementClient {
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

    async fn get<Q: Query + Sync>(&self, path: String, query: &Q) -> Result<Payload, Error> {
        self.endpoint.get(&path, query, Dispatch::Negotiated).await
    }

    /// Payments of one contracting instrument.
    pub async fn payments(
        &self,
        kind: ContractKind,
        id: u64,
        format: Format,
    ) -> Result<Payload, Error> {
        self.get(PAYMENTS.path(&[&kind, &id], format), &()).await
    }

    /// Commitments behind one payment.
    pub async fn payment_commitments(
        &self,
        kind: ContractKind,
        id: u64,
        payment_id: u64,
        format: Format,
    ) -> Result<Payload, Error> {
        let path = PAYMENT_COMMITMENTS.path(&[&kind, &id, &payment_id], format);
        self.get(path, &()).await
    }

    /// Invoices attached to one payment.
    pub async fn invoices(
        &self,
        kind: ContractKind,
        id: u64,
        payment_id: u64,
        format: Format,
    ) -> Result<Payload, Error> {
        let path = INVOICES.path(&[&kind, &id, &payment_id], format);
        self.get(path, &()).await
    }

    pub async fn items(
        &self,
        kind: ContractKind,
        id: u64,
        format: Format,
    ) -> Result<Payload, Error> {
        self.get(ITEMS.path(&[&kind, &id], format), &()).await
    }

    pub async fn guarantees(
        &self,
        kind: ContractKind,
        id: u64,
        format: Format,
    ) -> Result<Payload, Error> {
        self.get(GUARANTEES.path(&[&kind, &id], format), &()).await
    }

    /// Outsourced workers currently active or substituting.
    pub async fn outsourced(&self, format: Format) -> Result<Payload, Error> {
        self.get(OUTSOURCED.path(&[], format), &()).await
    }

    pub async fn commitment_notes(
        &self,
        filter: &CommitmentNoteFilter,
        format: Format,
    ) -> Result<Payload, Error> {
        self.get(COMMITMENT_NOTES.path(&[], format), filter).await
    }

    /// Young apprentices currently active or substituting.
    pub async fn apprentices(&self, format: Format) -> Result<Payload, Error> {
        self.get(APPRENTICES.path(&[], format), &()).await
    }

    pub async fn tenders(&self, filter: &TenderFilter, format: Format) -> Result<Payload, Error> {
        self.get(TENDERS.path(&[], format), filter).await
    }

    /// Details of one tender, or a single detail when `detail_id` is set.
    pub async fn tender_details(
        &self,
        tender_id: u64,
        detail_id: Option<u64>,
        format: Format,
    ) -> Result<Payload, Error> {
        let path = match detail_id {
            Some(detail_id) => TENDER_DETAIL.path(&[&tender_id, &detail_id], format),
            None => TENDER_DETAILS.path(&[&tender_id], format),
        };
        self.get(path, &()).await
    }

    pub async fn companies(
        &self,
        filter: &CompanyFilter,
        format: Format,
    ) -> Result<Payload, Error> {
        self.get(COMPANIES.path(&[], format), filter).await
    }

    pub async fn contracts(
        &self,
        filter: &ContractFilter,
        format: Format,
    ) -> Result<Payload, Error> {
        self.get(CONTRACTS.path(&[], format), filter).await
    }

    pub async fn contract_amendments(
        &self,
        contract_id: u64,
        format: Format,
    ) -> Result<Payload, Error> {
        self.get(CONTRACT_AMENDMENTS.path(&[&contract_id], format), &())
            .await
    }

    /// Outsourced workers of one contract.
    pub async fn contract_outsourced(
        &self,
        contract_id: u64,
        situation: Option<OutsourcedSituation>,
        format: Format,
    ) -> Result<Payload, Error> {
        let filter = OutsourcedFilter { situation };
        self.get(CONTRACT_OUTSOURCED.path(&[&contract_id], format), &filter)
            .await
    }

    pub async fn price_registrations(
        &self,
        filter: &PriceRegistrationFilter,
        format: Format,
    ) -> Result<Payload, Error> {
        self.get(PRICE_REGISTRATIONS.path(&[], format), filter).await
    }

    pub async fn price_registration_activations(
        &self,
        registration_id: u64,
        format: Format,
    ) -> Result<Payload, Error> {
        let path = PRICE_REGISTRATION_ACTIVATIONS.path(&[&registration_id], format);
        self.get(path, &()).await
    }
}
