use crate::logic::RepoError;
use crate::model::{Establishment, Id, NewEstablishment, NewQuotation, Quotation, QuotationFilter};

#[async_trait::async_trait]
pub trait EstablishmentStore: Send + Sync {
    /// All establishments ordered by name
    async fn list_establishments(&self) -> Result<Vec<Establishment>, RepoError>;
    async fn create_establishment(&self, new: NewEstablishment) -> Result<Establishment, RepoError>;
    /// Remove one establishment; quotations that reference it by name are kept
    async fn delete_establishment(&self, id: Id) -> Result<Establishment, RepoError>;
}

#[async_trait::async_trait]
pub trait QuotationStore: Send + Sync {
    /// Quotations matching `filter`, in the order it asks for
    async fn list_quotations(&self, filter: QuotationFilter) -> Result<Vec<Quotation>, RepoError>;
    async fn create_quotation(&self, new: NewQuotation) -> Result<Quotation, RepoError>;
    async fn delete_quotation(&self, id: Id) -> Result<Quotation, RepoError>;
}

pub trait Store: EstablishmentStore + QuotationStore + Send + Sync {}
impl<T: EstablishmentStore + QuotationStore + Send + Sync> Store for T {}
