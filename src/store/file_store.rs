use std::path::Path;
use std::sync::Arc;

use crate::config::StorageConfig;
use crate::logic::{self, RepoError};
use crate::model::{Establishment, Id, NewEstablishment, NewQuotation, Quotation, QuotationFilter};
use crate::store::error::StoreError;
use crate::store::json_file::JsonFile;
use crate::store::traits::{EstablishmentStore, QuotationStore};

/// Both collections, each kept in its own JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    establishments: Arc<JsonFile<Establishment>>,
    quotations: Arc<JsonFile<Quotation>>,
}

impl FileStore {
    pub fn new(establishments_path: impl AsRef<Path>, quotations_path: impl AsRef<Path>) -> Self {
        Self {
            establishments: Arc::new(JsonFile::new(establishments_path.as_ref())),
            quotations: Arc::new(JsonFile::new(quotations_path.as_ref())),
        }
    }

    pub fn from_config(storage: &StorageConfig) -> Self {
        Self::new(
            storage.establishments_path(),
            storage.quotations_path(),
        )
    }

    pub fn establishments_path(&self) -> &Path {
        self.establishments.path()
    }

    pub fn quotations_path(&self) -> &Path {
        self.quotations.path()
    }
}

/// File access is blocking, so it runs on tokio's blocking pool
async fn run_blocking<R, F>(f: F) -> Result<R, RepoError>
where
    F: FnOnce() -> Result<R, RepoError> + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(StoreError::from)?
}

#[async_trait::async_trait]
impl EstablishmentStore for FileStore {
    async fn list_establishments(&self) -> Result<Vec<Establishment>, RepoError> {
        let file = Arc::clone(&self.establishments);
        run_blocking(move || {
            let mut establishments = file.read()?;
            logic::sort_by_name(&mut establishments);
            Ok(establishments)
        })
        .await
    }

    async fn create_establishment(&self, new: NewEstablishment) -> Result<Establishment, RepoError> {
        logic::validate_new_establishment(&new)?;
        let file = Arc::clone(&self.establishments);
        run_blocking(move || file.modify(|records| logic::insert_establishment(records, new))).await
    }

    async fn delete_establishment(&self, id: Id) -> Result<Establishment, RepoError> {
        let file = Arc::clone(&self.establishments);
        run_blocking(move || file.modify(|records| logic::remove_establishment(records, id))).await
    }
}

#[async_trait::async_trait]
impl QuotationStore for FileStore {
    async fn list_quotations(&self, filter: QuotationFilter) -> Result<Vec<Quotation>, RepoError> {
        let file = Arc::clone(&self.quotations);
        run_blocking(move || {
            let quotations = file.read()?;
            Ok(logic::apply_filter(quotations, &filter))
        })
        .await
    }

    async fn create_quotation(&self, new: NewQuotation) -> Result<Quotation, RepoError> {
        logic::validate_new_quotation(&new)?;
        let file = Arc::clone(&self.quotations);
        run_blocking(move || file.modify(|records| logic::insert_quotation(records, new))).await
    }

    async fn delete_quotation(&self, id: Id) -> Result<Quotation, RepoError> {
        let file = Arc::clone(&self.quotations);
        run_blocking(move || file.modify(|records| logic::remove_quotation(records, id))).await
    }
}
