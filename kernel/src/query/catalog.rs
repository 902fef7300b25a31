use crate::entity::CatalogItem;
use crate::KernelError;

/// Read-only snapshot of the item catalog. Availability fields of the returned
/// items are ignored; they are rebuilt from the rental ledger.
#[async_trait::async_trait]
pub trait CatalogSource: 'static + Sync + Send {
    async fn fetch_items(&self) -> error_stack::Result<Vec<CatalogItem>, KernelError>;
}

pub trait DependOnCatalogSource: 'static + Sync + Send {
    type CatalogSource: CatalogSource;
    fn catalog_source(&self) -> &Self::CatalogSource;
}
