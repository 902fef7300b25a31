use tracing::info;

use kernel::interface::query::{CatalogSource, DependOnCatalogSource};
use kernel::prelude::entity::{CatalogFilter, ItemId};
use kernel::KernelError;

use crate::state::DependOnLibraryState;
use crate::transfer::{CatalogItemDto, GetItemDto, SearchCatalogDto};

#[async_trait::async_trait]
pub trait RefreshCatalogService:
    'static + Sync + Send + DependOnLibraryState + DependOnCatalogSource
{
    /// Replaces the catalog snapshot and rebuilds availability from the ledger.
    /// The fetch happens before the state lock is taken.
    async fn refresh_catalog(&self) -> error_stack::Result<usize, KernelError> {
        let items = self.catalog_source().fetch_items().await?;
        let count = items.len();

        let mut library = self.library_state().lock().await;
        library.catalog_mut().replace(items);
        library.reconcile();
        info!("Catalog refreshed with {count} items");
        Ok(count)
    }
}

impl<T> RefreshCatalogService for T where T: DependOnLibraryState + DependOnCatalogSource {}

#[async_trait::async_trait]
pub trait GetCatalogService: 'static + Sync + Send + DependOnLibraryState {
    async fn search_catalog(
        &self,
        dto: SearchCatalogDto,
    ) -> error_stack::Result<Vec<CatalogItemDto>, KernelError> {
        let filter = CatalogFilter::new(dto.query, dto.availability);
        let library = self.library_state().lock().await;
        Ok(library
            .catalog()
            .search(&filter)
            .into_iter()
            .map(CatalogItemDto::from)
            .collect())
    }

    async fn get_item(
        &self,
        dto: GetItemDto,
    ) -> error_stack::Result<Option<CatalogItemDto>, KernelError> {
        let library = self.library_state().lock().await;
        Ok(library
            .catalog()
            .find(&ItemId::new(dto.item_id))
            .map(CatalogItemDto::from))
    }
}

impl<T> GetCatalogService for T where T: DependOnLibraryState {}
