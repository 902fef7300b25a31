use kernel::interface::policy::DependOnRentalPolicy;
use kernel::prelude::entity::{CatalogFilter, UserId};
use kernel::KernelError;

use crate::state::DependOnLibraryState;
use crate::transfer::{CatalogItemDto, DashboardDto, DashboardItemDto, DashboardViewDto};

#[async_trait::async_trait]
pub trait DashboardService: 'static + Sync + Send + DependOnLibraryState + DependOnRentalPolicy {
    async fn dashboard(
        &self,
        dto: DashboardViewDto,
    ) -> error_stack::Result<DashboardDto, KernelError> {
        let user_id = UserId::new(dto.user_id);
        let filter = CatalogFilter::new(dto.query, dto.availability);
        let library = self.library_state().lock().await;

        let items = library
            .catalog()
            .search(&filter)
            .into_iter()
            .map(|item| DashboardItemDto {
                wishlisted: library.wishlists().contains(&user_id, item.id()),
                rented_by_me: item
                    .rental()
                    .as_ref()
                    .is_some_and(|mark| mark.rented_by() == &user_id),
                item: CatalogItemDto::from(item),
            })
            .collect();
        let current_penalty = library.ledger().current_penalty_for(&user_id);
        Ok(DashboardDto {
            items,
            current_penalty: current_penalty.into(),
            rentals_blocked: self.rental_policy().blocks(current_penalty),
        })
    }
}

impl<T> DashboardService for T where T: DependOnLibraryState + DependOnRentalPolicy {}
