use kernel::prelude::entity::Availability;

use crate::transfer::CatalogItemDto;

#[derive(Debug, Clone)]
pub struct DashboardItemDto {
    pub item: CatalogItemDto,
    pub wishlisted: bool,
    /// Whether the active rental on this item belongs to the viewer.
    pub rented_by_me: bool,
}

#[derive(Debug, Clone)]
pub struct DashboardDto {
    pub items: Vec<DashboardItemDto>,
    pub current_penalty: i64,
    pub rentals_blocked: bool,
}

pub struct DashboardViewDto {
    pub user_id: i64,
    pub query: Option<String>,
    pub availability: Availability,
}
