use crate::transfer::CatalogItemDto;

#[derive(Debug, Clone)]
pub struct WishlistDto {
    pub user_id: i64,
    /// Listed items present in the current catalog, in insertion order.
    pub items: Vec<CatalogItemDto>,
}

pub struct GetWishlistDto {
    pub user_id: i64,
}

pub struct WishlistItemDto {
    pub user_id: i64,
    pub item_id: i64,
}
