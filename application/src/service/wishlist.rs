use kernel::interface::database::{DependOnCollectionStore, WishlistsCollection};
use kernel::prelude::entity::{ItemId, UserId};
use kernel::KernelError;

use crate::state::{persist, DependOnLibraryState};
use crate::transfer::{CatalogItemDto, GetWishlistDto, WishlistDto, WishlistItemDto};

#[async_trait::async_trait]
pub trait WishlistService:
    'static + Sync + Send + DependOnLibraryState + DependOnCollectionStore
{
    /// Returns `false` when the item was already listed.
    async fn add_to_wishlist(
        &self,
        dto: WishlistItemDto,
    ) -> error_stack::Result<bool, KernelError> {
        let mut library = self.library_state().lock().await;
        let added = library
            .wishlists_mut()
            .add(UserId::new(dto.user_id), ItemId::new(dto.item_id));
        if added {
            persist::<WishlistsCollection, _>(self.collection_store(), library.wishlists()).await;
        }
        Ok(added)
    }

    /// Returns `false` when the item was not listed.
    async fn remove_from_wishlist(
        &self,
        dto: WishlistItemDto,
    ) -> error_stack::Result<bool, KernelError> {
        let mut library = self.library_state().lock().await;
        let removed = library
            .wishlists_mut()
            .remove(&UserId::new(dto.user_id), &ItemId::new(dto.item_id));
        if removed {
            persist::<WishlistsCollection, _>(self.collection_store(), library.wishlists()).await;
        }
        Ok(removed)
    }

    /// Returns whether the item is listed afterwards.
    async fn toggle_wishlist(
        &self,
        dto: WishlistItemDto,
    ) -> error_stack::Result<bool, KernelError> {
        let mut library = self.library_state().lock().await;
        let listed = library
            .wishlists_mut()
            .toggle(UserId::new(dto.user_id), ItemId::new(dto.item_id));
        persist::<WishlistsCollection, _>(self.collection_store(), library.wishlists()).await;
        Ok(listed)
    }

    async fn get_wishlist(
        &self,
        dto: GetWishlistDto,
    ) -> error_stack::Result<WishlistDto, KernelError> {
        let library = self.library_state().lock().await;
        let user_id = UserId::new(dto.user_id);
        let items = library
            .wishlists()
            .items(&user_id)
            .iter()
            .filter_map(|item_id| library.catalog().find(item_id))
            .map(CatalogItemDto::from)
            .collect();
        Ok(WishlistDto {
            user_id: dto.user_id,
            items,
        })
    }
}

impl<T> WishlistService for T where T: DependOnLibraryState + DependOnCollectionStore {}
