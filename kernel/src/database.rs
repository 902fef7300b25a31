use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::entity::{Profiles, RentalLedger, Session, Wishlists};
use crate::KernelError;

/// A named, JSON-encoded collection in the key-value store.
///
/// Absent or malformed values load as `Value::default()`.
pub trait Collection: 'static + Sync + Send {
    const KEY: &'static str;
    type Value: Serialize + DeserializeOwned + Default + Sync + Send;
}

pub struct RentalsCollection;

impl Collection for RentalsCollection {
    const KEY: &'static str = "rentals";
    type Value = RentalLedger;
}

pub struct WishlistsCollection;

impl Collection for WishlistsCollection {
    const KEY: &'static str = "wishlists";
    type Value = Wishlists;
}

pub struct ProfilesCollection;

impl Collection for ProfilesCollection {
    const KEY: &'static str = "profiles";
    type Value = Profiles;
}

pub struct SessionCollection;

impl Collection for SessionCollection {
    const KEY: &'static str = "session";
    type Value = Option<Session>;
}

#[async_trait::async_trait]
pub trait CollectionStore: 'static + Sync + Send {
    async fn load<C: Collection>(&self) -> error_stack::Result<C::Value, KernelError>;
    async fn save<C: Collection>(&self, value: &C::Value)
        -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCollectionStore: 'static + Sync + Send {
    type CollectionStore: CollectionStore;
    fn collection_store(&self) -> &Self::CollectionStore;
}

impl<T> DependOnCollectionStore for T
where
    T: CollectionStore,
{
    type CollectionStore = T;
    fn collection_store(&self) -> &Self::CollectionStore {
        self
    }
}
