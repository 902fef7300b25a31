use kernel::interface::query::{CatalogSource, IdentitySource};
use kernel::prelude::entity::{CatalogItem, UserProfile};
use kernel::KernelError;

/// Serves a fixed catalog and user list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    items: Vec<CatalogItem>,
    profiles: Vec<UserProfile>,
}

impl StaticSource {
    pub fn new(items: Vec<CatalogItem>, profiles: Vec<UserProfile>) -> Self {
        Self { items, profiles }
    }
}

#[async_trait::async_trait]
impl CatalogSource for StaticSource {
    async fn fetch_items(&self) -> error_stack::Result<Vec<CatalogItem>, KernelError> {
        Ok(self.items.clone())
    }
}

#[async_trait::async_trait]
impl IdentitySource for StaticSource {
    async fn fetch_profiles(&self) -> error_stack::Result<Vec<UserProfile>, KernelError> {
        Ok(self.profiles.clone())
    }
}
