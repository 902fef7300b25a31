use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use kernel::interface::database::{Collection, CollectionStore};
use kernel::KernelError;

use crate::database::{decode_or_default, encode};

/// Process-local store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryStore {
    /// Stores bytes under `key` without encoding them.
    pub async fn insert_raw(&self, key: &str, bytes: impl Into<Vec<u8>>) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), bytes.into());
    }
}

#[async_trait::async_trait]
impl CollectionStore for InMemoryStore {
    async fn load<C: Collection>(&self) -> error_stack::Result<C::Value, KernelError> {
        let entries = self.entries.read().await;
        Ok(decode_or_default::<C>(entries.get(C::KEY).map(Vec::as_slice)))
    }

    async fn save<C: Collection>(&self, value: &C::Value) -> error_stack::Result<(), KernelError> {
        let bytes = encode::<C>(value)?;
        self.entries
            .write()
            .await
            .insert(C::KEY.to_string(), bytes);
        Ok(())
    }
}
