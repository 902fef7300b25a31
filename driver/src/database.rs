mod file;
mod memory;
mod redis;

use tracing::warn;

use kernel::interface::database::{Collection, CollectionStore};
use kernel::KernelError;

use crate::error::ConvertError;

pub use self::{file::*, memory::*, redis::*};

pub(crate) fn encode<C: Collection>(value: &C::Value) -> error_stack::Result<Vec<u8>, KernelError> {
    serde_json::to_vec(value)
        .convert_error()
        .map_err(|report| report.attach_printable(format!("Failed to encode `{}`", C::KEY)))
}

/// Absent or malformed data yields an empty collection.
pub(crate) fn decode_or_default<C: Collection>(bytes: Option<&[u8]>) -> C::Value {
    let Some(bytes) = bytes else {
        return C::Value::default();
    };
    match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(error) => {
            warn!("Discarding malformed `{}` collection: {error}", C::KEY);
            C::Value::default()
        }
    }
}

/// The store selected by `STORE_BACKEND`.
#[derive(Clone)]
pub enum ConfiguredStore {
    Redis(RedisStore),
    File(FileStore),
    Memory(InMemoryStore),
}

#[async_trait::async_trait]
impl CollectionStore for ConfiguredStore {
    async fn load<C: Collection>(&self) -> error_stack::Result<C::Value, KernelError> {
        match self {
            ConfiguredStore::Redis(store) => store.load::<C>().await,
            ConfiguredStore::File(store) => store.load::<C>().await,
            ConfiguredStore::Memory(store) => store.load::<C>().await,
        }
    }

    async fn save<C: Collection>(&self, value: &C::Value) -> error_stack::Result<(), KernelError> {
        match self {
            ConfiguredStore::Redis(store) => store.save::<C>(value).await,
            ConfiguredStore::File(store) => store.save::<C>(value).await,
            ConfiguredStore::Memory(store) => store.save::<C>(value).await,
        }
    }
}
