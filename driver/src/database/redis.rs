use deadpool_redis::redis::{AsyncCommands, RedisError};
use deadpool_redis::{Config, Connection, Pool, PoolError, Runtime};
use error_stack::{Report, ResultExt};

use kernel::interface::database::{Collection, CollectionStore};
use kernel::KernelError;

use crate::database::{decode_or_default, encode};
use crate::error::ConvertError;

/// Keeps each collection as a JSON string under `<prefix>:<collection>`.
#[derive(Clone)]
pub struct RedisStore {
    pool: Pool,
    prefix: String,
}

impl RedisStore {
    pub fn new(
        url: impl Into<String>,
        prefix: impl Into<String>,
    ) -> error_stack::Result<Self, KernelError> {
        let cfg = Config::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .change_context_lazy(|| KernelError::Internal)?;
        Ok(Self {
            pool,
            prefix: prefix.into(),
        })
    }

    fn key<C: Collection>(&self) -> String {
        format!("{}:{}", self.prefix, C::KEY)
    }

    async fn connection(&self) -> error_stack::Result<Connection, KernelError> {
        self.pool.get().await.convert_error()
    }
}

#[async_trait::async_trait]
impl CollectionStore for RedisStore {
    #[tracing::instrument(skip_all, fields(collection = C::KEY))]
    async fn load<C: Collection>(&self) -> error_stack::Result<C::Value, KernelError> {
        let mut con = self.connection().await?;
        let bytes = con
            .get::<_, Option<Vec<u8>>>(self.key::<C>())
            .await
            .convert_error()?;
        Ok(decode_or_default::<C>(bytes.as_deref()))
    }

    #[tracing::instrument(skip_all, fields(collection = C::KEY))]
    async fn save<C: Collection>(&self, value: &C::Value) -> error_stack::Result<(), KernelError> {
        let bytes = encode::<C>(value)?;
        let mut con = self.connection().await?;
        con.set::<_, _, ()>(self.key::<C>(), bytes)
            .await
            .convert_error()
    }
}

impl<T> ConvertError for Result<T, PoolError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            PoolError::Timeout(_) => Report::new(error).change_context(KernelError::Timeout),
            _ => Report::new(error).change_context(KernelError::Internal),
        })
    }
}

impl<T> ConvertError for Result<T, RedisError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| Report::new(error).change_context(KernelError::Internal))
    }
}

#[cfg(test)]
mod test {
    use deadpool_redis::redis::AsyncCommands;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use uuid::Uuid;

    use kernel::interface::database::{CollectionStore, ProfilesCollection, WishlistsCollection};
    use kernel::prelude::entity::{ItemId, Profiles, UserId, Wishlists};
    use kernel::KernelError;

    use crate::database::RedisStore;
    use crate::env;
    use crate::error::ConvertError;

    fn store() -> error_stack::Result<RedisStore, KernelError> {
        // several tests share the process, only the first registration wins
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .try_init();
        RedisStore::new(env("REDIS_URL")?, format!("test-{}", Uuid::new_v4()))
    }

    #[test_with::env(REDIS_TEST)]
    #[tokio::test]
    async fn round_trips_collections() -> error_stack::Result<(), KernelError> {
        let store = store()?;
        assert_eq!(store.load::<WishlistsCollection>().await?, Wishlists::default());

        let mut wishlists = Wishlists::default();
        wishlists.add(UserId::new(4), ItemId::new(12));
        store.save::<WishlistsCollection>(&wishlists).await?;
        assert_eq!(store.load::<WishlistsCollection>().await?, wishlists);
        Ok(())
    }

    #[test_with::env(REDIS_TEST)]
    #[tokio::test]
    async fn malformed_value_loads_empty() -> error_stack::Result<(), KernelError> {
        let store = store()?;
        let mut con = store.connection().await?;
        con.set::<_, _, ()>(store.key::<ProfilesCollection>(), "{{{")
            .await
            .convert_error()?;
        assert_eq!(store.load::<ProfilesCollection>().await?, Profiles::default());
        Ok(())
    }
}
