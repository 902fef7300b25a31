use application::state::{DependOnLibraryState, LibraryState};
use driver::clock::SystemClock;
use driver::config::LibraryConfig;
use driver::database::ConfiguredStore;
use driver::source::JsonPlaceholderClient;
use kernel::interface::clock::DependOnClock;
use kernel::interface::database::DependOnCollectionStore;
use kernel::interface::policy::DependOnRentalPolicy;
use kernel::interface::query::{DependOnCatalogSource, DependOnIdentitySource};
use kernel::prelude::entity::RentalPolicy;
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new(config: &LibraryConfig) -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init(config).await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler {
    state: LibraryState,
    store: ConfiguredStore,
    api: JsonPlaceholderClient,
    clock: SystemClock,
    policy: RentalPolicy,
}

impl Handler {
    pub async fn init(config: &LibraryConfig) -> error_stack::Result<Self, KernelError> {
        let store = config.store().open()?;
        let state = LibraryState::hydrate(&store).await?;
        let api = JsonPlaceholderClient::new(config.catalog_api_url().as_str())?;

        Ok(Self {
            state,
            store,
            api,
            clock: SystemClock,
            policy: config.policy().clone(),
        })
    }
}

impl DependOnLibraryState for AppModule {
    fn library_state(&self) -> &LibraryState {
        &self.state
    }
}

impl DependOnCollectionStore for AppModule {
    type CollectionStore = ConfiguredStore;
    fn collection_store(&self) -> &Self::CollectionStore {
        &self.store
    }
}

impl DependOnClock for AppModule {
    type Clock = SystemClock;
    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}

impl DependOnRentalPolicy for AppModule {
    fn rental_policy(&self) -> &RentalPolicy {
        &self.policy
    }
}

impl DependOnCatalogSource for AppModule {
    type CatalogSource = JsonPlaceholderClient;
    fn catalog_source(&self) -> &Self::CatalogSource {
        &self.api
    }
}

impl DependOnIdentitySource for AppModule {
    type IdentitySource = JsonPlaceholderClient;
    fn identity_source(&self) -> &Self::IdentitySource {
        &self.api
    }
}
