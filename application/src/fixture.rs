use std::ops::Deref;
use std::sync::Arc;

use time::macros::datetime;
use time::OffsetDateTime;

use driver::clock::ManualClock;
use driver::database::InMemoryStore;
use driver::source::StaticSource;
use kernel::interface::clock::DependOnClock;
use kernel::interface::database::DependOnCollectionStore;
use kernel::interface::policy::DependOnRentalPolicy;
use kernel::interface::query::{DependOnCatalogSource, DependOnIdentitySource};
use kernel::prelude::entity::{
    Address, CatalogItem, CompanyName, Contact, EmailAddress, FullName, ItemAuthor,
    ItemDescription, ItemId, ItemTitle, PhoneNumber, RentalPolicy, UserId, UserName, UserProfile,
    Website,
};
use kernel::KernelError;

use crate::service::RefreshCatalogService;
use crate::state::{DependOnLibraryState, LibraryState};

pub const T0: OffsetDateTime = datetime!(2024-03-01 09:00 UTC);

pub fn items() -> Vec<CatalogItem> {
    [
        (1, "sunt aut facere repellat", 1),
        (2, "qui est esse", 1),
        (3, "ea molestias quasi exercitationem", 2),
    ]
    .into_iter()
    .map(|(id, title, author)| {
        CatalogItem::new(
            ItemId::new(id),
            ItemTitle::new(title),
            ItemAuthor::new(format!("Author {author}")),
            ItemDescription::new(format!("body of {title}")),
        )
    })
    .collect()
}

pub fn users() -> Vec<UserProfile> {
    vec![
        UserProfile::new(
            UserId::new(1),
            UserName::new("Bret"),
            FullName::new("Leanne Graham"),
            EmailAddress::new("Sincere@april.biz"),
        )
        .with_contact(Contact::new(
            PhoneNumber::new("1-770-736-8031 x56442"),
            Website::new("hildegard.org"),
            CompanyName::new("Romaguera-Crona"),
            Address::new("Kulas Light", "Apt. 556", "Gwenborough", "92998-3874"),
        )),
        UserProfile::new(
            UserId::new(2),
            UserName::new("Antonette"),
            FullName::new("Ervin Howell"),
            EmailAddress::new("Shanna@melissa.tv"),
        ),
    ]
}

pub struct TestHandler {
    state: LibraryState,
    store: InMemoryStore,
    clock: Arc<ManualClock>,
    source: StaticSource,
    policy: RentalPolicy,
}

#[derive(Clone)]
pub struct TestModule(Arc<TestHandler>);

impl TestModule {
    /// Hydrates from `store` and loads the fixture catalog.
    pub async fn new(
        clock: Arc<ManualClock>,
        store: InMemoryStore,
    ) -> error_stack::Result<Self, KernelError> {
        let state = LibraryState::hydrate(&store).await?;
        let module = Self(Arc::new(TestHandler {
            state,
            store,
            clock,
            source: StaticSource::new(items(), users()),
            policy: RentalPolicy::default(),
        }));
        module.refresh_catalog().await?;
        Ok(module)
    }
}

impl Deref for TestModule {
    type Target = TestHandler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

impl DependOnLibraryState for TestModule {
    fn library_state(&self) -> &LibraryState {
        &self.state
    }
}

impl DependOnCollectionStore for TestModule {
    type CollectionStore = InMemoryStore;
    fn collection_store(&self) -> &Self::CollectionStore {
        &self.store
    }
}

impl DependOnClock for TestModule {
    type Clock = ManualClock;
    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}

impl DependOnRentalPolicy for TestModule {
    fn rental_policy(&self) -> &RentalPolicy {
        &self.policy
    }
}

impl DependOnCatalogSource for TestModule {
    type CatalogSource = StaticSource;
    fn catalog_source(&self) -> &Self::CatalogSource {
        &self.source
    }
}

impl DependOnIdentitySource for TestModule {
    type IdentitySource = StaticSource;
    fn identity_source(&self) -> &Self::IdentitySource {
        &self.source
    }
}

impl TestHandler {
    pub fn store(&self) -> &InMemoryStore {
        &self.store
    }
}
