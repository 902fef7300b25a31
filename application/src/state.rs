use error_stack::Report;
use time::OffsetDateTime;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error};
use vodca::References;

use kernel::interface::command::{RentalCommand, RentalOutcome};
use kernel::interface::database::{
    Collection, CollectionStore, ProfilesCollection, RentalsCollection, SessionCollection,
    WishlistsCollection,
};
use kernel::prelude::entity::{Catalog, Profiles, RentalLedger, RentalPolicy, Session, Wishlists};
use kernel::KernelError;

/// Everything the library keeps in memory. The catalog is a fetched snapshot;
/// every other field mirrors one persisted collection.
#[derive(Debug, Default, References)]
pub struct Library {
    ledger: RentalLedger,
    catalog: Catalog,
    wishlists: Wishlists,
    profiles: Profiles,
    session: Option<Session>,
}

impl Library {
    pub fn new(
        ledger: RentalLedger,
        catalog: Catalog,
        wishlists: Wishlists,
        profiles: Profiles,
        session: Option<Session>,
    ) -> Self {
        let mut library = Self {
            ledger,
            catalog,
            wishlists,
            profiles,
            session,
        };
        library.reconcile();
        library
    }

    /// Runs a ledger command and rebuilds availability when the active set moved.
    /// A checkout must name an item of the current catalog snapshot and always
    /// records the catalog's title.
    pub fn execute(
        &mut self,
        command: RentalCommand,
        now: OffsetDateTime,
        policy: &RentalPolicy,
    ) -> error_stack::Result<RentalOutcome, KernelError> {
        let command = match command {
            RentalCommand::Checkout {
                item_id, user_id, ..
            } => {
                let Some(item) = self.catalog.find(&item_id) else {
                    return Err(Report::new(KernelError::ItemUnavailable)
                        .attach_printable(format!("Item {item_id:?} is not in the catalog")));
                };
                RentalCommand::Checkout {
                    item_id,
                    item_title: item.title().clone(),
                    user_id,
                }
            }
            other => other,
        };
        let outcome = self.ledger.dispatch(command, now, policy)?;
        if outcome.changes_active_set() {
            self.reconcile();
        }
        Ok(outcome)
    }

    pub fn reconcile(&mut self) {
        self.catalog.reconcile(self.ledger.active());
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn wishlists_mut(&mut self) -> &mut Wishlists {
        &mut self.wishlists
    }

    pub fn profiles_mut(&mut self) -> &mut Profiles {
        &mut self.profiles
    }

    pub fn session_mut(&mut self) -> &mut Option<Session> {
        &mut self.session
    }
}

/// Serializes every mutation: callers hold the lock across
/// mutate, reconcile and persist.
#[derive(Debug, Default)]
pub struct LibraryState(Mutex<Library>);

impl LibraryState {
    pub fn new(library: Library) -> Self {
        Self(Mutex::new(library))
    }

    /// Loads every persisted collection once. Absent or corrupted collections
    /// come back empty from the store.
    pub async fn hydrate<S: CollectionStore>(store: &S) -> error_stack::Result<Self, KernelError> {
        let ledger = store.load::<RentalsCollection>().await?;
        let wishlists = store.load::<WishlistsCollection>().await?;
        let profiles = store.load::<ProfilesCollection>().await?;
        let session = store.load::<SessionCollection>().await?;
        debug!(
            "Hydrated library with {} rentals, session: {}",
            ledger.rentals().len(),
            session.is_some()
        );
        Ok(Self::new(Library::new(
            ledger,
            Catalog::default(),
            wishlists,
            profiles,
            session,
        )))
    }

    pub async fn lock(&self) -> MutexGuard<'_, Library> {
        self.0.lock().await
    }
}

pub trait DependOnLibraryState: 'static + Sync + Send {
    fn library_state(&self) -> &LibraryState;
}

/// Overwrites one collection. The in-memory state stays authoritative, so a
/// failed write is logged and not propagated.
pub(crate) async fn persist<C: Collection, S: CollectionStore>(store: &S, value: &C::Value) {
    if let Err(report) = store.save::<C>(value).await {
        error!("Failed to persist `{}`: {report:?}", C::KEY);
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::command::{RentalCommand, RentalOutcome};
    use kernel::prelude::entity::{Catalog, ItemId, ItemTitle, RentalPolicy, UserId};
    use kernel::KernelError;

    use crate::fixture::{items, T0};
    use crate::state::Library;

    fn library() -> Library {
        Library::new(
            Default::default(),
            Catalog::new(items()),
            Default::default(),
            Default::default(),
            None,
        )
    }

    #[test]
    fn checkout_records_the_catalog_title() -> error_stack::Result<(), KernelError> {
        let mut library = library();
        let command = RentalCommand::Checkout {
            item_id: ItemId::new(1),
            item_title: ItemTitle::new("made up"),
            user_id: UserId::new(1),
        };
        let outcome = library.execute(command, T0, &RentalPolicy::default())?;
        let RentalOutcome::CheckedOut(rental) = outcome else {
            panic!("expected a checkout, got {outcome:?}");
        };
        assert_eq!(
            rental.item_title(),
            &ItemTitle::new("sunt aut facere repellat")
        );
        assert!(library
            .catalog()
            .find(&ItemId::new(1))
            .is_some_and(|item| item.is_rented()));
        Ok(())
    }

    #[test]
    fn checkout_of_unknown_item_is_rejected() {
        let mut library = library();
        let command = RentalCommand::Checkout {
            item_id: ItemId::new(404),
            item_title: ItemTitle::new("made up"),
            user_id: UserId::new(1),
        };
        let report = library
            .execute(command, T0, &RentalPolicy::default())
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::ItemUnavailable);
        assert!(library.ledger().rentals().is_empty());
    }
}
