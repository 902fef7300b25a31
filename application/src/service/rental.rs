use error_stack::Report;
use time::OffsetDateTime;
use tracing::debug;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::command::{RentalCommand, RentalOutcome};
use kernel::interface::database::{CollectionStore, DependOnCollectionStore, RentalsCollection};
use kernel::interface::policy::DependOnRentalPolicy;
use kernel::prelude::entity::{ItemId, ItemTitle, RentalId, RentalPolicy, UserId};
use kernel::KernelError;

use crate::state::{persist, DependOnLibraryState, Library};
use crate::transfer::{
    CheckoutDto, GetRentalsDto, PayPenaltiesDto, PenaltySummaryDto, RentalDto, ReturnDto,
    UserRentalsDto,
};

async fn execute<S: CollectionStore>(
    store: &S,
    library: &mut Library,
    command: RentalCommand,
    now: OffsetDateTime,
    policy: &RentalPolicy,
) -> error_stack::Result<RentalOutcome, KernelError> {
    debug!("Dispatching {command:?}");
    let outcome = library.execute(command, now, policy)?;
    persist::<RentalsCollection, _>(store, library.ledger()).await;
    Ok(outcome)
}

fn unexpected(outcome: RentalOutcome) -> Report<KernelError> {
    Report::new(KernelError::Internal)
        .attach_printable(format!("Unexpected rental outcome: {outcome:?}"))
}

#[async_trait::async_trait]
pub trait RentalService:
    'static
    + Sync
    + Send
    + DependOnLibraryState
    + DependOnCollectionStore
    + DependOnClock
    + DependOnRentalPolicy
{
    /// Runs one ledger command under the state lock, reconciles the catalog
    /// and persists the ledger.
    async fn dispatch(
        &self,
        command: RentalCommand,
    ) -> error_stack::Result<RentalOutcome, KernelError> {
        let now = self.clock().now();
        let mut library = self.library_state().lock().await;
        execute(
            self.collection_store(),
            &mut library,
            command,
            now,
            self.rental_policy(),
        )
        .await
    }

    /// The recorded title comes from the catalog snapshot.
    async fn checkout(&self, dto: CheckoutDto) -> error_stack::Result<RentalDto, KernelError> {
        let command = RentalCommand::Checkout {
            item_id: ItemId::new(dto.item_id),
            item_title: ItemTitle::new(""),
            user_id: UserId::new(dto.user_id),
        };
        let outcome = self.dispatch(command).await?;
        match outcome {
            RentalOutcome::CheckedOut(rental) => Ok(rental.into()),
            other => Err(unexpected(other)),
        }
    }

    /// Returns `None` when the rental is unknown or already returned.
    async fn return_rental(
        &self,
        dto: ReturnDto,
    ) -> error_stack::Result<Option<RentalDto>, KernelError> {
        let command = RentalCommand::Return {
            rental_id: RentalId::new(dto.rental_id),
        };
        match self.dispatch(command).await? {
            RentalOutcome::Returned(rental) => Ok(rental.map(RentalDto::from)),
            other => Err(unexpected(other)),
        }
    }

    /// Clears the unpaid penalties of the user's active rentals and returns
    /// the amount cleared.
    async fn pay_penalties(&self, dto: PayPenaltiesDto) -> error_stack::Result<i64, KernelError> {
        let command = RentalCommand::PayPenalties {
            user_id: UserId::new(dto.user_id),
        };
        match self.dispatch(command).await? {
            RentalOutcome::PenaltiesPaid(amount) => Ok(amount.into()),
            other => Err(unexpected(other)),
        }
    }

    async fn recompute_penalties(&self) -> error_stack::Result<(), KernelError> {
        let command = RentalCommand::Recompute {
            now: self.clock().now(),
        };
        self.dispatch(command).await?;
        Ok(())
    }
}

impl<T> RentalService for T where
    T: DependOnLibraryState + DependOnCollectionStore + DependOnClock + DependOnRentalPolicy
{
}

#[async_trait::async_trait]
pub trait GetRentalService: 'static + Sync + Send + DependOnLibraryState + DependOnRentalPolicy {
    async fn get_rentals(
        &self,
        dto: GetRentalsDto,
    ) -> error_stack::Result<UserRentalsDto, KernelError> {
        let user_id = UserId::new(dto.user_id);
        let library = self.library_state().lock().await;
        let ledger = library.ledger();

        let current = ledger.current_penalty_for(&user_id);
        let penalty = PenaltySummaryDto {
            current: current.into(),
            paid: ledger.penalty_paid_for(&user_id).into(),
            lifetime: ledger.lifetime_liability_for(&user_id).into(),
            blocked: self.rental_policy().blocks(current),
        };
        Ok(UserRentalsDto {
            active: ledger.active_for(&user_id).map(RentalDto::from).collect(),
            completed: ledger.completed_for(&user_id).map(RentalDto::from).collect(),
            penalty,
        })
    }

    async fn current_penalty(&self, dto: GetRentalsDto) -> error_stack::Result<i64, KernelError> {
        let library = self.library_state().lock().await;
        let penalty = library
            .ledger()
            .current_penalty_for(&UserId::new(dto.user_id));
        Ok(penalty.into())
    }
}

impl<T> GetRentalService for T where T: DependOnLibraryState + DependOnRentalPolicy {}
