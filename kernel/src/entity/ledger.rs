use error_stack::Report;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::command::{RentalCommand, RentalOutcome};
use crate::entity::{
    ItemId, ItemTitle, Penalty, Rental, RentalId, RentalPolicy, RentedAt, ReturnedAt, UserId,
};
use crate::KernelError;

/// Every rental ever checked out, in checkout order. Records are never removed.
///
/// The ledger is the only authority on whether an item is free: an item is
/// rented iff an active rental references it.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RentalLedger {
    rentals: Vec<Rental>,
}

impl RentalLedger {
    pub fn new(rentals: Vec<Rental>) -> Self {
        Self { rentals }
    }

    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }

    pub fn find(&self, id: &RentalId) -> Option<&Rental> {
        self.rentals.iter().find(|rental| rental.id() == id)
    }

    pub fn checkout(
        &mut self,
        item_id: ItemId,
        item_title: ItemTitle,
        user_id: UserId,
        now: OffsetDateTime,
        policy: &RentalPolicy,
    ) -> error_stack::Result<Rental, KernelError> {
        if self.is_item_rented(&item_id) {
            return Err(Report::new(KernelError::ItemUnavailable).attach_printable(format!(
                "item {} already has an active rental",
                item_id.as_ref()
            )));
        }
        let rental = Rental::new(
            RentalId::generate(),
            item_id,
            item_title,
            user_id,
            RentedAt::new(now),
            policy.due_at(now)?,
            None,
            Penalty::ZERO,
            Penalty::ZERO,
        );
        self.rentals.push(rental.clone());
        Ok(rental)
    }

    /// Marks the rental returned. Unknown or already returned ids are ignored.
    /// Outstanding penalty survives the return.
    pub fn return_rental(&mut self, id: &RentalId, now: OffsetDateTime) -> Option<Rental> {
        let rental = self
            .rentals
            .iter_mut()
            .find(|rental| rental.id() == id && rental.is_active())?;
        rental.substitute(|rental| *rental.returned_at = Some(ReturnedAt::new(now)));
        Some(rental.clone())
    }

    /// Sets each active rental's penalty to what has accrued and is still unpaid.
    pub fn recompute_penalties(&mut self, now: &OffsetDateTime, policy: &RentalPolicy) {
        self.rentals
            .iter_mut()
            .filter(|rental| rental.is_active())
            .for_each(|rental| {
                let outstanding = policy
                    .accrued(rental.due_at(), now)
                    .saturating_sub(*rental.penalty_paid());
                rental.substitute(|rental| *rental.penalty = outstanding);
            });
    }

    /// Clears the user's outstanding penalties on active rentals. Completed
    /// rentals keep theirs.
    pub fn pay_penalties(&mut self, user_id: &UserId) -> Penalty {
        self.rentals
            .iter_mut()
            .filter(|rental| {
                rental.user_id() == user_id && rental.is_active() && rental.penalty().is_positive()
            })
            .map(|rental| {
                let amount = *rental.penalty();
                rental.substitute(|rental| {
                    *rental.penalty_paid += amount;
                    *rental.penalty = Penalty::ZERO;
                });
                amount
            })
            .sum()
    }

    pub fn dispatch(
        &mut self,
        command: RentalCommand,
        now: OffsetDateTime,
        policy: &RentalPolicy,
    ) -> error_stack::Result<RentalOutcome, KernelError> {
        match command {
            RentalCommand::Checkout {
                item_id,
                item_title,
                user_id,
            } => {
                self.recompute_penalties(&now, policy);
                policy.admit(self.current_penalty_for(&user_id))?;
                let rental = self.checkout(item_id, item_title, user_id, now, policy)?;
                Ok(RentalOutcome::CheckedOut(rental))
            }
            RentalCommand::Return { rental_id } => {
                self.recompute_penalties(&now, policy);
                Ok(RentalOutcome::Returned(self.return_rental(&rental_id, now)))
            }
            RentalCommand::PayPenalties { user_id } => {
                self.recompute_penalties(&now, policy);
                Ok(RentalOutcome::PenaltiesPaid(self.pay_penalties(&user_id)))
            }
            RentalCommand::Recompute { now } => {
                self.recompute_penalties(&now, policy);
                Ok(RentalOutcome::Recomputed)
            }
        }
    }

    pub fn active(&self) -> impl Iterator<Item = &Rental> {
        self.rentals.iter().filter(|rental| rental.is_active())
    }

    pub fn is_item_rented(&self, item_id: &ItemId) -> bool {
        self.active().any(|rental| rental.item_id() == item_id)
    }

    pub fn active_for<'a>(&'a self, user_id: &'a UserId) -> impl Iterator<Item = &'a Rental> {
        self.active()
            .filter(move |rental| rental.user_id() == user_id)
    }

    pub fn completed_for<'a>(&'a self, user_id: &'a UserId) -> impl Iterator<Item = &'a Rental> {
        self.rentals
            .iter()
            .filter(move |rental| rental.user_id() == user_id && !rental.is_active())
    }

    pub fn all_for<'a>(&'a self, user_id: &'a UserId) -> impl Iterator<Item = &'a Rental> {
        self.rentals
            .iter()
            .filter(move |rental| rental.user_id() == user_id)
    }

    /// Unpaid penalties on the user's active rentals.
    pub fn current_penalty_for(&self, user_id: &UserId) -> Penalty {
        self.active_for(user_id).map(Rental::penalty).sum()
    }

    /// Paid and unpaid penalties over all of the user's rentals.
    pub fn lifetime_liability_for(&self, user_id: &UserId) -> Penalty {
        self.all_for(user_id).map(Rental::total_liability).sum()
    }

    pub fn penalty_paid_for(&self, user_id: &UserId) -> Penalty {
        self.all_for(user_id).map(Rental::penalty_paid).sum()
    }
}
