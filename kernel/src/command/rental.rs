use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::entity::{ItemId, ItemTitle, Penalty, Rental, RentalId, UserId};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RentalCommand {
    Checkout {
        item_id: ItemId,
        item_title: ItemTitle,
        user_id: UserId,
    },
    Return {
        rental_id: RentalId,
    },
    PayPenalties {
        user_id: UserId,
    },
    Recompute {
        #[serde(with = "time::serde::rfc3339")]
        now: OffsetDateTime,
    },
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RentalOutcome {
    CheckedOut(Rental),
    /// `None` when the rental was unknown or already returned.
    Returned(Option<Rental>),
    PenaltiesPaid(Penalty),
    Recomputed,
}

impl RentalOutcome {
    /// Whether the set of active rentals changed, so availability must be rebuilt.
    pub fn changes_active_set(&self) -> bool {
        matches!(
            self,
            RentalOutcome::CheckedOut(_) | RentalOutcome::Returned(Some(_))
        )
    }
}
