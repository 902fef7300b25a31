use destructure::Destructure;
use vodca::References;

use crate::entity::{DueAt, Rental, RentedAt, UserId};

/// Availability fields mirrored from the active rental that references an item.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct RentalMark {
    rented_by: UserId,
    rented_at: RentedAt,
    due_at: DueAt,
}

impl RentalMark {
    pub fn new(rented_by: UserId, rented_at: RentedAt, due_at: DueAt) -> Self {
        Self {
            rented_by,
            rented_at,
            due_at,
        }
    }
}

impl From<&Rental> for RentalMark {
    fn from(rental: &Rental) -> Self {
        Self::new(*rental.user_id(), *rental.rented_at(), *rental.due_at())
    }
}
