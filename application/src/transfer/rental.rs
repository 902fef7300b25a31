use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{DestructRental, Rental};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RentalDto {
    pub id: Uuid,
    pub item_id: i64,
    pub item_title: String,
    pub user_id: i64,
    pub rented_at: OffsetDateTime,
    pub due_at: OffsetDateTime,
    pub returned_at: Option<OffsetDateTime>,
    pub penalty: i64,
    pub penalty_paid: i64,
}

impl From<Rental> for RentalDto {
    fn from(value: Rental) -> Self {
        let DestructRental {
            id,
            item_id,
            item_title,
            user_id,
            rented_at,
            due_at,
            returned_at,
            penalty,
            penalty_paid,
        } = value.into_destruct();
        Self {
            id: id.into(),
            item_id: item_id.into(),
            item_title: item_title.into(),
            user_id: user_id.into(),
            rented_at: rented_at.into(),
            due_at: due_at.into(),
            returned_at: returned_at.map(Into::into),
            penalty: penalty.into(),
            penalty_paid: penalty_paid.into(),
        }
    }
}

impl From<&Rental> for RentalDto {
    fn from(value: &Rental) -> Self {
        Self::from(value.clone())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PenaltySummaryDto {
    /// Unpaid penalties on active rentals.
    pub current: i64,
    pub paid: i64,
    pub lifetime: i64,
    /// Whether new checkouts are refused until the current amount is paid.
    pub blocked: bool,
}

#[derive(Debug, Clone)]
pub struct UserRentalsDto {
    pub active: Vec<RentalDto>,
    pub completed: Vec<RentalDto>,
    pub penalty: PenaltySummaryDto,
}

pub struct GetRentalsDto {
    pub user_id: i64,
}

pub struct CheckoutDto {
    pub item_id: i64,
    pub user_id: i64,
}

pub struct ReturnDto {
    pub rental_id: Uuid,
}

pub struct PayPenaltiesDto {
    pub user_id: i64,
}
