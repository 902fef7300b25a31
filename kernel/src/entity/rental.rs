mod due_at;
mod id;
mod penalty;
mod rented_at;
mod returned_at;

pub use self::{due_at::*, id::*, penalty::*, rented_at::*, returned_at::*};
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use vodca::References;

use crate::entity::{ItemId, ItemTitle, UserId};

#[derive(
    Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation,
)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    id: RentalId,
    item_id: ItemId,
    item_title: ItemTitle,
    user_id: UserId,
    rented_at: RentedAt,
    due_at: DueAt,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    returned_at: Option<ReturnedAt>,
    #[serde(default)]
    penalty: Penalty,
    #[serde(default)]
    penalty_paid: Penalty,
}

impl Rental {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RentalId,
        item_id: ItemId,
        item_title: ItemTitle,
        user_id: UserId,
        rented_at: RentedAt,
        due_at: DueAt,
        returned_at: Option<ReturnedAt>,
        penalty: Penalty,
        penalty_paid: Penalty,
    ) -> Self {
        Self {
            id,
            item_id,
            item_title,
            user_id,
            rented_at,
            due_at,
            returned_at,
            penalty,
            penalty_paid,
        }
    }

    pub fn is_active(&self) -> bool {
        self.returned_at.is_none()
    }

    /// Overdue liability accrued so far, paid or not.
    pub fn total_liability(&self) -> Penalty {
        self.penalty + self.penalty_paid
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;
    use uuid::Uuid;

    use crate::entity::{
        DueAt, ItemId, ItemTitle, Penalty, Rental, RentalId, RentedAt, ReturnedAt, UserId,
    };

    #[test]
    fn persisted_layout_is_camel_case() -> Result<(), serde_json::Error> {
        let rental = Rental::new(
            RentalId::new(Uuid::nil()),
            ItemId::new(7),
            ItemTitle::new("sunt aut facere"),
            UserId::new(1),
            RentedAt::new(datetime!(2024-01-01 10:00 UTC)),
            DueAt::new(datetime!(2024-01-02 10:00 UTC)),
            None,
            Penalty::new(10),
            Penalty::ZERO,
        );
        let json = serde_json::to_value(&rental)?;
        assert_eq!(json["itemId"], 7);
        assert_eq!(json["dueAt"], "2024-01-02T10:00:00Z");
        assert_eq!(json["penaltyPaid"], 0);
        assert!(json.get("returnedAt").is_none());

        let back: Rental = serde_json::from_value(json)?;
        assert_eq!(back, rental);
        Ok(())
    }

    #[test]
    fn negative_amounts_make_the_record_malformed() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000000",
            "itemId": 7,
            "itemTitle": "sunt aut facere",
            "userId": 1,
            "rentedAt": "2024-01-01T10:00:00Z",
            "dueAt": "2024-01-02T10:00:00Z",
            "penalty": -40,
            "penaltyPaid": 0
        }"#;
        assert!(serde_json::from_str::<Rental>(json).is_err());

        let paid = json
            .replace("\"penalty\": -40", "\"penalty\": 0")
            .replace("\"penaltyPaid\": 0", "\"penaltyPaid\": -5");
        assert!(serde_json::from_str::<Rental>(&paid).is_err());
        assert!(serde_json::from_str::<Rental>(&json.replace("-40", "40")).is_ok());
    }

    #[test]
    fn returned_rental_is_not_active() {
        let rental = Rental::new(
            RentalId::generate(),
            ItemId::new(1),
            ItemTitle::new("title"),
            UserId::new(1),
            RentedAt::new(datetime!(2024-01-01 10:00 UTC)),
            DueAt::new(datetime!(2024-01-02 10:00 UTC)),
            Some(ReturnedAt::new(datetime!(2024-01-01 12:00 UTC))),
            Penalty::new(5),
            Penalty::new(15),
        );
        assert!(!rental.is_active());
        assert_eq!(rental.total_liability(), Penalty::new(20));
    }
}
