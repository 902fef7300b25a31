use crate::entity::RentalPolicy;

pub trait DependOnRentalPolicy: 'static + Sync + Send {
    fn rental_policy(&self) -> &RentalPolicy;
}
