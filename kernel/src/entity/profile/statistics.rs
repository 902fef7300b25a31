use vodca::References;

use crate::entity::{Penalty, RentalLedger, UserId};

/// Points granted per rental before penalties are deducted.
pub const POINTS_PER_RENTAL: i64 = 10;

#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct ProfileStatistics {
    total_rentals: usize,
    active_rentals: usize,
    total_penalties: Penalty,
    library_points: i64,
}

impl ProfileStatistics {
    pub fn collect(ledger: &RentalLedger, user_id: &UserId) -> Self {
        let total_rentals = ledger.all_for(user_id).count();
        let active_rentals = ledger.active_for(user_id).count();
        let total_penalties = ledger.lifetime_liability_for(user_id);
        let earned = i64::try_from(total_rentals)
            .unwrap_or(i64::MAX)
            .saturating_mul(POINTS_PER_RENTAL);
        let library_points = earned.saturating_sub(*total_penalties.as_ref()).max(0);
        Self {
            total_rentals,
            active_rentals,
            total_penalties,
            library_points,
        }
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;
    use time::Duration;

    use crate::entity::{
        ItemId, ItemTitle, Penalty, ProfileStatistics, RentalLedger, RentalPolicy, UserId,
    };
    use crate::KernelError;

    #[test]
    fn points_are_reduced_by_penalties() -> error_stack::Result<(), KernelError> {
        let policy = RentalPolicy::default();
        let t0 = datetime!(2024-06-01 00:00 UTC);
        let user = UserId::new(2);
        let mut ledger = RentalLedger::default();
        let first = ledger.checkout(ItemId::new(1), ItemTitle::new("a"), user, t0, &policy)?;
        ledger.checkout(ItemId::new(2), ItemTitle::new("b"), user, t0, &policy)?;
        ledger.return_rental(first.id(), t0 + Duration::hours(1));

        let stats = ProfileStatistics::collect(&ledger, &user);
        assert_eq!(stats.total_rentals(), &2);
        assert_eq!(stats.active_rentals(), &1);
        assert_eq!(stats.library_points(), &20);

        // 3 started hours overdue on the active rental -> 15
        ledger.recompute_penalties(&(t0 + Duration::hours(27)), &policy);
        let stats = ProfileStatistics::collect(&ledger, &user);
        assert_eq!(stats.total_penalties(), &Penalty::new(15));
        assert_eq!(stats.library_points(), &5);

        ledger.recompute_penalties(&(t0 + Duration::hours(40)), &policy);
        let stats = ProfileStatistics::collect(&ledger, &user);
        assert_eq!(stats.library_points(), &0);
        Ok(())
    }
}
