use error_stack::Report;
use time::{Duration, OffsetDateTime};
use vodca::References;

use crate::entity::{DueAt, Penalty};
use crate::KernelError;

/// Penalties accrue per started unit of this length.
pub const PENALTY_UNIT: Duration = Duration::HOUR;

#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct RentalPolicy {
    rental_period: Duration,
    rate_per_hour: Penalty,
    threshold: Penalty,
}

impl Default for RentalPolicy {
    fn default() -> Self {
        Self {
            rental_period: Duration::hours(24),
            rate_per_hour: Penalty::new(5),
            threshold: Penalty::new(50),
        }
    }
}

impl RentalPolicy {
    pub fn new(rental_period: Duration, rate_per_hour: Penalty, threshold: Penalty) -> Self {
        Self {
            rental_period,
            rate_per_hour,
            threshold,
        }
    }

    /// Fails when the deadline falls outside the representable date range.
    pub fn due_at(&self, rented_at: OffsetDateTime) -> error_stack::Result<DueAt, KernelError> {
        rented_at
            .checked_add(self.rental_period)
            .map(DueAt::new)
            .ok_or_else(|| {
                Report::new(KernelError::Internal).attach_printable(format!(
                    "rental period {:?} cannot be added to {rented_at}",
                    self.rental_period
                ))
            })
    }

    /// `ceil(overdue / 1h) * rate`, zero until the deadline has passed.
    pub fn accrued(&self, due_at: &DueAt, now: &OffsetDateTime) -> Penalty {
        let overdue = due_at.overdue_at(now).whole_nanoseconds();
        let unit = PENALTY_UNIT.whole_nanoseconds();
        let started_units = (overdue + unit - 1) / unit;
        let started_units = i64::try_from(started_units).unwrap_or(i64::MAX);
        Penalty::new(started_units.saturating_mul(*self.rate_per_hour.as_ref()))
    }

    /// Rejects checkout while the user's unpaid penalties exceed the threshold.
    pub fn admit(&self, current_penalty: Penalty) -> error_stack::Result<(), KernelError> {
        if current_penalty > self.threshold {
            return Err(Report::new(KernelError::PenaltyThresholdExceeded).attach_printable(
                format!(
                    "unpaid penalty {} is above the threshold {}",
                    current_penalty.as_ref(),
                    self.threshold.as_ref()
                ),
            ));
        }
        Ok(())
    }

    pub fn blocks(&self, current_penalty: Penalty) -> bool {
        current_penalty > self.threshold
    }
}
