use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use vodca::{AsRefln, Fromln};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Fromln,
    AsRefln,
    Serialize,
    Deserialize,
)]
pub struct DueAt(#[serde(with = "time::serde::rfc3339")] OffsetDateTime);

impl DueAt {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into())
    }

    /// Time elapsed past the deadline, zero when `now` has not reached it.
    pub fn overdue_at(&self, now: &OffsetDateTime) -> Duration {
        let overdue = *now - self.0;
        if overdue.is_positive() {
            overdue
        } else {
            Duration::ZERO
        }
    }
}
