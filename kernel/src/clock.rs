use time::OffsetDateTime;

/// Wall-clock source. Penalty accrual and due dates are computed from it, so
/// tests swap in a manually advanced implementation.
pub trait Clock: 'static + Sync + Send {
    fn now(&self) -> OffsetDateTime;
}

pub trait DependOnClock: 'static + Sync + Send {
    type Clock: Clock;
    fn clock(&self) -> &Self::Clock;
}
