use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error};

use crate::service::RentalService;

/// Periodically recomputes penalties so they accrue without user action.
pub struct PenaltyTicker {
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl PenaltyTicker {
    /// The first recomputation runs immediately, then once per `period`.
    pub fn start<M>(module: M, period: Duration) -> Self
    where
        M: RentalService,
    {
        let (shutdown, mut stop) = oneshot::channel();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = &mut stop => break,
                    _ = interval.tick() => {
                        if let Err(report) = module.recompute_penalties().await {
                            error!("Failed to recompute penalties: {report:?}");
                        }
                    }
                }
            }
            debug!("Penalty ticker stopped");
        });
        Self { shutdown, handle }
    }

    /// Cancels rescheduling and waits for an in-flight recomputation to finish.
    pub async fn stop(self) {
        let _ = self.shutdown.send(());
        if let Err(e) = self.handle.await {
            error!("Penalty ticker task failed: {e}");
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;
    use std::time::Duration;

    use driver::clock::ManualClock;
    use driver::database::InMemoryStore;
    use kernel::KernelError;

    use crate::fixture::{TestModule, T0};
    use crate::service::{GetRentalService, RentalService};
    use crate::ticker::PenaltyTicker;
    use crate::transfer::{CheckoutDto, GetRentalsDto};

    #[tokio::test(start_paused = true)]
    async fn recomputes_until_stopped() -> error_stack::Result<(), KernelError> {
        let clock = Arc::new(ManualClock::new(T0));
        let module = TestModule::new(clock.clone(), InMemoryStore::default()).await?;
        module
            .checkout(CheckoutDto {
                item_id: 1,
                user_id: 1,
            })
            .await?;

        let ticker = PenaltyTicker::start(module.clone(), Duration::from_secs(30));
        clock.advance(time::Duration::hours(26));
        tokio::time::sleep(Duration::from_secs(31)).await;

        let dto = GetRentalsDto { user_id: 1 };
        assert_eq!(module.current_penalty(dto).await?, 10);

        ticker.stop().await;
        clock.advance(time::Duration::hours(10));
        tokio::time::sleep(Duration::from_secs(120)).await;
        let dto = GetRentalsDto { user_id: 1 };
        assert_eq!(module.current_penalty(dto).await?, 10);
        Ok(())
    }
}
