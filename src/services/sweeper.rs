//! Expiry sweeper: periodic removal of elapsed reservations.
//!
//! Runs as a background tokio task owned by the process lifecycle: spawned
//! at startup, aborted at shutdown. Each tick deletes every reservation
//! whose `(date, end_time)` is at or before the current wall clock. A
//! storage fault is logged and swallowed; the next tick retries implicitly
//! since the condition persists.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::services::booking::BookingService;

/// Handle to the running sweeper task.
pub struct ExpirySweeper {
    handle: JoinHandle<()>,
}

impl ExpirySweeper {
    /// Spawn the sweep loop on the current runtime.
    pub fn spawn(service: BookingService, period: Duration) -> Self {
        let handle = tokio::spawn(run_sweep_loop(service, period));
        Self { handle }
    }

    /// Stop the sweep loop. Idempotent once the task is gone.
    pub fn shutdown(self) {
        self.handle.abort();
    }

    /// Whether the loop is still running.
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

async fn run_sweep_loop(service: BookingService, period: Duration) {
    let mut ticker = tokio::time::interval(period);

    // The first `tick()` completes immediately to align the interval.
    ticker.tick().await;
    info!(period_secs = period.as_secs(), "expiry sweeper started");

    loop {
        ticker.tick().await;
        match service.remove_expired().await {
            Ok(removed) => {
                if removed > 0 {
                    info!(removed, "removed past reservations");
                } else {
                    debug!("sweep pass removed nothing");
                }
            }
            Err(e) => {
                // Not fatal: the rows stay expired and the next tick
                // retries.
                error!(error = %e, "expiry sweep failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ReservationRequest;
    use crate::db::LocalRepository;
    use chrono::{NaiveDate, NaiveTime};
    use std::sync::Arc;

    fn yesterday_booking() -> ReservationRequest {
        ReservationRequest {
            requester_name: "Alice".to_string(),
            facility: "court-1".to_string(),
            date: NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_sweep_is_idempotent() {
        let service = BookingService::new(Arc::new(LocalRepository::new()));
        let admit_now = NaiveDate::from_ymd_opt(2030, 6, 1)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(7, 0, 0).unwrap());
        service.reserve_at(yesterday_booking(), admit_now).await.unwrap();

        let sweep_now = NaiveDate::from_ymd_opt(2030, 6, 2)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(service.remove_expired_at(sweep_now).await.unwrap(), 1);
        // Second pass with no intervening inserts removes nothing.
        assert_eq!(service.remove_expired_at(sweep_now).await.unwrap(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_sweeper_ticks_and_shuts_down() {
        let service = BookingService::new(Arc::new(LocalRepository::new()));
        let sweeper = ExpirySweeper::spawn(service, Duration::from_secs(60));
        assert!(sweeper.is_running());

        // A few periods elapse without the task panicking.
        tokio::time::sleep(Duration::from_secs(181)).await;
        assert!(sweeper.is_running());

        sweeper.shutdown();
    }
}
