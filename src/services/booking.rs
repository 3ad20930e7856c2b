//! Booking orchestration: the single-writer section around admission.
//!
//! A reservation's admission check and its subsequent insert must observe a
//! consistent snapshot; otherwise a concurrent request could slip a
//! conflicting reservation in between check and write. `BookingService`
//! owns a mutex held across the whole snapshot -> evaluate -> insert
//! sequence, and across the sweeper's delete. Reads for display take no
//! lock; stale reads are acceptable.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use tokio::sync::Mutex;

use crate::api::{Reservation, ReservationRequest};
use crate::db::repository::{RepositoryResult, ReservationRepository};
use crate::db::services as db_services;
use crate::services::admission::{self, Decision};

/// Booking service with an injected store.
#[derive(Clone)]
pub struct BookingService {
    repository: Arc<dyn ReservationRepository>,
    admission_lock: Arc<Mutex<()>>,
}

impl BookingService {
    /// Create a booking service over the given repository.
    pub fn new(repository: Arc<dyn ReservationRepository>) -> Self {
        Self {
            repository,
            admission_lock: Arc::new(Mutex::new(())),
        }
    }

    /// The underlying repository (for health checks and display reads).
    pub fn repository(&self) -> &Arc<dyn ReservationRepository> {
        &self.repository
    }

    /// Evaluate a proposal against the current wall clock and persist it
    /// when admitted.
    pub async fn reserve(&self, proposal: ReservationRequest) -> RepositoryResult<Decision> {
        self.reserve_at(proposal, Local::now().naive_local()).await
    }

    /// Evaluate a proposal at an explicit instant; the clock is a parameter
    /// so tests control it.
    ///
    /// Holds the admission lock across snapshot, evaluation and insert.
    pub async fn reserve_at(
        &self,
        proposal: ReservationRequest,
        now: NaiveDateTime,
    ) -> RepositoryResult<Decision> {
        let _guard = self.admission_lock.lock().await;

        let existing = db_services::list_reservations(self.repository.as_ref()).await?;
        let decision = admission::evaluate(&proposal, now, &existing);
        if decision == Decision::Admit {
            db_services::store_reservation(self.repository.as_ref(), proposal.into()).await?;
        }
        Ok(decision)
    }

    /// Snapshot of all reservations, for display.
    pub async fn list(&self) -> RepositoryResult<Vec<Reservation>> {
        db_services::list_reservations(self.repository.as_ref()).await
    }

    /// Delete reservations whose window has elapsed, per the current wall
    /// clock.
    pub async fn remove_expired(&self) -> RepositoryResult<usize> {
        self.remove_expired_at(Local::now().naive_local()).await
    }

    /// Delete reservations expired as of an explicit instant.
    ///
    /// Takes the admission lock so the sweep cannot interleave with an
    /// in-flight evaluate-then-insert.
    pub async fn remove_expired_at(&self, now: NaiveDateTime) -> RepositoryResult<usize> {
        let _guard = self.admission_lock.lock().await;
        db_services::remove_expired(self.repository.as_ref(), now.date(), now.time()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::LocalRepository;
    use crate::services::admission::RejectReason;
    use chrono::{NaiveDate, NaiveTime};

    fn service() -> BookingService {
        BookingService::new(Arc::new(LocalRepository::new()))
    }

    fn proposal(name: &str, day: u32, start_h: u32) -> ReservationRequest {
        ReservationRequest {
            requester_name: name.to_string(),
            facility: "court-1".to_string(),
            date: NaiveDate::from_ymd_opt(2030, 6, day).unwrap(),
            start_time: NaiveTime::from_hms_opt(start_h, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(start_h + 1, 0, 0).unwrap(),
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 6, 1)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(8, 0, 0).unwrap())
    }

    #[tokio::test]
    async fn test_admitted_proposal_is_persisted() {
        let svc = service();
        let decision = svc.reserve_at(proposal("Alice", 2, 10), now()).await.unwrap();
        assert_eq!(decision, Decision::Admit);

        let rows = svc.list().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].requester_name, "Alice");
        assert_eq!(rows[0].id.value(), 1);
    }

    #[tokio::test]
    async fn test_rejected_proposal_is_not_persisted() {
        let svc = service();
        svc.reserve_at(proposal("Alice", 2, 10), now()).await.unwrap();

        let decision = svc.reserve_at(proposal("Bob", 2, 10), now()).await.unwrap();
        assert_eq!(decision, Decision::Reject(RejectReason::TimeConflict));
        assert_eq!(svc.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_identical_proposals_admit_exactly_one() {
        let svc = service();

        let mut handles = vec![];
        for i in 0..8 {
            let svc = svc.clone();
            handles.push(tokio::spawn(async move {
                svc.reserve_at(proposal(&format!("user-{}", i), 2, 10), now())
                    .await
                    .unwrap()
            }));
        }

        let mut admitted = 0;
        for handle in handles {
            if handle.await.unwrap() == Decision::Admit {
                admitted += 1;
            }
        }
        assert_eq!(admitted, 1);
        assert_eq!(svc.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_expired_at() {
        let svc = service();
        svc.reserve_at(proposal("Alice", 2, 10), now()).await.unwrap();

        let later = NaiveDate::from_ymd_opt(2030, 6, 3)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(svc.remove_expired_at(later).await.unwrap(), 1);
        assert!(svc.list().await.unwrap().is_empty());
    }
}
