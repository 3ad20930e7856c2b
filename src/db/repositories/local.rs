//! In-memory repository implementation.
//!
//! Holds reservations for the process lifetime only; everything is lost on
//! restart. Used as the reference backend and for unit testing.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use parking_lot::RwLock;

use crate::api::{NewReservation, Reservation, ReservationId};
use crate::db::repository::{RepositoryResult, ReservationRepository};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    rows: Vec<Reservation>,
}

/// In-memory reservation store backed by a `RwLock`ed vector.
///
/// Ids are assigned monotonically starting at 1, mirroring an
/// autoincrement primary key.
#[derive(Debug, Default)]
pub struct LocalRepository {
    inner: RwLock<Inner>,
}

impl LocalRepository {
    /// Create an empty in-memory repository.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                rows: Vec::new(),
            }),
        }
    }

    /// Number of stored rows; test and observability helper.
    pub fn len(&self) -> usize {
        self.inner.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().rows.is_empty()
    }
}

#[async_trait]
impl ReservationRepository for LocalRepository {
    async fn insert(&self, new: NewReservation) -> RepositoryResult<ReservationId> {
        let mut inner = self.inner.write();
        let id = ReservationId::new(inner.next_id);
        inner.next_id += 1;
        inner.rows.push(new.into_reservation(id));
        Ok(id)
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Reservation>> {
        Ok(self.inner.read().rows.clone())
    }

    async fn delete_expired(&self, date: NaiveDate, time: NaiveTime) -> RepositoryResult<usize> {
        let mut inner = self.inner.write();
        let before = inner.rows.len();
        inner
            .rows
            .retain(|r| !(r.date < date || (r.date == date && r.end_time <= time)));
        Ok(before - inner.rows.len())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
