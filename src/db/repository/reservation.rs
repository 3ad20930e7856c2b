//! Reservation repository trait: the abstract persistent table.
//!
//! The store is the durable source of truth for reservations. Rows are
//! immutable once inserted; there is no update operation. Admission checks
//! work on a full snapshot fetched through [`list_all`], so the trait stays
//! small enough to back with any storage engine.
//!
//! [`list_all`]: ReservationRepository::list_all

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use super::error::RepositoryResult;
use crate::api::{NewReservation, Reservation, ReservationId};

/// Repository trait for reservation persistence.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert a reservation, assigning the next integer id.
    ///
    /// # Arguments
    /// * `new` - The reservation to persist (id not yet assigned)
    ///
    /// # Returns
    /// * `Ok(ReservationId)` - The id assigned by the store
    /// * `Err(RepositoryError)` - On a persistence fault
    async fn insert(&self, new: NewReservation) -> RepositoryResult<ReservationId>;

    /// Fetch all reservations, in insertion order.
    ///
    /// # Returns
    /// * `Ok(Vec<Reservation>)` - Snapshot of every stored row
    /// * `Err(RepositoryError)` - On a persistence fault
    async fn list_all(&self) -> RepositoryResult<Vec<Reservation>>;

    /// Delete reservations whose time window has fully elapsed.
    ///
    /// Removes every row with `row.date < date`, or `row.date == date` and
    /// `row.end_time <= time`.
    ///
    /// # Arguments
    /// * `date` - Current calendar date
    /// * `time` - Current time-of-day
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of rows removed
    /// * `Err(RepositoryError)` - On a persistence fault
    async fn delete_expired(&self, date: NaiveDate, time: NaiveTime) -> RepositoryResult<usize>;

    /// Check that the backing store is reachable.
    ///
    /// # Returns
    /// * `Ok(bool)` - True if the store answers
    /// * `Err(RepositoryError)` - On a persistence fault
    async fn health_check(&self) -> RepositoryResult<bool>;
}
