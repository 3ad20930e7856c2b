//! High-level store operations shared by the HTTP layer and the service
//! layer. All functions work against any `ReservationRepository`
//! implementation.

use chrono::{NaiveDate, NaiveTime};

use super::repository::{RepositoryResult, ReservationRepository};
use crate::api::{NewReservation, Reservation, ReservationId};

/// Fetch every stored reservation.
pub async fn list_reservations(
    repo: &dyn ReservationRepository,
) -> RepositoryResult<Vec<Reservation>> {
    repo.list_all().await
}

/// Persist an admitted reservation and return the assigned id.
pub async fn store_reservation(
    repo: &dyn ReservationRepository,
    new: NewReservation,
) -> RepositoryResult<ReservationId> {
    repo.insert(new).await
}

/// Remove reservations whose window has fully elapsed; returns the count
/// removed.
pub async fn remove_expired(
    repo: &dyn ReservationRepository,
    date: NaiveDate,
    time: NaiveTime,
) -> RepositoryResult<usize> {
    repo.delete_expired(date, time).await
}

/// Probe store connectivity.
pub async fn health_check(repo: &dyn ReservationRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
