//! Public API surface for the booking backend.
//!
//! This file consolidates the domain types shared by the database layer,
//! the service layer and the HTTP API. All types derive
//! Serialize/Deserialize for JSON serialization, using the wire field names
//! the frontend already speaks (`nome`, `instalacao`, `data`, `hora`,
//! `horaFinal`).

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::time::serde_hhmm;

/// Reservation identifier (store primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ReservationId(pub i64);

impl ReservationId {
    pub fn new(value: i64) -> Self {
        ReservationId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// A persisted reservation row.
///
/// Immutable once created; removed by the expiry sweeper when its
/// `(date, end_time)` instant is strictly in the past.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    /// Client-supplied identity token; not validated.
    #[serde(rename = "nome")]
    pub requester_name: String,
    #[serde(rename = "instalacao")]
    pub facility: String,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "hora", with = "serde_hhmm")]
    pub start_time: NaiveTime,
    #[serde(rename = "horaFinal", with = "serde_hhmm")]
    pub end_time: NaiveTime,
}

/// Insert event handed to the store; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub requester_name: String,
    pub facility: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl NewReservation {
    /// Attach a store-assigned id, producing the persisted row.
    pub fn into_reservation(self, id: ReservationId) -> Reservation {
        Reservation {
            id,
            requester_name: self.requester_name,
            facility: self.facility,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

/// A typed admission proposal.
///
/// Same shape as [`NewReservation`]; parsed from the all-strings HTTP body
/// before the admission controller sees it. `start_time < end_time` is
/// assumed but not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    pub requester_name: String,
    pub facility: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl From<ReservationRequest> for NewReservation {
    fn from(req: ReservationRequest) -> Self {
        NewReservation {
            requester_name: req.requester_name,
            facility: req.facility,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
        }
    }
}
