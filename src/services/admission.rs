//! Admission controller: pure decision logic for reservation proposals.
//!
//! Given a proposal, the current time and a snapshot of the store, decides
//! whether the reservation is admitted. Checks run in a fixed order and the
//! first failing check wins. This module never touches the clock or the
//! store; callers supply both.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::api::{Reservation, ReservationRequest};
use crate::models::time::combine;

/// Minimum gap between submission time and the reservation's start instant.
pub const MIN_LEAD_TIME_HOURS: i64 = 2;

/// Outcome of evaluating a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Admit,
    Reject(RejectReason),
}

/// Business-rule rejection reasons.
///
/// These are expected outcomes, not errors; they are reported to the caller
/// as a normal response and never logged as failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    InsufficientLeadTime,
    DuplicateActiveReservation,
    TimeConflict,
}

impl RejectReason {
    /// Human-readable message returned to the client.
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::InsufficientLeadTime => {
                "Reservations must be made at least two hours in advance"
            }
            RejectReason::DuplicateActiveReservation => "User already has an active reservation",
            RejectReason::TimeConflict => "Time slot already reserved",
        }
    }
}

/// Evaluate a proposal against the current store snapshot.
///
/// Checks, in order:
/// 1. lead time: start instant at least [`MIN_LEAD_TIME_HOURS`] away
///    (a start in the past fails here too);
/// 2. single active reservation: the requester holds no reservation dated
///    today or later, on any facility (today comes from `now`);
/// 3. time conflict on the same facility and date.
pub fn evaluate(
    proposal: &ReservationRequest,
    now: NaiveDateTime,
    existing: &[Reservation],
) -> Decision {
    let reserva_time = combine(proposal.date, proposal.start_time);
    if reserva_time - now < Duration::hours(MIN_LEAD_TIME_HOURS) {
        return Decision::Reject(RejectReason::InsufficientLeadTime);
    }

    let today = now.date();
    let active = existing
        .iter()
        .filter(|r| r.requester_name == proposal.requester_name && r.date >= today)
        .count();
    if active >= 1 {
        return Decision::Reject(RejectReason::DuplicateActiveReservation);
    }

    let conflict = existing.iter().any(|r| {
        r.facility == proposal.facility
            && r.date == proposal.date
            && slots_conflict(r.start_time, r.end_time, proposal.start_time, proposal.end_time)
    });
    if conflict {
        return Decision::Reject(RejectReason::TimeConflict);
    }

    Decision::Admit
}

/// Conflict rule for two time slots on the same facility and date.
///
/// Existing slot `[h, hf)`, proposed slot `[hp, hfp)`. The four clauses are
/// kept exactly as the production rule states them, redundancy included:
/// simplifying them would change one boundary. An existing slot ending
/// exactly when the proposal starts conflicts; a proposal ending exactly
/// when an existing slot starts does not.
pub fn slots_conflict(h: NaiveTime, hf: NaiveTime, hp: NaiveTime, hfp: NaiveTime) -> bool {
    (h < hfp && hf > hp)
        || (h < hfp && hf >= hp)
        || (h >= hp && h < hfp)
        || (hf > hp && hf <= hfp)
}
