//! Service layer: admission logic and orchestration.
//!
//! This layer sits between the HTTP handlers and the store. The admission
//! controller is a pure function; `BookingService` adds the single-writer
//! section around it; the sweeper runs it all on a timer.

pub mod admission;

pub mod booking;

pub mod sweeper;

pub use admission::{evaluate, Decision, RejectReason};
pub use booking::BookingService;
pub use sweeper::ExpirySweeper;
