//! # Reserva Rust Backend
//!
//! Booking API for shared facilities (rooms, courts, labs).
//!
//! Clients request a reservation for a named facility, date and time range;
//! the server admits or rejects it based on lead-time and conflict rules,
//! persists admitted reservations, and periodically purges expired ones.
//! The backend exposes a REST API via Axum.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Domain types and identifiers shared across layers
//! - [`models`]: Date/time parsing and wire-format helpers
//! - [`db`]: Repository pattern and persistence layer
//! - [`services`]: Admission logic, booking orchestration, expiry sweeper
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Admission rules
//!
//! A proposal is admitted only if, in order:
//!
//! 1. its start instant is at least two hours away,
//! 2. the requester holds no other reservation dated today or later,
//! 3. its time range does not conflict with an existing reservation on the
//!    same facility and date.
//!
//! Rejections are normal business outcomes, reported to the client as
//! `{"success": false, "message": ...}` with HTTP 200.

pub mod api;

pub mod db;
pub mod models;

pub mod services;

pub mod http;
