//! Repository abstractions: trait definition and error types.

pub mod error;
pub mod reservation;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use reservation::ReservationRepository;
