//! Application state for the HTTP server.

use crate::services::BookingService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Booking service owning the store and the admission lock
    pub booking: BookingService,
}

impl AppState {
    /// Create a new application state with the given booking service.
    pub fn new(booking: BookingService) -> Self {
        Self { booking }
    }
}
