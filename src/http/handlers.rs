//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{extract::State, Json};
use tracing::error;

use super::dto::{BookingResponse, CreateReservationRequest, HealthResponse, ReservationListResponse};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::services::Decision;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Message returned when the store fails during a booking attempt.
pub const STORAGE_ERROR_MESSAGE: &str = "Error accessing the database";

/// Message returned when the date or time fields do not parse.
pub const INVALID_DATETIME_MESSAGE: &str = "Invalid date or time format";

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// accessible.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_status = match db_services::health_check(state.booking.repository().as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    })
}

// =============================================================================
// Reservations
// =============================================================================

/// GET /api/reservas
///
/// List all reservations. A storage fault surfaces as
/// `500 {"error": ...}`.
pub async fn list_reservations(
    State(state): State<AppState>,
) -> HandlerResult<ReservationListResponse> {
    let reservas = state.booking.list().await.map_err(|e| {
        error!(error = %e, "failed to list reservations");
        AppError::from(e)
    })?;

    Ok(Json(ReservationListResponse { reservas }))
}

/// POST /reservar
///
/// Admit or reject a reservation proposal. Every outcome is HTTP 200:
/// business-rule rejections, malformed date/time fields and storage faults
/// all answer `{"success": false, "message": ...}`; admission answers
/// `{"success": true}`.
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(request): Json<CreateReservationRequest>,
) -> Json<BookingResponse> {
    let Some(proposal) = request.into_proposal() else {
        return Json(BookingResponse::rejected(INVALID_DATETIME_MESSAGE));
    };

    match state.booking.reserve(proposal).await {
        Ok(Decision::Admit) => Json(BookingResponse::admitted()),
        Ok(Decision::Reject(reason)) => Json(BookingResponse::rejected(reason.message())),
        Err(e) => {
            error!(error = %e, "storage fault during booking");
            Json(BookingResponse::rejected(STORAGE_ERROR_MESSAGE))
        }
    }
}
