//! Data Transfer Objects for the HTTP API.
//!
//! Reservation rows serialize with their wire names directly (see
//! [`crate::api::Reservation`]), so the list response reuses the domain
//! type. The create request mirrors the frontend body: every field is a
//! string, parsed into a typed proposal before admission.

use serde::{Deserialize, Serialize};

use crate::api::{Reservation, ReservationRequest};
use crate::models::time::{parse_date, parse_time};

/// Request body for `POST /reservar`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    pub nome: String,
    pub instalacao: String,
    pub data: String,
    pub hora: String,
    #[serde(rename = "horaFinal")]
    pub hora_final: String,
}

impl CreateReservationRequest {
    /// Parse the string fields into a typed proposal.
    ///
    /// Returns `None` when the date or either time does not parse; callers
    /// report that as a normal rejection, not a protocol error.
    pub fn into_proposal(self) -> Option<ReservationRequest> {
        Some(ReservationRequest {
            requester_name: self.nome,
            facility: self.instalacao,
            date: parse_date(&self.data)?,
            start_time: parse_time(&self.hora)?,
            end_time: parse_time(&self.hora_final)?,
        })
    }
}

/// Response body for `POST /reservar`.
///
/// Always paired with HTTP 200; rejections carry a message, admissions
/// carry none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl BookingResponse {
    pub fn admitted() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// Response body for `GET /api/reservas`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationListResponse {
    pub reservas: Vec<Reservation>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Store connection status
    pub database: String,
}
