use axum::extract::Extension;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::common::EventId;
use crate::domains::bookings::{admission, Booking};
use crate::kernel::ServerDeps;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub event_id: String,
    pub email: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingResponse {
    pub success: bool,
    pub email_sent: bool,
    pub booking: Booking,
}

/// POST /api/bookings - book a seat on an event.
///
/// A failed confirmation email does not fail the request; it is reported
/// via `emailSent: false`.
pub async fn create_booking_handler(
    Extension(deps): Extension<ServerDeps>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<CreateBookingResponse>), ApiError> {
    // An unparsable id cannot reference an event
    let event_id = EventId::parse(&request.event_id).map_err(|_| {
        ApiError::not_found(
            "unknown_event",
            format!("Referenced event does not exist: {}", request.event_id),
        )
    })?;

    let outcome = admission::create_booking(
        event_id,
        &request.email,
        deps.mailer.as_ref(),
        &deps.db_pool,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            success: true,
            email_sent: outcome.email_sent,
            booking: outcome.booking,
        }),
    ))
}
