use thiserror::Error;

use crate::common::EventId;

/// Errors surfaced by the booking admission flow.
///
/// `AlreadyBooked` is a user-facing conflict, not a silent dedup - it is
/// reported whether the duplicate was caught by the pre-check or by the
/// storage unique index.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid email address: '{0}'")]
    InvalidEmail(String),

    #[error("You have already booked this event")]
    AlreadyBooked,

    #[error("Referenced event does not exist: {0}")]
    UnknownEvent(EventId),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
