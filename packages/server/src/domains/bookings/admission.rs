// Booking admission: the check-then-write sequence guaranteeing at most
// one booking per (event, email), with a best-effort confirmation email.

use lazy_static::lazy_static;
use regex::Regex;
use sqlx::PgPool;

use crate::common::EventId;
use crate::domains::events::models::Event;
use crate::kernel::{email_template, BaseMailer};

use super::errors::BookingError;
use super::models::Booking;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"(?i)^[\w.-]+@([\w-]+\.)+[\w-]{2,}$").unwrap();
}

/// Result of a successful admission.
///
/// `email_sent` is advisory: booking durability is the primary guarantee,
/// and a failed confirmation email never rolls the booking back.
#[derive(Debug, Clone)]
pub struct BookingOutcome {
    pub booking: Booking,
    pub email_sent: bool,
}

/// Validate an address against the standard pattern.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Book a seat on an event.
///
/// Admission order: email format, duplicate check, event existence,
/// insert. The (event_id, email) unique index is the authoritative
/// tie-breaker for concurrent requests; its violation reports the same
/// `AlreadyBooked` as the pre-check.
pub async fn create_booking(
    event_id: EventId,
    email: &str,
    mailer: &dyn BaseMailer,
    pool: &PgPool,
) -> Result<BookingOutcome, BookingError> {
    let email = email.trim();
    if !is_valid_email(email) {
        return Err(BookingError::InvalidEmail(email.to_string()));
    }

    if Booking::find_by_event_and_email(event_id, email, pool)
        .await?
        .is_some()
    {
        return Err(BookingError::AlreadyBooked);
    }

    let event = Event::find_by_id(event_id, pool)
        .await?
        .ok_or(BookingError::UnknownEvent(event_id))?;

    let booking = match Booking::create(event_id, email, pool).await {
        Ok(booking) => booking,
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            return Err(BookingError::AlreadyBooked);
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(booking_id = %booking.id, event_id = %event_id, "Booking created");

    let subject = format!("Booking Confirmed: {}", event.title);
    let html = email_template::booking_confirmation(&event);
    let email_sent = match mailer.send(email, &subject, &html).await {
        Ok(()) => true,
        Err(e) => {
            // Booking stands even when the confirmation cannot be sent
            tracing::warn!(booking_id = %booking.id, error = %e, "Failed to send confirmation email");
            false
        }
    };

    Ok(BookingOutcome {
        booking,
        email_sent,
    })
}
