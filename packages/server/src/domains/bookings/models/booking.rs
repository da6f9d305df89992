use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{BookingId, EventId};

/// Booking - a reserved seat, one per (event, email)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub event_id: EventId,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Booking {
    /// Find an existing booking for this event and email
    pub async fn find_by_event_and_email(
        event_id: EventId,
        email: &str,
        pool: &PgPool,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE event_id = $1 AND email = $2",
        )
        .bind(event_id)
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// Insert a new booking.
    ///
    /// The (event_id, email) unique index fires here on collision;
    /// callers map that violation to their already-booked error.
    pub async fn create(
        event_id: EventId,
        email: &str,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (id, event_id, email)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(BookingId::new())
        .bind(event_id)
        .bind(email)
        .fetch_one(pool)
        .await
    }

    /// Count bookings for an event
    pub async fn count_for_event(event_id: EventId, pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookings WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(pool)
            .await
    }
}
