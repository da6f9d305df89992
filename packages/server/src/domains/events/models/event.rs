use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::EventId;

use super::super::validate::CanonicalEvent;

/// Event - a published listing, immutable after creation
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,

    // Content
    pub title: String,
    pub slug: String,
    pub description: String,
    pub overview: String,
    pub image: String,

    // Where and when
    pub venue: String,
    pub location: String,
    /// Canonical calendar date (serializes as YYYY-MM-DD)
    pub date: NaiveDate,
    /// 24-hour HH:MM
    pub time: String,
    pub mode: String, // 'online', 'offline', 'hybrid'

    // Audience-facing metadata
    pub audience: String,
    pub organizer: String,
    pub agenda: Vec<String>,
    pub tags: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Enums for type-safe edges
// =============================================================================

/// Event mode enum
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventMode {
    Online,
    Offline,
    Hybrid,
}

impl std::fmt::Display for EventMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventMode::Online => write!(f, "online"),
            EventMode::Offline => write!(f, "offline"),
            EventMode::Hybrid => write!(f, "hybrid"),
        }
    }
}

impl std::str::FromStr for EventMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "online" => Ok(EventMode::Online),
            "offline" => Ok(EventMode::Offline),
            "hybrid" => Ok(EventMode::Hybrid),
            _ => Err(anyhow::anyhow!("Invalid event mode: {}", s)),
        }
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Event {
    /// Find event by ID
    pub async fn find_by_id(id: EventId, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find event by slug
    pub async fn find_by_slug(slug: &str, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// All events, most recently created first
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY created_at DESC, id ASC")
            .fetch_all(pool)
            .await
    }

    /// Events sharing at least one tag with the seed, seed excluded.
    ///
    /// Ordered by creation recency; ties break by id ascending so results
    /// are deterministic.
    pub async fn find_similar(
        seed: &Event,
        limit: i64,
        pool: &PgPool,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Event>(
            r#"
            SELECT *
            FROM events
            WHERE id <> $1
              AND tags && $2
            ORDER BY created_at DESC, id ASC
            LIMIT $3
            "#,
        )
        .bind(seed.id)
        .bind(&seed.tags)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Insert a validated event (returns inserted record with timestamps applied).
    ///
    /// The slug unique index fires here on collision; callers map that
    /// violation to their duplicate-slug error.
    pub async fn create(canonical: &CanonicalEvent, pool: &PgPool) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (
                id,
                title,
                slug,
                description,
                overview,
                image,
                venue,
                location,
                date,
                time,
                mode,
                audience,
                organizer,
                agenda,
                tags
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(EventId::new())
        .bind(&canonical.title)
        .bind(&canonical.slug)
        .bind(&canonical.description)
        .bind(&canonical.overview)
        .bind(&canonical.image)
        .bind(&canonical.venue)
        .bind(&canonical.location)
        .bind(canonical.date)
        .bind(&canonical.time)
        .bind(&canonical.mode)
        .bind(&canonical.audience)
        .bind(&canonical.organizer)
        .bind(&canonical.agenda)
        .bind(&canonical.tags)
        .fetch_one(pool)
        .await
    }
}
