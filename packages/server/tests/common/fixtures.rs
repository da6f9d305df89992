//! Test fixtures for creating test data.
//!
//! These fixtures use the validator and model methods directly. Slugs,
//! tags, and emails should be made unique per test (see [`unique`]) since
//! the database is shared across the test run.

use anyhow::Result;
use server_core::domains::events::{prepare_event, Event, EventDraft};
use sqlx::PgPool;

/// Suffix a prefix with a fresh UUID so concurrent tests never collide.
pub fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
}

/// A complete, valid draft with the given title, slug, and tags.
pub fn event_draft(title: &str, slug: &str, tags: &[&str]) -> EventDraft {
    EventDraft {
        title: title.to_string(),
        slug: slug.to_string(),
        description: "A hands-on developer event".to_string(),
        overview: "Talks, workshops, and hallway conversations".to_string(),
        image: "https://images.example.com/event.png".to_string(),
        venue: "Convention Center".to_string(),
        location: "Berlin, DE".to_string(),
        date: "2026-06-01".to_string(),
        time: "09:00".to_string(),
        mode: "offline".to_string(),
        audience: "Developers".to_string(),
        organizer: "DevEvent".to_string(),
        agenda: vec!["Opening keynote".to_string(), "Workshops".to_string()],
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Validate and insert a test event.
pub async fn create_test_event(
    pool: &PgPool,
    title: &str,
    slug: &str,
    tags: &[&str],
) -> Result<Event> {
    let canonical = prepare_event(event_draft(title, slug, tags))?;
    Ok(Event::create(&canonical, pool).await?)
}
