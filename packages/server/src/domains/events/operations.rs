// Domain functions for event operations
//
// Business flows for creating and reading events, separated from the
// HTTP handlers. Storage constraint violations are mapped back to the
// same errors the optimistic checks would report.

use sqlx::PgPool;

use crate::kernel::BaseImageStore;

use super::errors::EventError;
use super::models::Event;
use super::validate::{prepare_event, EventDraft};

/// How many similar events a detail page shows.
pub const SIMILAR_EVENTS_LIMIT: i64 = 3;

/// Upload cap for event images.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// An image payload received with a creation request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Create a new event: upload the image, validate and normalize the
/// fields, then insert.
///
/// The image is uploaded before field validation runs, since the hosted
/// URL is itself one of the validated fields. A failed upload aborts the
/// whole operation; nothing is persisted.
pub async fn create_event(
    mut draft: EventDraft,
    image: ImageUpload,
    image_store: &dyn BaseImageStore,
    pool: &PgPool,
) -> Result<Event, EventError> {
    if image.bytes.is_empty() {
        return Err(EventError::MissingField("image"));
    }
    if image.bytes.len() > MAX_IMAGE_BYTES {
        return Err(EventError::ImageTooLarge(image.bytes.len()));
    }

    let image_url = image_store
        .upload(image.bytes, &image.content_type)
        .await
        .map_err(EventError::ImageUpload)?;
    draft.image = image_url;

    let canonical = prepare_event(draft)?;

    match Event::create(&canonical, pool).await {
        Ok(event) => {
            tracing::info!(event_id = %event.id, slug = %event.slug, "Event created");
            Ok(event)
        }
        // The unique index on slug is the authoritative check; a race
        // between two writers resolves here.
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Err(EventError::DuplicateSlug(canonical.slug))
        }
        Err(e) => Err(e.into()),
    }
}

/// All events, most recently created first.
pub async fn list_events(pool: &PgPool) -> Result<Vec<Event>, EventError> {
    Ok(Event::find_all(pool).await?)
}

/// Look up an event by slug, tolerating surrounding whitespace and case.
pub async fn get_event_by_slug(slug: &str, pool: &PgPool) -> Result<Option<Event>, EventError> {
    let sanitized = slug.trim().to_lowercase();
    Ok(Event::find_by_slug(&sanitized, pool).await?)
}

/// Events sharing at least one tag with the event at `slug`, newest
/// first, capped at [`SIMILAR_EVENTS_LIMIT`]. An unknown slug yields an
/// empty list; "no seed" is not exceptional.
pub async fn find_similar_events(slug: &str, pool: &PgPool) -> Result<Vec<Event>, EventError> {
    let seed = match get_event_by_slug(slug, pool).await? {
        Some(event) => event,
        None => return Ok(vec![]),
    };

    Ok(Event::find_similar(&seed, SIMILAR_EVENTS_LIMIT, pool).await?)
}
