use axum::extract::{Extension, Multipart, Path};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::domains::events::{operations, Event, EventDraft, ImageUpload};
use crate::kernel::ServerDeps;
use crate::server::error::ApiError;

#[derive(Serialize)]
pub struct EventsListResponse {
    pub message: String,
    pub events: Vec<Event>,
}

#[derive(Serialize)]
pub struct EventResponse {
    pub message: String,
    pub event: Event,
}

/// GET /api/events - all events, newest first
pub async fn list_events_handler(
    Extension(deps): Extension<ServerDeps>,
) -> Result<Json<EventsListResponse>, ApiError> {
    let events = operations::list_events(&deps.db_pool).await?;
    Ok(Json(EventsListResponse {
        message: "Events fetched successfully".to_string(),
        events,
    }))
}

/// GET /api/events/{slug} - event detail
pub async fn get_event_handler(
    Path(slug): Path<String>,
    Extension(deps): Extension<ServerDeps>,
) -> Result<Json<EventResponse>, ApiError> {
    if slug.trim().is_empty() {
        return Err(ApiError::bad_request(
            "invalid_slug",
            "Invalid or missing slug",
        ));
    }

    match operations::get_event_by_slug(&slug, &deps.db_pool).await? {
        Some(event) => Ok(Json(EventResponse {
            message: "Event fetched successfully".to_string(),
            event,
        })),
        None => Err(ApiError::not_found(
            "unknown_slug",
            format!("No event found for slug '{}'", slug.trim()),
        )),
    }
}

/// GET /api/events/{slug}/similar - events sharing at least one tag
pub async fn similar_events_handler(
    Path(slug): Path<String>,
    Extension(deps): Extension<ServerDeps>,
) -> Result<Json<EventsListResponse>, ApiError> {
    let events = operations::find_similar_events(&slug, &deps.db_pool).await?;
    Ok(Json(EventsListResponse {
        message: "Similar events fetched successfully".to_string(),
        events,
    }))
}

/// POST /api/events - create an event from a multipart form.
///
/// Scalar fields arrive as text parts; `tags` and `agenda` as
/// JSON-encoded string arrays; the image as a file part.
pub async fn create_event_handler(
    Extension(deps): Extension<ServerDeps>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<EventResponse>), ApiError> {
    let mut draft = EventDraft::default();
    let mut image: Option<ImageUpload> = None;

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(malformed)?;
                image = Some(ImageUpload {
                    bytes: bytes.to_vec(),
                    content_type,
                });
            }
            "tags" => {
                let text = field.text().await.map_err(malformed)?;
                draft.tags = parse_string_array(&text, "tags")?;
            }
            "agenda" => {
                let text = field.text().await.map_err(malformed)?;
                draft.agenda = parse_string_array(&text, "agenda")?;
            }
            _ => {
                let text = field.text().await.map_err(malformed)?;
                match name.as_str() {
                    "title" => draft.title = text,
                    "slug" => draft.slug = text,
                    "description" => draft.description = text,
                    "overview" => draft.overview = text,
                    "venue" => draft.venue = text,
                    "location" => draft.location = text,
                    "date" => draft.date = text,
                    "time" => draft.time = text,
                    "mode" => draft.mode = text,
                    "audience" => draft.audience = text,
                    "organizer" => draft.organizer = text,
                    // Unknown parts are ignored, matching form tolerance
                    _ => {}
                }
            }
        }
    }

    let image = image
        .ok_or_else(|| ApiError::bad_request("missing_field", "Image file is required"))?;

    let event =
        operations::create_event(draft, image, deps.image_store.as_ref(), &deps.db_pool).await?;

    Ok((
        StatusCode::CREATED,
        Json(EventResponse {
            message: "Event created successfully".to_string(),
            event,
        }),
    ))
}

fn malformed(e: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::bad_request("invalid_payload", format!("Malformed multipart payload: {}", e))
}

fn parse_string_array(text: &str, name: &'static str) -> Result<Vec<String>, ApiError> {
    serde_json::from_str::<Vec<String>>(text).map_err(|_| {
        ApiError::bad_request(
            "invalid_payload",
            format!("{} must be a JSON array of strings", name),
        )
    })
}
