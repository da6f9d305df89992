// Events domain - listing creation, lookup, and the similar-events query

pub mod errors;
pub mod models;
pub mod operations;
pub mod validate;

pub use errors::EventError;
pub use models::{Event, EventMode};
pub use operations::{ImageUpload, MAX_IMAGE_BYTES, SIMILAR_EVENTS_LIMIT};
pub use validate::{prepare_event, CanonicalEvent, EventDraft};
