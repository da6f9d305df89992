use thiserror::Error;

/// Errors surfaced by event validation and creation.
///
/// Validation variants are caller-correctable and name the offending
/// field or value. `DuplicateSlug` is a conflict, reported whether it was
/// caught by the optimistic path or by the storage unique index.
#[derive(Error, Debug)]
pub enum EventError {
    #[error("{0} is required and cannot be empty")]
    MissingField(&'static str),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Time must be in HH:MM 24-hour format, got '{0}'")]
    InvalidTime(String),

    #[error("Mode must be one of online, offline, hybrid, got '{0}'")]
    InvalidMode(String),

    #[error("An event with slug '{0}' already exists")]
    DuplicateSlug(String),

    #[error("Image file is too large ({0} bytes). Maximum size is 10MB")]
    ImageTooLarge(usize),

    #[error("Image upload failed: {0}")]
    ImageUpload(anyhow::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
