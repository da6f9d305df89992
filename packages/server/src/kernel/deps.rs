//! Server dependencies for domain operations (using traits for testability)
//!
//! The central dependency container, constructed once in `main` and
//! injected into handlers. External services use trait abstractions so
//! domain flows can be tested with fakes, no network required.

use sqlx::PgPool;
use std::sync::Arc;

use super::traits::{BaseImageStore, BaseMailer};

/// Server dependencies accessible to domain operations
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    pub image_store: Arc<dyn BaseImageStore>,
    pub mailer: Arc<dyn BaseMailer>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        db_pool: PgPool,
        image_store: Arc<dyn BaseImageStore>,
        mailer: Arc<dyn BaseMailer>,
    ) -> Self {
        Self {
            db_pool,
            image_store,
            mailer,
        }
    }
}
