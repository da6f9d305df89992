// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "create event") should be domain functions that
// use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseImageStore)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Image Store Trait (Infrastructure - hosted image uploads)
// =============================================================================

#[async_trait]
pub trait BaseImageStore: Send + Sync {
    /// Upload an image payload and return its publicly resolvable URL.
    /// Callers enforce the size cap before invoking this.
    async fn upload(&self, bytes: Vec<u8>, content_type: &str) -> Result<String>;
}

// =============================================================================
// Mailer Trait (Infrastructure - transactional email)
// =============================================================================

#[async_trait]
pub trait BaseMailer: Send + Sync {
    /// Send an HTML email to a single recipient.
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<()>;
}
