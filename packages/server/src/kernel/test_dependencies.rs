// Mock implementations for testing
//
// Provides mock collaborators that can be injected into domain flows,
// capturing calls and optionally failing on demand.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::traits::{BaseImageStore, BaseMailer};

// =============================================================================
// Mock Image Store
// =============================================================================

/// Arguments captured from an upload call
#[derive(Debug, Clone)]
pub struct UploadCallArgs {
    pub size: usize,
    pub content_type: String,
}

pub struct MockImageStore {
    url: String,
    fail: bool,
    upload_calls: Arc<Mutex<Vec<UploadCallArgs>>>,
}

impl MockImageStore {
    pub fn new() -> Self {
        Self {
            url: "https://images.example.com/mock.png".to_string(),
            fail: false,
            upload_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Return this URL from uploads instead of the default
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    /// Make every upload fail
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Get all upload calls with their arguments
    pub fn upload_calls(&self) -> Vec<UploadCallArgs> {
        self.upload_calls.lock().unwrap().clone()
    }
}

impl Default for MockImageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseImageStore for MockImageStore {
    async fn upload(&self, bytes: Vec<u8>, content_type: &str) -> Result<String> {
        self.upload_calls.lock().unwrap().push(UploadCallArgs {
            size: bytes.len(),
            content_type: content_type.to_string(),
        });

        if self.fail {
            anyhow::bail!("mock image store failure");
        }
        Ok(self.url.clone())
    }
}

// =============================================================================
// Mock Mailer
// =============================================================================

/// An email captured by the mock mailer
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

pub struct MockMailer {
    fail: bool,
    sent: Arc<Mutex<Vec<SentEmail>>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            fail: false,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make every send fail
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Get all emails that were sent
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Check if an email was sent to a recipient
    pub fn was_sent_to(&self, to: &str) -> bool {
        self.sent.lock().unwrap().iter().any(|e| e.to == to)
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseMailer for MockMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<()> {
        if self.fail {
            anyhow::bail!("mock mailer failure");
        }
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}
