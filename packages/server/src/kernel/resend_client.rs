use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;

use super::traits::BaseMailer;

/// Resend API client for transactional email
pub struct ResendMailer {
    api_key: String,
    from: String,
    client: reqwest::Client,
}

/// Resend send-email request
#[derive(Debug, Serialize)]
struct ResendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

impl ResendMailer {
    /// Create a new Resend client
    pub fn new(api_key: String, from: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            api_key,
            from,
            client,
        })
    }
}

#[async_trait]
impl BaseMailer for ResendMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<()> {
        let request = ResendRequest {
            from: &self.from,
            to: [to],
            subject,
            html,
        };

        let response = self
            .client
            .post("https://api.resend.com/emails")
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send Resend request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Resend API error {}: {}", status, body);
        }

        Ok(())
    }
}

/// No-op mailer for when no API key is configured.
///
/// Reports failure so callers degrade the same way they would on a
/// provider outage (bookings still succeed, `emailSent: false`).
pub struct NoopMailer;

#[async_trait]
impl BaseMailer for NoopMailer {
    async fn send(&self, to: &str, _subject: &str, _html: &str) -> Result<()> {
        tracing::warn!(to = %to, "NoopMailer: RESEND_API_KEY not configured, email will not be sent");
        anyhow::bail!("Email service not configured")
    }
}
