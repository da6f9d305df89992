use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cloudinary_cloud_name: String,
    pub cloudinary_api_key: String,
    pub cloudinary_api_secret: String,
    pub resend_api_key: Option<String>,
    pub email_from: String,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            cloudinary_cloud_name: env::var("CLOUDINARY_CLOUD_NAME")
                .context("CLOUDINARY_CLOUD_NAME must be set")?,
            cloudinary_api_key: env::var("CLOUDINARY_API_KEY")
                .context("CLOUDINARY_API_KEY must be set")?,
            cloudinary_api_secret: env::var("CLOUDINARY_API_SECRET")
                .context("CLOUDINARY_API_SECRET must be set")?,
            // Optional: without it the server runs with a no-op mailer and
            // bookings report emailSent: false
            resend_api_key: env::var("RESEND_API_KEY").ok(),
            email_from: env::var("EMAIL_FROM")
                .unwrap_or_else(|_| "DevEvent <noreply@devevent.dev>".to_string()),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok(),
        })
    }
}
