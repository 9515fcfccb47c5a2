//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use checkout_razorpay::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Application configuration.
///
/// Loaded once at startup and never mutated. Missing processor credentials
/// are fatal: serving with broken configuration would only produce gateway
/// errors on every request.
pub struct Config {
    pub port: u16,
    pub razorpay_key_id: String,
    pub razorpay_key_secret: String,
    pub razorpay_base_url: String,
    pub processor_timeout: Duration,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let razorpay_key_id = env::var("RAZORPAY_KEY_ID")
            .map_err(|_| anyhow::anyhow!("RAZORPAY_KEY_ID environment variable is required"))?;

        let razorpay_key_secret = env::var("RAZORPAY_KEY_SECRET")
            .map_err(|_| anyhow::anyhow!("RAZORPAY_KEY_SECRET environment variable is required"))?;

        let razorpay_base_url =
            env::var("RAZORPAY_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let processor_timeout = match env::var("PROCESSOR_TIMEOUT_SECS") {
            Ok(secs) => Duration::from_secs(secs.parse()?),
            Err(_) => DEFAULT_TIMEOUT,
        };

        // Comma-separated origin list; empty or unset means any origin.
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            port,
            razorpay_key_id,
            razorpay_key_secret,
            razorpay_base_url,
            processor_timeout,
            allowed_origins,
        })
    }
}
