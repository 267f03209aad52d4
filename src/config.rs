// src/config.rs
use std::{env, path::PathBuf, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    resend_api_key: String,
    resend_base_url: String,
    smtp_from: String,
    frontend_url: String,
    backend_url: String,
    uploads_dir: PathBuf,
    dispatch_interval: Duration,
    outbox_batch_size: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://lawnation.db".into()
}

fn default_resend_base_url() -> String {
    "https://api.resend.com/".into()
}

fn default_smtp_from() -> String {
    "\"Law Nation\" <no-reply@lawnation.in>".into()
}

fn default_frontend_url() -> String {
    "http://localhost:3000".into()
}

fn default_backend_url() -> String {
    "http://localhost:4000".into()
}

fn default_uploads_dir() -> PathBuf {
    env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("uploads")
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates required keys. A missing provider
    /// credential is fatal here, before any send is attempted.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let resend_api_key =
            env::var("RESEND_API_KEY").map_err(|_| ConfigError::Missing("RESEND_API_KEY"))?;
        if resend_api_key.trim().is_empty() {
            return Err(ConfigError::Invalid("RESEND_API_KEY is empty".into()));
        }

        let resend_base_url =
            env::var("RESEND_BASE_URL").unwrap_or_else(|_| default_resend_base_url());
        url::Url::parse(&resend_base_url)
            .map_err(|err| ConfigError::Invalid(format!("RESEND_BASE_URL: {err}")))?;

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let smtp_from = env::var("SMTP_FROM").unwrap_or_else(|_| default_smtp_from());
        let frontend_url = env::var("FRONTEND_URL").unwrap_or_else(|_| default_frontend_url());
        let backend_url = env::var("BACKEND_URL").unwrap_or_else(|_| default_backend_url());

        let uploads_dir = env::var("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_uploads_dir());

        let dispatch_interval_secs = env::var("DISPATCH_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(5);
        if dispatch_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "DISPATCH_INTERVAL_SECS must be at least 1".into(),
            ));
        }

        let outbox_batch_size = env::var("OUTBOX_BATCH_SIZE")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(25);

        Ok(Self {
            database_url,
            resend_api_key,
            resend_base_url,
            smtp_from,
            frontend_url,
            backend_url,
            uploads_dir,
            dispatch_interval: Duration::from_secs(dispatch_interval_secs),
            outbox_batch_size,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn resend_api_key(&self) -> &str {
        &self.resend_api_key
    }

    pub fn resend_base_url(&self) -> &str {
        &self.resend_base_url
    }

    /// Sender identity passed through to the provider unchanged.
    pub fn smtp_from(&self) -> &str {
        &self.smtp_from
    }

    pub fn frontend_url(&self) -> &str {
        &self.frontend_url
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn uploads_dir(&self) -> &PathBuf {
        &self.uploads_dir
    }

    pub fn dispatch_interval(&self) -> Duration {
        self.dispatch_interval
    }

    pub fn outbox_batch_size(&self) -> u32 {
        self.outbox_batch_size
    }
}
