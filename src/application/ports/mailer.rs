// src/application/ports/mailer.rs
use crate::domain::actor::EmailAddress;
use async_trait::async_trait;
use thiserror::Error;

/// Ephemeral per-send value object. Composed from a template, handed to the
/// delivery provider, never persisted in this form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: EmailAddress,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail transport error: {0}")]
    Transport(String),
    #[error("mail provider rejected send ({status}): {body}")]
    Provider { status: u16, body: String },
}

/// One outbound provider call per invocation. No batching, no backoff,
/// no idempotency key; retrying a send risks a duplicate email.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError>;
}
