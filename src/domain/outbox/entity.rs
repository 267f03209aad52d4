// src/domain/outbox/entity.rs
use crate::domain::actor::EmailAddress;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutboxMessageId(String);

impl OutboxMessageId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "outbox message id cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OutboxMessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Pending,
    Sent,
    Failed,
}

impl DeliveryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Failed => "failed",
        }
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "pending" => Ok(Self::Pending),
            "sent" => Ok(Self::Sent),
            "failed" => Ok(Self::Failed),
            other => Err(DomainError::Validation(format!(
                "unknown delivery status: {other}"
            ))),
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One composed email waiting for (or done with) delivery. Recorded in the
/// same transaction as the state change that caused it.
#[derive(Debug, Clone)]
pub struct OutboxMessage {
    pub id: OutboxMessageId,
    pub article_id: Option<ArticleId>,
    pub recipient: EmailAddress,
    pub subject: String,
    pub html: String,
    pub status: DeliveryStatus,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub sent_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewOutboxMessage {
    pub id: OutboxMessageId,
    pub article_id: Option<ArticleId>,
    pub recipient: EmailAddress,
    pub subject: String,
    pub html: String,
    pub created_at: DateTime<Utc>,
}

impl NewOutboxMessage {
    pub fn new(
        article_id: Option<ArticleId>,
        recipient: EmailAddress,
        subject: impl Into<String>,
        html: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: OutboxMessageId::generate(),
            article_id,
            recipient,
            subject: subject.into(),
            html: html.into(),
            created_at,
        }
    }
}
