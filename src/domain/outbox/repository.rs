use crate::domain::errors::DomainResult;
use crate::domain::outbox::entity::{NewOutboxMessage, OutboxMessage, OutboxMessageId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait OutboxRepository: Send + Sync {
    /// Standalone append, for notifications with no accompanying article
    /// mutation (e.g. the registration welcome mail).
    async fn append(&self, message: NewOutboxMessage) -> DomainResult<OutboxMessage>;

    /// Oldest pending messages first.
    async fn next_pending(&self, limit: u32) -> DomainResult<Vec<OutboxMessage>>;

    async fn mark_sent(&self, id: &OutboxMessageId, at: DateTime<Utc>) -> DomainResult<()>;

    async fn mark_failed(&self, id: &OutboxMessageId, error: &str) -> DomainResult<()>;
}
