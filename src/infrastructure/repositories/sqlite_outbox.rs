use crate::domain::actor::EmailAddress;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::outbox::{
    DeliveryStatus, NewOutboxMessage, OutboxMessage, OutboxMessageId, OutboxRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqliteConnection, SqlitePool};
use std::sync::Arc;

pub(crate) fn map_error(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

#[derive(Debug, FromRow)]
struct OutboxRow {
    id: String,
    article_id: Option<String>,
    recipient: String,
    subject: String,
    html: String,
    status: String,
    error: Option<String>,
    created_at: DateTime<Utc>,
    sent_at: Option<DateTime<Utc>>,
}

impl TryFrom<OutboxRow> for OutboxMessage {
    type Error = DomainError;

    fn try_from(row: OutboxRow) -> Result<Self, Self::Error> {
        Ok(OutboxMessage {
            id: OutboxMessageId::new(row.id)?,
            article_id: row.article_id.map(ArticleId::new).transpose()?,
            recipient: EmailAddress::new(row.recipient)?,
            subject: row.subject,
            html: row.html,
            status: DeliveryStatus::parse(&row.status)?,
            error: row.error,
            created_at: row.created_at,
            sent_at: row.sent_at,
        })
    }
}

/// Appends outbox rows on an open transaction so callers can commit them
/// together with the article mutation that caused them.
pub(crate) async fn insert_messages(
    conn: &mut SqliteConnection,
    messages: &[NewOutboxMessage],
) -> DomainResult<()> {
    for message in messages {
        sqlx::query(
            "INSERT INTO outbox_messages (id, article_id, recipient, subject, html, status, created_at) \
             VALUES (?, ?, ?, ?, ?, 'pending', ?)",
        )
        .bind(message.id.as_str())
        .bind(message.article_id.as_ref().map(ArticleId::as_str))
        .bind(message.recipient.as_str())
        .bind(&message.subject)
        .bind(&message.html)
        .bind(message.created_at)
        .execute(&mut *conn)
        .await
        .map_err(map_error)?;
    }
    Ok(())
}

#[derive(Clone)]
pub struct SqliteOutboxRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteOutboxRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OutboxRepository for SqliteOutboxRepository {
    async fn append(&self, message: NewOutboxMessage) -> DomainResult<OutboxMessage> {
        let mut tx = self.pool.begin().await.map_err(map_error)?;
        insert_messages(&mut *tx, std::slice::from_ref(&message)).await?;
        tx.commit().await.map_err(map_error)?;

        Ok(OutboxMessage {
            id: message.id,
            article_id: message.article_id,
            recipient: message.recipient,
            subject: message.subject,
            html: message.html,
            status: DeliveryStatus::Pending,
            error: None,
            created_at: message.created_at,
            sent_at: None,
        })
    }

    async fn next_pending(&self, limit: u32) -> DomainResult<Vec<OutboxMessage>> {
        let rows = sqlx::query_as::<_, OutboxRow>(
            "SELECT id, article_id, recipient, subject, html, status, error, created_at, sent_at \
             FROM outbox_messages WHERE status = 'pending' ORDER BY created_at ASC, rowid ASC LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        rows.into_iter().map(OutboxMessage::try_from).collect()
    }

    async fn mark_sent(&self, id: &OutboxMessageId, at: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE outbox_messages SET status = 'sent', sent_at = ?, error = NULL \
             WHERE id = ? AND status = 'pending'",
        )
        .bind(at)
        .bind(id.as_str())
        .execute(&*self.pool)
        .await
        .map_err(map_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "pending outbox message {id} not found"
            )));
        }
        Ok(())
    }

    async fn mark_failed(&self, id: &OutboxMessageId, error: &str) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE outbox_messages SET status = 'failed', error = ? \
             WHERE id = ? AND status = 'pending'",
        )
        .bind(error)
        .bind(id.as_str())
        .execute(&*self.pool)
        .await
        .map_err(map_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "pending outbox message {id} not found"
            )));
        }
        Ok(())
    }
}
